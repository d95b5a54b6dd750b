// Rust guideline compliant 2026-10-18

//! Dispatch CLI Application
//!
//! Command-line interface for the courier dispatch backend.

use anyhow::Context;
use clap::Parser;
use dispatch_app::{CouriersApi, CreateOptions, InProcessApi, OrdersApi};
use dispatch_cli::commands;
use dispatch_cli::commands::list::ListArgs;
use dispatch_cli::commands::orders::OrdersListArgs;
use dispatch_cli::{create_formatter, should_use_color, HttpApi, OutputFormatter};
use dispatch_core::{Config, CreateCourierInput, OrderBook, Roster};
use dispatch_server::ServerOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "dispatch",
    version,
    about = "Courier dispatch roster: server and client",
    long_about = "Runs the courier dispatch HTTP API and talks to it. Commands other than `serve` call the server at --api-url, or an in-memory demo roster with --local.",
    after_help = "Examples:\n  dispatch serve --port 3001 --latency-ms 0\n  dispatch list --sort-field assignedOrderCount --sort-direction desc\n  dispatch show c-2\n  dispatch create --name \"Riley Park\" --phone 555-0199 --vehicle scooter --region west\n  dispatch assign c-1 o-42\n  dispatch orders list --status created --sort createdAt\n  dispatch orders assign o-2 c-1\n  dispatch --local list --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Base URL of the dispatch server (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Use an in-memory roster instead of a server
    #[arg(long, global = true)]
    local: bool,

    /// Directory containing dispatch.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind the server to
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Simulated latency per request in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Start with an empty roster instead of the demo couriers
        #[arg(long)]
        no_seed: bool,

        /// Logging level (error, warn, info, debug, trace)
        #[arg(long, default_value = "info")]
        log_level: String,

        /// Write JSON logs to this file instead of stdout
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List couriers
    List {
        /// Page number (1-1000)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Couriers per page (1-100)
        #[arg(long, default_value_t = 10)]
        page_size: u32,

        /// Match against name or vehicle
        #[arg(long)]
        search: Option<String>,

        /// Filter by region
        #[arg(long)]
        region: Option<String>,

        /// Filter by vehicle
        #[arg(long)]
        vehicle: Option<String>,

        /// Sort field
        #[arg(long, default_value = "name", value_parser = ["name", "region", "vehicle", "assignedOrderCount"])]
        sort_field: String,

        /// Sort direction
        #[arg(long, default_value = "asc", value_parser = ["asc", "desc"])]
        sort_direction: String,
    },

    /// Show a courier
    Show {
        /// Courier ID
        id: String,
    },

    /// Create a courier
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Vehicle description
        #[arg(long)]
        vehicle: String,

        /// Operating region
        #[arg(long)]
        region: String,
    },

    /// Delete a courier with no assigned orders
    Delete {
        /// Courier ID
        id: String,
    },

    /// Assign an order to a courier
    Assign {
        /// Courier ID
        id: String,

        /// Order ID
        order_id: String,
    },

    /// Release an order from a courier
    Unassign {
        /// Courier ID
        id: String,

        /// Order ID
        order_id: String,
    },

    /// List, show and assign orders
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },
}

#[derive(Debug, clap::Subcommand)]
enum OrdersCommand {
    /// List orders
    List {
        /// Page number (1-1000)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Orders per page (1-100)
        #[arg(long, default_value_t = 10)]
        page_size: u32,

        /// Match against tracking id or customer name
        #[arg(long)]
        q: Option<String>,

        /// Filter by status
        #[arg(long, default_value = "all", value_parser = ["created", "assigned", "picked_up", "delivered", "cancelled", "all"])]
        status: String,

        /// Sort order
        #[arg(long, default_value = "eta", value_parser = ["eta", "createdAt"])]
        sort: String,
    },

    /// Show an order and its timeline
    Show {
        /// Order ID
        id: String,
    },

    /// Assign a courier to an order
    Assign {
        /// Order ID
        order_id: String,

        /// Courier ID
        courier_id: String,
    },
}

/// Backend selected by `--local` or `--api-url`.
enum Backend {
    Local(InProcessApi),
    Remote(HttpApi),
}

impl Backend {
    fn open(local: bool, api_url: Option<String>, config: &Config) -> anyhow::Result<Self> {
        if local {
            let (roster, orders) = if config.seed_demo_data {
                (Roster::demo(), OrderBook::demo())
            } else {
                (Roster::new(), OrderBook::new())
            };
            let options = CreateOptions::new(config.id_max_attempts);
            return Ok(Backend::Local(
                InProcessApi::new(roster, options).with_orders(orders),
            ));
        }

        let base_url = api_url.unwrap_or_else(|| config.api_base_url.clone());
        Ok(Backend::Remote(HttpApi::new(base_url)?))
    }

    fn couriers(&mut self) -> &mut dyn CouriersApi {
        match self {
            Backend::Local(api) => api,
            Backend::Remote(api) => api,
        }
    }

    fn orders(&mut self) -> &mut dyn OrdersApi {
        match self {
            Backend::Local(api) => api,
            Backend::Remote(api) => api,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", formatter.format_error(&error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let config = Config::load(&cli.config_dir).with_context(|| {
        format!("Failed to load configuration from {}", cli.config_dir.display())
    })?;

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let Cli { local, api_url, .. } = cli;
    let backend = || Backend::open(local, api_url.clone(), &config);

    match command {
        Commands::Serve {
            bind,
            port,
            latency_ms,
            no_seed,
            log_level,
            log_file,
        } => {
            let mut options = ServerOptions::from_config(&config);
            if let Some(bind) = bind {
                options.bind = bind;
            }
            if let Some(port) = port {
                options.port = port;
            }
            if let Some(latency_ms) = latency_ms {
                options.latency = Duration::from_millis(latency_ms);
            }
            if no_seed {
                options.seed_demo_data = false;
            }
            options.log_level = log_level;
            options.log_file = log_file;
            commands::serve::execute(options)
        }
        Commands::List {
            page,
            page_size,
            search,
            region,
            vehicle,
            sort_field,
            sort_direction,
        } => {
            let args = ListArgs {
                page,
                page_size,
                search,
                region,
                vehicle,
                sort_field,
                sort_direction,
            };
            commands::list::execute(backend()?.couriers(), &args, formatter)
        }
        Commands::Show { id } => commands::show::execute(backend()?.couriers(), &id, formatter),
        Commands::Create {
            name,
            phone,
            vehicle,
            region,
        } => {
            let input = CreateCourierInput {
                name,
                phone,
                vehicle,
                region,
            };
            commands::create::execute(backend()?.couriers(), input, formatter)
        }
        Commands::Delete { id } => {
            commands::delete::execute(backend()?.couriers(), &id, formatter)
        }
        Commands::Assign { id, order_id } => {
            commands::assign::execute(backend()?.couriers(), &id, &order_id, formatter)
        }
        Commands::Unassign { id, order_id } => {
            commands::unassign::execute(backend()?.couriers(), &id, &order_id, formatter)
        }
        Commands::Orders { command } => match command {
            OrdersCommand::List {
                page,
                page_size,
                q,
                status,
                sort,
            } => {
                let args = OrdersListArgs {
                    page,
                    page_size,
                    q,
                    status,
                    sort,
                };
                commands::orders::list(backend()?.orders(), &args, formatter)
            }
            OrdersCommand::Show { id } => {
                commands::orders::show(backend()?.orders(), &id, formatter)
            }
            OrdersCommand::Assign {
                order_id,
                courier_id,
            } => commands::orders::assign(backend()?.orders(), &order_id, &courier_id, formatter),
        },
    }
}
