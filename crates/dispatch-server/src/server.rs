// Rust guideline compliant 2026-10-18

//! Server runtime: options, tracing setup and the serve loop.

use crate::routes::app;
use crate::state::AppState;
use dispatch_core::Config;
use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Runtime options for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Address to bind to.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Simulated latency applied to every API request.
    pub latency: Duration,
    /// Whether to start with the demo roster.
    pub seed_demo_data: bool,
    /// Id candidates tried per create.
    pub id_max_attempts: usize,
    /// Logging level.
    pub log_level: String,
    /// Optional log file path; logs are written as JSON when set.
    pub log_file: Option<PathBuf>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ServerOptions {
    /// Builds options from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            bind: config.bind.clone(),
            port: config.port,
            latency: Duration::from_millis(config.latency_ms),
            seed_demo_data: config.seed_demo_data,
            id_max_attempts: config.id_max_attempts,
            log_level: "info".to_string(),
            log_file: None,
        }
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::InvalidAddress` if bind and port do not form an address.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let raw = format!("{}:{}", self.bind, self.port);
        raw.parse().map_err(|_| ServerError::InvalidAddress(raw))
    }
}

/// Server runtime errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO errors during runtime setup or while serving.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// Bind address could not be parsed.
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

/// Runs the HTTP server until it fails.
///
/// # Errors
///
/// Returns an error if tracing, the runtime or the listener cannot be set up,
/// or if serving fails.
pub fn run(options: ServerOptions) -> Result<(), ServerError> {
    let _guard = init_tracing(&options)?;
    let addr = options.addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let state = AppState::with_roster(
            options.seed_demo_data,
            options.id_max_attempts,
            options.latency,
        );
        let listener = TcpListener::bind(addr).await?;
        info!(
            addr = %listener.local_addr()?,
            latency_ms = options.latency.as_millis() as u64,
            seeded = options.seed_demo_data,
            "listening"
        );
        serve(listener, state).await
    })
}

/// Serves the API on an already-bound listener.
///
/// # Errors
///
/// Returns an error if the accept loop fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServerError> {
    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn init_tracing(options: &ServerOptions) -> Result<Option<WorkerGuard>, ServerError> {
    let level = parse_log_level(&options.log_level)?;
    let filter = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy()
    };

    if let Some(path) = &options.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_env_filter(filter())
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt().with_env_filter(filter()).with_target(false).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

fn parse_log_level(level: &str) -> Result<Level, ServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(ServerError::InvalidLogLevel(other.to_string())),
    }
}
