// Rust guideline compliant 2026-10-18

//! Output formatting module for the Dispatch CLI.
//!
//! This module provides functionality for formatting couriers, orders and
//! errors in various output formats (JSON, table, plain text).

use dispatch_app::ErrorEnvelope;
use dispatch_core::{Courier, Order, Paginated};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting dispatch data in different output formats.
pub trait OutputFormatter {
    /// Formats a single courier for display.
    fn format_courier(&self, courier: &Courier) -> String;

    /// Formats a page of couriers for display.
    fn format_page(&self, page: &Paginated<Courier>) -> String;

    /// Formats the confirmation for a removed courier.
    fn format_removed(&self, id: &str) -> String;

    /// Formats a single order with its timeline.
    fn format_order(&self, order: &Order) -> String;

    /// Formats a page of orders for display.
    fn format_order_page(&self, page: &Paginated<Order>) -> String;

    /// Formats an error for display.
    ///
    /// Dispatch errors carry their stable code; anything else is shown by message.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

fn error_envelope(error: &anyhow::Error) -> Option<ErrorEnvelope> {
    error
        .downcast_ref::<dispatch_core::Error>()
        .map(|error| ErrorEnvelope {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        })
}

/// Timestamp layout used by the human-readable formatters.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// JSON output formatter.
///
/// Formats couriers as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_courier(&self, courier: &Courier) -> String {
        serde_json::to_string_pretty(courier)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize courier" }).to_string())
    }

    fn format_page(&self, page: &Paginated<Courier>) -> String {
        serde_json::to_string_pretty(page)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize courier page" }).to_string())
    }

    fn format_removed(&self, id: &str) -> String {
        json!({ "removed": id }).to_string()
    }

    fn format_order(&self, order: &Order) -> String {
        serde_json::to_string_pretty(order)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize order" }).to_string())
    }

    fn format_order_page(&self, page: &Paginated<Order>) -> String {
        serde_json::to_string_pretty(page)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize order page" }).to_string())
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error_envelope(error) {
            Some(envelope) => serde_json::to_string(&envelope)
                .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string()),
            None => json!({ "error": error.to_string() }).to_string(),
        }
    }
}

/// Table output formatter.
///
/// Formats couriers as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_courier(&self, courier: &Courier) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:       {}\n", courier.id));
        output.push_str(&format!("Name:     {}\n", courier.name));
        output.push_str(&format!("Phone:    {}\n", courier.phone));
        output.push_str(&format!("Vehicle:  {}\n", courier.vehicle));
        output.push_str(&format!("Region:   {}\n", courier.region));
        output.push_str(&format!("Orders:   {}\n", courier.assigned_order_count));

        if !courier.assigned_order_ids.is_empty() {
            let ids: Vec<&str> = courier.assigned_order_ids.iter().map(|id| id.as_str()).collect();
            output.push_str(&format!("Assigned: {}\n", ids.join(", ")));
        }

        output
    }

    fn format_page(&self, page: &Paginated<Courier>) -> String {
        if page.items.is_empty() {
            return format!("No couriers found ({} total).", page.total_items);
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Phone", "Vehicle", "Region", "Orders"]);

        for courier in &page.items {
            builder.push_record([
                courier.id.to_string(),
                courier.name.clone(),
                courier.phone.clone(),
                courier.vehicle.clone(),
                courier.region.clone(),
                courier.assigned_order_count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\nPage {} of {} ({} couriers)",
            table, page.page, page.total_pages, page.total_items
        )
    }

    fn format_removed(&self, id: &str) -> String {
        format!("Removed courier {}", id)
    }

    fn format_order(&self, order: &Order) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:       {}\n", order.id));
        output.push_str(&format!("Tracking: {}\n", order.tracking_id));
        output.push_str(&format!("Customer: {}\n", order.customer_name));
        output.push_str(&format!("Status:   {}\n", order.status));
        if let Some(courier_id) = &order.courier_id {
            output.push_str(&format!("Courier:  {}\n", courier_id));
        }
        output.push_str(&format!("ETA:      {}\n", order.eta.format(TIME_FORMAT)));
        output.push_str(&format!("Created:  {}\n", order.created_at.format(TIME_FORMAT)));

        if !order.events.is_empty() {
            output.push_str("Timeline:\n");
            for event in &order.events {
                output.push_str(&format!(
                    "  {}  {:<10} {}\n",
                    event.at.format(TIME_FORMAT),
                    event.status.as_str(),
                    event.note
                ));
            }
        }

        output
    }

    fn format_order_page(&self, page: &Paginated<Order>) -> String {
        if page.items.is_empty() {
            return format!("No orders found ({} total).", page.total_items);
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Tracking", "Customer", "Status", "Courier", "ETA"]);

        for order in &page.items {
            builder.push_record([
                order.id.to_string(),
                order.tracking_id.clone(),
                order.customer_name.clone(),
                order.status.to_string(),
                order
                    .courier_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".to_string()),
                order.eta.format(TIME_FORMAT).to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\nPage {} of {} ({} orders)",
            table, page.page, page.total_pages, page.total_items
        )
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let message = match error_envelope(error) {
            Some(envelope) => format!("{} ({})", envelope.message, envelope.code),
            None => error.to_string(),
        };

        if !self.use_color {
            return format!("Error: {}", message);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", message);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
///
/// Formats couriers as tab-separated text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_courier(&self, courier: &Courier) -> String {
        let ids: Vec<&str> = courier.assigned_order_ids.iter().map(|id| id.as_str()).collect();
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            courier.id,
            courier.name,
            courier.phone,
            courier.vehicle,
            courier.region,
            courier.assigned_order_count,
            ids.join(",")
        )
    }

    fn format_page(&self, page: &Paginated<Courier>) -> String {
        page.items
            .iter()
            .map(|courier| {
                format!(
                    "{}\t{}\t{}\t{}\t{}\n",
                    courier.id,
                    courier.name,
                    courier.vehicle,
                    courier.region,
                    courier.assigned_order_count
                )
            })
            .collect()
    }

    fn format_removed(&self, id: &str) -> String {
        id.to_string()
    }

    fn format_order(&self, order: &Order) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            order.id,
            order.tracking_id,
            order.customer_name,
            order.status,
            order.courier_id.as_ref().map(|id| id.as_str()).unwrap_or(""),
            order.eta.to_rfc3339()
        )
    }

    fn format_order_page(&self, page: &Paginated<Order>) -> String {
        page.items.iter().map(|order| self.format_order(order)).collect()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error_envelope(error) {
            Some(envelope) => format!("Error: {}: {}", envelope.code, envelope.message),
            None => format!("Error: {}", error),
        }
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
