// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch list` command.
//!
//! Lists couriers a page at a time with optional search, region and vehicle
//! filters and a configurable sort.

use crate::OutputFormatter;
use anyhow::Result;
use dispatch_app::CouriersApi;
use dispatch_core::{CouriersListFilters, SortDirection, SortField};

/// Arguments accepted by `dispatch list`.
#[derive(Debug, Clone)]
pub struct ListArgs {
    /// One-based page number.
    pub page: u32,
    /// Couriers per page.
    pub page_size: u32,
    /// Case-insensitive match against name or vehicle.
    pub search: Option<String>,
    /// Case-insensitive match against region.
    pub region: Option<String>,
    /// Case-insensitive match against vehicle.
    pub vehicle: Option<String>,
    /// Sort field (`name`, `region`, `vehicle`, `assignedOrderCount`).
    pub sort_field: String,
    /// Sort direction (`asc` or `desc`).
    pub sort_direction: String,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
            region: None,
            vehicle: None,
            sort_field: SortField::default().to_string(),
            sort_direction: SortDirection::default().to_string(),
        }
    }
}

impl ListArgs {
    /// Converts the arguments into list filters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSort` for an unknown sort field or direction.
    pub fn to_filters(&self) -> Result<CouriersListFilters> {
        Ok(CouriersListFilters {
            page: self.page,
            page_size: self.page_size,
            search_term: self.search.clone().unwrap_or_default(),
            region: self.region.clone().unwrap_or_default(),
            vehicle: self.vehicle.clone().unwrap_or_default(),
            sort_field: self.sort_field.parse::<SortField>()?,
            sort_direction: self.sort_direction.parse::<SortDirection>()?,
        })
    }
}

/// Lists couriers.
///
/// # Errors
///
/// Returns an error if the filters are invalid or the backend rejects the request.
pub fn execute(
    api: &mut dyn CouriersApi,
    args: &ListArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let filters = args.to_filters()?;
    let page = api.list(&filters)?;
    println!("{}", formatter.format_page(&page));
    Ok(())
}
