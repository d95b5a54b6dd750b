// Rust guideline compliant 2026-10-18

//! Core data models for the courier roster.

use crate::identity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque courier identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourierId(String);

impl CourierId {
    /// Wraps a string as a courier id without validating it.
    ///
    /// Use [`CourierId::parse`] for untrusted input.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parses and validates a courier id.
    ///
    /// The value is trimmed and must be 1-64 characters of `[A-Za-z0-9_-]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCourierId` if the value is not a valid token.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let trimmed = value.trim();
        if !identity::is_valid_token(trimmed) {
            return Err(crate::Error::InvalidCourierId(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps a string as an order id without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parses and validates an order id using the same token rules as courier ids.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOrderId` if the value is not a valid token.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let trimmed = value.trim();
        if !identity::is_valid_token(trimmed) {
            return Err(crate::Error::InvalidOrderId(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A courier on the dispatch roster.
///
/// `assigned_order_count` is stored rather than computed so that a corrupted record
/// can be detected instead of silently repaired. See [`crate::enforce_invariant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    /// Unique courier identifier.
    pub id: CourierId,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Vehicle description (van, bike, car, ...).
    pub vehicle: String,
    /// Operating region.
    pub region: String,
    /// Orders currently assigned to the courier, in assignment order.
    #[serde(default)]
    pub assigned_order_ids: Vec<OrderId>,
    /// Number of assigned orders. Must equal `assigned_order_ids.len()`.
    #[serde(default)]
    pub assigned_order_count: usize,
}

impl Courier {
    /// Creates a courier with no assigned orders.
    pub fn new(id: CourierId, input: CreateCourierInput) -> Self {
        Self {
            id,
            name: input.name,
            phone: input.phone,
            vehicle: input.vehicle,
            region: input.region,
            assigned_order_ids: Vec::new(),
            assigned_order_count: 0,
        }
    }
}

/// Validated input for creating a courier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCourierInput {
    /// Display name (1-128 characters).
    pub name: String,
    /// Contact phone number (1-32 characters).
    pub phone: String,
    /// Vehicle description (1-64 characters).
    pub vehicle: String,
    /// Operating region (1-64 characters).
    pub region: String,
}

/// Field used to order courier listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Sort by name.
    #[default]
    Name,
    /// Sort by region.
    Region,
    /// Sort by vehicle.
    Vehicle,
    /// Sort by number of assigned orders.
    AssignedOrderCount,
}

impl SortField {
    /// All sort fields, in declaration order.
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Region,
        SortField::Vehicle,
        SortField::AssignedOrderCount,
    ];

    /// Returns the query-string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Region => "region",
            SortField::Vehicle => "vehicle",
            SortField::AssignedOrderCount => "assignedOrderCount",
        }
    }
}

impl FromStr for SortField {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| crate::Error::InvalidSort("sortField".to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction applied to the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the query-string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(crate::Error::InvalidSort("sortDirection".to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated filters for listing couriers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouriersListFilters {
    /// One-based page number (1-1000).
    pub page: u32,
    /// Page size (1-100).
    pub page_size: u32,
    /// Case-insensitive match against name or vehicle.
    pub search_term: String,
    /// Case-insensitive match against region.
    pub region: String,
    /// Case-insensitive match against vehicle.
    pub vehicle: String,
    /// Sort field.
    pub sort_field: SortField,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl Default for CouriersListFilters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search_term: String::new(),
            region: String::new(),
            vehicle: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl CouriersListFilters {
    /// Renders the filters as query-string pairs.
    ///
    /// Pagination and sort keys are always present; string filters only when non-empty.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("sortField", self.sort_field.as_str().to_string()),
            ("sortDirection", self.sort_direction.as_str().to_string()),
        ];
        if !self.search_term.is_empty() {
            pairs.push(("searchTerm", self.search_term.clone()));
        }
        if !self.region.is_empty() {
            pairs.push(("region", self.region.clone()));
        }
        if !self.vehicle.is_empty() {
            pairs.push(("vehicle", self.vehicle.clone()));
        }
        pairs
    }
}

/// A single page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// One-based page number.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Number of matching items before pagination.
    pub total_items: usize,
    /// Number of pages; zero when nothing matched.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Computes the page count for `total_items` split into pages of `page_size`.
    pub fn page_count(total_items: usize, page_size: u32) -> usize {
        if total_items == 0 || page_size == 0 {
            return 0;
        }
        total_items.div_ceil(page_size as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_serializes_camel_case() {
        let courier = Courier {
            id: CourierId::new("c-1"),
            name: "Alex Morgan".to_string(),
            phone: "555-0101".to_string(),
            vehicle: "van".to_string(),
            region: "north".to_string(),
            assigned_order_ids: vec![OrderId::new("o-1")],
            assigned_order_count: 1,
        };
        let json = serde_json::to_value(&courier).unwrap();
        assert_eq!(json["id"], "c-1");
        assert_eq!(json["assignedOrderIds"][0], "o-1");
        assert_eq!(json["assignedOrderCount"], 1);
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(
            "assignedOrderCount".parse::<SortField>().unwrap(),
            SortField::AssignedOrderCount
        );
        assert!("Name".parse::<SortField>().is_err());
        assert!("ascending".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_query_pairs_skip_empty_filters() {
        let filters = CouriersListFilters {
            region: "north".to_string(),
            ..CouriersListFilters::default()
        };
        let keys: Vec<&str> = filters.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["page", "pageSize", "sortField", "sortDirection", "region"]);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(Paginated::<Courier>::page_count(0, 10), 0);
        assert_eq!(Paginated::<Courier>::page_count(1, 10), 1);
        assert_eq!(Paginated::<Courier>::page_count(10, 10), 1);
        assert_eq!(Paginated::<Courier>::page_count(11, 10), 2);
    }

    #[test]
    fn test_courier_id_parse_trims() {
        assert_eq!(CourierId::parse("  c-1 ").unwrap().as_str(), "c-1");
        assert!(CourierId::parse("c 1").is_err());
        assert!(OrderId::parse("").is_err());
    }
}
