// Rust guideline compliant 2026-10-18

//! Query-string validation for courier and order listings.
//!
//! Each listing has two entry points sharing the same bounds: a parser for raw
//! query pairs arriving at the HTTP boundary ([`parse_couriers_list_filters`],
//! [`parse_orders_list_filters`]) and a normaliser for filters that were already
//! built in code ([`normalize_filters`], [`normalize_order_filters`]).

use dispatch_core::{
    CouriersListFilters, Error, OrderSort, OrdersListFilters, Result, SortDirection, SortField,
};
use std::collections::HashMap;

/// Query keys accepted by the courier list endpoint.
pub const ALLOWED_KEYS: [&str; 7] = [
    "page",
    "pageSize",
    "searchTerm",
    "region",
    "vehicle",
    "sortField",
    "sortDirection",
];

/// Query keys accepted by the order list endpoint.
pub const ORDER_ALLOWED_KEYS: [&str; 5] = ["page", "pageSize", "q", "status", "sort"];

/// Upper bound for `page`.
pub const MAX_PAGE: u32 = 1000;
/// Upper bound for `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Maximum length of `searchTerm`.
pub const MAX_SEARCH_TERM_LEN: usize = 128;
/// Maximum length of the `region` and `vehicle` filters.
pub const MAX_FILTER_LEN: usize = 64;

/// Parses raw query pairs into validated list filters.
///
/// Checks run in a fixed order and the first failure aborts the parse:
/// duplicate keys, unknown keys, missing pagination, pagination bounds,
/// optional filter lengths, then sort values.
///
/// # Arguments
///
/// * `pairs` - Decoded query pairs in request order; keys may repeat
///
/// # Errors
///
/// - `Error::DuplicateQueryKey` if any key appears more than once
/// - `Error::UnknownQueryField` for keys outside [`ALLOWED_KEYS`] or over-long filters
/// - `Error::MissingQueryField` if `page` or `pageSize` is absent or blank
/// - `Error::PaginationOutOfRange` if `page` or `pageSize` is not an integer in range
/// - `Error::InvalidSort` if a non-empty sort value is not recognised
pub fn parse_couriers_list_filters<K, V>(pairs: &[(K, V)]) -> Result<CouriersListFilters>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    check_keys(pairs, &ALLOWED_KEYS)?;
    let get = |name: &str| lookup(pairs, name);
    let (page, page_size) = parse_pagination(get("page"), get("pageSize"))?;

    let search_term = normalize_optional(get("searchTerm"), "searchTerm", MAX_SEARCH_TERM_LEN)?;
    let region = normalize_optional(get("region"), "region", MAX_FILTER_LEN)?;
    let vehicle = normalize_optional(get("vehicle"), "vehicle", MAX_FILTER_LEN)?;

    let sort_field = match get("sortField") {
        None | Some("") => SortField::default(),
        Some(raw) => raw.trim().parse()?,
    };
    let sort_direction = match get("sortDirection") {
        None | Some("") => SortDirection::default(),
        Some(raw) => raw.trim().parse()?,
    };

    Ok(CouriersListFilters {
        page,
        page_size,
        search_term,
        region,
        vehicle,
        sort_field,
        sort_direction,
    })
}

/// Re-validates filters that were constructed in code.
///
/// String filters are trimmed. Fields are checked in declaration order and the
/// first failing field decides the error: pagination fields report
/// `Error::PaginationOutOfRange`, string filters report `Error::UnknownQueryField`.
/// Sort values are enforced by their types.
///
/// # Errors
///
/// Returns the error for the first out-of-bounds field.
pub fn normalize_filters(filters: &CouriersListFilters) -> Result<CouriersListFilters> {
    if !(1..=MAX_PAGE).contains(&filters.page) {
        return Err(Error::PaginationOutOfRange("page".to_string()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&filters.page_size) {
        return Err(Error::PaginationOutOfRange("pageSize".to_string()));
    }

    let search_term = normalize_optional(
        Some(filters.search_term.as_str()),
        "searchTerm",
        MAX_SEARCH_TERM_LEN,
    )?;
    let region = normalize_optional(Some(filters.region.as_str()), "region", MAX_FILTER_LEN)?;
    let vehicle = normalize_optional(Some(filters.vehicle.as_str()), "vehicle", MAX_FILTER_LEN)?;

    Ok(CouriersListFilters {
        page: filters.page,
        page_size: filters.page_size,
        search_term,
        region,
        vehicle,
        sort_field: filters.sort_field,
        sort_direction: filters.sort_direction,
    })
}

/// Parses raw query pairs into validated order filters.
///
/// Key, pagination and length checks behave as for couriers. A blank or `all`
/// status keeps every status; a blank sort means `eta`.
///
/// # Errors
///
/// - `Error::DuplicateQueryKey`, `Error::UnknownQueryField`, `Error::MissingQueryField`
///   and `Error::PaginationOutOfRange` as for [`parse_couriers_list_filters`]
/// - `Error::InvalidStatusFilter` if `status` is not a known status or `all`
/// - `Error::InvalidSort` if `sort` is not `eta` or `createdAt`
pub fn parse_orders_list_filters<K, V>(pairs: &[(K, V)]) -> Result<OrdersListFilters>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    check_keys(pairs, &ORDER_ALLOWED_KEYS)?;
    let get = |name: &str| lookup(pairs, name);
    let (page, page_size) = parse_pagination(get("page"), get("pageSize"))?;

    let q = normalize_optional(get("q"), "q", MAX_SEARCH_TERM_LEN)?;

    let status = match get("status").map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(raw.parse()?),
    };
    let sort = match get("sort").map(str::trim) {
        None | Some("") => OrderSort::default(),
        Some(raw) => raw.parse()?,
    };

    Ok(OrdersListFilters {
        page,
        page_size,
        q,
        status,
        sort,
    })
}

/// Re-validates order filters that were constructed in code.
///
/// # Errors
///
/// Returns `Error::PaginationOutOfRange` for out-of-bounds pagination, or
/// `Error::UnknownQueryField` for an over-long `q`.
pub fn normalize_order_filters(filters: &OrdersListFilters) -> Result<OrdersListFilters> {
    if !(1..=MAX_PAGE).contains(&filters.page) {
        return Err(Error::PaginationOutOfRange("page".to_string()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&filters.page_size) {
        return Err(Error::PaginationOutOfRange("pageSize".to_string()));
    }
    let q = normalize_optional(Some(filters.q.as_str()), "q", MAX_SEARCH_TERM_LEN)?;

    Ok(OrdersListFilters {
        q,
        ..filters.clone()
    })
}

/// Rejects repeated keys first, then keys outside `allowed`.
fn check_keys<K: AsRef<str>, V>(pairs: &[(K, V)], allowed: &[&str]) -> Result<()> {
    let duplicates = duplicate_keys(pairs);
    if !duplicates.is_empty() {
        return Err(Error::DuplicateQueryKey(duplicates));
    }

    if let Some((key, _)) = pairs
        .iter()
        .find(|(key, _)| !allowed.contains(&key.as_ref()))
    {
        return Err(Error::UnknownQueryField(key.as_ref().to_string()));
    }
    Ok(())
}

fn lookup<'a, K: AsRef<str>, V: AsRef<str>>(pairs: &'a [(K, V)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key.as_ref() == name)
        .map(|(_, value)| value.as_ref())
}

/// Both fields must be present before either is range-checked.
fn parse_pagination(page: Option<&str>, page_size: Option<&str>) -> Result<(u32, u32)> {
    let page_raw = required(page, "page")?;
    let page_size_raw = required(page_size, "pageSize")?;

    Ok((
        parse_bounded_int(page_raw, "page", MAX_PAGE)?,
        parse_bounded_int(page_size_raw, "pageSize", MAX_PAGE_SIZE)?,
    ))
}

/// Returns every key that occurs more than once, in first-seen order.
fn duplicate_keys<K: AsRef<str>, V>(pairs: &[(K, V)]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for (key, _) in pairs {
        let count = counts.entry(key.as_ref()).or_insert(0);
        if *count == 0 {
            order.push(key.as_ref());
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter(|key| counts.get(key).copied().unwrap_or(0) > 1)
        .map(str::to_string)
        .collect()
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw),
        _ => Err(Error::MissingQueryField(field.to_string())),
    }
}

/// Parses a whole number in `1..=max`.
///
/// Decimal notation with a zero fraction (`"2.0"`, `"1e1"`) is accepted as an integer.
/// Hex, octal and binary literals are not.
fn parse_bounded_int(raw: &str, field: &str, max: u32) -> Result<u32> {
    let out_of_range = || Error::PaginationOutOfRange(field.to_string());
    let parsed: f64 = raw.trim().parse().map_err(|_| out_of_range())?;
    if !parsed.is_finite() || parsed.fract() != 0.0 || parsed < 1.0 || parsed > f64::from(max) {
        return Err(out_of_range());
    }
    Ok(parsed as u32)
}

/// Trims an optional filter; over-long values are reported as unknown fields.
fn normalize_optional(value: Option<&str>, field: &str, max_len: usize) -> Result<String> {
    let Some(raw) = value else {
        return Ok(String::new());
    };
    let trimmed = raw.trim();
    if trimmed.chars().count() > max_len {
        return Err(Error::UnknownQueryField(field.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::ErrorCode;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn parse_code(items: &[(&str, &str)]) -> ErrorCode {
        parse_couriers_list_filters(&pairs(items)).unwrap_err().code()
    }

    #[test]
    fn test_minimal_query_uses_defaults() {
        let filters = parse_couriers_list_filters(&pairs(&[("page", "1"), ("pageSize", "10")]))
            .unwrap();
        assert_eq!(filters, CouriersListFilters::default());
    }

    #[test]
    fn test_full_query() {
        let filters = parse_couriers_list_filters(&pairs(&[
            ("page", "2"),
            ("pageSize", "25"),
            ("searchTerm", "  alex "),
            ("region", "north"),
            ("vehicle", "van"),
            ("sortField", "assignedOrderCount"),
            ("sortDirection", "desc"),
        ]))
        .unwrap();
        assert_eq!(filters.page, 2);
        assert_eq!(filters.page_size, 25);
        assert_eq!(filters.search_term, "alex");
        assert_eq!(filters.sort_field, SortField::AssignedOrderCount);
        assert_eq!(filters.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_duplicate_key_wins_over_everything() {
        assert_eq!(
            parse_code(&[("bogus", "1"), ("bogus", "2")]),
            ErrorCode::QueryDuplicateKey
        );
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("page", "1")]),
            ErrorCode::QueryDuplicateKey
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("status", "active")]),
            ErrorCode::QueryUnknownField
        );
    }

    #[test]
    fn test_missing_and_blank_pagination() {
        assert_eq!(parse_code(&[("pageSize", "10")]), ErrorCode::QueryMissingField);
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "   ")]),
            ErrorCode::QueryMissingField
        );
    }

    #[test]
    fn test_pagination_bounds() {
        for (page, size) in [("0", "10"), ("1001", "10"), ("1", "0"), ("1", "101"), ("1.5", "10"), ("x", "10")] {
            assert_eq!(
                parse_code(&[("page", page), ("pageSize", size)]),
                ErrorCode::QueryPaginationOutOfRange,
                "page={} pageSize={}",
                page,
                size
            );
        }
        let filters =
            parse_couriers_list_filters(&pairs(&[("page", "1000"), ("pageSize", "100.0")]))
                .unwrap();
        assert_eq!((filters.page, filters.page_size), (1000, 100));
    }

    #[test]
    fn test_over_long_filter_is_unknown_field() {
        let long_search = "a".repeat(129);
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("searchTerm", &long_search)]),
            ErrorCode::QueryUnknownField
        );
        let long_region = "r".repeat(65);
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("region", &long_region)]),
            ErrorCode::QueryUnknownField
        );
        let padded = format!("  {}  ", "v".repeat(64));
        assert!(parse_couriers_list_filters(&pairs(&[
            ("page", "1"),
            ("pageSize", "10"),
            ("vehicle", &padded),
        ]))
        .is_ok());
    }

    #[test]
    fn test_sort_values() {
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("sortField", "phone")]),
            ErrorCode::QueryInvalidSort
        );
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("sortDirection", "up")]),
            ErrorCode::QueryInvalidSort
        );
        assert_eq!(
            parse_code(&[("page", "1"), ("pageSize", "10"), ("sortField", "  ")]),
            ErrorCode::QueryInvalidSort
        );
        let filters = parse_couriers_list_filters(&pairs(&[
            ("page", "1"),
            ("pageSize", "10"),
            ("sortField", ""),
            ("sortDirection", ""),
        ]))
        .unwrap();
        assert_eq!(filters.sort_field, SortField::Name);
        assert_eq!(filters.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_normalize_error_codes_follow_field() {
        let bad_page = CouriersListFilters {
            page: 0,
            search_term: "x".repeat(200),
            ..CouriersListFilters::default()
        };
        assert_eq!(
            normalize_filters(&bad_page).unwrap_err().code(),
            ErrorCode::QueryPaginationOutOfRange
        );

        let bad_size = CouriersListFilters {
            page_size: 101,
            ..CouriersListFilters::default()
        };
        assert_eq!(
            normalize_filters(&bad_size).unwrap_err().code(),
            ErrorCode::QueryPaginationOutOfRange
        );

        let long_region = CouriersListFilters {
            region: "r".repeat(65),
            ..CouriersListFilters::default()
        };
        assert_eq!(
            normalize_filters(&long_region).unwrap_err().code(),
            ErrorCode::QueryUnknownField
        );
    }

    #[test]
    fn test_radix_literals_are_out_of_range() {
        for raw in ["0x2", "0o2", "0b10"] {
            assert_eq!(
                parse_code(&[("page", raw), ("pageSize", "10")]),
                ErrorCode::QueryPaginationOutOfRange,
                "page={}",
                raw
            );
        }
    }

    fn order_code(items: &[(&str, &str)]) -> ErrorCode {
        parse_orders_list_filters(&pairs(items)).unwrap_err().code()
    }

    #[test]
    fn test_order_query_defaults() {
        let filters = parse_orders_list_filters(&pairs(&[
            ("page", "1"),
            ("pageSize", "10"),
            ("status", "all"),
        ]))
        .unwrap();
        assert_eq!(filters, OrdersListFilters::default());
    }

    #[test]
    fn test_order_query_full() {
        let filters = parse_orders_list_filters(&pairs(&[
            ("page", "2"),
            ("pageSize", "2"),
            ("q", " trk-10 "),
            ("status", "picked_up"),
            ("sort", "createdAt"),
        ]))
        .unwrap();
        assert_eq!(filters.q, "trk-10");
        assert_eq!(filters.status, Some(dispatch_core::OrderStatus::PickedUp));
        assert_eq!(filters.sort, OrderSort::CreatedAt);
    }

    #[test]
    fn test_order_query_errors() {
        assert_eq!(
            order_code(&[("page", "1"), ("pageSize", "10"), ("q", "a"), ("q", "b")]),
            ErrorCode::QueryDuplicateKey
        );
        assert_eq!(
            order_code(&[("page", "1"), ("pageSize", "10"), ("searchTerm", "x")]),
            ErrorCode::QueryUnknownField
        );
        assert_eq!(order_code(&[("page", "1")]), ErrorCode::QueryMissingField);
        assert_eq!(
            order_code(&[("page", "1"), ("pageSize", "10"), ("status", "lost")]),
            ErrorCode::QueryInvalidStatus
        );
        assert_eq!(
            order_code(&[("page", "1"), ("pageSize", "10"), ("sort", "eta desc")]),
            ErrorCode::QueryInvalidSort
        );
    }

    #[test]
    fn test_normalize_order_filters() {
        let filters = OrdersListFilters {
            q: "  patel ".to_string(),
            ..OrdersListFilters::default()
        };
        assert_eq!(normalize_order_filters(&filters).unwrap().q, "patel");

        let too_big = OrdersListFilters {
            page_size: 0,
            ..OrdersListFilters::default()
        };
        assert_eq!(
            normalize_order_filters(&too_big).unwrap_err().code(),
            ErrorCode::QueryPaginationOutOfRange
        );
    }

    #[test]
    fn test_normalize_trims() {
        let filters = CouriersListFilters {
            search_term: "  kim ".to_string(),
            ..CouriersListFilters::default()
        };
        assert_eq!(normalize_filters(&filters).unwrap().search_term, "kim");
    }
}
