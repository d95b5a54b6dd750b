// Rust guideline compliant 2026-10-18

//! Listing, filtering and pagination of couriers.

use dispatch_core::{
    enforce_invariant, Courier, CourierId, CouriersListFilters, Paginated, Result, Roster,
    SortDirection, SortField,
};
use feruca::Collator;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::error;

/// Lists couriers matching `filters`.
///
/// The pipeline is filter, sort, paginate. Only the returned page is checked
/// against the assignment-count invariant, but a single violation fails the
/// whole call.
///
/// # Arguments
///
/// * `roster` - Roster to read
/// * `filters` - Validated filters (see `normalize_filters`)
///
/// # Errors
///
/// - `Error::CapacityExceeded` if the roster already holds more than its capacity
/// - `Error::DataIntegrity` if any courier on the page fails the invariant
pub fn list_couriers(roster: &Roster, filters: &CouriersListFilters) -> Result<Paginated<Courier>> {
    roster.ensure_list_capacity()?;

    let mut filtered = apply_filters(roster.couriers(), filters);
    sort_couriers(&mut filtered, filters.sort_field, filters.sort_direction);

    let page_size = filters.page_size as usize;
    let start_index = (filters.page as usize).saturating_sub(1) * page_size;
    let items = filtered
        .iter()
        .skip(start_index)
        .take(page_size)
        .map(|courier| enforce_invariant(courier))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|err| error!(error = ?err, "courier list aborted"))?;

    let total_items = filtered.len();
    Ok(Paginated {
        items,
        page: filters.page,
        page_size: filters.page_size,
        total_items,
        total_pages: Paginated::<Courier>::page_count(total_items, filters.page_size),
    })
}

/// Loads a single courier.
///
/// # Errors
///
/// Returns `Error::CourierNotFound` or `Error::DataIntegrity`.
pub fn get_courier(roster: &Roster, id: &CourierId) -> Result<Courier> {
    roster
        .get(id)
        .inspect_err(|err| error!(courier_id = %id, error = ?err, "courier read failed"))
}

fn apply_filters<'a>(couriers: &'a [Courier], filters: &CouriersListFilters) -> Vec<&'a Courier> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let search_term = filters.search_term.to_lowercase();
    let region = filters.region.to_lowercase();
    let vehicle = filters.vehicle.to_lowercase();

    let predicate = |courier: &&Courier| {
        let courier_vehicle = courier.vehicle.to_lowercase();

        let search_match = search_term.is_empty()
            || courier.name.to_lowercase().contains(&search_term)
            || courier_vehicle.contains(&search_term);
        let region_match = region.is_empty() || courier.region.to_lowercase().contains(&region);
        let vehicle_match = vehicle.is_empty() || courier_vehicle.contains(&vehicle);

        search_match && region_match && vehicle_match
    };

    if couriers.len() >= PARALLEL_THRESHOLD {
        couriers.par_iter().filter(predicate).collect()
    } else {
        couriers.iter().filter(predicate).collect()
    }
}

fn sort_couriers(couriers: &mut [&Courier], field: SortField, direction: SortDirection) {
    let mut collator = Collator::default();
    couriers.sort_by(|left, right| {
        let ordering = match field {
            SortField::AssignedOrderCount => {
                left.assigned_order_count.cmp(&right.assigned_order_count)
            }
            _ => collator.collate(text_field(left, field), text_field(right, field)),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn text_field(courier: &Courier, field: SortField) -> &str {
    match field {
        SortField::Region => &courier.region,
        SortField::Vehicle => &courier.vehicle,
        SortField::Name | SortField::AssignedOrderCount => &courier.name,
    }
}

/// Compares strings with the Unicode Collation Algorithm (CLDR root order).
///
/// Accents and case are secondary and tertiary differences, so `"Émile"` sorts
/// between `"Emile"` and `"Frank"`, and lowercase sorts before uppercase.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    Collator::default().collate(left, right)
}
