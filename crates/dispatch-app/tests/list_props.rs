// Rust guideline compliant 2026-10-18

//! Property-based tests for the list engine.

use dispatch_app::{list_couriers, normalize_filters};
use dispatch_core::{
    Courier, CourierId, CouriersListFilters, OrderId, Roster, SortDirection, SortField,
};
use proptest::prelude::*;

fn arb_sort_field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Name),
        Just(SortField::Region),
        Just(SortField::Vehicle),
        Just(SortField::AssignedOrderCount),
    ]
}

fn arb_sort_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

/// Generates a consistent roster with unique ids.
fn arb_roster() -> impl Strategy<Value = Roster> {
    prop::collection::vec(
        (
            prop::string::string_regex("[A-Za-z]{1,12}").unwrap(),
            prop::sample::select(vec!["van", "bike", "car"]),
            prop::sample::select(vec!["north", "east", "South", "west"]),
            0usize..4,
        ),
        0..60,
    )
    .prop_map(|rows| {
        let couriers = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, vehicle, region, orders))| {
                let assigned_order_ids: Vec<OrderId> = (0..orders)
                    .map(|n| OrderId::new(format!("o-{}-{}", i, n)))
                    .collect();
                Courier {
                    id: CourierId::new(format!("c-{}", i)),
                    name,
                    phone: "555-0100".to_string(),
                    vehicle: vehicle.to_string(),
                    region: region.to_string(),
                    assigned_order_count: assigned_order_ids.len(),
                    assigned_order_ids,
                }
            })
            .collect();
        Roster::from_couriers(couriers)
    })
}

fn arb_filters() -> impl Strategy<Value = CouriersListFilters> {
    (
        1u32..6,
        1u32..20,
        prop::sample::select(vec!["", "a", "VAN", " e "]),
        prop::sample::select(vec!["", "north", "SOUTH"]),
        arb_sort_field(),
        arb_sort_direction(),
    )
        .prop_map(
            |(page, page_size, search_term, region, sort_field, sort_direction)| {
                CouriersListFilters {
                    page,
                    page_size,
                    search_term: search_term.to_string(),
                    region: region.to_string(),
                    vehicle: String::new(),
                    sort_field,
                    sort_direction,
                }
            },
        )
}

proptest! {
    /// Property 1: Page Count Arithmetic
    /// totalPages is zero exactly when nothing matched, otherwise ceil(totalItems / pageSize).
    #[test]
    fn prop_page_count_arithmetic(roster in arb_roster(), filters in arb_filters()) {
        let filters = normalize_filters(&filters).unwrap();
        let page = list_couriers(&roster, &filters).unwrap();

        if page.total_items == 0 {
            prop_assert_eq!(page.total_pages, 0);
        } else {
            let size = filters.page_size as usize;
            prop_assert_eq!(page.total_pages, (page.total_items + size - 1) / size);
        }
    }

    /// Property 2: Page Length Bound
    /// A page never holds more than pageSize items and every item satisfies the invariant.
    #[test]
    fn prop_page_length_bound(roster in arb_roster(), filters in arb_filters()) {
        let filters = normalize_filters(&filters).unwrap();
        let page = list_couriers(&roster, &filters).unwrap();

        prop_assert!(page.items.len() <= filters.page_size as usize);
        prop_assert!(page.total_items <= roster.len());
        for courier in &page.items {
            prop_assert_eq!(courier.assigned_order_count, courier.assigned_order_ids.len());
        }
    }

    /// Property 3: Direction Symmetry
    /// Sorting by assigned count desc yields non-increasing counts across the first page.
    #[test]
    fn prop_count_desc_is_non_increasing(roster in arb_roster()) {
        let filters = CouriersListFilters {
            page_size: 100,
            sort_field: SortField::AssignedOrderCount,
            sort_direction: SortDirection::Desc,
            ..CouriersListFilters::default()
        };
        let page = list_couriers(&roster, &filters).unwrap();
        for pair in page.items.windows(2) {
            prop_assert!(pair[0].assigned_order_count >= pair[1].assigned_order_count);
        }
        prop_assert_eq!(page.items.len(), roster.len());
    }
}
