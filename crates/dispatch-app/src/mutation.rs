// Rust guideline compliant 2026-10-18

//! Create, delete and order-assignment operations on the roster.

use dispatch_core::{
    Courier, CourierId, CreateCourierInput, Error, HashIdGenerator, IdGenerator, OrderId, Result,
    Roster,
};
use std::fmt;
use tracing::{debug, info, warn};

/// Default number of id candidates tried per create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Options controlling courier creation.
pub struct CreateOptions {
    /// Number of id candidates tried before failing with an id conflict.
    pub max_attempts: usize,
    id_generator: Box<dyn IdGenerator>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl fmt::Debug for CreateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateOptions")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl CreateOptions {
    /// Creates options using the hash-based id generator.
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            id_generator: Box::new(HashIdGenerator::new()),
        }
    }

    /// Replaces the id generator.
    #[must_use]
    pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Box::new(generator);
        self
    }
}

/// Creates a courier with a freshly generated id and no assigned orders.
///
/// Candidates that collide with an existing id are skipped. The input is
/// expected to be validated already (see `validate_create_input`).
///
/// # Errors
///
/// - `Error::CapacityExceeded` if the roster is full
/// - `Error::IdConflict` if every candidate collided
pub fn create_courier(
    roster: &mut Roster,
    input: CreateCourierInput,
    options: &mut CreateOptions,
) -> Result<Courier> {
    roster.ensure_create_capacity()?;

    for attempt in 1..=options.max_attempts {
        let id = CourierId::new(options.id_generator.generate());
        if roster.contains(&id) {
            debug!(courier_id = %id, attempt, "generated courier id collided");
            continue;
        }

        let courier = Courier::new(id, input);
        roster.push(courier.clone());
        info!(courier_id = %courier.id, "courier created");
        return Ok(courier);
    }

    warn!(attempts = options.max_attempts, "courier id generation exhausted");
    Err(Error::IdConflict {
        attempts: options.max_attempts,
    })
}

/// Removes a courier that holds no orders.
///
/// # Errors
///
/// - `Error::CourierNotFound` if no courier has `id`
/// - `Error::DataIntegrity` if the record violates the assignment-count invariant
/// - `Error::DeleteBlockedAssigned` if the courier still holds orders
pub fn remove_courier(roster: &mut Roster, id: &CourierId) -> Result<()> {
    let index = roster
        .position(id)
        .ok_or_else(|| Error::CourierNotFound(id.to_string()))?;

    let courier = roster.get(id)?;
    if courier.assigned_order_count > 0 {
        return Err(Error::DeleteBlockedAssigned {
            id: id.to_string(),
            assigned: courier.assigned_order_count,
        });
    }

    roster.remove_at(index);
    info!(courier_id = %id, "courier removed");
    Ok(())
}

/// Assigns an order to a courier.
///
/// An order is held by at most one courier at a time.
///
/// # Errors
///
/// - `Error::CourierNotFound` or `Error::DataIntegrity` for the target courier
/// - `Error::OrderAlreadyAssigned` if any courier already holds the order
pub fn assign_order(roster: &mut Roster, id: &CourierId, order_id: OrderId) -> Result<Courier> {
    roster.get(id)?;

    if let Some(holder) = roster.holder_of(&order_id) {
        return Err(Error::OrderAlreadyAssigned {
            order_id: order_id.to_string(),
            courier_id: holder.id.to_string(),
        });
    }

    let courier = roster.get_mut(id)?;
    courier.assigned_order_ids.push(order_id);
    courier.assigned_order_count += 1;
    info!(courier_id = %id, count = courier.assigned_order_count, "order assigned");
    Ok(courier.clone())
}

/// Releases an order from a courier.
///
/// # Errors
///
/// - `Error::CourierNotFound` or `Error::DataIntegrity` for the target courier
/// - `Error::OrderNotAssigned` if the courier does not hold the order
pub fn unassign_order(roster: &mut Roster, id: &CourierId, order_id: &OrderId) -> Result<Courier> {
    let courier = roster.get_mut(id)?;
    let index = courier
        .assigned_order_ids
        .iter()
        .position(|held| held == order_id)
        .ok_or_else(|| Error::OrderNotAssigned {
            order_id: order_id.to_string(),
            courier_id: id.to_string(),
        })?;

    courier.assigned_order_ids.remove(index);
    courier.assigned_order_count -= 1;
    info!(courier_id = %id, count = courier.assigned_order_count, "order unassigned");
    Ok(courier.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CreateCourierInput {
        CreateCourierInput {
            name: name.to_string(),
            phone: "555-0199".to_string(),
            vehicle: "scooter".to_string(),
            region: "west".to_string(),
        }
    }

    fn sequential_ids() -> impl IdGenerator {
        let mut next = 0u32;
        move || {
            next += 1;
            format!("c-new-{}", next)
        }
    }

    #[test]
    fn test_create_appends_with_zero_orders() {
        let mut roster = Roster::demo();
        let mut options = CreateOptions::default();
        let courier = create_courier(&mut roster, input("Riley"), &mut options).unwrap();

        assert!(courier.id.as_str().starts_with("c-"));
        assert_eq!(courier.assigned_order_count, 0);
        assert!(courier.assigned_order_ids.is_empty());
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.couriers()[3].id, courier.id);
    }

    #[test]
    fn test_create_skips_colliding_candidates() {
        let mut roster = Roster::demo();
        let mut candidates = vec!["c-9", "c-1", "c-2"];
        let mut options = CreateOptions::default()
            .with_id_generator(move || candidates.pop().unwrap_or("c-x").to_string());

        let courier = create_courier(&mut roster, input("Riley"), &mut options).unwrap();
        assert_eq!(courier.id.as_str(), "c-9");
    }

    #[test]
    fn test_create_fails_after_exhausting_attempts() {
        let mut roster = Roster::demo();
        let mut options = CreateOptions::new(3).with_id_generator(|| "c-1".to_string());

        let err = create_courier(&mut roster, input("Riley"), &mut options).unwrap_err();
        assert!(matches!(err, Error::IdConflict { attempts: 3 }));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_create_respects_capacity() {
        let mut roster = Roster::new();
        let mut options = CreateOptions::default().with_id_generator(sequential_ids());

        for i in 0..1000 {
            create_courier(&mut roster, input(&format!("Courier {}", i)), &mut options).unwrap();
        }
        assert_eq!(roster.len(), 1000);

        let err = create_courier(&mut roster, input("One Too Many"), &mut options).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { capacity: 1000 }));
        assert_eq!(roster.len(), 1000);
    }

    #[test]
    fn test_remove_blocked_until_orders_released() {
        let mut roster = Roster::demo();
        let jordan = CourierId::new("c-2");

        let err = remove_courier(&mut roster, &jordan).unwrap_err();
        assert!(matches!(err, Error::DeleteBlockedAssigned { assigned: 1, .. }));
        assert!(roster.contains(&jordan));

        unassign_order(&mut roster, &jordan, &OrderId::new("o-1")).unwrap();
        remove_courier(&mut roster, &jordan).unwrap();
        assert!(!roster.contains(&jordan));

        let err = remove_courier(&mut roster, &jordan).unwrap_err();
        assert!(matches!(err, Error::CourierNotFound(_)));
    }

    #[test]
    fn test_remove_rejects_corrupted_record() {
        let mut alex = Roster::demo().couriers()[0].clone();
        alex.assigned_order_count = 1;
        let mut roster = Roster::from_couriers(vec![alex]);

        let err = remove_courier(&mut roster, &CourierId::new("c-1")).unwrap_err();
        assert!(matches!(err, Error::DataIntegrity { .. }));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_assign_and_unassign_keep_count_in_sync() {
        let mut roster = Roster::demo();
        let alex = CourierId::new("c-1");

        let updated = assign_order(&mut roster, &alex, OrderId::new("o-2")).unwrap();
        assert_eq!(updated.assigned_order_count, 1);
        let updated = assign_order(&mut roster, &alex, OrderId::new("o-3")).unwrap();
        assert_eq!(updated.assigned_order_ids, [OrderId::new("o-2"), OrderId::new("o-3")]);

        let updated = unassign_order(&mut roster, &alex, &OrderId::new("o-2")).unwrap();
        assert_eq!(updated.assigned_order_ids, [OrderId::new("o-3")]);
        assert_eq!(updated.assigned_order_count, 1);
    }

    #[test]
    fn test_assign_rejects_order_held_elsewhere() {
        let mut roster = Roster::demo();
        let err = assign_order(&mut roster, &CourierId::new("c-1"), OrderId::new("o-1")).unwrap_err();
        match err {
            Error::OrderAlreadyAssigned { courier_id, .. } => assert_eq!(courier_id, "c-2"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_assign_to_missing_courier() {
        let mut roster = Roster::demo();
        let err = assign_order(&mut roster, &CourierId::new("c-9"), OrderId::new("o-9")).unwrap_err();
        assert!(matches!(err, Error::CourierNotFound(_)));
    }

    #[test]
    fn test_unassign_order_not_held() {
        let mut roster = Roster::demo();
        let err = unassign_order(&mut roster, &CourierId::new("c-1"), &OrderId::new("o-1")).unwrap_err();
        assert!(matches!(err, Error::OrderNotAssigned { .. }));
    }
}
