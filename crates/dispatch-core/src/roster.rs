// Rust guideline compliant 2026-10-18

//! In-memory courier roster.
//!
//! The roster owns every courier record. Reads go through [`enforce_invariant`],
//! which refuses to return a record whose stored assignment count disagrees with
//! its assigned order list.

use crate::{Courier, CourierId, CreateCourierInput, Error, OrderId, Result};

/// Capacity ceiling for a roster.
pub const MAX_COURIERS: usize = 1000;

/// Checks the assignment-count invariant on a courier.
///
/// # Returns
///
/// A copy of the courier with `assigned_order_count` set to the derived value.
///
/// # Errors
///
/// Returns `Error::DataIntegrity` if the stored count differs from the number of
/// assigned order ids. The record is never repaired.
pub fn enforce_invariant(courier: &Courier) -> Result<Courier> {
    let derived = courier.assigned_order_ids.len();
    if courier.assigned_order_count != derived {
        return Err(Error::DataIntegrity {
            id: courier.id.to_string(),
            stored: courier.assigned_order_count,
            derived,
        });
    }
    Ok(Courier {
        assigned_order_count: derived,
        ..courier.clone()
    })
}

/// Ordered collection of couriers with a capacity ceiling.
#[derive(Debug, Clone)]
pub struct Roster {
    couriers: Vec<Courier>,
    capacity: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Creates an empty roster with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_COURIERS)
    }

    /// Creates an empty roster with a custom capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            couriers: Vec::new(),
            capacity,
        }
    }

    /// Creates a roster from existing records.
    ///
    /// Records are stored as given; invariant violations surface on read.
    pub fn from_couriers(couriers: Vec<Courier>) -> Self {
        Self {
            couriers,
            capacity: MAX_COURIERS,
        }
    }

    /// Creates the demo roster used by the mock server.
    pub fn demo() -> Self {
        let courier = |id: &str, name: &str, phone: &str, vehicle: &str, region: &str| {
            Courier::new(
                CourierId::new(id),
                CreateCourierInput {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    vehicle: vehicle.to_string(),
                    region: region.to_string(),
                },
            )
        };

        let mut jordan = courier("c-2", "Jordan Lee", "555-0102", "bike", "east");
        jordan.assigned_order_ids.push(OrderId::new("o-1"));
        jordan.assigned_order_count = 1;

        Self::from_couriers(vec![
            courier("c-1", "Alex Morgan", "555-0101", "van", "north"),
            jordan,
            courier("c-3", "Casey Kim", "555-0103", "car", "south"),
        ])
    }

    /// Returns the capacity ceiling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of couriers.
    pub fn len(&self) -> usize {
        self.couriers.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty()
    }

    /// Returns the raw records in roster order, without invariant checks.
    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    /// Returns true if a courier with `id` exists.
    pub fn contains(&self, id: &CourierId) -> bool {
        self.couriers.iter().any(|courier| &courier.id == id)
    }

    /// Returns the position of the courier with `id`.
    pub fn position(&self, id: &CourierId) -> Option<usize> {
        self.couriers.iter().position(|courier| &courier.id == id)
    }

    /// Returns the courier holding `order_id`, if any.
    pub fn holder_of(&self, order_id: &OrderId) -> Option<&Courier> {
        self.couriers
            .iter()
            .find(|courier| courier.assigned_order_ids.contains(order_id))
    }

    /// Looks up a courier by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::CourierNotFound` if absent, or `Error::DataIntegrity` if the
    /// stored record violates the assignment-count invariant.
    pub fn get(&self, id: &CourierId) -> Result<Courier> {
        let courier = self
            .couriers
            .iter()
            .find(|courier| &courier.id == id)
            .ok_or_else(|| Error::CourierNotFound(id.to_string()))?;
        enforce_invariant(courier)
    }

    /// Returns a mutable reference to a courier after checking its invariant.
    ///
    /// # Errors
    ///
    /// Same as [`Roster::get`].
    pub fn get_mut(&mut self, id: &CourierId) -> Result<&mut Courier> {
        let courier = self
            .couriers
            .iter_mut()
            .find(|courier| &courier.id == id)
            .ok_or_else(|| Error::CourierNotFound(id.to_string()))?;
        enforce_invariant(courier)?;
        Ok(courier)
    }

    /// Fails if the roster is already beyond its capacity.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityExceeded` when `len() > capacity()`.
    pub fn ensure_list_capacity(&self) -> Result<()> {
        if self.couriers.len() > self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Fails if inserting one more courier would exceed capacity.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityExceeded` when `len() >= capacity()`.
    pub fn ensure_create_capacity(&self) -> Result<()> {
        if self.couriers.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends a courier.
    ///
    /// Callers are responsible for capacity and id uniqueness; see the mutation
    /// helpers in `dispatch-app`.
    pub fn push(&mut self, courier: Courier) {
        self.couriers.push(courier);
    }

    /// Removes the courier at `index`, preserving the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Courier {
        self.couriers.remove(index)
    }
}
