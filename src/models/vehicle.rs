//! Vehicle assignment produced by the allocator.

/// The customers and depot the allocator gave to one vehicle.
///
/// A vehicle is not a stored entity; it exists only for the duration of a
/// planning run as the result of [`allocate`](crate::constructive::allocate).
///
/// # Examples
///
/// ```
/// use fleet_routing::models::VehicleAssignment;
///
/// let v = VehicleAssignment::new(0, Some(0), vec![2, 0, 1], 72, 12);
/// assert_eq!(v.vehicle_id(), 0);
/// assert_eq!(v.load(), 60);
/// assert!(!v.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleAssignment {
    vehicle_id: usize,
    depot_id: Option<usize>,
    customer_ids: Vec<usize>,
    capacity: u32,
    remaining_capacity: u32,
}

impl VehicleAssignment {
    /// Creates an assignment.
    ///
    /// `depot_id` is `None` only when the problem has no depots at all.
    pub fn new(
        vehicle_id: usize,
        depot_id: Option<usize>,
        customer_ids: Vec<usize>,
        capacity: u32,
        remaining_capacity: u32,
    ) -> Self {
        Self {
            vehicle_id,
            depot_id,
            customer_ids,
            capacity,
            remaining_capacity,
        }
    }

    /// Vehicle index within the fleet.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Index of the depot this vehicle starts from.
    pub fn depot_id(&self) -> Option<usize> {
        self.depot_id
    }

    /// Assigned customer indices in greedy visit order.
    pub fn customer_ids(&self) -> &[usize] {
        &self.customer_ids
    }

    /// Capacity the vehicle started with.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Capacity left after all assignments.
    pub fn remaining_capacity(&self) -> u32 {
        self.remaining_capacity
    }

    /// Demand carried by this vehicle.
    pub fn load(&self) -> u32 {
        self.capacity - self.remaining_capacity
    }

    /// Returns `true` if no customers were assigned.
    pub fn is_empty(&self) -> bool {
        self.customer_ids.is_empty()
    }
}
