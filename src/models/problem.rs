//! Planning problem definition.

use super::{Customer, Depot, Facility, FacilityKind};

/// Everything a planning run consumes: depots, customers, facility catalogs,
/// and the number of vehicles.
///
/// Catalogs keep insertion order. That order breaks distance ties in the
/// allocator and decides which depot an empty vehicle defaults to.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Customer, Depot, Problem};
///
/// let problem = Problem::new(2)
///     .with_depot(Depot::new("D", Coordinate::new(0.0, 0.0), 72))
///     .with_customer(Customer::new("A", Coordinate::new(0.0, 0.1), 10, 100.0));
///
/// assert_eq!(problem.vehicle_count(), 2);
/// assert_eq!(problem.customers().len(), 1);
/// assert_eq!(problem.customer_index("A"), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Problem {
    depots: Vec<Depot>,
    customers: Vec<Customer>,
    rest_facilities: Vec<Facility>,
    overnight_facilities: Vec<Facility>,
    vehicle_count: usize,
}

impl Problem {
    /// Creates an empty problem for the given fleet size.
    pub fn new(vehicle_count: usize) -> Self {
        Self {
            vehicle_count,
            ..Self::default()
        }
    }

    /// Adds a depot.
    pub fn with_depot(mut self, depot: Depot) -> Self {
        self.depots.push(depot);
        self
    }

    /// Adds a customer.
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    /// Adds a rest area.
    pub fn with_rest_facility(mut self, facility: Facility) -> Self {
        self.rest_facilities.push(facility);
        self
    }

    /// Adds an overnight lodging location.
    pub fn with_overnight_facility(mut self, facility: Facility) -> Self {
        self.overnight_facilities.push(facility);
        self
    }

    pub(crate) fn push_depot(&mut self, depot: Depot) {
        self.depots.push(depot);
    }

    pub(crate) fn push_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    pub(crate) fn push_facility(&mut self, kind: FacilityKind, facility: Facility) {
        match kind {
            FacilityKind::Rest => self.rest_facilities.push(facility),
            FacilityKind::Overnight => self.overnight_facilities.push(facility),
        }
    }

    /// Depots in insertion order.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Customers in insertion order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Facility catalog of the given kind.
    pub fn facilities(&self, kind: FacilityKind) -> &[Facility] {
        match kind {
            FacilityKind::Rest => &self.rest_facilities,
            FacilityKind::Overnight => &self.overnight_facilities,
        }
    }

    /// Number of vehicles to plan for.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Index of the customer with the given name.
    pub fn customer_index(&self, name: &str) -> Option<usize> {
        self.customers.iter().position(|c| c.name() == name)
    }

    /// Index of the depot with the given name.
    pub fn depot_index(&self, name: &str) -> Option<usize> {
        self.depots.iter().position(|d| d.name() == name)
    }

    /// Sum of all customer demand.
    pub fn total_demand(&self) -> u64 {
        self.customers.iter().map(|c| u64::from(c.demand())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn sample() -> Problem {
        Problem::new(1)
            .with_depot(Depot::new("D1", Coordinate::new(0.0, 0.0), 72))
            .with_depot(Depot::new("D2", Coordinate::new(1.0, 1.0), 72))
            .with_customer(Customer::new("A", Coordinate::new(0.0, 0.1), 10, 100.0))
            .with_customer(Customer::new("B", Coordinate::new(0.0, 0.2), 20, 50.0))
            .with_rest_facility(Facility::new("R", Coordinate::new(0.0, 0.5)))
    }

    #[test]
    fn test_problem_catalogs() {
        let p = sample();
        assert_eq!(p.depots().len(), 2);
        assert_eq!(p.customers().len(), 2);
        assert_eq!(p.facilities(FacilityKind::Rest).len(), 1);
        assert!(p.facilities(FacilityKind::Overnight).is_empty());
        assert_eq!(p.vehicle_count(), 1);
    }

    #[test]
    fn test_problem_lookup() {
        let p = sample();
        assert_eq!(p.customer_index("B"), Some(1));
        assert_eq!(p.customer_index("Z"), None);
        assert_eq!(p.depot_index("D2"), Some(1));
    }

    #[test]
    fn test_problem_total_demand() {
        assert_eq!(sample().total_demand(), 30);
    }

    #[test]
    fn test_problem_empty() {
        let p = Problem::new(3);
        assert!(p.depots().is_empty());
        assert!(p.customers().is_empty());
        assert_eq!(p.total_demand(), 0);
    }
}
