//! Nearest-neighbor customer allocation.
//!
//! Partitions customers across the fleet one vehicle at a time:
//!
//! 1. Seed: among the unassigned customers, take the one closest to any
//!    depot, and give the vehicle that customer's nearest depot. With nobody
//!    left, the vehicle defaults to the first depot and stays empty.
//! 2. Fill: starting from the depot, repeatedly take the nearest unassigned
//!    customer whose demand fits the remaining capacity, moving the current
//!    position to it, until nothing fits.
//!
//! Customers still unassigned after the last vehicle are dropped.
//!
//! # Complexity
//!
//! O(V·(n·D + n²)) for V vehicles, n customers, and D depots.

use tracing::debug;

use crate::config::PlannerConfig;
use crate::distance::haversine;
use crate::models::{Coordinate, Problem, VehicleAssignment};

/// Assigns customers to `problem.vehicle_count()` vehicles.
///
/// Deterministic for a given problem: distance ties go to the customer or
/// depot listed first. The returned list always has one entry per vehicle.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::PlannerConfig;
/// use fleet_routing::constructive::allocate;
/// use fleet_routing::models::{Coordinate, Customer, Depot, Problem};
///
/// let problem = Problem::new(1)
///     .with_depot(Depot::new("D", Coordinate::new(0.0, 0.0), 72))
///     .with_customer(Customer::new("C", Coordinate::new(0.0, 0.3), 10, 1.0))
///     .with_customer(Customer::new("A", Coordinate::new(0.0, 0.1), 10, 1.0))
///     .with_customer(Customer::new("B", Coordinate::new(0.0, 0.2), 10, 1.0));
///
/// let vehicles = allocate(&problem, &PlannerConfig::default());
/// assert_eq!(vehicles.len(), 1);
/// // Visited nearest-first: A, B, C
/// assert_eq!(vehicles[0].customer_ids(), &[1, 2, 0]);
/// assert_eq!(vehicles[0].load(), 30);
/// ```
pub fn allocate(problem: &Problem, config: &PlannerConfig) -> Vec<VehicleAssignment> {
    let customers = problem.customers();
    let capacity = config.vehicle_capacity;
    let mut assigned = vec![false; customers.len()];
    let mut vehicles = Vec::with_capacity(problem.vehicle_count());

    for vehicle_id in 0..problem.vehicle_count() {
        let depot_id = match seed_customer(problem, &assigned) {
            Some(seed) => nearest_depot(problem, customers[seed].coordinate()),
            None if problem.depots().is_empty() => None,
            None => Some(0),
        };

        let Some(depot_id) = depot_id else {
            vehicles.push(VehicleAssignment::new(vehicle_id, None, Vec::new(), capacity, capacity));
            continue;
        };

        let mut current = problem.depots()[depot_id].coordinate();
        let mut remaining = capacity;
        let mut route_customers = Vec::new();

        loop {
            // Find nearest unassigned customer that fits capacity
            let mut best: Option<(usize, f64)> = None;
            for (i, customer) in customers.iter().enumerate() {
                if assigned[i] || customer.demand() > remaining {
                    continue;
                }
                let d = haversine(&current, customer);
                if best.is_none_or(|(_, best_d)| d < best_d) {
                    best = Some((i, d));
                }
            }

            match best {
                Some((next, _)) => {
                    assigned[next] = true;
                    route_customers.push(next);
                    remaining -= customers[next].demand();
                    current = customers[next].coordinate();
                }
                None => break,
            }
        }

        debug!(
            vehicle_id,
            depot = problem.depots()[depot_id].name(),
            customers = route_customers.len(),
            load = capacity - remaining,
            "vehicle allocated"
        );
        vehicles.push(VehicleAssignment::new(
            vehicle_id,
            Some(depot_id),
            route_customers,
            capacity,
            remaining,
        ));
    }

    vehicles
}

/// Indices of customers that no vehicle received, in catalog order.
pub fn unassigned_customers(problem: &Problem, vehicles: &[VehicleAssignment]) -> Vec<usize> {
    let mut assigned = vec![false; problem.customers().len()];
    for id in vehicles.iter().flat_map(|v| v.customer_ids()) {
        assigned[*id] = true;
    }
    (0..assigned.len()).filter(|&i| !assigned[i]).collect()
}

/// The unassigned customer closest to any depot.
fn seed_customer(problem: &Problem, assigned: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, customer) in problem.customers().iter().enumerate() {
        if assigned[i] {
            continue;
        }
        let Some(d) = problem
            .depots()
            .iter()
            .map(|depot| haversine(customer, depot))
            .min_by(f64::total_cmp)
        else {
            return None;
        };
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the depot nearest to `location`; ties go to the first listed.
fn nearest_depot(problem: &Problem, location: Coordinate) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, depot) in problem.depots().iter().enumerate() {
        let d = haversine(&location, depot);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
