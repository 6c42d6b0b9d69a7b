//! End-to-end planning: allocate, optimize each vehicle, report.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::config::PlannerConfig;
use crate::constructive::{allocate, unassigned_customers};
use crate::evaluation::RouteSimulator;
use crate::models::{Plan, Problem, Route, VehicleAssignment};
use crate::tabu::TabuSearch;

/// Plans routes for every vehicle of `problem`.
///
/// Customers are partitioned by [`allocate`], each vehicle's visit order is
/// improved by [`TabuSearch`], and the best order is simulated into a
/// [`Route`]. Vehicles are optimized independently (in parallel with the
/// `parallel` feature); routes come back ordered by vehicle index either way.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::PlannerConfig;
/// use fleet_routing::models::{Coordinate, Customer, Depot, Problem};
/// use fleet_routing::planner::plan;
///
/// let problem = Problem::new(1)
///     .with_depot(Depot::new("Gudang", Coordinate::new(0.0, 0.0), 72))
///     .with_customer(Customer::new("Toko A", Coordinate::new(0.0, 0.1), 10, 5_000.0))
///     .with_customer(Customer::new("Toko B", Coordinate::new(0.0, 0.2), 10, 5_000.0));
///
/// let config = PlannerConfig::default();
/// let plan = plan(&problem, &config);
///
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.routes()[0].customer_names(), vec!["Toko A", "Toko B"]);
/// assert!(plan.is_complete());
/// ```
#[instrument(
    level = "info",
    skip_all,
    fields(vehicles = problem.vehicle_count(), customers = problem.customers().len())
)]
pub fn plan(problem: &Problem, config: &PlannerConfig) -> Plan {
    let vehicles = allocate(problem, config);
    let routes = route_all(problem, config, &vehicles);

    let dropped = unassigned_customers(problem, &vehicles);
    let customers = problem.customers();
    for &id in &dropped {
        warn!(
            customer = customers[id].name(),
            demand = customers[id].demand(),
            "customer not assigned to any vehicle"
        );
    }

    let served_demand = vehicles.iter().map(|v| u64::from(v.load())).sum();
    let dropped_demand = dropped
        .iter()
        .map(|&id| u64::from(customers[id].demand()))
        .sum();
    let unassigned = dropped
        .iter()
        .map(|&id| customers[id].name().to_string())
        .collect();

    let plan = Plan::new(routes, unassigned, served_demand, dropped_demand);
    let summary = plan.summary(config);
    info!(
        routes = plan.num_routes(),
        served = plan.num_served(),
        dropped = plan.unassigned().len(),
        total_cost = summary.total_cost,
        profit = summary.total_profit,
        "plan complete"
    );
    plan
}

/// Optimizes and simulates the route of one allocated vehicle.
///
/// A vehicle without a depot (the problem has none) gets [`Route::empty`].
pub fn route_vehicle(problem: &Problem, config: &PlannerConfig, vehicle: &VehicleAssignment) -> Route {
    let Some(depot) = vehicle.depot_id().and_then(|id| problem.depots().get(id)) else {
        return Route::empty(vehicle.vehicle_id());
    };
    let simulator = RouteSimulator::new(problem, depot, config).for_vehicle(vehicle.vehicle_id());
    TabuSearch::new(simulator, &config.tabu, config.vehicle_capacity)
        .optimize_route(vehicle.customer_ids())
}

#[cfg(feature = "parallel")]
fn route_all(problem: &Problem, config: &PlannerConfig, vehicles: &[VehicleAssignment]) -> Vec<Route> {
    vehicles
        .par_iter()
        .map(|v| route_vehicle(problem, config, v))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn route_all(problem: &Problem, config: &PlannerConfig, vehicles: &[VehicleAssignment]) -> Vec<Route> {
    vehicles
        .iter()
        .map(|v| route_vehicle(problem, config, v))
        .collect()
}
