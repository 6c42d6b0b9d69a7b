//! Domain model types for fleet route planning.
//!
//! Provides the core abstractions: coordinates, depots, customers with
//! demands and fees, rest and overnight facilities, the planning problem,
//! per-vehicle assignments, and the routes and plans the planner produces.

mod coordinate;
mod customer;
mod depot;
mod problem;
mod route;
mod solution;
mod vehicle;

pub use coordinate::{Coordinate, Located};
pub use customer::Customer;
pub use depot::{Depot, Facility, FacilityKind};
pub use problem::Problem;
pub use route::{Route, RouteMetrics, Waypoint};
pub use solution::{Plan, PlanSummary};
pub use vehicle::VehicleAssignment;
