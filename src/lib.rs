//! # fleet-routing
//!
//! Route planning for a capacitated delivery fleet with driver working-time
//! rules. Customers are partitioned across vehicles, each vehicle's visit
//! order is improved by tabu search, and every route is simulated with rest
//! breaks and overnight stays inserted where the driving rules demand them.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Coordinate, Depot, Customer, Facility, Problem, Route, Plan)
//! - [`config`]: Tariffs, driving rules, and search parameters
//! - [`distance`]: Great-circle distance
//! - [`facility`]: Rest and overnight facility resolution
//! - [`constructive`]: Nearest-neighbor customer allocation
//! - [`evaluation`]: Route simulation with rest and overnight insertion
//! - [`tabu`]: Swap-neighborhood tabu search over visit orders
//! - [`planner`]: End-to-end planning
//! - [`input`]: Location records and validation
//! - [`error`]: Boundary errors
//!
//! ## Example
//!
//! ```
//! use fleet_routing::config::PlannerConfig;
//! use fleet_routing::models::Problem;
//!
//! let json = r#"[
//!     {"type": "depot", "name": "Gudang", "lat": -6.20, "lon": 106.80},
//!     {"type": "customer", "name": "Toko A", "lat": -6.25, "lon": 106.85, "demand": 20, "fee": 3000},
//!     {"type": "customer", "name": "Toko B", "lat": -6.30, "lon": 106.90, "demand": 30, "fee": 3000}
//! ]"#;
//!
//! let config = PlannerConfig::default();
//! let problem = Problem::from_json(json, 1, &config).unwrap();
//! let plan = fleet_routing::plan(&problem, &config);
//!
//! assert_eq!(plan.routes()[0].customer_names(), vec!["Toko A", "Toko B"]);
//! let summary = plan.summary(&config);
//! assert_eq!(summary.served_demand, 50);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod facility;
pub mod input;
pub mod models;
pub mod planner;
pub mod tabu;

pub use error::RoutingError;
pub use planner::plan;
