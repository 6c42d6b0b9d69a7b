//! Plan and plan summary types.

use serde::Serialize;

use super::Route;
use crate::config::PlannerConfig;

/// Fleet-wide totals for a [`Plan`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Distance driven by all vehicles.
    pub total_distance: f64,
    /// Fuel cost across all vehicles.
    pub total_fuel_cost: f64,
    /// Non-fuel cost across all vehicles.
    pub total_operational_cost: f64,
    /// Fuel plus operational cost.
    pub total_cost: f64,
    /// Fees collected across all vehicles.
    pub total_revenue: f64,
    /// Revenue minus cost.
    pub total_profit: f64,
    /// Overnight stays across all vehicles.
    pub overnight_stays: u32,
    /// Demand delivered.
    pub served_demand: u64,
    /// Demand belonging to customers no vehicle could take.
    pub dropped_demand: u64,
}

/// The result of a planning run: one route per vehicle plus the customers
/// that could not be placed.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Plan, Route};
///
/// let plan = Plan::new(vec![Route::empty(0)], vec!["Far".to_string()], 0, 30);
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.unassigned(), &["Far".to_string()]);
/// assert!(!plan.is_complete());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    routes: Vec<Route>,
    unassigned: Vec<String>,
    served_demand: u64,
    dropped_demand: u64,
}

impl Plan {
    /// Creates a plan.
    pub fn new(
        routes: Vec<Route>,
        unassigned: Vec<String>,
        served_demand: u64,
        dropped_demand: u64,
    ) -> Self {
        Self {
            routes,
            unassigned,
            served_demand,
            dropped_demand,
        }
    }

    /// Routes ordered by vehicle index.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (one per vehicle, including empty ones).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Names of customers not assigned to any vehicle.
    pub fn unassigned(&self) -> &[String] {
        &self.unassigned
    }

    /// Returns `true` if every customer was assigned.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Number of customers visited across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Computes fleet-wide totals, splitting cost into fuel and the rest.
    pub fn summary(&self, config: &PlannerConfig) -> PlanSummary {
        let mut summary = PlanSummary {
            served_demand: self.served_demand,
            dropped_demand: self.dropped_demand,
            ..PlanSummary::default()
        };
        for route in &self.routes {
            let m = route.metrics();
            let fuel = m.fuel_cost(config);
            summary.total_distance += m.total_distance;
            summary.total_fuel_cost += fuel;
            summary.total_operational_cost += m.total_cost - fuel;
            summary.total_revenue += m.total_revenue;
            summary.overnight_stays += m.overnight_stays;
        }
        summary.total_cost = summary.total_fuel_cost + summary.total_operational_cost;
        summary.total_profit = summary.total_revenue - summary.total_cost;
        summary
    }
}
