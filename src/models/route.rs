//! Route, waypoint, and route metric types.

use serde::Serialize;

use super::{Coordinate, Located};
use crate::config::PlannerConfig;

/// A single stop along a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waypoint {
    /// The depot the vehicle leaves from.
    DepotStart {
        /// Depot name.
        name: String,
        /// Depot location.
        coordinate: Coordinate,
    },
    /// A customer delivery.
    Customer {
        /// Customer name.
        name: String,
        /// Customer location.
        coordinate: Coordinate,
        /// Time spent serving this customer, in hours.
        service_hours: f64,
    },
    /// A mandatory rest break.
    RestStop {
        /// Name of the real rest area used, `None` for a virtual one.
        facility: Option<String>,
        /// Where the break is taken.
        coordinate: Coordinate,
    },
    /// A mandatory overnight stay.
    OvernightStop {
        /// Name of the real lodging used, `None` for a virtual one.
        facility: Option<String>,
        /// Where the night is spent.
        coordinate: Coordinate,
    },
}

impl Waypoint {
    /// Display name for itinerary listings.
    pub fn label(&self) -> &str {
        match self {
            Waypoint::DepotStart { name, .. } | Waypoint::Customer { name, .. } => name,
            Waypoint::RestStop { facility, .. } => {
                facility.as_deref().unwrap_or("Virtual rest area")
            }
            Waypoint::OvernightStop { facility, .. } => {
                facility.as_deref().unwrap_or("Virtual overnight stay")
            }
        }
    }

    /// What happens at this stop.
    pub fn activity(&self) -> &'static str {
        match self {
            Waypoint::DepotStart { .. } => "Depot",
            Waypoint::Customer { .. } => "Customer",
            Waypoint::RestStop { .. } => "Rest",
            Waypoint::OvernightStop { .. } => "Overnight",
        }
    }

    /// Returns `true` for rest and overnight stops at synthesized locations.
    pub fn is_virtual(&self) -> bool {
        matches!(
            self,
            Waypoint::RestStop { facility: None, .. }
                | Waypoint::OvernightStop { facility: None, .. }
        )
    }
}

impl Located for Waypoint {
    fn coordinate(&self) -> Coordinate {
        match self {
            Waypoint::DepotStart { coordinate, .. }
            | Waypoint::Customer { coordinate, .. }
            | Waypoint::RestStop { coordinate, .. }
            | Waypoint::OvernightStop { coordinate, .. } => *coordinate,
        }
    }
}

/// Aggregate figures for one route, rounded to two decimals.
///
/// Times are in hours, distance in kilometres, money in the currency unit of
/// [`PlannerConfig`]. `total_time` accumulates service and rest time;
/// `work_time` is travel plus service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteMetrics {
    /// Distance driven.
    pub total_distance: f64,
    /// Fees collected.
    pub total_revenue: f64,
    /// Fuel, per-km, rest, and overnight costs.
    pub total_cost: f64,
    /// Revenue minus cost.
    pub profit: f64,
    /// Time spent serving customers.
    pub service_time: f64,
    /// Time spent on rest breaks.
    pub rest_time: f64,
    /// Time spent on overnight stays.
    pub overnight_time: f64,
    /// Service plus rest time.
    pub total_time: f64,
    /// Time spent driving.
    pub travel_time: f64,
    /// Driving plus service time.
    pub work_time: f64,
    /// Number of overnight stays.
    pub overnight_stays: u32,
}

impl RouteMetrics {
    /// Fuel share of the route cost.
    pub fn fuel_cost(&self, config: &PlannerConfig) -> f64 {
        self.total_distance / config.fuel_efficiency_km_per_litre * config.fuel_price
    }

    /// Everything in the route cost that is not fuel.
    pub fn operational_cost(&self, config: &PlannerConfig) -> f64 {
        self.total_cost - self.fuel_cost(config)
    }
}

/// A simulated route for one vehicle.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Route, Waypoint, RouteMetrics, Coordinate};
///
/// let route = Route::new(
///     0,
///     Some("Gudang".to_string()),
///     vec![Waypoint::DepotStart {
///         name: "Gudang".to_string(),
///         coordinate: Coordinate::new(0.0, 0.0),
///     }],
///     RouteMetrics::default(),
/// );
/// assert!(route.is_empty());
/// assert_eq!(route.waypoints().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    vehicle_id: usize,
    depot: Option<String>,
    waypoints: Vec<Waypoint>,
    metrics: RouteMetrics,
}

impl Route {
    /// Creates a route.
    pub fn new(
        vehicle_id: usize,
        depot: Option<String>,
        waypoints: Vec<Waypoint>,
        metrics: RouteMetrics,
    ) -> Self {
        Self {
            vehicle_id,
            depot,
            waypoints,
            metrics,
        }
    }

    /// A route with no depot, no stops, and zero metrics.
    pub fn empty(vehicle_id: usize) -> Self {
        Self::new(vehicle_id, None, Vec::new(), RouteMetrics::default())
    }

    /// Vehicle index within the fleet.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Name of the depot the route starts from.
    pub fn depot(&self) -> Option<&str> {
        self.depot.as_deref()
    }

    /// All stops in order, starting with the depot.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Aggregate route figures.
    pub fn metrics(&self) -> &RouteMetrics {
        &self.metrics
    }

    /// Names of the customers visited, in order.
    pub fn customer_names(&self) -> Vec<&str> {
        self.waypoints
            .iter()
            .filter_map(|w| match w {
                Waypoint::Customer { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of customers visited.
    pub fn len(&self) -> usize {
        self.waypoints
            .iter()
            .filter(|w| matches!(w, Waypoint::Customer { .. }))
            .count()
    }

    /// Returns `true` if no customer is visited.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rest breaks taken.
    pub fn rest_stops(&self) -> usize {
        self.waypoints
            .iter()
            .filter(|w| matches!(w, Waypoint::RestStop { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::DepotStart {
                name: "D".to_string(),
                coordinate: Coordinate::new(0.0, 0.0),
            },
            Waypoint::Customer {
                name: "A".to_string(),
                coordinate: Coordinate::new(0.0, 1.0),
                service_hours: 0.5,
            },
            Waypoint::RestStop {
                facility: None,
                coordinate: Coordinate::new(0.01, 1.01),
            },
            Waypoint::OvernightStop {
                facility: Some("Hotel".to_string()),
                coordinate: Coordinate::new(0.0, 1.05),
            },
            Waypoint::Customer {
                name: "B".to_string(),
                coordinate: Coordinate::new(0.0, 2.0),
                service_hours: 0.2,
            },
        ]
    }

    #[test]
    fn test_route_counts() {
        let r = Route::new(1, Some("D".to_string()), waypoints(), RouteMetrics::default());
        assert_eq!(r.vehicle_id(), 1);
        assert_eq!(r.depot(), Some("D"));
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.rest_stops(), 1);
        assert_eq!(r.customer_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_route_empty() {
        let r = Route::empty(4);
        assert!(r.is_empty());
        assert!(r.waypoints().is_empty());
        assert_eq!(r.depot(), None);
        assert_eq!(r.metrics(), &RouteMetrics::default());
    }

    #[test]
    fn test_waypoint_labels() {
        let w = waypoints();
        assert_eq!(w[0].label(), "D");
        assert_eq!(w[0].activity(), "Depot");
        assert_eq!(w[2].label(), "Virtual rest area");
        assert!(w[2].is_virtual());
        assert_eq!(w[3].label(), "Hotel");
        assert_eq!(w[3].activity(), "Overnight");
        assert!(!w[3].is_virtual());
        assert_eq!(w[4].coordinate(), Coordinate::new(0.0, 2.0));
    }

    #[test]
    fn test_metrics_cost_split() {
        let config = PlannerConfig::default();
        let m = RouteMetrics {
            total_distance: 13.0,
            total_cost: 30_000.0,
            ..RouteMetrics::default()
        };
        assert!((m.fuel_cost(&config) - 10_000.0).abs() < 1e-9);
        assert!((m.operational_cost(&config) - 20_000.0).abs() < 1e-9);
    }
}
