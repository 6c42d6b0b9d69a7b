//! Planner configuration.
//!
//! All tunables of the engine live in one immutable [`PlannerConfig`] that is
//! passed by reference to the allocator, the simulator, and the optimizer.
//! The defaults reproduce the tariffs and driving rules of the reference
//! fleet; override individual fields with the `with_*` builders or load a
//! partial JSON object through `serde`.

use serde::Deserialize;

/// Tabu search parameters.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::TabuConfig;
///
/// let config = TabuConfig::default().with_iterations(50).with_tenure(5);
/// assert_eq!(config.iterations, 50);
/// assert_eq!(config.tenure, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub iterations: usize,
    /// Number of recent moves kept forbidden.
    pub tenure: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            tenure: 10,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }
}

/// Tariffs, driving rules, and search parameters for a planning run.
///
/// Times are in hours, distances in kilometres, money in a single currency
/// unit.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::PlannerConfig;
///
/// let config = PlannerConfig::default().with_vehicle_capacity(100);
/// assert_eq!(config.vehicle_capacity, 100);
/// assert_eq!(config.speed_kmh, 40.0);
///
/// let loaded: PlannerConfig = serde_json::from_str(r#"{"speed_kmh": 60.0}"#).unwrap();
/// assert_eq!(loaded.speed_kmh, 60.0);
/// assert_eq!(loaded.vehicle_capacity, 72);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Capacity of every vehicle, in demand units.
    pub vehicle_capacity: u32,
    /// Average driving speed.
    pub speed_kmh: f64,
    /// Price of one litre of fuel.
    pub fuel_price: f64,
    /// Kilometres driven per litre of fuel.
    pub fuel_efficiency_km_per_litre: f64,
    /// Operating cost per kilometre, on top of fuel.
    pub cost_per_km: f64,
    /// Cost of one rest break.
    pub rest_cost: f64,
    /// Cost of one overnight stay.
    pub overnight_cost: f64,
    /// Length of a rest break.
    pub rest_duration_hours: f64,
    /// Length of an overnight stay.
    pub overnight_duration_hours: f64,
    /// Continuous work after which a rest break is due.
    pub max_continuous_work_hours: f64,
    /// Work in one day after which an overnight stay is due.
    pub max_daily_hours: f64,
    /// Service time per unit of demand.
    pub service_hours_per_unit: f64,
    /// Real facilities farther than this are never used.
    pub facility_search_radius_km: f64,
    /// Per-step offset of synthesized rest areas.
    pub rest_offset_degrees: f64,
    /// Per-step offset of synthesized overnight locations.
    pub overnight_offset_degrees: f64,
    /// Tabu search parameters.
    pub tabu: TabuConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            vehicle_capacity: 72,
            speed_kmh: 40.0,
            fuel_price: 10_000.0,
            fuel_efficiency_km_per_litre: 13.0,
            cost_per_km: 769.0,
            rest_cost: 10_000.0,
            overnight_cost: 100_000.0,
            rest_duration_hours: 0.5,
            overnight_duration_hours: 8.0,
            max_continuous_work_hours: 5.0,
            max_daily_hours: 8.0,
            service_hours_per_unit: 2.0 / 60.0,
            facility_search_radius_km: 10.0,
            rest_offset_degrees: 0.01,
            overnight_offset_degrees: 0.015,
            tabu: TabuConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Sets the vehicle capacity.
    pub fn with_vehicle_capacity(mut self, capacity: u32) -> Self {
        self.vehicle_capacity = capacity;
        self
    }

    /// Sets the driving speed.
    pub fn with_speed_kmh(mut self, speed: f64) -> Self {
        self.speed_kmh = speed;
        self
    }

    /// Sets fuel price and efficiency.
    pub fn with_fuel(mut self, price: f64, km_per_litre: f64) -> Self {
        self.fuel_price = price;
        self.fuel_efficiency_km_per_litre = km_per_litre;
        self
    }

    /// Sets the per-kilometre operating cost.
    pub fn with_cost_per_km(mut self, cost: f64) -> Self {
        self.cost_per_km = cost;
        self
    }

    /// Sets the continuous-work and daily-hours limits.
    pub fn with_work_limits(mut self, continuous_hours: f64, daily_hours: f64) -> Self {
        self.max_continuous_work_hours = continuous_hours;
        self.max_daily_hours = daily_hours;
        self
    }

    /// Sets the facility search radius.
    pub fn with_facility_search_radius_km(mut self, radius: f64) -> Self {
        self.facility_search_radius_km = radius;
        self
    }

    /// Sets the tabu search parameters.
    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    /// Cost of driving `distance_km`: fuel plus per-kilometre operating cost.
    pub fn distance_cost(&self, distance_km: f64) -> f64 {
        distance_km / self.fuel_efficiency_km_per_litre * self.fuel_price
            + distance_km * self.cost_per_km
    }
}
