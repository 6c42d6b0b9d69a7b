//! Route simulator that replays a visit order and computes time, cost, and
//! revenue, inserting rest and overnight stops as driving rules require.
//!
//! # Driving rules
//!
//! Two clocks run alongside the route: time since the last rest and time
//! since the last overnight stay. Both advance with travel and service time.
//! After each leg:
//!
//! - time since rest `>=` the continuous-work limit: take a rest break and
//!   reset the rest clock;
//! - time since overnight `>` the daily limit: stay overnight and reset
//!   both clocks.
//!
//! Both rules may fire on the same leg. Stops are placed at the position the
//! leg started from, and never change the distance driven.

use tracing::trace;

use super::round2;
use crate::config::PlannerConfig;
use crate::distance::haversine;
use crate::facility::FacilityResolver;
use crate::models::{
    Coordinate, Customer, Depot, FacilityKind, Problem, Route, RouteMetrics, Waypoint,
};

/// Running totals of a partially replayed route.
///
/// Obtained from [`RouteSimulator::start`] and advanced one customer at a
/// time with [`RouteSimulator::step`]. The state is `Copy`, so a snapshot at
/// any prefix can be kept and resumed later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    position: Coordinate,
    remaining_capacity: u32,
    halted: bool,
    visited: usize,
    time_since_rest: f64,
    time_since_overnight: f64,
    distance: f64,
    revenue: f64,
    stop_cost: f64,
    travel_time: f64,
    service_time: f64,
    rest_time: f64,
    overnight_time: f64,
    total_time: f64,
    overnight_stays: u32,
    rest_synth: u32,
    overnight_synth: u32,
}

impl SimulationState {
    /// Where the vehicle currently is.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Capacity not yet consumed.
    pub fn remaining_capacity(&self) -> u32 {
        self.remaining_capacity
    }

    /// Returns `true` once a customer did not fit and the replay stopped.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of customers served so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Hours worked since the last rest or overnight stop.
    pub fn time_since_rest(&self) -> f64 {
        self.time_since_rest
    }

    /// Hours worked since the last overnight stop.
    pub fn time_since_overnight(&self) -> f64 {
        self.time_since_overnight
    }

    /// Kilometres driven so far.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Replays customer visit orders for one vehicle leaving one depot.
///
/// The simulator holds no mutable state: every call starts from the depot,
/// so identical inputs always give identical metrics.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::PlannerConfig;
/// use fleet_routing::evaluation::RouteSimulator;
/// use fleet_routing::models::{Coordinate, Customer, Depot, Problem};
///
/// let problem = Problem::new(1)
///     .with_depot(Depot::new("D", Coordinate::new(0.0, 0.0), 72))
///     .with_customer(Customer::new("A", Coordinate::new(0.0, 0.1), 10, 100.0))
///     .with_customer(Customer::new("B", Coordinate::new(0.0, 0.2), 20, 50.0));
/// let config = PlannerConfig::default();
///
/// let simulator = RouteSimulator::new(&problem, &problem.depots()[0], &config);
/// let route = simulator.simulate(&[0, 1], config.vehicle_capacity);
///
/// assert_eq!(route.customer_names(), vec!["A", "B"]);
/// assert_eq!(route.metrics().total_revenue, 2000.0);
/// assert!((route.metrics().total_distance - 22.24).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteSimulator<'a> {
    config: &'a PlannerConfig,
    customers: &'a [Customer],
    depot: &'a Depot,
    rest: FacilityResolver<'a>,
    overnight: FacilityResolver<'a>,
    vehicle_id: usize,
}

impl<'a> RouteSimulator<'a> {
    /// Creates a simulator for routes leaving `depot`.
    pub fn new(problem: &'a Problem, depot: &'a Depot, config: &'a PlannerConfig) -> Self {
        Self {
            config,
            customers: problem.customers(),
            depot,
            rest: FacilityResolver::new(
                FacilityKind::Rest,
                problem.facilities(FacilityKind::Rest),
                config,
            ),
            overnight: FacilityResolver::new(
                FacilityKind::Overnight,
                problem.facilities(FacilityKind::Overnight),
                config,
            ),
            vehicle_id: 0,
        }
    }

    /// Tags produced routes with the given vehicle index.
    pub fn for_vehicle(mut self, vehicle_id: usize) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    /// State of a vehicle standing at the depot.
    pub fn start(&self, starting_capacity: u32) -> SimulationState {
        SimulationState {
            position: self.depot.coordinate(),
            remaining_capacity: starting_capacity,
            halted: false,
            visited: 0,
            time_since_rest: 0.0,
            time_since_overnight: 0.0,
            distance: 0.0,
            revenue: 0.0,
            stop_cost: 0.0,
            travel_time: 0.0,
            service_time: 0.0,
            rest_time: 0.0,
            overnight_time: 0.0,
            total_time: 0.0,
            overnight_stays: 0,
            rest_synth: 0,
            overnight_synth: 0,
        }
    }

    /// Drives to and serves customer `customer_id`.
    ///
    /// Returns `false` without changing anything but the halt flag if the
    /// customer's demand exceeds the remaining capacity; every later step is
    /// then a no-op. Stops and the customer are appended to `waypoints` when
    /// given. Facilities are looked up only then; their location never
    /// affects cost.
    pub fn step(
        &self,
        state: &mut SimulationState,
        customer_id: usize,
        mut waypoints: Option<&mut Vec<Waypoint>>,
    ) -> bool {
        if state.halted {
            return false;
        }
        let customer = &self.customers[customer_id];
        if customer.demand() > state.remaining_capacity {
            state.halted = true;
            return false;
        }
        state.remaining_capacity -= customer.demand();

        let from = state.position;
        let distance = haversine(&from, customer);
        let travel_time = distance / self.config.speed_kmh;
        state.travel_time += travel_time;
        state.time_since_rest += travel_time;
        state.time_since_overnight += travel_time;

        if state.time_since_rest >= self.config.max_continuous_work_hours {
            if let Some(waypoints) = &mut waypoints {
                let stop = self.rest.resolve(&from, state.rest_synth);
                trace!(customer = customer.name(), virtual_stop = stop.is_virtual(), "rest stop");
                waypoints.push(Waypoint::RestStop {
                    facility: stop.name,
                    coordinate: stop.coordinate,
                });
            }
            state.rest_synth += 1;
            state.rest_time += self.config.rest_duration_hours;
            state.total_time += self.config.rest_duration_hours;
            state.time_since_rest = 0.0;
            state.stop_cost += self.config.rest_cost;
        }

        if state.time_since_overnight > self.config.max_daily_hours {
            if let Some(waypoints) = &mut waypoints {
                let stop = self.overnight.resolve(&from, state.overnight_synth);
                trace!(customer = customer.name(), virtual_stop = stop.is_virtual(), "overnight stop");
                waypoints.push(Waypoint::OvernightStop {
                    facility: stop.name,
                    coordinate: stop.coordinate,
                });
            }
            state.overnight_synth += 1;
            state.overnight_time += self.config.overnight_duration_hours;
            state.time_since_rest = 0.0;
            state.time_since_overnight = 0.0;
            state.stop_cost += self.config.overnight_cost;
            state.overnight_stays += 1;
        }

        let service_time = f64::from(customer.demand()) * self.config.service_hours_per_unit;
        if let Some(waypoints) = waypoints {
            waypoints.push(Waypoint::Customer {
                name: customer.name().to_string(),
                coordinate: customer.coordinate(),
                service_hours: service_time,
            });
        }
        state.service_time += service_time;
        state.total_time += service_time;
        state.time_since_rest += service_time;
        state.time_since_overnight += service_time;
        state.distance += distance;
        state.revenue += customer.revenue();
        state.position = customer.coordinate();
        state.visited += 1;
        true
    }

    /// Replays `order` from `state` until it ends or a customer does not fit.
    pub fn resume<I>(&self, state: &mut SimulationState, order: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for id in order {
            if !self.step(state, id, None) {
                break;
            }
        }
    }

    /// Unrounded total cost of a state: stop costs plus distance cost.
    fn raw_cost(&self, state: &SimulationState) -> f64 {
        state.stop_cost + self.config.distance_cost(state.distance)
    }

    /// Total cost of a state, rounded to two decimals.
    pub fn cost(&self, state: &SimulationState) -> f64 {
        round2(self.raw_cost(state))
    }

    /// Total cost of visiting `order`, rounded to two decimals.
    ///
    /// Equal to `simulate(order, starting_capacity).metrics().total_cost`
    /// without building waypoints.
    pub fn cost_of(&self, order: &[usize], starting_capacity: u32) -> f64 {
        let mut state = self.start(starting_capacity);
        self.resume(&mut state, order.iter().copied());
        self.cost(&state)
    }

    /// States before each position of `order`: entry `k` is the state after
    /// serving the first `k` customers, so the result has `order.len() + 1`
    /// entries.
    pub fn prefix_states(&self, order: &[usize], starting_capacity: u32) -> Vec<SimulationState> {
        let mut state = self.start(starting_capacity);
        let mut states = Vec::with_capacity(order.len() + 1);
        states.push(state);
        for &id in order {
            self.step(&mut state, id, None);
            states.push(state);
        }
        states
    }

    /// Replays `order` from the depot and returns the full route.
    ///
    /// If a customer's demand exceeds the remaining capacity the route ends
    /// there; later customers are not visited.
    pub fn simulate(&self, order: &[usize], starting_capacity: u32) -> Route {
        let mut state = self.start(starting_capacity);
        let mut waypoints = vec![Waypoint::DepotStart {
            name: self.depot.name().to_string(),
            coordinate: self.depot.coordinate(),
        }];
        for &id in order {
            if !self.step(&mut state, id, Some(&mut waypoints)) {
                break;
            }
        }
        self.finish(&state, waypoints)
    }

    /// Turns a final state into a route with rounded metrics.
    pub fn finish(&self, state: &SimulationState, waypoints: Vec<Waypoint>) -> Route {
        let cost = self.raw_cost(state);
        let metrics = RouteMetrics {
            total_distance: round2(state.distance),
            total_revenue: round2(state.revenue),
            total_cost: round2(cost),
            profit: round2(state.revenue - cost),
            service_time: round2(state.service_time),
            rest_time: round2(state.rest_time),
            overnight_time: round2(state.overnight_time),
            total_time: round2(state.total_time),
            travel_time: round2(state.travel_time),
            work_time: round2(state.travel_time + state.service_time),
            overnight_stays: state.overnight_stays,
        };
        Route::new(
            self.vehicle_id,
            Some(self.depot.name().to_string()),
            waypoints,
            metrics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Facility, Located};

    fn problem_with(customers: Vec<Customer>) -> Problem {
        customers.into_iter().fold(
            Problem::new(1).with_depot(Depot::new("D", Coordinate::new(0.0, 0.0), 72)),
            Problem::with_customer,
        )
    }

    fn line_problem() -> Problem {
        problem_with(vec![
            Customer::new("A", Coordinate::new(0.0, 0.1), 10, 100.0),
            Customer::new("B", Coordinate::new(0.0, 0.2), 20, 50.0),
            Customer::new("C", Coordinate::new(0.0, 0.3), 50, 30.0),
        ])
    }

    /// A at ~4.5 h from the depot, B a further ~1 h.
    fn rest_problem() -> Problem {
        problem_with(vec![
            Customer::new("A", Coordinate::new(0.0, 1.62), 1, 10.0),
            Customer::new("B", Coordinate::new(0.0, 1.98), 1, 10.0),
        ])
    }

    #[test]
    fn test_simulate_empty() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[], 72);
        assert!(route.is_empty());
        assert_eq!(route.waypoints().len(), 1);
        assert_eq!(route.waypoints()[0].activity(), "Depot");
        assert_eq!(route.metrics(), &RouteMetrics::default());
    }

    #[test]
    fn test_simulate_single_customer() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[0], 72);
        let m = route.metrics();

        let d = haversine(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 0.1));
        assert_eq!(m.total_distance, round2(d));
        assert_eq!(m.travel_time, round2(d / 40.0));
        assert_eq!(m.service_time, round2(10.0 / 30.0));
        assert_eq!(m.total_revenue, 1000.0);
        assert_eq!(m.total_cost, round2(d / 13.0 * 10_000.0 + d * 769.0));
        assert_eq!(m.profit, round2(1000.0 - (d / 13.0 * 10_000.0 + d * 769.0)));
        assert_eq!(m.total_time, m.service_time);
        assert_eq!(m.rest_time, 0.0);
        assert_eq!(m.overnight_stays, 0);
    }

    #[test]
    fn test_simulate_truncates_on_capacity() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        // A and B leave 42, C needs 50
        let route = sim.simulate(&[0, 1, 2], 72);
        assert_eq!(route.customer_names(), vec!["A", "B"]);
        // C leaves 10, B needs 20; A would still fit but is never reached
        let route = sim.simulate(&[2, 1, 0], 60);
        assert_eq!(route.customer_names(), vec!["C"]);
    }

    #[test]
    fn test_halted_state_ignores_later_customers() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let mut state = sim.start(15);
        assert!(!sim.step(&mut state, 1, None));
        assert!(state.is_halted());
        // A would fit, but the replay has stopped
        assert!(!sim.step(&mut state, 0, None));
        assert_eq!(state.visited(), 0);
        assert_eq!(state.remaining_capacity(), 15);
    }

    #[test]
    fn test_rest_inserted_once_at_threshold() {
        let problem = rest_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);

        let mut state = sim.start(72);
        let mut waypoints = Vec::new();
        assert!(sim.step(&mut state, 0, Some(&mut waypoints)));
        assert!(state.time_since_rest() < 5.0);
        assert_eq!(waypoints.len(), 1);

        assert!(sim.step(&mut state, 1, Some(&mut waypoints)));
        // Rest clock restarted before B, so only B's service time is on it
        assert!((state.time_since_rest() - 1.0 / 30.0).abs() < 1e-12);
        assert!(state.time_since_overnight() > 5.0);

        let route = sim.simulate(&[0, 1], 72);
        let kinds: Vec<_> = route.waypoints().iter().map(Waypoint::activity).collect();
        assert_eq!(kinds, vec!["Depot", "Customer", "Rest", "Customer"]);
        assert_eq!(route.rest_stops(), 1);
        assert_eq!(route.metrics().rest_time, 0.5);
        assert_eq!(route.metrics().total_time, round2(0.5 + 2.0 / 30.0));
        assert_eq!(route.metrics().overnight_stays, 0);
    }

    #[test]
    fn test_rest_cost_added() {
        let problem = rest_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let mut state = sim.start(72);
        sim.resume(&mut state, [0, 1]);
        let expected = 10_000.0 + config.distance_cost(state.distance());
        assert_eq!(sim.cost(&state), round2(expected));
    }

    #[test]
    fn test_rest_and_overnight_on_same_leg() {
        // ~9 h drive to A
        let problem = problem_with(vec![Customer::new(
            "A",
            Coordinate::new(0.0, 3.24),
            2,
            10.0,
        )]);
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[0], 72);
        let kinds: Vec<_> = route.waypoints().iter().map(Waypoint::activity).collect();
        assert_eq!(kinds, vec!["Depot", "Rest", "Overnight", "Customer"]);

        let m = route.metrics();
        assert_eq!(m.overnight_stays, 1);
        assert_eq!(m.overnight_time, 8.0);
        assert_eq!(m.rest_time, 0.5);
        assert_eq!(m.total_time, round2(0.5 + 2.0 / 30.0));
        let expected = 10_000.0 + 100_000.0 + config.distance_cost(haversine(
            &Coordinate::new(0.0, 0.0),
            &Coordinate::new(0.0, 3.24),
        ));
        assert_eq!(m.total_cost, round2(expected));
        assert!(m.work_time > 9.0);
    }

    /// Config whose speed makes the depot-to-A leg take exactly `hours`.
    fn timed_leg(problem: &Problem, hours: f64) -> PlannerConfig {
        let km = haversine(&problem.depots()[0], &problem.customers()[0]);
        PlannerConfig::default().with_speed_kmh(km / hours)
    }

    #[test]
    fn test_rest_fires_at_exact_limit() {
        let problem = problem_with(vec![Customer::new("A", Coordinate::new(0.0, 1.0), 0, 0.0)]);
        let config = timed_leg(&problem, 4.0).with_work_limits(4.0, 100.0);
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[0], 72);
        assert_eq!(route.rest_stops(), 1);
    }

    #[test]
    fn test_overnight_needs_more_than_daily_limit() {
        let problem = problem_with(vec![Customer::new("A", Coordinate::new(0.0, 1.0), 0, 0.0)]);

        let config = timed_leg(&problem, 8.0).with_work_limits(100.0, 8.0);
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let mut state = sim.start(72);
        sim.step(&mut state, 0, None);
        assert_eq!(state.time_since_overnight(), 8.0);
        assert_eq!(sim.simulate(&[0], 72).metrics().overnight_stays, 0);

        let config = timed_leg(&problem, 16.0).with_work_limits(100.0, 8.0);
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        assert_eq!(sim.simulate(&[0], 72).metrics().overnight_stays, 1);
    }

    #[test]
    fn test_real_rest_area_used_when_near() {
        let problem = rest_problem()
            .with_rest_facility(Facility::new("Rest KM 200", Coordinate::new(0.0, 1.65)));
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[0, 1], 72);
        // The break is taken near A, where the second leg starts
        assert_eq!(
            route.waypoints()[2],
            Waypoint::RestStop {
                facility: Some("Rest KM 200".to_string()),
                coordinate: Coordinate::new(0.0, 1.65),
            }
        );
    }

    #[test]
    fn test_virtual_stops_are_distinct() {
        // ~4.5 h, then two ~5.5 h legs: a rest on each of the last two
        let problem = problem_with(vec![
            Customer::new("A", Coordinate::new(0.0, 1.62), 1, 1.0),
            Customer::new("B", Coordinate::new(0.0, 3.6), 1, 1.0),
            Customer::new("C", Coordinate::new(0.0, 5.58), 1, 1.0),
        ]);
        let config = PlannerConfig::default().with_work_limits(5.0, 1000.0);
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[0, 1, 2], 72);
        let rests: Vec<_> = route
            .waypoints()
            .iter()
            .filter(|w| matches!(w, Waypoint::RestStop { .. }))
            .collect();
        assert_eq!(rests.len(), 2);
        assert!(rests.iter().all(|w| w.is_virtual()));
        assert_ne!(rests[0], rests[1]);
        // Second stop on the route is offset by one step from B
        let second = rests[1].coordinate();
        assert!((second.lat() - 0.01).abs() < 1e-12);
        assert!((second.lon() - 3.61).abs() < 1e-12);
    }

    #[test]
    fn test_first_virtual_stop_at_leg_start() {
        let problem = rest_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let route = sim.simulate(&[0, 1], 72);
        assert_eq!(
            route.waypoints()[2],
            Waypoint::RestStop {
                facility: None,
                coordinate: Coordinate::new(0.0, 1.62),
            }
        );
    }

    #[test]
    fn test_simulate_idempotent() {
        let problem = rest_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        assert_eq!(sim.simulate(&[1, 0], 72), sim.simulate(&[1, 0], 72));
    }

    #[test]
    fn test_cost_of_matches_simulate() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        for order in [vec![0, 1], vec![1, 0], vec![2, 0, 1], vec![]] {
            assert_eq!(
                sim.cost_of(&order, 72),
                sim.simulate(&order, 72).metrics().total_cost
            );
        }
    }

    #[test]
    fn test_prefix_states_resume() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config);
        let order = [1, 0, 2];
        let prefixes = sim.prefix_states(&order, 100);
        assert_eq!(prefixes.len(), 4);
        assert_eq!(prefixes[0], sim.start(100));

        // Resume after the first customer with the tail swapped
        let mut state = prefixes[1];
        sim.resume(&mut state, [2, 0]);
        assert_eq!(sim.cost(&state), sim.cost_of(&[1, 2, 0], 100));
    }

    #[test]
    fn test_vehicle_id_tag() {
        let problem = line_problem();
        let config = PlannerConfig::default();
        let sim = RouteSimulator::new(&problem, &problem.depots()[0], &config).for_vehicle(3);
        let route = sim.simulate(&[0], 72);
        assert_eq!(route.vehicle_id(), 3);
        assert_eq!(route.depot(), Some("D"));
    }
}
