//! Swap-neighborhood tabu search over one vehicle's visit order.
//!
//! # Algorithm
//!
//! Each iteration evaluates every position swap (i, j), i < j, of the
//! current order that is not tabu, and moves to the cheapest one even if it
//! is worse than the current order. The applied swap becomes tabu for
//! `tenure` iterations. The cheapest order ever visited is kept as the
//! result. The search stops after the iteration budget or when every swap
//! is tabu.
//!
//! Costs are rounded to two decimals before comparison; among equal costs
//! the first swap in (i, j) scan order wins.
//!
//! # Complexity
//!
//! O(n²) candidates per iteration. Each candidate resumes the simulation
//! from the cached state before position i instead of replaying the whole
//! route, so a candidate costs O(n − i).

use tracing::{debug, instrument};

use super::{SwapMove, TabuList};
use crate::config::TabuConfig;
use crate::evaluation::RouteSimulator;
use crate::models::Route;

/// Result of a tabu search run.
#[derive(Debug, Clone, PartialEq)]
pub struct TabuOutcome {
    /// Cheapest order found.
    pub best_order: Vec<usize>,
    /// Cost of `best_order`, rounded to two decimals.
    pub best_cost: f64,
    /// Cost of the starting order, rounded to two decimals.
    pub initial_cost: f64,
    /// Iterations actually performed.
    pub iterations: usize,
}

impl TabuOutcome {
    /// Returns `true` if the search found a cheaper order than it started with.
    pub fn improved(&self) -> bool {
        self.best_cost < self.initial_cost
    }
}

/// Tabu search driven by a [`RouteSimulator`] as its cost oracle.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::{PlannerConfig, TabuConfig};
/// use fleet_routing::evaluation::RouteSimulator;
/// use fleet_routing::models::{Coordinate, Customer, Depot, Problem};
/// use fleet_routing::tabu::TabuSearch;
///
/// let problem = Problem::new(1)
///     .with_depot(Depot::new("D", Coordinate::new(0.0, 0.0), 72))
///     .with_customer(Customer::new("A", Coordinate::new(0.0, 0.1), 1, 1.0))
///     .with_customer(Customer::new("B", Coordinate::new(0.0, 0.2), 1, 1.0))
///     .with_customer(Customer::new("C", Coordinate::new(0.0, 0.3), 1, 1.0));
/// let config = PlannerConfig::default();
/// let simulator = RouteSimulator::new(&problem, &problem.depots()[0], &config);
///
/// let search = TabuSearch::new(simulator, &config.tabu, config.vehicle_capacity);
/// let outcome = search.optimize(&[2, 0, 1]);
///
/// assert_eq!(outcome.best_order, vec![0, 1, 2]);
/// assert!(outcome.best_cost < outcome.initial_cost);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TabuSearch<'a> {
    simulator: RouteSimulator<'a>,
    config: &'a TabuConfig,
    capacity: u32,
}

impl<'a> TabuSearch<'a> {
    /// Creates a search over routes simulated with `simulator`, each starting
    /// with `capacity` units.
    pub fn new(simulator: RouteSimulator<'a>, config: &'a TabuConfig, capacity: u32) -> Self {
        Self {
            simulator,
            config,
            capacity,
        }
    }

    /// Searches visit orders starting from `initial`.
    #[instrument(level = "debug", skip_all, fields(customers = initial.len()))]
    pub fn optimize(&self, initial: &[usize]) -> TabuOutcome {
        let initial_cost = self.simulator.cost_of(initial, self.capacity);
        let mut current = initial.to_vec();
        let mut best_order = current.clone();
        let mut best_cost = initial_cost;
        let mut tabu = TabuList::new(self.config.tenure);
        let mut iterations = 0;

        while iterations < self.config.iterations {
            let Some((mv, cost)) = self.best_neighbor(&current, &tabu) else {
                debug!(iterations, "neighborhood exhausted");
                break;
            };
            mv.apply(&mut current);
            tabu.push(mv);
            iterations += 1;

            if cost < best_cost {
                debug!(iterations, cost, previous = best_cost, "new best order");
                best_order.clone_from(&current);
                best_cost = cost;
            }
        }

        TabuOutcome {
            best_order,
            best_cost,
            initial_cost,
            iterations,
        }
    }

    /// Searches from `initial` and simulates the best order found.
    pub fn optimize_route(&self, initial: &[usize]) -> Route {
        let outcome = self.optimize(initial);
        self.simulator.simulate(&outcome.best_order, self.capacity)
    }

    /// Cheapest non-tabu swap of `current` and the cost it leads to.
    fn best_neighbor(&self, current: &[usize], tabu: &TabuList) -> Option<(SwapMove, f64)> {
        let n = current.len();
        let prefixes = self.simulator.prefix_states(current, self.capacity);
        let mut best: Option<(SwapMove, f64)> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                let mv = SwapMove::new(i, j);
                if tabu.contains(mv) {
                    continue;
                }
                let mut state = prefixes[i];
                let tail = (i..n).map(|k| {
                    if k == i {
                        current[j]
                    } else if k == j {
                        current[i]
                    } else {
                        current[k]
                    }
                });
                self.simulator.resume(&mut state, tail);
                let cost = self.simulator.cost(&state);
                if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                    best = Some((mv, cost));
                }
            }
        }

        best
    }
}
