//! Constructive heuristics for assigning customers to vehicles.
//!
//! - [`allocate`]: Per-vehicle nearest-neighbor fill with nearest-depot
//!   seeding, O(V·n²)

mod allocation;

pub use allocation::{allocate, unassigned_customers};
