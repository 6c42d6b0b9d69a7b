//! Tabu search over per-vehicle visit orders.
//!
//! - [`TabuSearch`]: Best-improvement swap search with a FIFO tabu list
//! - [`TabuList`]: Bounded memory of recent [`SwapMove`]s

mod search;
mod tabu_list;

pub use search::{TabuOutcome, TabuSearch};
pub use tabu_list::{SwapMove, TabuList};
