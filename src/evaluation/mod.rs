//! Route simulation and cost evaluation.

mod simulator;

pub use simulator::{RouteSimulator, SimulationState};

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(-2.5), -2.5);
        assert_eq!(round2(0.0), 0.0);
    }
}
