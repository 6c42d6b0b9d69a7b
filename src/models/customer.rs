//! Customer type.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Located};

/// A customer to be served by the fleet.
///
/// Each customer has a unique name, a location, a demand in vehicle capacity
/// units, and a fee charged per unit of demand delivered.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Customer};
///
/// let c = Customer::new("Toko A", Coordinate::new(0.0, 0.1), 10, 100.0);
/// assert_eq!(c.name(), "Toko A");
/// assert_eq!(c.demand(), 10);
/// assert_eq!(c.revenue(), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    coordinate: Coordinate,
    demand: u32,
    fee: f64,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(name: impl Into<String>, coordinate: Coordinate, demand: u32, fee: f64) -> Self {
        Self {
            name: name.into(),
            coordinate,
            demand,
            fee,
        }
    }

    /// Unique customer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Units of vehicle capacity this customer consumes.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Fee charged per unit of demand.
    pub fn fee(&self) -> f64 {
        self.fee
    }

    /// Revenue earned by serving this customer (`fee × demand`).
    pub fn revenue(&self) -> f64 {
        self.fee * f64::from(self.demand)
    }
}

impl Located for Customer {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let c = Customer::new("A", Coordinate::new(1.0, 2.0), 5, 30.0);
        assert_eq!(c.name(), "A");
        assert_eq!(c.coordinate(), Coordinate::new(1.0, 2.0));
        assert_eq!(c.demand(), 5);
        assert_eq!(c.fee(), 30.0);
    }

    #[test]
    fn test_customer_revenue() {
        let c = Customer::new("B", Coordinate::new(0.0, 0.0), 20, 50.0);
        assert!((c.revenue() - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_customer_zero_fee() {
        let c = Customer::new("C", Coordinate::new(0.0, 0.0), 7, 0.0);
        assert_eq!(c.revenue(), 0.0);
    }
}
