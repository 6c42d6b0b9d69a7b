//! Depot and facility types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, Located};

/// A depot where vehicles start their routes.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot};
///
/// let d = Depot::new("Gudang", Coordinate::new(0.0, 0.0), 72);
/// assert_eq!(d.name(), "Gudang");
/// assert_eq!(d.supply(), 72);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    name: String,
    coordinate: Coordinate,
    supply: u32,
}

impl Depot {
    /// Creates a new depot.
    pub fn new(name: impl Into<String>, coordinate: Coordinate, supply: u32) -> Self {
        Self {
            name: name.into(),
            coordinate,
            supply,
        }
    }

    /// Unique depot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depot location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Supply capacity held at this depot.
    pub fn supply(&self) -> u32 {
        self.supply
    }
}

impl Located for Depot {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// The two kinds of stop a driver can be forced to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    /// Short break after the continuous-work limit.
    Rest,
    /// Overnight stay after the daily-hours limit.
    Overnight,
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::Rest => f.write_str("rest"),
            FacilityKind::Overnight => f.write_str("overnight"),
        }
    }
}

/// A real rest area or overnight lodging location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    name: String,
    coordinate: Coordinate,
}

impl Facility {
    /// Creates a new facility.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    /// Facility name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Facility location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl Located for Facility {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
