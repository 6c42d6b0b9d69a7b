//! Location records and their validation into a [`Problem`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PlannerConfig;
use crate::error::{Result, RoutingError};
use crate::models::{Coordinate, Customer, Depot, Facility, FacilityKind, Problem};

/// One stored location, tagged by `type`.
///
/// Fields that do not belong to a record's type are ignored, so documents
/// where every record carries `demand`/`fee`/`supply` (possibly `null`) are
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationRecord {
    /// A depot. Missing `supply` defaults to the vehicle capacity.
    Depot {
        /// Unique depot name.
        name: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
        /// Supply held at the depot.
        #[serde(default)]
        supply: Option<u32>,
    },
    /// A customer.
    Customer {
        /// Unique customer name.
        name: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
        /// Units of capacity consumed.
        demand: u32,
        /// Fee per unit of demand.
        fee: f64,
    },
    /// A rest area.
    RestArea {
        /// Facility name.
        name: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// An overnight lodging location. Also accepts the `menginap` tag.
    #[serde(alias = "menginap")]
    Overnight {
        /// Facility name.
        name: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
}

impl LocationRecord {
    /// Record name.
    pub fn name(&self) -> &str {
        match self {
            LocationRecord::Depot { name, .. }
            | LocationRecord::Customer { name, .. }
            | LocationRecord::RestArea { name, .. }
            | LocationRecord::Overnight { name, .. } => name,
        }
    }

    /// Record kind as written in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            LocationRecord::Depot { .. } => "depot",
            LocationRecord::Customer { .. } => "customer",
            LocationRecord::RestArea { .. } => "rest_area",
            LocationRecord::Overnight { .. } => "overnight",
        }
    }

    /// Record location.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            LocationRecord::Depot { lat, lon, .. }
            | LocationRecord::Customer { lat, lon, .. }
            | LocationRecord::RestArea { lat, lon, .. }
            | LocationRecord::Overnight { lat, lon, .. } => Coordinate::new(*lat, *lon),
        }
    }
}

impl Problem {
    /// Builds a validated problem from location records.
    ///
    /// Record order is kept, so it decides allocator tie-breaks and the
    /// default depot.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInput`] for an empty name, an invalid
    /// coordinate, zero customer demand, or a negative or non-finite fee;
    /// [`RoutingError::DuplicateName`] when a name repeats within a kind.
    pub fn from_records<'r, I>(records: I, vehicle_count: usize, config: &PlannerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = &'r LocationRecord>,
    {
        let mut problem = Problem::new(vehicle_count);
        let mut seen: HashSet<(&'static str, String)> = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            let label = if record.name().is_empty() {
                format!("#{index}")
            } else {
                record.name().to_string()
            };
            if record.name().is_empty() {
                return Err(RoutingError::invalid(label, "name is empty"));
            }
            let coordinate = record.coordinate();
            if !coordinate.is_valid() {
                return Err(RoutingError::invalid(
                    label,
                    format!(
                        "coordinate ({}, {}) is not a valid latitude/longitude",
                        coordinate.lat(),
                        coordinate.lon()
                    ),
                ));
            }
            if !seen.insert((record.kind(), record.name().to_string())) {
                return Err(RoutingError::DuplicateName {
                    kind: record.kind(),
                    name: label,
                });
            }

            match record {
                LocationRecord::Depot { name, supply, .. } => problem.push_depot(Depot::new(
                    name.as_str(),
                    coordinate,
                    supply.unwrap_or(config.vehicle_capacity),
                )),
                LocationRecord::Customer {
                    name, demand, fee, ..
                } => {
                    if *demand == 0 {
                        return Err(RoutingError::invalid(label, "demand must be positive"));
                    }
                    if !fee.is_finite() || *fee < 0.0 {
                        return Err(RoutingError::invalid(
                            label,
                            format!("fee {fee} must be a non-negative number"),
                        ));
                    }
                    problem.push_customer(Customer::new(name.as_str(), coordinate, *demand, *fee));
                }
                LocationRecord::RestArea { name, .. } => {
                    problem.push_facility(FacilityKind::Rest, Facility::new(name.as_str(), coordinate))
                }
                LocationRecord::Overnight { name, .. } => problem
                    .push_facility(FacilityKind::Overnight, Facility::new(name.as_str(), coordinate)),
            }
        }

        Ok(problem)
    }

    /// Parses a JSON array of location records and builds a validated
    /// problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleet_routing::config::PlannerConfig;
    /// use fleet_routing::models::{FacilityKind, Problem};
    ///
    /// let json = r#"[
    ///     {"type": "depot", "name": "Gudang", "lat": -6.2, "lon": 106.8},
    ///     {"type": "customer", "name": "Toko A", "lat": -6.3, "lon": 106.9, "demand": 10, "fee": 5000},
    ///     {"type": "rest_area", "name": "KM 57", "lat": -6.4, "lon": 107.2}
    /// ]"#;
    /// let config = PlannerConfig::default();
    /// let problem = Problem::from_json(json, 2, &config).unwrap();
    ///
    /// assert_eq!(problem.depots()[0].supply(), 72);
    /// assert_eq!(problem.customers()[0].demand(), 10);
    /// assert_eq!(problem.facilities(FacilityKind::Rest).len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// [`RoutingError::Json`] if the document is not a JSON array;
    /// [`RoutingError::InvalidInput`] naming the first record that is
    /// malformed (missing field, non-numeric coordinate, unknown type) or
    /// fails [`Problem::from_records`] validation.
    pub fn from_json(json: &str, vehicle_count: usize, config: &PlannerConfig) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        let records = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                LocationRecord::deserialize(value).map_err(|e| {
                    let record = value
                        .get("name")
                        .and_then(Value::as_str)
                        .map_or_else(|| format!("#{index}"), str::to_string);
                    RoutingError::invalid(record, e.to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_records(&records, vehicle_count, config)
    }
}
