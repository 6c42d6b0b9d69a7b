//! Nearest-facility lookup with virtual fallback.
//!
//! A real facility is used only if it lies within the configured search
//! radius of the vehicle. Otherwise a virtual facility is synthesized next to
//! the vehicle, offset diagonally by `step × counter` degrees, where the
//! counter is the number of stops of that kind already taken on the route.

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::distance::haversine;
use crate::models::{Coordinate, Facility, FacilityKind, Located};

/// Where a rest or overnight stop ends up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFacility {
    /// Name of the real facility, `None` if synthesized.
    pub name: Option<String>,
    /// Stop location.
    pub coordinate: Coordinate,
}

impl ResolvedFacility {
    /// Returns `true` if no real facility was close enough.
    pub fn is_virtual(&self) -> bool {
        self.name.is_none()
    }
}

/// Resolves rest or overnight stops against one facility catalog.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::PlannerConfig;
/// use fleet_routing::facility::FacilityResolver;
/// use fleet_routing::models::{Coordinate, Facility, FacilityKind};
///
/// let config = PlannerConfig::default();
/// let catalog = vec![Facility::new("KM 19", Coordinate::new(0.0, 0.05))];
/// let resolver = FacilityResolver::new(FacilityKind::Rest, &catalog, &config);
///
/// // 5.6 km away: the real rest area is used
/// let near = resolver.resolve(&Coordinate::new(0.0, 0.0), 1);
/// assert_eq!(near.name.as_deref(), Some("KM 19"));
///
/// // Far from every rest area: a virtual one is synthesized
/// let far = resolver.resolve(&Coordinate::new(1.0, 1.0), 2);
/// assert!(far.is_virtual());
/// assert!((far.coordinate.lat() - 1.02).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FacilityResolver<'a> {
    kind: FacilityKind,
    catalog: &'a [Facility],
    radius_km: f64,
    offset_degrees: f64,
}

impl<'a> FacilityResolver<'a> {
    /// Creates a resolver for the given kind and catalog.
    pub fn new(kind: FacilityKind, catalog: &'a [Facility], config: &PlannerConfig) -> Self {
        let offset_degrees = match kind {
            FacilityKind::Rest => config.rest_offset_degrees,
            FacilityKind::Overnight => config.overnight_offset_degrees,
        };
        Self {
            kind,
            catalog,
            radius_km: config.facility_search_radius_km,
            offset_degrees,
        }
    }

    /// The kind of stop this resolver places.
    pub fn kind(&self) -> FacilityKind {
        self.kind
    }

    /// Returns the nearest real facility within the search radius of
    /// `current`, or a virtual one offset by `synth_counter` steps.
    ///
    /// Ties go to the facility listed first.
    pub fn resolve<L: Located + ?Sized>(&self, current: &L, synth_counter: u32) -> ResolvedFacility {
        match self.nearest(current) {
            Some(facility) => ResolvedFacility {
                name: Some(facility.name().to_string()),
                coordinate: facility.coordinate(),
            },
            None => ResolvedFacility {
                name: None,
                coordinate: current
                    .coordinate()
                    .offset(self.offset_degrees * f64::from(synth_counter)),
            },
        }
    }

    /// Nearest real facility within the search radius, if any.
    pub fn nearest<L: Located + ?Sized>(&self, current: &L) -> Option<&'a Facility> {
        let mut best: Option<(&'a Facility, f64)> = None;
        for facility in self.catalog {
            let d = haversine(current, facility);
            if d > self.radius_km {
                continue;
            }
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((facility, d));
            }
        }
        best.map(|(facility, _)| facility)
    }
}
