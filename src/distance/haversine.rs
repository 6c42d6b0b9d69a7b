//! Great-circle distance.
//!
//! # Algorithm
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! d = 2R · atan2(√a, √(1−a))
//! ```
//!
//! with φ latitude, λ longitude (radians) and R = 6371 km.

use crate::models::Located;

/// Mean Earth radius used for all distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two located items.
///
/// Accepts anything implementing [`Located`]: bare coordinates, depots,
/// customers, facilities, or route waypoints.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::distance::haversine;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// // One degree of longitude on the equator
/// assert!((haversine(&a, &b) - 111.19).abs() < 0.01);
/// assert_eq!(haversine(&a, &a), 0.0);
/// ```
pub fn haversine<A: Located + ?Sized, B: Located + ?Sized>(a: &A, b: &B) -> f64 {
    let a = a.coordinate();
    let b = b.coordinate();
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
