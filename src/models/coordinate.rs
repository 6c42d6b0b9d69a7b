//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
///
/// let c = Coordinate::new(-6.2, 106.8);
/// assert_eq!(c.lat(), -6.2);
/// assert_eq!(c.lon(), 106.8);
/// assert!(c.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both components are finite and within
    /// `[-90, 90]` / `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Returns this coordinate shifted by `degrees` on both axes.
    pub fn offset(&self, degrees: f64) -> Self {
        Self::new(self.lat + degrees, self.lon + degrees)
    }
}

/// Anything with a position that distances can be measured from.
///
/// Lets [`haversine`](crate::distance::haversine) accept depots, customers,
/// facilities, and route waypoints directly.
pub trait Located {
    /// The position of this item.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_coordinate_offset() {
        let c = Coordinate::new(1.0, 2.0).offset(0.5);
        assert_eq!(c, Coordinate::new(1.5, 2.5));
    }

    #[test]
    fn test_located_reference() {
        let c = Coordinate::new(3.0, 4.0);
        let r = &c;
        assert_eq!(r.coordinate(), c);
    }
}
