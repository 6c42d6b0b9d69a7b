//! Distance computation on the Earth's surface.
//!
//! Provides the haversine great-circle distance used by every other part of
//! the planner.

mod haversine;

pub use haversine::{haversine, EARTH_RADIUS_KM};
