//! Rest and overnight facility resolution.

mod resolver;

pub use resolver::{FacilityResolver, ResolvedFacility};
