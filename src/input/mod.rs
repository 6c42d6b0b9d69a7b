//! Boundary input: location records as stored by the location catalog.
//!
//! Records are validated here, once, so the planning algorithms can assume
//! well-formed coordinates and demands.

mod records;

pub use records::LocationRecord;
