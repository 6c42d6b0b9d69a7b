//! Error types raised at the input boundary.
//!
//! The planning algorithms themselves never fail: infeasible inputs degrade
//! to truncated or empty routes. Only turning raw location records into a
//! [`Problem`](crate::models::Problem) can be rejected.

use thiserror::Error;

/// Errors raised while building a planning problem from location records.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A location record failed validation.
    #[error("invalid location record {record}: {reason}")]
    InvalidInput {
        /// Name of the offending record, or `#<index>` if it has none.
        record: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Two records of the same kind share a name.
    #[error("duplicate {kind} name {name:?}")]
    DuplicateName {
        /// Record kind (`depot`, `customer`, `rest_area`, `overnight`).
        kind: &'static str,
        /// The repeated name.
        name: String,
    },
    /// The document is not a JSON array of records.
    #[error("failed to parse location records")]
    Json(#[from] serde_json::Error),
}

impl RoutingError {
    pub(crate) fn invalid(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible boundary operations.
pub type Result<T> = std::result::Result<T, RoutingError>;
