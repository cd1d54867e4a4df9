//! Error types for core data operations.

use thiserror::Error;

/// Errors that can occur when building or mutating core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypesError {
    /// A sample was recorded with a timestamp older than the newest one.
    #[error("non-monotonic time: {t} recorded after {newest}")]
    NonMonotonicTime {
        /// The offending timestamp.
        t: f64,
        /// The newest timestamp already in the history.
        newest: f64,
    },

    /// A unit string is not one this simulator knows how to normalize.
    #[error("unknown unit '{unit}' (expected one of: -, 1, m, cm, mm, s, ms, rad, deg, rad/s, deg/s, m/s)")]
    UnknownUnit {
        /// The unrecognized unit string.
        unit: String,
    },
}

impl TypesError {
    /// Create an unknown-unit error.
    #[must_use]
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }
}
