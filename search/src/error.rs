//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures only. A search that finds no path
//! (invalid instance or exhausted open list) is an outcome, not an error; see
//! [`crate::engine::SearchOutcome`].

use thiserror::Error;

/// Failure while validating or loading a [`crate::policy::SearchPolicy`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The dominance tolerance must be finite and non-negative.
    #[error("invalid epsilon {value}: must be finite and >= 0")]
    InvalidEpsilon { value: f64 },
    /// A policy document could not be interpreted.
    #[error("invalid search policy document: {detail}")]
    InvalidPolicyDocument { detail: String },
}
