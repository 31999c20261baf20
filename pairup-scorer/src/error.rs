//! Error types raised while assembling a match engine.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by [`MatchEngine::with_term`](crate::MatchEngine::with_term).
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A term weight was non-finite or negative.
    #[error("weight {weight} for term `{name}` must be finite and non-negative")]
    InvalidWeight {
        /// Name of the rejected term.
        name: &'static str,
        /// The offending weight.
        weight: f32,
    },
    /// A term with the same name is already registered.
    #[error("term `{name}` is already registered")]
    DuplicateTerm {
        /// Name of the duplicated term.
        name: &'static str,
    },
    /// Registering the term would push the cumulative weight past 100.
    #[error("cumulative weight {total} exceeds the 100-point budget")]
    WeightBudgetExceeded {
        /// Cumulative weight the registration would have produced.
        total: f32,
    },
}
