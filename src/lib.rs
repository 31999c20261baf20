//! Facade crate for the pairup matching engine.
//!
//! This crate re-exports the core domain types, the concrete sub-scorers,
//! and the weighted match engine so downstream applications depend on a
//! single crate.

#![forbid(unsafe_code)]

pub use pairup_core::{
    Clock, MatchResult, Profile, RequestThrottle, ScoreBreakdown, SubScoreEntry, SubScorer,
    SystemClock, TagSet, ThrottleError, sanitise,
};

pub use pairup_scorer::{
    AttributeMatchScorer, EngineError, MatchAttribute, MatchEngine, TAG_OVERLAP_WEIGHT,
    TagOverlapScorer,
};
