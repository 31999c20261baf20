//! Core domain types for the pairup matching engine.
//!
//! The crate defines the read-only inputs to a scoring call ([`Profile`],
//! [`TagSet`]), the audited outputs ([`MatchResult`], [`ScoreBreakdown`]),
//! the [`SubScorer`] seam that concrete scorers implement, and the
//! [`RequestThrottle`] duplicate-request suppressor used by the surrounding
//! application.
//!
//! Scoring is total over well-typed inputs: constructors validate early and
//! return `Result`, while the scoring path itself is infallible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod matching;
pub mod profile;
pub mod scorer;
pub mod tags;
pub mod throttle;

pub use matching::{MatchResult, ScoreBreakdown, SubScoreEntry};
pub use profile::Profile;
pub use scorer::{SubScorer, sanitise};
pub use tags::TagSet;
pub use throttle::{Clock, RequestThrottle, SystemClock, ThrottleError};
