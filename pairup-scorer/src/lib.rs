//! Scoring implementations for the pairup matching engine.
//!
//! The crate provides two complementary capabilities:
//! - **Concrete sub-scorers**: [`TagOverlapScorer`] reproduces the observed
//!   production signal (fraction of the mentee's desired topics the mentor
//!   covers); [`AttributeMatchScorer`] is an exact-match building block over
//!   a selected profile attribute for terms whose product formulas are not
//!   yet settled.
//! - **Weighted combination**: [`MatchEngine`] registers sub-scorers with
//!   percentage-point weights, validates the weight budget, and produces
//!   audited [`MatchResult`](pairup_core::MatchResult)s, individually via
//!   [`MatchEngine::score`] or ranked via [`MatchEngine::rank`].
//!
//! # Examples
//!
//! ```
//! use pairup_core::{Profile, TagSet};
//! use pairup_scorer::MatchEngine;
//!
//! let engine = MatchEngine::default();
//! let mentee = Profile::new("mentee")
//!     .with_tags(TagSet::from_labels(["Break Into Industry", "Explore and Clarify"]));
//! let mentors = vec![
//!     Profile::new("rec1").with_tags(TagSet::from_labels(["Break Into Industry"])),
//!     Profile::new("rec2"),
//! ];
//!
//! let ranked = engine.rank(&mentee, &mentors);
//! assert_eq!(ranked[0].mentor_id, "rec1");
//! assert_eq!(ranked[0].total, 15.0);
//! ```

#![forbid(unsafe_code)]

mod attribute;
mod engine;
mod error;
mod tag_overlap;

pub use attribute::{AttributeMatchScorer, MatchAttribute};
pub use engine::MatchEngine;
pub use error::EngineError;
pub use tag_overlap::{TAG_OVERLAP_WEIGHT, TagOverlapScorer};
