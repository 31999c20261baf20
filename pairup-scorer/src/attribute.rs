//! Exact-match scoring over a selected profile attribute.
//!
//! The attribute sub-scores referenced by the product (industry, mentoring
//! style, seniority) have no settled formulas yet. This module offers the
//! agreed-safe building block: a binary exact-match signal over one chosen
//! attribute, registered explicitly with a caller-chosen weight. It is not
//! part of [`MatchEngine::default`](crate::MatchEngine::default).
#![forbid(unsafe_code)]

use pairup_core::{Profile, SubScorer};

/// Profile attribute an [`AttributeMatchScorer`] compares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchAttribute {
    /// Compare the declared industry labels.
    Industry,
    /// Compare the declared mentoring-style labels.
    MentoringStyle,
    /// Compare the declared seniority labels.
    Seniority,
}

impl MatchAttribute {
    fn select(self, profile: &Profile) -> Option<&str> {
        match self {
            Self::Industry => profile.industry.as_deref(),
            Self::MentoringStyle => profile.mentoring_style.as_deref(),
            Self::Seniority => profile.seniority.as_deref(),
        }
    }

    const fn term_name(self) -> &'static str {
        match self {
            Self::Industry => "industry_match",
            Self::MentoringStyle => "mentoring_style_match",
            Self::Seniority => "seniority_match",
        }
    }
}

/// Binary sub-scorer: `1.0` when both profiles declare the selected
/// attribute and the labels match (case-insensitively, after trimming),
/// `0.0` otherwise.
///
/// A missing attribute on either side degrades the signal to `0.0` rather
/// than failing the scoring call.
///
/// # Examples
/// ```
/// use pairup_core::{Profile, SubScorer};
/// use pairup_scorer::{AttributeMatchScorer, MatchAttribute};
///
/// let scorer = AttributeMatchScorer::new(MatchAttribute::Industry);
/// let mentee = Profile::new("mentee").with_industry("Fintech");
/// let mentor = Profile::new("mentor").with_industry("fintech");
/// assert_eq!(scorer.score(&mentee, &mentor), 1.0);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct AttributeMatchScorer {
    attribute: MatchAttribute,
}

impl AttributeMatchScorer {
    /// Construct a scorer comparing the given attribute.
    #[must_use]
    pub const fn new(attribute: MatchAttribute) -> Self {
        Self { attribute }
    }
}

impl SubScorer for AttributeMatchScorer {
    fn name(&self) -> &'static str {
        self.attribute.term_name()
    }

    fn score(&self, mentee: &Profile, mentor: &Profile) -> f32 {
        let matched = match (
            self.attribute.select(mentee),
            self.attribute.select(mentor),
        ) {
            (Some(need), Some(offer)) => need.trim().eq_ignore_ascii_case(offer.trim()),
            _ => false,
        };
        if matched { 1.0 } else { 0.0 }
    }
}
