//! Weighted combination of sub-scorers and mentor ranking.
#![forbid(unsafe_code)]

use std::fmt;

use pairup_core::{MatchResult, Profile, ScoreBreakdown, SubScoreEntry, SubScorer, sanitise};

use crate::{EngineError, TAG_OVERLAP_WEIGHT, TagOverlapScorer};

/// Upper bound for a combined total.
const MAX_TOTAL: f32 = 100.0;

struct WeightedTerm {
    scorer: Box<dyn SubScorer>,
    weight: f32,
}

/// Combines weighted sub-scores into a 100-point compatibility total.
///
/// Terms are registered with [`with_term`](Self::with_term); weights are
/// percentage points and their sum may not exceed 100. Scoring is pure and
/// per-mentor independent, so ranking many candidates needs no coordination
/// beyond the final sort.
///
/// [`MatchEngine::default`] carries the one fully-specified production term:
/// topic overlap at weight 30. Further terms are registered explicitly by
/// the caller.
///
/// # Examples
/// ```
/// use pairup_core::{Profile, TagSet};
/// use pairup_scorer::{AttributeMatchScorer, MatchAttribute, MatchEngine};
///
/// # fn main() -> Result<(), pairup_scorer::EngineError> {
/// let engine = MatchEngine::default()
///     .with_term(AttributeMatchScorer::new(MatchAttribute::Industry), 20.0)?;
///
/// let mentee = Profile::new("mentee")
///     .with_tags(TagSet::from_labels(["Leadership"]))
///     .with_industry("Fintech");
/// let mentor = Profile::new("mentor")
///     .with_tags(TagSet::from_labels(["Leadership"]))
///     .with_industry("Fintech");
///
/// let result = engine.score(&mentee, &mentor);
/// assert_eq!(result.total, 50.0);
/// # Ok(())
/// # }
/// ```
pub struct MatchEngine {
    terms: Vec<WeightedTerm>,
}

impl MatchEngine {
    /// Construct an engine with no registered terms.
    ///
    /// An empty engine scores every mentor `0.0`; callers normally start
    /// from [`MatchEngine::default`].
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Register a sub-scorer with its weight, consuming `self` for chaining.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidWeight`] when `weight` is non-finite or
    /// negative, [`EngineError::DuplicateTerm`] when a term with the same
    /// name is already registered, and [`EngineError::WeightBudgetExceeded`]
    /// when the cumulative weight would pass 100.
    #[expect(
        clippy::float_arithmetic,
        reason = "budget validation sums percentage-point weights"
    )]
    pub fn with_term<S>(mut self, scorer: S, weight: f32) -> Result<Self, EngineError>
    where
        S: SubScorer + 'static,
    {
        let name = scorer.name();
        if !weight.is_finite() || weight < 0.0 {
            return Err(EngineError::InvalidWeight { name, weight });
        }
        if self.terms.iter().any(|term| term.scorer.name() == name) {
            return Err(EngineError::DuplicateTerm { name });
        }
        let total = self.weight_budget() + weight;
        if total > MAX_TOTAL {
            return Err(EngineError::WeightBudgetExceeded { total });
        }
        self.terms.push(WeightedTerm {
            scorer: Box::new(scorer),
            weight,
        });
        Ok(self)
    }

    /// Return the cumulative weight of the registered terms.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the budget is the sum of percentage-point weights"
    )]
    pub fn weight_budget(&self) -> f32 {
        self.terms.iter().map(|term| term.weight).sum()
    }

    /// Return the number of registered terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Score one mentor against the mentee.
    ///
    /// Each raw sub-score is sanitised into `0.0..=1.0` before weighting;
    /// the total is the sum of contributions, capped at 100. The returned
    /// breakdown records every term so callers can audit the combination.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weighting multiplies and sums sanitised sub-scores"
    )]
    pub fn score(&self, mentee: &Profile, mentor: &Profile) -> MatchResult {
        let mut breakdown = ScoreBreakdown::new();
        let mut total = 0.0_f32;
        for term in &self.terms {
            let value = sanitise(term.scorer.score(mentee, mentor));
            let contribution = value * term.weight;
            total += contribution;
            breakdown.insert(
                term.scorer.name(),
                SubScoreEntry {
                    value,
                    weight: term.weight,
                    contribution,
                },
            );
        }
        MatchResult {
            mentor_id: mentor.id.clone(),
            total: total.min(MAX_TOTAL),
            breakdown,
        }
    }

    /// Score every mentor and return the results sorted by descending total.
    ///
    /// Ties keep first-seen input order, so repeated calls with identical
    /// inputs yield identical sequences. An empty candidate slice yields an
    /// empty vector.
    #[must_use]
    pub fn rank(&self, mentee: &Profile, mentors: &[Profile]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = mentors
            .iter()
            .map(|mentor| self.score(mentee, mentor))
            .collect();
        // Totals are finite by construction, so total_cmp is a plain
        // descending order; stable sort preserves tie order.
        results.sort_by(|a, b| b.total.total_cmp(&a.total));
        results
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            terms: vec![WeightedTerm {
                scorer: Box::new(TagOverlapScorer),
                weight: TAG_OVERLAP_WEIGHT,
            }],
        }
    }
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for term in &self.terms {
            map.entry(&term.scorer.name(), &term.weight);
        }
        map.finish()
    }
}
