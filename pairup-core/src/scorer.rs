//! Score a candidate mentor against a mentee profile.
//!
//! The [`SubScorer`] trait assigns one normalised compatibility signal to a
//! (mentee, mentor) pair. The weighted engine combines several sub-scorers
//! into a single 100-point total.

use crate::Profile;

/// Calculate one normalised compatibility signal for a mentor candidate.
///
/// Higher values indicate a better match for that signal. Implementations
/// must be thread-safe (`Send` + `Sync`) so ranking can fan out across
/// threads. The method is infallible; implementers must return `0.0` when no
/// information is available.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
/// - Be deterministic and free of side effects.
///
/// Use [`sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use pairup_core::{Profile, SubScorer};
///
/// struct UnitScorer;
///
/// impl SubScorer for UnitScorer {
///     fn name(&self) -> &'static str {
///         "unit"
///     }
///
///     fn score(&self, _mentee: &Profile, _mentor: &Profile) -> f32 {
///         1.0
///     }
/// }
///
/// let mentee = Profile::new("mentee");
/// let mentor = Profile::new("mentor");
/// assert_eq!(UnitScorer.score(&mentee, &mentor), 1.0);
/// ```
pub trait SubScorer: Send + Sync {
    /// Stable identifier for this signal, used as the breakdown key.
    fn name(&self) -> &'static str;

    /// Return a score for `mentor` according to `mentee`'s declared needs.
    fn score(&self, mentee: &Profile, mentor: &Profile) -> f32;
}

/// Clamp and validate a raw sub-score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
///
/// # Examples
/// ```
/// use pairup_core::sanitise;
///
/// assert_eq!(sanitise(f32::NAN), 0.0);
/// assert_eq!(sanitise(1.4), 1.0);
/// assert_eq!(sanitise(0.4), 0.4);
/// ```
#[must_use]
pub fn sanitise(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
