//! Topic overlap between a mentee's asks and a mentor's offers.
#![forbid(unsafe_code)]

use pairup_core::{Profile, SubScorer, sanitise};

/// Weight in percentage points carried by the tag-overlap term in the
/// default engine.
pub const TAG_OVERLAP_WEIGHT: f32 = 30.0;

/// Fraction of the mentee's desired topics the mentor covers.
///
/// The ratio is `|shared topics| / |mentee topics|`, computed on
/// deduplicated sets and clamped to `1.0`. Normalisation is by the mentee's
/// set size, not the mentor's: a mentor covering every requested topic
/// scores `1.0` no matter how much else they offer. Either side empty
/// scores `0.0`.
///
/// # Examples
/// ```
/// use pairup_core::{Profile, SubScorer, TagSet};
/// use pairup_scorer::TagOverlapScorer;
///
/// let mentee = Profile::new("mentee")
///     .with_tags(TagSet::from_labels(["Break Into Industry", "Explore and Clarify"]));
/// let mentor = Profile::new("mentor")
///     .with_tags(TagSet::from_labels(["Break Into Industry"]));
///
/// assert_eq!(TagOverlapScorer.score(&mentee, &mentor), 0.5);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct TagOverlapScorer;

impl SubScorer for TagOverlapScorer {
    fn name(&self) -> &'static str {
        "tag_overlap"
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "the overlap ratio divides small set cardinalities"
    )]
    fn score(&self, mentee: &Profile, mentor: &Profile) -> f32 {
        if mentee.tags.is_empty() || mentor.tags.is_empty() {
            return 0.0;
        }
        let shared = mentee.tags.intersection_count(&mentor.tags);
        let ratio = shared as f32 / mentee.tags.len() as f32;
        sanitise(ratio)
    }
}
