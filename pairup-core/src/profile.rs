//! Mentee and mentor profiles.
//!
//! A [`Profile`] is a read-only scoring input: an opaque identifier, the
//! declared topic tags, and the optional typed attributes some sub-scorers
//! consult. A missing attribute is `None`, never an error; sub-scorers
//! degrade to `0.0` instead of failing the whole call.

use crate::TagSet;

/// Declared attributes for one participant, mentee or mentor.
///
/// # Examples
/// ```
/// use pairup_core::{Profile, TagSet};
///
/// let profile = Profile::new("rec0Mentor1")
///     .with_tags(TagSet::from_labels(["Leadership"]))
///     .with_industry("Fintech")
///     .with_years_experience(8);
/// assert_eq!(profile.id, "rec0Mentor1");
/// assert_eq!(profile.years_experience, Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Opaque record identifier from the external store.
    pub id: String,
    /// Desired topics (mentee) or offered topics (mentor).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: TagSet,
    /// Industry label, if declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub industry: Option<String>,
    /// Years of professional experience, if declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub years_experience: Option<u32>,
    /// Preferred mentoring style, if declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mentoring_style: Option<String>,
    /// Seniority label, if declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seniority: Option<String>,
}

impl Profile {
    /// Construct a profile with the given identifier and no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Replace the topic tags while returning `self` for chaining.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Set the industry label while returning `self` for chaining.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the years of experience while returning `self` for chaining.
    #[must_use]
    pub fn with_years_experience(mut self, years: u32) -> Self {
        self.years_experience = Some(years);
        self
    }

    /// Set the mentoring style while returning `self` for chaining.
    #[must_use]
    pub fn with_mentoring_style(mut self, style: impl Into<String>) -> Self {
        self.mentoring_style = Some(style.into());
        self
    }

    /// Set the seniority label while returning `self` for chaining.
    #[must_use]
    pub fn with_seniority(mut self, seniority: impl Into<String>) -> Self {
        self.seniority = Some(seniority.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains_attributes() {
        let profile = Profile::new("rec1")
            .with_industry("Healthcare")
            .with_mentoring_style("Directive")
            .with_seniority("Senior");
        assert_eq!(profile.industry.as_deref(), Some("Healthcare"));
        assert_eq!(profile.mentoring_style.as_deref(), Some("Directive"));
        assert_eq!(profile.seniority.as_deref(), Some("Senior"));
        assert!(profile.years_experience.is_none());
    }

    #[test]
    fn new_profile_has_no_tags() {
        let profile = Profile::new("rec2");
        assert!(profile.tags.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_deserialise_as_absent() {
        let profile: Profile = serde_json::from_str(r#"{"id":"rec3"}"#).expect("valid JSON");
        assert_eq!(profile.id, "rec3");
        assert!(profile.tags.is_empty());
        assert!(profile.industry.is_none());
    }
}
