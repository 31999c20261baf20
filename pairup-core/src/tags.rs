//! Deduplicated topic labels.
//!
//! A [`TagSet`] holds the short free-text labels a mentee asks for or a
//! mentor offers, e.g. `"Break Into Industry"`. Labels are trimmed on
//! insertion, empty labels are dropped, and duplicates collapse.

use std::collections::BTreeSet;

/// An unordered, deduplicated set of short string labels.
///
/// Iteration is lexicographic so downstream output stays reproducible.
///
/// # Examples
/// ```
/// use pairup_core::TagSet;
///
/// let tags = TagSet::from_labels(["Leadership", "  Leadership  ", ""]);
/// assert_eq!(tags.len(), 1);
/// assert!(tags.contains("Leadership"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct TagSet {
    labels: BTreeSet<String>,
}

impl TagSet {
    /// Construct an empty set.
    ///
    /// # Examples
    /// ```
    /// use pairup_core::TagSet;
    ///
    /// assert!(TagSet::new().is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            labels: BTreeSet::new(),
        }
    }

    /// Construct a set from an iterator of labels.
    ///
    /// Labels are trimmed; empty labels are dropped and duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use pairup_core::TagSet;
    ///
    /// let tags = TagSet::from_labels(["a", "b", "a"]);
    /// assert_eq!(tags.len(), 2);
    /// ```
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for label in labels {
            set.insert(label.as_ref());
        }
        set
    }

    /// Insert a label, returning whether the set changed.
    ///
    /// The label is trimmed first; inserting an empty or whitespace-only
    /// label is a no-op.
    pub fn insert(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.labels.insert(trimmed.to_owned())
    }

    /// Report whether the trimmed form of `label` is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label.trim())
    }

    /// Return the number of unique labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Report whether the set holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over the labels in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Count the labels present in both sets.
    ///
    /// # Examples
    /// ```
    /// use pairup_core::TagSet;
    ///
    /// let a = TagSet::from_labels(["x", "y"]);
    /// let b = TagSet::from_labels(["y", "z"]);
    /// assert_eq!(a.intersection_count(&b), 1);
    /// ```
    #[must_use]
    pub fn intersection_count(&self, other: &Self) -> usize {
        self.labels.intersection(&other.labels).count()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.labels.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}
