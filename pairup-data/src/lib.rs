//! Validation boundary between the external record store and the engine.
//!
//! The external store hands back loosely-typed field maps: any field may be
//! absent, null, or a different type than expected. This crate converts
//! those maps into typed [`Profile`] values before they reach the scorer,
//! failing closed: missing or malformed fields become empty tags or absent
//! attributes, never a crash. Discarded data is reported through
//! [`log::warn!`].
//!
//! Only an undecodable document is an error; individual field shapes are
//! not.
//!
//! # Examples
//!
//! ```
//! use pairup_data::{Record, profile_from_record};
//!
//! let payload = r#"{
//!     "id": "rec0Mentor1",
//!     "fields": {
//!         "Topics": ["Leadership", "Networking"],
//!         "Years of Experience": "8",
//!         "Industry": 42
//!     }
//! }"#;
//! let record: Record = serde_json::from_str(payload).expect("valid record document");
//! let profile = profile_from_record(&record);
//!
//! assert_eq!(profile.tags.len(), 2);
//! assert_eq!(profile.years_experience, Some(8));
//! // A mistyped field is dropped, not fatal.
//! assert!(profile.industry.is_none());
//! ```

#![forbid(unsafe_code)]

use std::io::Read;

use pairup_core::Profile;
use serde::Deserialize;
use thiserror::Error;

mod coerce;

/// Field holding the mentee's desired or the mentor's offered topics.
pub const FIELD_TOPICS: &str = "Topics";
/// Field holding the industry label.
pub const FIELD_INDUSTRY: &str = "Industry";
/// Field holding the years-of-experience figure.
pub const FIELD_YEARS_EXPERIENCE: &str = "Years of Experience";
/// Field holding the mentoring-style label.
pub const FIELD_MENTORING_STYLE: &str = "Mentoring Style";
/// Field holding the seniority label.
pub const FIELD_SENIORITY: &str = "Seniority";

/// One row from the external store: an identifier plus a loose field map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Opaque record identifier.
    pub id: String,
    /// Untrusted field map; values may have any shape.
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Errors returned when decoding a record document.
#[derive(Debug, Error)]
pub enum RecordParseError {
    /// The document was unreadable or not valid record JSON.
    #[error("failed to decode record document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convert one loose record into a typed [`Profile`], failing closed.
///
/// Missing or malformed fields degrade to an empty tag set or an absent
/// attribute; the discarded data is logged and the conversion always
/// succeeds.
#[must_use]
pub fn profile_from_record(record: &Record) -> Profile {
    let mut profile = Profile::new(record.id.clone());
    if let Some(value) = record.fields.get(FIELD_TOPICS) {
        profile.tags = coerce::tags(value, &record.id);
    }
    profile.industry = record
        .fields
        .get(FIELD_INDUSTRY)
        .and_then(|value| coerce::label(value, &record.id, FIELD_INDUSTRY));
    profile.years_experience = record
        .fields
        .get(FIELD_YEARS_EXPERIENCE)
        .and_then(|value| coerce::years(value, &record.id));
    profile.mentoring_style = record
        .fields
        .get(FIELD_MENTORING_STYLE)
        .and_then(|value| coerce::label(value, &record.id, FIELD_MENTORING_STYLE));
    profile.seniority = record
        .fields
        .get(FIELD_SENIORITY)
        .and_then(|value| coerce::label(value, &record.id, FIELD_SENIORITY));
    profile
}

/// Convert a slice of loose records into typed profiles.
#[must_use]
pub fn profiles_from_records(records: &[Record]) -> Vec<Profile> {
    records.iter().map(profile_from_record).collect()
}

/// Decode a JSON array of records from a reader.
///
/// # Errors
/// Returns [`RecordParseError`] when the document cannot be read or is not
/// a JSON array of `{id, fields}` objects. Field shapes inside a record are
/// never an error.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<Record>, RecordParseError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decode a single record object from a reader.
///
/// # Errors
/// Returns [`RecordParseError`] when the document cannot be read or is not
/// an `{id, fields}` object.
pub fn record_from_reader<R: Read>(reader: R) -> Result<Record, RecordParseError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests;
