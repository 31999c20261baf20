//! Lenient field coercions for loose record values.
//!
//! Each coercion is total: a value of the wrong shape yields the empty or
//! absent form after a warning, never an error.
#![forbid(unsafe_code)]

use log::warn;
use pairup_core::TagSet;
use serde_json::Value;

/// Delimiters accepted when topics arrive as one packed string.
const LABEL_DELIMITERS: [char; 2] = [',', ';'];

/// Coerce a topics field into a [`TagSet`].
///
/// Accepts a JSON array of strings (non-string entries are skipped) or a
/// single delimiter-separated string. Anything else yields an empty set.
pub(crate) fn tags(value: &Value, record_id: &str) -> TagSet {
    match value {
        Value::Array(entries) => {
            let mut set = TagSet::new();
            for entry in entries {
                match entry.as_str() {
                    Some(label) => {
                        set.insert(label);
                    }
                    None => {
                        warn!("record {record_id}: skipping non-string topic entry {entry}");
                    }
                }
            }
            set
        }
        Value::String(packed) => TagSet::from_labels(packed.split(LABEL_DELIMITERS)),
        Value::Null => TagSet::new(),
        other => {
            warn!("record {record_id}: topics field has unusable shape {other}");
            TagSet::new()
        }
    }
}

/// Coerce a years-of-experience field into a non-negative integer.
///
/// Accepts a non-negative JSON integer or a numeric string; negative and
/// fractional values are discarded.
pub(crate) fn years(value: &Value, record_id: &str) -> Option<u32> {
    match value {
        Value::Number(_) => match value.as_u64().and_then(|raw| u32::try_from(raw).ok()) {
            Some(parsed) => Some(parsed),
            None => {
                warn!("record {record_id}: years value {value} is not a non-negative integer");
                None
            }
        },
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<u32>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    warn!("record {record_id}: years value {trimmed:?} is not parseable");
                    None
                }
            }
        }
        Value::Null => None,
        other => {
            warn!("record {record_id}: years field has unusable shape {other}");
            None
        }
    }
}

/// Coerce a label field (industry, style, seniority) into a trimmed string.
pub(crate) fn label(value: &Value, record_id: &str, field: &str) -> Option<String> {
    match value {
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Value::Null => None,
        other => {
            warn!("record {record_id}: {field} field has unusable shape {other}");
            None
        }
    }
}
