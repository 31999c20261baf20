//! Unit coverage for record normalisation.
#![forbid(unsafe_code)]

use rstest::rstest;
use serde_json::json;

use crate::{
    FIELD_INDUSTRY, FIELD_MENTORING_STYLE, FIELD_SENIORITY, FIELD_TOPICS, FIELD_YEARS_EXPERIENCE,
    Record, profile_from_record, profiles_from_records, records_from_reader,
};

fn record_with(fields: serde_json::Value) -> Record {
    let document = json!({ "id": "rec1", "fields": fields });
    serde_json::from_value(document).expect("valid record document")
}

#[rstest]
fn full_record_produces_typed_profile() {
    let record = record_with(json!({
        (FIELD_TOPICS): ["Break Into Industry", "Explore and Clarify"],
        (FIELD_INDUSTRY): "Fintech",
        (FIELD_YEARS_EXPERIENCE): 8,
        (FIELD_MENTORING_STYLE): "Directive",
        (FIELD_SENIORITY): "Senior",
    }));

    let profile = profile_from_record(&record);

    assert_eq!(profile.id, "rec1");
    assert_eq!(profile.tags.len(), 2);
    assert!(profile.tags.contains("Break Into Industry"));
    assert_eq!(profile.industry.as_deref(), Some("Fintech"));
    assert_eq!(profile.years_experience, Some(8));
    assert_eq!(profile.mentoring_style.as_deref(), Some("Directive"));
    assert_eq!(profile.seniority.as_deref(), Some("Senior"));
}

#[rstest]
fn missing_fields_fail_closed() {
    let record = record_with(json!({}));
    let profile = profile_from_record(&record);
    assert!(profile.tags.is_empty());
    assert!(profile.industry.is_none());
    assert!(profile.years_experience.is_none());
    assert!(profile.mentoring_style.is_none());
    assert!(profile.seniority.is_none());
}

#[rstest]
fn record_without_fields_key_is_accepted() {
    let record: Record = serde_json::from_value(json!({ "id": "rec9" })).expect("valid record");
    let profile = profile_from_record(&record);
    assert_eq!(profile.id, "rec9");
    assert!(profile.tags.is_empty());
}

#[rstest]
#[case(json!(["a", "b", "a"]), 2)]
// Non-string entries are skipped, not fatal.
#[case(json!(["a", 7, null, "b"]), 2)]
#[case(json!("a, b; c"), 3)]
#[case(json!("  a  "), 1)]
#[case(json!(null), 0)]
#[case(json!(42), 0)]
#[case(json!({"nested": true}), 0)]
fn topics_coercion_scenarios(#[case] topics: serde_json::Value, #[case] expected_len: usize) {
    let record = record_with(json!({ (FIELD_TOPICS): topics }));
    let profile = profile_from_record(&record);
    assert_eq!(profile.tags.len(), expected_len);
}

#[rstest]
#[case(json!(8), Some(8))]
#[case(json!("17"), Some(17))]
#[case(json!(" 3 "), Some(3))]
#[case(json!(0), Some(0))]
#[case(json!(-2), None)]
#[case(json!(2.5), None)]
#[case(json!("eight"), None)]
#[case(json!(""), None)]
#[case(json!(null), None)]
#[case(json!([8]), None)]
fn years_coercion_scenarios(#[case] years: serde_json::Value, #[case] expected: Option<u32>) {
    let record = record_with(json!({ (FIELD_YEARS_EXPERIENCE): years }));
    let profile = profile_from_record(&record);
    assert_eq!(profile.years_experience, expected);
}

#[rstest]
#[case(json!("Fintech"), Some("Fintech"))]
#[case(json!("  Fintech  "), Some("Fintech"))]
#[case(json!(""), None)]
#[case(json!("   "), None)]
#[case(json!(null), None)]
#[case(json!(42), None)]
fn label_coercion_scenarios(#[case] industry: serde_json::Value, #[case] expected: Option<&str>) {
    let record = record_with(json!({ (FIELD_INDUSTRY): industry }));
    let profile = profile_from_record(&record);
    assert_eq!(profile.industry.as_deref(), expected);
}

#[rstest]
#[expect(clippy::indexing_slicing, reason = "test asserts known fixed indices")]
fn reader_decodes_record_arrays() {
    let payload = r#"[
        { "id": "rec1", "fields": { "Topics": ["a"] } },
        { "id": "rec2" }
    ]"#;

    let records = records_from_reader(payload.as_bytes()).expect("valid document");
    let profiles = profiles_from_records(&records);

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].id, "rec1");
    assert!(profiles[1].tags.is_empty());
}

#[rstest]
#[case("not json at all")]
#[case(r#"{ "id": "rec1" }"#)]
#[case(r#"[{ "fields": {} }]"#)]
fn reader_rejects_undecodable_documents(#[case] payload: &str) {
    assert!(records_from_reader(payload.as_bytes()).is_err());
}
