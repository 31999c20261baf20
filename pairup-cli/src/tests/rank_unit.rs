//! Focused unit tests covering rank CLI configuration and execution.

use super::*;
use crate::rank::{RankArgs, RankConfig, run_rank_with};
use camino::Utf8PathBuf;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn utf8_path(tmp: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().join(name)).expect("utf8 path")
}

fn write_fixture(tmp: &TempDir, name: &str, payload: &str) -> Utf8PathBuf {
    let path = utf8_path(tmp, name);
    fs::write(path.as_std_path(), payload).expect("write fixture");
    path
}

const MENTEE_DOC: &str = r#"{
    "id": "mentee",
    "fields": { "Topics": ["Break Into Industry", "Explore and Clarify"] }
}"#;

const MENTORS_DOC: &str = r#"[
    { "id": "none", "fields": { "Topics": ["Something Else"] } },
    { "id": "full", "fields": { "Topics": ["Break Into Industry", "Explore and Clarify"] } },
    { "id": "half", "fields": { "Topics": ["Break Into Industry"] } }
]"#;

#[rstest]
#[case(None, Some(Utf8PathBuf::from("mentors.json")), ARG_RANK_MENTEE, ENV_RANK_MENTEE)]
#[case(
    Some(Utf8PathBuf::from("mentee.json")),
    None,
    ARG_RANK_MENTORS,
    ENV_RANK_MENTORS
)]
fn converting_without_required_fields_errors(
    #[case] mentee: Option<Utf8PathBuf>,
    #[case] mentors: Option<Utf8PathBuf>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RankArgs {
        mentee_path: mentee,
        mentors,
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let tmp = TempDir::new().expect("tempdir");
    let config = RankConfig {
        mentee_path: utf8_path(&tmp, "missing-mentee.json"),
        mentors: utf8_path(&tmp, "missing-mentors.json"),
        top: None,
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RANK_MENTEE),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let tmp = TempDir::new().expect("tempdir");
    let mentors = write_fixture(&tmp, "mentors.json", MENTORS_DOC);
    let config = RankConfig {
        mentee_path: Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path"),
        mentors,
        top: None,
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_RANK_MENTEE),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[expect(clippy::indexing_slicing, reason = "test asserts known fixed indices")]
fn rank_outputs_descending_results() {
    let tmp = TempDir::new().expect("tempdir");
    let args = RankArgs {
        mentee_path: Some(write_fixture(&tmp, "mentee.json", MENTEE_DOC)),
        mentors: Some(write_fixture(&tmp, "mentors.json", MENTORS_DOC)),
        ..RankArgs::default()
    };

    let mut output = Vec::new();
    run_rank_with(args, &mut output).expect("rank should succeed");

    let results: serde_json::Value =
        serde_json::from_slice(&output).expect("output should be JSON");
    let rows = results.as_array().expect("output should be an array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["mentor_id"], "full");
    assert_eq!(rows[0]["total"], 30.0);
    assert_eq!(rows[1]["mentor_id"], "half");
    assert_eq!(rows[1]["total"], 15.0);
    assert_eq!(rows[2]["mentor_id"], "none");
    assert_eq!(rows[2]["total"], 0.0);
}

#[rstest]
#[expect(clippy::indexing_slicing, reason = "test asserts known fixed indices")]
fn rank_truncates_to_top() {
    let tmp = TempDir::new().expect("tempdir");
    let args = RankArgs {
        mentee_path: Some(write_fixture(&tmp, "mentee.json", MENTEE_DOC)),
        mentors: Some(write_fixture(&tmp, "mentors.json", MENTORS_DOC)),
        top: Some(1),
    };

    let mut output = Vec::new();
    run_rank_with(args, &mut output).expect("rank should succeed");

    let results: serde_json::Value =
        serde_json::from_slice(&output).expect("output should be JSON");
    let rows = results.as_array().expect("output should be an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["mentor_id"], "full");
}

#[rstest]
fn rank_surfaces_parse_failures() {
    let tmp = TempDir::new().expect("tempdir");
    let args = RankArgs {
        mentee_path: Some(write_fixture(&tmp, "mentee.json", "not json")),
        mentors: Some(write_fixture(&tmp, "mentors.json", MENTORS_DOC)),
        ..RankArgs::default()
    };

    let mut output = Vec::new();
    let err = run_rank_with(args, &mut output).expect_err("parse should fail");
    assert!(matches!(err, CliError::ParseMentee { .. }));
}
