//! Rank command implementation for the pairup CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pairup_core::{MatchResult, Profile};
use pairup_data::{profile_from_record, profiles_from_records, record_from_reader, records_from_reader};
use pairup_scorer::MatchEngine;
use serde::{Deserialize, Serialize};

use crate::{ARG_RANK_MENTEE, ARG_RANK_MENTORS, ARG_RANK_TOP, CliError, ENV_RANK_MENTEE, ENV_RANK_MENTORS};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank mentor candidates for a mentee. The mentee is a \
                 JSON record object and the mentors are a JSON array of \
                 records. Paths can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank mentor candidates for one mentee"
)]
#[ortho_config(prefix = "PAIRUP")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the mentee record.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) mentee_path: Option<Utf8PathBuf>,
    /// Path to a JSON file containing the mentor record array.
    #[arg(long = ARG_RANK_MENTORS, value_name = "path")]
    #[serde(default)]
    pub(crate) mentors: Option<Utf8PathBuf>,
    /// Keep only the best `n` results.
    #[arg(long = ARG_RANK_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the mentee record document.
    pub(crate) mentee_path: Utf8PathBuf,
    /// Path to the mentor record array document.
    pub(crate) mentors: Utf8PathBuf,
    /// Optional truncation of the ranked output.
    pub(crate) top: Option<usize>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.mentee_path, ARG_RANK_MENTEE)?;
        Self::require_existing(&self.mentors, ARG_RANK_MENTORS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match path_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let mentee_path = args.mentee_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_MENTEE,
            env: ENV_RANK_MENTEE,
        })?;
        let mentors = args.mentors.ok_or(CliError::MissingArgument {
            field: ARG_RANK_MENTORS,
            env: ENV_RANK_MENTORS,
        })?;
        Ok(Self {
            mentee_path,
            mentors,
            top: args.top,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let results = execute_rank(args)?;
    write_results(writer, &results)
}

fn execute_rank(args: RankArgs) -> Result<Vec<MatchResult>, CliError> {
    let config = resolve_rank_config(args)?;
    let mentee = load_mentee(&config.mentee_path)?;
    let mentors = load_mentors(&config.mentors)?;
    let engine = MatchEngine::default();
    let mut results = engine.rank(&mentee, &mentors);
    if let Some(top) = config.top {
        results.truncate(top);
    }
    Ok(results)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads and normalises the mentee record from disk.
fn load_mentee(path: &Utf8Path) -> Result<Profile, CliError> {
    let file = open_input(path, ARG_RANK_MENTEE)?;
    let reader = BufReader::new(file);
    let record = record_from_reader(reader).map_err(|source| CliError::ParseMentee {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(profile_from_record(&record))
}

/// Loads and normalises the mentor record array from disk.
fn load_mentors(path: &Utf8Path) -> Result<Vec<Profile>, CliError> {
    let file = open_input(path, ARG_RANK_MENTORS)?;
    let reader = BufReader::new(file);
    let records = records_from_reader(reader).map_err(|source| CliError::ParseMentors {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(profiles_from_records(&records))
}

fn write_results(writer: &mut dyn Write, results: &[MatchResult]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(results).map_err(CliError::SerialiseResults)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn open_input(path: &Utf8Path, field: &'static str) -> Result<fs_utf8::File, CliError> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Return whether a path exists and is a regular file using capability-based IO.
fn path_is_file(path: &Utf8Path) -> std::io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("target should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
