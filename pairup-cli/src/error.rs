//! Error types emitted by the pairup CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pairup_data::RecordParseError;
use thiserror::Error;

/// Errors emitted by the pairup CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that would also satisfy it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option the path came from.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option the path came from.
        field: &'static str,
        /// The uninspectable path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option the path came from.
        field: &'static str,
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The mentee record document could not be decoded.
    #[error("failed to parse mentee record at {path:?}: {source}")]
    ParseMentee {
        /// Path of the unparseable document.
        path: Utf8PathBuf,
        /// Source error from the record decoder.
        #[source]
        source: RecordParseError,
    },
    /// The mentor record array could not be decoded.
    #[error("failed to parse mentor records at {path:?}: {source}")]
    ParseMentors {
        /// Path of the unparseable document.
        path: Utf8PathBuf,
        /// Source error from the record decoder.
        #[source]
        source: RecordParseError,
    },
    /// Serialising the ranked results failed.
    #[error("failed to serialise ranked results: {0}")]
    SerialiseResults(#[source] serde_json::Error),
    /// Writing the ranked output failed.
    #[error("failed to write ranked output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
