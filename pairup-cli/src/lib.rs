//! Command-line interface for offline mentor ranking.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;
use rank::RankArgs;

pub(crate) const ARG_RANK_MENTEE: &str = "mentee";
pub(crate) const ARG_RANK_MENTORS: &str = "mentors";
pub(crate) const ARG_RANK_TOP: &str = "top";
pub(crate) const ENV_RANK_MENTEE: &str = "PAIRUP_CMDS_RANK_MENTEE_PATH";
pub(crate) const ENV_RANK_MENTORS: &str = "PAIRUP_CMDS_RANK_MENTORS";

/// Run the pairup CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, or
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pairup",
    about = "Offline mentor ranking utilities for the pairup engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank mentor candidates for one mentee.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
