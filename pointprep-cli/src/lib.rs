//! Command-line interface for cleaning Overpass CSV point exports.
#![forbid(unsafe_code)]

use clap::{CommandFactory, Parser};

mod clean;
mod error;

pub use clean::CleanReport;
pub use error::{CliError, EXIT_FAILURE, EXIT_USAGE};

use clean::{CleanArgs, run_clean};

const ARG_INPUT: &str = "input.csv";
const ARG_OUTPUT: &str = "output.csv";
const ENV_INPUT: &str = "POINTPREP_CMDS_POINTPREP_INPUT";
const ENV_OUTPUT: &str = "POINTPREP_CMDS_POINTPREP_OUTPUT";

/// Run the pointprep CLI with the current process arguments and environment.
pub fn run() -> Result<CleanReport, CliError> {
    let args = CleanArgs::try_parse().map_err(CliError::ArgumentParsing)?;
    run_clean(args)
}

/// One-line usage text for reporting usage errors.
#[must_use]
pub fn usage() -> String {
    CleanArgs::command().render_usage().to_string()
}

#[cfg(test)]
mod tests;
