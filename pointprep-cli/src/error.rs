//! Error types emitted by the pointprep CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pointprep_core::PipelineError;
use thiserror::Error;

/// Exit status for usage errors.
pub const EXIT_USAGE: u8 = 2;
/// Exit status for IO failures and empty results.
pub const EXIT_FAILURE: u8 = 1;

/// Errors emitted by the pointprep CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation, or help was requested.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required path is missing after configuration merging.
    #[error("missing <{field}> (pass it as an argument or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The input file could not be opened.
    #[error("failed to open input {path:?}: {source}")]
    OpenInput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the input failed part-way through.
    #[error("failed to read input {path:?}: {source}")]
    ReadInput {
        path: Utf8PathBuf,
        #[source]
        source: PipelineError,
    },
    /// Nothing survived parsing and filtering.
    #[error("{path:?}: {source}")]
    NoUsableRows {
        path: Utf8PathBuf,
        #[source]
        source: PipelineError,
    },
    /// The output file could not be created.
    #[error("failed to open output {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the cleaned CSV failed.
    #[error("failed to write output {path:?}: {source}")]
    WriteOutput {
        path: Utf8PathBuf,
        #[source]
        source: PipelineError,
    },
}

impl CliError {
    /// Whether the error stems from how the command was invoked.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        match self {
            Self::ArgumentParsing(err) => err.use_stderr(),
            Self::Configuration(_) | Self::MissingArgument { .. } => true,
            _ => false,
        }
    }

    /// Process exit status for this error.
    ///
    /// Help and version requests surface as [`CliError::ArgumentParsing`]
    /// and map to `0`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ArgumentParsing(err) => u8::try_from(err.exit_code()).unwrap_or(EXIT_USAGE),
            Self::Configuration(_) | Self::MissingArgument { .. } => EXIT_USAGE,
            Self::OpenInput { .. }
            | Self::ReadInput { .. }
            | Self::NoUsableRows { .. }
            | Self::CreateOutput { .. }
            | Self::WriteOutput { .. } => EXIT_FAILURE,
        }
    }
}
