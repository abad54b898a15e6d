//! Errors raised by the cleaning pipeline.

use thiserror::Error;

/// Errors returned while reading, preparing or writing points.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input stream could not be read.
    #[error("failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
    /// The output stream could not be written.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
    /// No record survived parsing and filtering.
    #[error("no usable rows found; check that the export includes lat/lon (use 'out center')")]
    NoUsableRows,
}
