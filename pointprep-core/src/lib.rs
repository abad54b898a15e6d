//! Core cleaning pipeline for Overpass CSV point exports.
//!
//! Responsibilities:
//! - Tokenize CSV lines and map flexible column layouts onto records.
//! - Filter and deduplicate records.
//! - Project positions to local meters around their centroid.
//! - Serialize the cleaned CSV.
//!
//! Boundaries:
//! - No filesystem access; callers hand in readers and writers.
//! - No process concerns (argument parsing, exit codes, logger setup).
//!
//! Invariants:
//! - Every record kept after filtering has finite coordinates.
//! - No global mutable state.

mod columns;
mod dedupe;
mod error;
mod filter;
mod output;
mod pipeline;
mod projection;
mod record;
mod tokenizer;

pub use columns::{ColumnLayout, HeaderIndex, POSITIONAL_WIDTH, RawFields, looks_like_header};
pub use dedupe::SeenKeys;
pub use error::PipelineError;
pub use filter::{CleanOptions, TypeFilter};
pub use output::{OUTPUT_HEADER, WriteSummary, write_points};
pub use pipeline::{PreparedPoints, ReadOutcome, ReadStats, SEPARATOR, read_points};
pub use projection::{EARTH_RADIUS_M, LocalProjection, centroid};
pub use record::PointRecord;
pub use tokenizer::{quote_field, split_line};
