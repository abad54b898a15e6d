//! Facade crate for the pointprep export cleaner.
//!
//! This crate re-exports the core pipeline so library users can clean
//! Overpass CSV exports without depending on the CLI.

#![forbid(unsafe_code)]

pub use pointprep_core::{
    CleanOptions, LocalProjection, PipelineError, PointRecord, PreparedPoints, ReadOutcome,
    ReadStats, TypeFilter, WriteSummary, centroid, quote_field, read_points, split_line,
    write_points,
};
