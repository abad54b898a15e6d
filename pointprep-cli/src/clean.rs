//! Cleaning command: argument layering, validation and the run itself.

use std::io::{BufReader, BufWriter, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pointprep_core::{
    CleanOptions, PipelineError, PreparedPoints, ReadStats, TypeFilter, WriteSummary, read_points,
};
use pointprep_fs::{create_utf8_file, open_utf8_file};
use serde::{Deserialize, Serialize};

use crate::{ARG_INPUT, ARG_OUTPUT, CliError, ENV_INPUT, ENV_OUTPUT};

/// Arguments for a cleaning run.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "pointprep",
    version,
    about = "Clean an Overpass CSV export into id,name,lat,lon,x_m,y_m rows",
    long_about = "Reads a CSV exported from overpass-turbo.eu (out:csv ... \
                 out center) and writes a cleaned CSV with deduplicated rows \
                 and local planar coordinates in meters around the centroid. \
                 Paths and options can also come from configuration files \
                 or POINTPREP-prefixed environment variables."
)]
#[ortho_config(prefix = "POINTPREP")]
pub(crate) struct CleanArgs {
    /// CSV export to read.
    #[arg(value_name = "input.csv")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Destination for the cleaned CSV.
    #[arg(value_name = "output.csv")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Drop rows without a name.
    #[arg(long)]
    #[serde(default)]
    pub(crate) require_name: bool,
    /// Drop rows whose name is shorter than N characters (negative counts as 0).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) min_name_len: Option<i64>,
    /// Dedupe by (type,id); always on.
    #[arg(long)]
    #[serde(default)]
    pub(crate) dedupe: bool,
    /// Keep only ways (drop relations).
    #[arg(long, overrides_with = "keep_relations_only")]
    #[serde(default)]
    pub(crate) keep_ways_only: bool,
    /// Keep only relations (drop ways).
    #[arg(long, overrides_with = "keep_ways_only")]
    #[serde(default)]
    pub(crate) keep_relations_only: bool,
}

impl CleanArgs {
    /// Type restriction requested by these arguments alone.
    ///
    /// Clap already resolves the two flags so the last one wins; when merged
    /// layers disagree, relations take precedence.
    pub(crate) const fn type_filter(&self) -> TypeFilter {
        if self.keep_relations_only {
            TypeFilter::RelationsOnly
        } else if self.keep_ways_only {
            TypeFilter::WaysOnly
        } else {
            TypeFilter::Any
        }
    }

    pub(crate) fn into_config(self) -> Result<CleanConfig, CliError> {
        let cli_filter = self.type_filter();
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        let mut config = CleanConfig::try_from(merged)?;
        if cli_filter != TypeFilter::Any {
            config.options.type_filter = cli_filter;
        }
        Ok(config)
    }
}

/// Resolved cleaning configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CleanConfig {
    pub(crate) input: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
    pub(crate) options: CleanOptions,
}

impl TryFrom<CleanArgs> for CleanConfig {
    type Error = CliError;

    fn try_from(args: CleanArgs) -> Result<Self, Self::Error> {
        let type_filter = args.type_filter();
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_INPUT,
        })?;
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_OUTPUT,
        })?;
        let min_name_len = args
            .min_name_len
            .map_or(0, |len| usize::try_from(len.max(0)).unwrap_or(usize::MAX));
        // `--dedupe` is accepted for compatibility; deduplication cannot be disabled.
        let options = CleanOptions::default()
            .with_type_filter(type_filter)
            .with_require_name(args.require_name)
            .with_min_name_len(min_name_len)
            .with_dedupe(true);
        Ok(Self {
            input,
            output,
            options,
        })
    }
}

/// Counters and origin reported by a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanReport {
    /// Row counters from the read pass.
    pub stats: ReadStats,
    /// Records kept after filtering, duplicates included.
    pub kept: usize,
    /// Rows written and duplicates dropped.
    pub summary: WriteSummary,
    /// Latitude of the projection origin.
    pub origin_lat: f64,
    /// Longitude of the projection origin.
    pub origin_lon: f64,
}

pub(crate) fn run_clean(args: CleanArgs) -> Result<CleanReport, CliError> {
    let config = args.into_config()?;
    execute_clean(&config)
}

/// Read, filter, project and write according to `config`.
///
/// The output file is only opened once at least one record survived, so a
/// run without usable rows leaves any existing output untouched.
pub(crate) fn execute_clean(config: &CleanConfig) -> Result<CleanReport, CliError> {
    let input = open_utf8_file(&config.input).map_err(|source| CliError::OpenInput {
        path: config.input.clone(),
        source,
    })?;
    let read = read_points(BufReader::new(input), &config.options).map_err(|source| {
        CliError::ReadInput {
            path: config.input.clone(),
            source,
        }
    })?;
    info!(
        "Rows read: {} (rejected {}, filtered {})",
        read.stats.rows, read.stats.rejected, read.stats.filtered
    );
    info!("Read points: {}", read.points.len());

    let stats = read.stats;
    let prepared = PreparedPoints::new(read.points).map_err(|source| match source {
        PipelineError::NoUsableRows => CliError::NoUsableRows {
            path: config.input.clone(),
            source,
        },
        other => CliError::ReadInput {
            path: config.input.clone(),
            source: other,
        },
    })?;

    let file = create_utf8_file(&config.output).map_err(|source| CliError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let summary = prepared
        .write_csv(&mut writer, config.options.dedupe)
        .map_err(|source| CliError::WriteOutput {
            path: config.output.clone(),
            source,
        })?;
    writer.flush().map_err(|source| CliError::WriteOutput {
        path: config.output.clone(),
        source: PipelineError::Write { source },
    })?;

    let origin = prepared.origin();
    info!("Wrote points: {}", summary.written);
    if summary.duplicates > 0 {
        info!("Dropped duplicates: {}", summary.duplicates);
    }
    info!("Origin (lat,lon): {},{}", origin.y, origin.x);

    Ok(CleanReport {
        stats,
        kept: prepared.len(),
        summary,
        origin_lat: origin.y,
        origin_lon: origin.x,
    })
}
