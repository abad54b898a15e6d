//! Read, prepare and write stages of a cleaning run.
//!
//! The whole input is buffered before anything is written: the centroid
//! must be known before the first row can be projected.

use std::io::{BufRead, Write};

use geo::Coord;
use log::debug;

use crate::{
    CleanOptions, ColumnLayout, HeaderIndex, LocalProjection, PipelineError, PointRecord,
    WriteSummary, centroid, looks_like_header, split_line, write_points,
};

/// Field separator of Overpass CSV exports.
pub const SEPARATOR: char = ',';

/// Row counters gathered while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Non-empty rows other than the header.
    pub rows: usize,
    /// Rows that were too short or lacked usable coordinates.
    pub rejected: usize,
    /// Well-formed rows removed by the filters.
    pub filtered: usize,
}

/// Records that survived parsing and filtering, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadOutcome {
    /// Surviving records.
    pub points: Vec<PointRecord>,
    /// Counters for the read pass.
    pub stats: ReadStats,
}

/// What a single input row turned into.
#[derive(Debug, PartialEq)]
enum RowOutcome {
    Header,
    Rejected,
    Record(PointRecord),
}

/// Tracks the column layout across rows.
///
/// Header detection stays active until a header has been seen, so a header
/// that follows leading headerless rows still takes effect.
#[derive(Debug, Default)]
struct RowMapper {
    layout: ColumnLayout,
}

impl RowMapper {
    fn map_row(&mut self, columns: &[String]) -> RowOutcome {
        if matches!(self.layout, ColumnLayout::Positional) && looks_like_header(columns) {
            debug!("detected header with {} columns", columns.len());
            self.layout = ColumnLayout::Header(HeaderIndex::from_header(columns));
            return RowOutcome::Header;
        }
        self.layout
            .extract(columns)
            .and_then(PointRecord::from_fields)
            .map_or(RowOutcome::Rejected, RowOutcome::Record)
    }
}

/// Read every line of `reader`, keeping records that pass `options`.
///
/// Lines are split on `\n`; invalid UTF-8 is replaced rather than treated
/// as an error. Malformed rows are counted and skipped.
///
/// # Examples
/// ```
/// use pointprep_core::{CleanOptions, read_points};
///
/// let input = "::type,::id,name,::lat,::lon\nway,1,Cafe,10.0,20.0\nway,2,,bad,20.0\n";
/// let outcome = read_points(input.as_bytes(), &CleanOptions::default())?;
/// assert_eq!(outcome.points.len(), 1);
/// assert_eq!(outcome.stats.rows, 2);
/// assert_eq!(outcome.stats.rejected, 1);
/// # Ok::<(), pointprep_core::PipelineError>(())
/// ```
pub fn read_points<R: BufRead>(
    reader: R,
    options: &CleanOptions,
) -> Result<ReadOutcome, PipelineError> {
    let mut mapper = RowMapper::default();
    let mut outcome = ReadOutcome::default();

    for line in reader.split(b'\n') {
        let bytes = line.map_err(|source| PipelineError::Read { source })?;
        if bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]).is_empty() {
            continue;
        }
        let text = String::from_utf8_lossy(&bytes);
        let columns = split_line(&text, SEPARATOR);
        match mapper.map_row(&columns) {
            RowOutcome::Header => {}
            RowOutcome::Rejected => {
                outcome.stats.rows += 1;
                outcome.stats.rejected += 1;
            }
            RowOutcome::Record(record) => {
                outcome.stats.rows += 1;
                if options.admits(&record) {
                    outcome.points.push(record);
                } else {
                    outcome.stats.filtered += 1;
                }
            }
        }
    }

    if matches!(mapper.layout, ColumnLayout::Positional) {
        debug!("no header found; used positional layout");
    }
    Ok(outcome)
}

/// Filtered records paired with the projection centred on them.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPoints {
    points: Vec<PointRecord>,
    projection: LocalProjection,
}

impl PreparedPoints {
    /// Compute the centroid of `points` and anchor the projection there.
    ///
    /// Fails with [`PipelineError::NoUsableRows`] when `points` is empty.
    pub fn new(points: Vec<PointRecord>) -> Result<Self, PipelineError> {
        let origin = centroid(&points).ok_or(PipelineError::NoUsableRows)?;
        Ok(Self {
            points,
            projection: LocalProjection::new(origin),
        })
    }

    /// Projection origin (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn origin(&self) -> Coord<f64> {
        self.projection.origin()
    }

    /// Number of records, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The prepared records.
    #[must_use]
    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    /// Write the cleaned CSV to `writer`.
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
        dedupe: bool,
    ) -> Result<WriteSummary, PipelineError> {
        write_points(writer, &self.points, &self.projection, dedupe)
            .map_err(|source| PipelineError::Write { source })
    }
}
