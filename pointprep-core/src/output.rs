//! Serialization of cleaned points.

use std::io::{self, Write};

use crate::{LocalProjection, PointRecord, SeenKeys, quote_field};

/// Header line of the cleaned CSV.
pub const OUTPUT_HEADER: &str = "id,name,lat,lon,x_m,y_m";

/// Counts reported after writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Data rows written, excluding the header.
    pub written: usize,
    /// Records skipped because their identity key was already written.
    pub duplicates: usize,
}

/// Write the header and one row per record, in input order.
///
/// With `dedupe` enabled, only the first record for each identity key is
/// written. Coordinates use the shortest decimal representation that
/// round-trips.
pub fn write_points<W: Write>(
    mut writer: W,
    points: &[PointRecord],
    projection: &LocalProjection,
    dedupe: bool,
) -> io::Result<WriteSummary> {
    writeln!(writer, "{OUTPUT_HEADER}")?;

    let mut seen = SeenKeys::with_capacity(points.len());
    let mut summary = WriteSummary::default();
    for point in points {
        let key = point.identity_key();
        if dedupe && !seen.first_sighting(key.clone()) {
            summary.duplicates += 1;
            continue;
        }
        let local = projection.project(point.location);
        let name = quote_field(&point.display_name());
        writeln!(
            writer,
            "{key},{name},{},{},{},{}",
            point.latitude(),
            point.longitude(),
            local.x,
            local.y
        )?;
        summary.written += 1;
    }
    Ok(summary)
}
