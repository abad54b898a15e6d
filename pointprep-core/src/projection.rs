//! Local planar coordinates around the centroid of a point set.
//!
//! The projection is equirectangular: longitude differences are scaled by
//! the cosine of the origin latitude. It is only accurate for small extents
//! close to the origin.

use geo::Coord;

use crate::PointRecord;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Arithmetic mean of the record positions, or `None` for an empty slice.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pointprep_core::{PointRecord, centroid};
///
/// let records = [
///     PointRecord::new("node", "1", "", Coord { x: 0.0, y: 10.0 }),
///     PointRecord::new("node", "2", "", Coord { x: 2.0, y: 20.0 }),
/// ];
/// assert_eq!(centroid(&records), Some(Coord { x: 1.0, y: 15.0 }));
/// assert_eq!(centroid(&[]), None);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "record counts stay far below 2^52"
)]
pub fn centroid(records: &[PointRecord]) -> Option<Coord<f64>> {
    if records.is_empty() {
        return None;
    }
    let sum = records
        .iter()
        .fold(Coord { x: 0.0, y: 0.0 }, |acc, record| acc + record.location);
    let count = records.len() as f64;
    Some(Coord {
        x: sum.x / count,
        y: sum.y / count,
    })
}

/// Equirectangular projection anchored at an origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProjection {
    origin: Coord<f64>,
    cos_origin_lat: f64,
}

impl LocalProjection {
    /// Anchor the projection at `origin` (degrees, `x = longitude`).
    #[must_use]
    pub fn new(origin: Coord<f64>) -> Self {
        Self {
            origin,
            cos_origin_lat: origin.y.to_radians().cos(),
        }
    }

    /// The origin in degrees.
    #[must_use]
    pub const fn origin(&self) -> Coord<f64> {
        self.origin
    }

    /// Project a position in degrees to meters east (`x`) and north (`y`)
    /// of the origin.
    #[must_use]
    pub fn project(&self, position: Coord<f64>) -> Coord<f64> {
        let delta = position - self.origin;
        Coord {
            x: delta.x.to_radians() * self.cos_origin_lat * EARTH_RADIUS_M,
            y: delta.y.to_radians() * EARTH_RADIUS_M,
        }
    }
}
