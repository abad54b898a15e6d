//! Point records parsed from export rows.

use geo::Coord;

use crate::columns::RawFields;

/// A single exported element with a usable position.
///
/// Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`.
/// The identifier is kept as text so the exported value is written back
/// verbatim.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pointprep_core::PointRecord;
///
/// let record = PointRecord::new("way", "42", "", Coord { x: 20.0, y: 10.0 });
/// assert_eq!(record.identity_key(), "way:42");
/// assert_eq!(record.display_name(), "way:42");
/// assert_eq!(record.latitude(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Element type, typically `node`, `way` or `relation`.
    pub osm_type: String,
    /// External identifier text.
    pub osm_id: String,
    /// Display name; empty when the element has none.
    pub name: String,
    /// Position in degrees.
    pub location: Coord<f64>,
}

impl PointRecord {
    /// Construct a record from its parts.
    #[must_use]
    pub fn new(
        osm_type: impl Into<String>,
        osm_id: impl Into<String>,
        name: impl Into<String>,
        location: Coord<f64>,
    ) -> Self {
        Self {
            osm_type: osm_type.into(),
            osm_id: osm_id.into(),
            name: name.into(),
            location,
        }
    }

    /// Build a record from extracted row fields.
    ///
    /// Returns `None` unless both coordinates parse to finite numbers.
    #[must_use]
    pub fn from_fields(fields: RawFields<'_>) -> Option<Self> {
        let lat = parse_coordinate(fields.lat)?;
        let lon = parse_coordinate(fields.lon)?;
        Some(Self::new(
            fields.osm_type,
            fields.osm_id,
            fields.name,
            Coord { x: lon, y: lat },
        ))
    }

    /// The `type:id` key used for deduplication.
    #[must_use]
    pub fn identity_key(&self) -> String {
        format!("{}:{}", self.osm_type, self.osm_id)
    }

    /// The name, or the identity key when the name is empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.identity_key()
        } else {
            self.name.clone()
        }
    }

    /// Name length in characters.
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

/// Parse a decimal coordinate, rejecting empty and non-finite values.
fn parse_coordinate(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}
