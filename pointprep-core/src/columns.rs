//! Column resolution for headed and headerless exports.
//!
//! Overpass writes `@type,@id,...` or `::type,::id,...` headers depending on
//! the query, and some exports omit the header entirely. Both shapes map onto
//! the same five logical fields.

use std::collections::HashMap;

/// Number of columns a headerless row must carry.
///
/// The positional layout is `type,id,name,building,addr:housenumber,
/// addr:street,lat,lon`.
pub const POSITIONAL_WIDTH: usize = 8;

const POSITIONAL_TYPE: usize = 0;
const POSITIONAL_ID: usize = 1;
const POSITIONAL_NAME: usize = 2;
const POSITIONAL_LAT: usize = 6;
const POSITIONAL_LON: usize = 7;

const TYPE_COLUMNS: &[&str] = &["::type", "@type", "type"];
const ID_COLUMNS: &[&str] = &["::id", "@id", "id"];
const NAME_COLUMNS: &[&str] = &["name"];
const LAT_COLUMNS: &[&str] = &["::lat", "@lat", "lat"];
const LON_COLUMNS: &[&str] = &["::lon", "@lon", "lon"];

/// Trim the spaces and tabs Overpass pads fields with.
pub(crate) fn trim_field(value: &str) -> &str {
    value.trim_matches([' ', '\t'])
}

/// Return whether a tokenized row looks like a header.
///
/// The check is a case-insensitive search for `type` in the first column,
/// which also matches the `@type` and `::type` spellings.
#[must_use]
pub fn looks_like_header(columns: &[String]) -> bool {
    columns
        .first()
        .is_some_and(|first| first.to_lowercase().contains("type"))
}

/// Lookup from normalized header names to column positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Build the index from a header row.
    ///
    /// Names are trimmed and lower-cased. When a name repeats, the last
    /// occurrence wins.
    #[must_use]
    pub fn from_header(columns: &[String]) -> Self {
        let positions = columns
            .iter()
            .enumerate()
            .map(|(index, name)| (trim_field(name).to_lowercase(), index))
            .collect();
        Self { positions }
    }

    /// Position of a column by name, matched case-insensitively.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_lowercase()).copied()
    }

    /// Trimmed value of the named column, or `""` when the column is absent
    /// from the header or beyond the end of `row`.
    fn value<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.position(name)
            .and_then(|index| row.get(index))
            .map_or("", |value| trim_field(value))
    }

    /// First non-empty value across a chain of accepted spellings.
    fn first_non_empty<'a>(&self, row: &'a [String], names: &[&str]) -> &'a str {
        names
            .iter()
            .map(|name| self.value(row, name))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

/// Raw, trimmed text of the fields a record is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    /// Element type, e.g. `way`.
    pub osm_type: &'a str,
    /// External identifier.
    pub osm_id: &'a str,
    /// Display name, possibly empty.
    pub name: &'a str,
    /// Latitude text.
    pub lat: &'a str,
    /// Longitude text.
    pub lon: &'a str,
}

/// How data rows map onto logical fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnLayout {
    /// Fixed offsets used when no header has been seen.
    #[default]
    Positional,
    /// Named columns resolved from a header row.
    Header(HeaderIndex),
}

impl ColumnLayout {
    /// Extract the logical fields from a data row.
    ///
    /// Returns `None` when a positional row is narrower than
    /// [`POSITIONAL_WIDTH`]. Headed rows always produce fields; missing
    /// columns come back empty.
    #[must_use]
    pub fn extract<'a>(&self, row: &'a [String]) -> Option<RawFields<'a>> {
        match self {
            Self::Positional => Self::extract_positional(row),
            Self::Header(index) => Some(RawFields {
                osm_type: index.first_non_empty(row, TYPE_COLUMNS),
                osm_id: index.first_non_empty(row, ID_COLUMNS),
                name: index.first_non_empty(row, NAME_COLUMNS),
                lat: index.first_non_empty(row, LAT_COLUMNS),
                lon: index.first_non_empty(row, LON_COLUMNS),
            }),
        }
    }

    fn extract_positional(row: &[String]) -> Option<RawFields<'_>> {
        if row.len() < POSITIONAL_WIDTH {
            return None;
        }
        let field = |index: usize| row.get(index).map_or("", |value| trim_field(value));
        Some(RawFields {
            osm_type: field(POSITIONAL_TYPE),
            osm_id: field(POSITIONAL_ID),
            name: field(POSITIONAL_NAME),
            lat: field(POSITIONAL_LAT),
            lon: field(POSITIONAL_LON),
        })
    }
}
