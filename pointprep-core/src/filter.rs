//! Record filters and the options controlling a cleaning run.

use crate::PointRecord;

/// Restricts which element types survive filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Keep every element type.
    #[default]
    Any,
    /// Keep only elements typed exactly `way`.
    WaysOnly,
    /// Keep only elements typed exactly `relation`.
    RelationsOnly,
}

impl TypeFilter {
    /// Return whether an element of `osm_type` passes this filter.
    #[must_use]
    pub fn admits(self, osm_type: &str) -> bool {
        match self {
            Self::Any => true,
            Self::WaysOnly => osm_type == "way",
            Self::RelationsOnly => osm_type == "relation",
        }
    }
}

/// Options for a cleaning run.
///
/// # Examples
/// ```
/// use pointprep_core::{CleanOptions, TypeFilter};
///
/// let options = CleanOptions::default()
///     .with_type_filter(TypeFilter::WaysOnly)
///     .with_min_name_len(3);
/// assert!(options.dedupe);
/// assert!(!options.require_name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Element type restriction.
    pub type_filter: TypeFilter,
    /// Drop records with an empty name.
    pub require_name: bool,
    /// Drop records whose name has fewer characters than this.
    pub min_name_len: usize,
    /// Drop records whose identity key was already written.
    pub dedupe: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            type_filter: TypeFilter::Any,
            require_name: false,
            min_name_len: 0,
            dedupe: true,
        }
    }
}

impl CleanOptions {
    /// Set the element type restriction.
    #[must_use]
    pub const fn with_type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    /// Require a non-empty name.
    #[must_use]
    pub const fn with_require_name(mut self, require_name: bool) -> Self {
        self.require_name = require_name;
        self
    }

    /// Set the minimum name length in characters.
    #[must_use]
    pub const fn with_min_name_len(mut self, min_name_len: usize) -> Self {
        self.min_name_len = min_name_len;
        self
    }

    /// Enable or disable deduplication by identity key.
    #[must_use]
    pub const fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Apply the type, name-required and name-length filters in that order.
    #[must_use]
    pub fn admits(&self, record: &PointRecord) -> bool {
        if !self.type_filter.admits(&record.osm_type) {
            return false;
        }
        if self.require_name && record.name.is_empty() {
            return false;
        }
        record.name_len() >= self.min_name_len
    }
}
