//! First-sighting tracking for identity keys.

use std::collections::HashSet;

/// Identity keys already emitted during a run.
///
/// The first record with a given key wins; later ones are reported as
/// duplicates.
#[derive(Debug, Default)]
pub struct SeenKeys {
    keys: HashSet<String>,
}

impl SeenKeys {
    /// Create an empty set sized for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: HashSet::with_capacity(capacity),
        }
    }

    /// Record `key`, returning `true` when it had not been seen before.
    pub fn first_sighting(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    /// Number of distinct keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
