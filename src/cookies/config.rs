//! Cookie collection configuration.

use crate::cookies::canonical_cookie::MAX_SUPPORTED_VERSION;

/// Cookie collection configuration.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// Reference version; inserting any other version trips the
    /// non-default-version flag.
    pub max_supported_version: u32,
    /// Entries preallocated on construction
    pub initial_capacity: usize,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            max_supported_version: MAX_SUPPORTED_VERSION,
            initial_capacity: 0,
        }
    }
}

impl CollectionConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference max supported version.
    pub fn max_supported_version(mut self, version: u32) -> Self {
        self.max_supported_version = version;
        self
    }

    /// Set initial capacity.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
