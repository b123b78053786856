//! Manifest metadata embedded in a packaged Java archive.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key-value descriptor metadata from an archive's `MANIFEST.MF`.
///
/// A manifest always has a main section and may carry any number of named
/// sub-sections. Both are kept in insertion order so that candidate
/// derivation is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaManifest {
    /// Main attribute section
    #[serde(default)]
    pub main: IndexMap<String, String>,
    /// Named sub-sections, keyed by section name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub named_sections: IndexMap<String, IndexMap<String, String>>,
}

impl JavaManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field in the main section
    pub fn main_field(&self, name: &str) -> Option<&str> {
        self.main.get(name).map(String::as_str)
    }

    /// Iterate over every section (main first, then named sections in
    /// insertion order)
    pub fn sections(&self) -> impl Iterator<Item = &IndexMap<String, String>> {
        std::iter::once(&self.main).chain(self.named_sections.values())
    }
}
