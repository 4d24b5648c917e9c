//! Reconciling map feature region names with survey region names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::key::normalize_key;

/// Literal remaps from a geographic region name to the survey's spelling.
///
/// Keys and values are stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct RegionAliases {
    map: BTreeMap<String, String>,
}

impl RegionAliases {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Adds `alias -> canonical`, normalizing both.
    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.map.insert(normalize_key(alias), normalize_key(canonical));
    }

    #[must_use]
    pub fn with(mut self, alias: &str, canonical: &str) -> Self {
        self.insert(alias, canonical);
        self
    }

    /// Normalized summary key for a region name from any source.
    pub fn canonical(&self, name: &str) -> String {
        let key = normalize_key(name);
        match self.map.get(&key) {
            Some(canonical) => canonical.clone(),
            None => key,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }
}

/// The boundary files label East of England as "Eastern".
impl Default for RegionAliases {
    fn default() -> Self {
        Self::empty().with("Eastern", "East of England")
    }
}

impl From<BTreeMap<String, String>> for RegionAliases {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut aliases = Self::empty();
        for (alias, canonical) in &raw {
            aliases.insert(alias, canonical);
        }
        aliases
    }
}

impl From<RegionAliases> for BTreeMap<String, String> {
    fn from(aliases: RegionAliases) -> Self {
        aliases.map
    }
}
