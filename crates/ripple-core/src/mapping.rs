use crate::error::{CoreError, Result};
use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full short-link table: short code to target URL.
///
/// Keys are unique by construction. Target URLs are opaque strings and are
/// not validated here. The table serialises as a flat JSON object,
/// `{ "a1b2": "https://www.google.com", ... }`, ordered by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSet {
    entries: BTreeMap<ShortCode, String>,
}

impl MappingSet {
    /// Creates an empty mapping set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target URL for `code`, if mapped.
    pub fn get(&self, code: &ShortCode) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Returns `true` if `code` is already a key.
    pub fn contains(&self, code: &ShortCode) -> bool {
        self.entries.contains_key(code)
    }

    /// Inserts a new mapping. Returns `Err(Conflict)` if the code is taken;
    /// existing mappings are never overwritten.
    pub fn insert(&mut self, code: ShortCode, url: impl Into<String>) -> Result<()> {
        if self.entries.contains_key(&code) {
            return Err(CoreError::Conflict(code.to_string()));
        }
        self.entries.insert(code, url.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the mappings in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&ShortCode, &str)> {
        self.entries.iter().map(|(code, url)| (code, url.as_str()))
    }
}

impl TryFrom<BTreeMap<String, String>> for MappingSet {
    type Error = CoreError;

    /// Builds a mapping set from raw string keys, lowercasing them.
    ///
    /// Fails if a key is not a valid short code or if two keys differ only in
    /// case.
    fn try_from(raw: BTreeMap<String, String>) -> Result<Self> {
        let mut set = MappingSet::new();
        for (key, url) in raw {
            set.insert(ShortCode::new(key)?, url)?;
        }
        Ok(set)
    }
}

impl FromIterator<(ShortCode, String)> for MappingSet {
    /// Collects mappings; a later duplicate code replaces an earlier one.
    fn from_iter<I: IntoIterator<Item = (ShortCode, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for MappingSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MappingSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        MappingSet::try_from(raw).map_err(serde::de::Error::custom)
    }
}
