// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Flattened attribute maps.
//!
//! Nested values are addressed with dotted keys: list items as `scope.0`,
//! block fields as `recurrence.0.type`, and collection sizes as `scope.#`.

use std::collections::BTreeMap;
use std::fmt::Display;

/// A flat, ordered map of attribute keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, String>);

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the value at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` holds a scalar value or a non-empty collection.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.0.contains_key(key) || self.count(key) > 0
    }

    /// Number of items of the collection at `key`, zero if absent.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.get(&format!("{key}.#"))
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }

    /// Sets a scalar value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Sets a scalar value if present.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Display>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Sets a list as `key.#` plus one `key.N` entry per item.
    pub fn insert_list<I>(&mut self, key: &str, items: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut n = 0;
        for (i, item) in items.into_iter().enumerate() {
            self.insert(format!("{key}.{i}"), item);
            n = i + 1;
        }
        self.insert(format!("{key}.#"), n);
    }

    /// Collects the items of the list at `key`.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<&str> {
        (0..self.count(key))
            .filter_map(|i| self.get(&format!("{key}.{i}")))
            .collect()
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
