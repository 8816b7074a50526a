//! Keyed on/off flags implemented using BTreeMap
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{IntoIter, Iter};
use std::collections::BTreeMap;

/// A set of independent boolean flags addressed by key.
///
/// Keys that were never set read as off.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct Toggles<K: Ord> {
    map: BTreeMap<K, bool>,
}

impl<K: Ord> Default for Toggles<K> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<K: Ord> Toggles<K> {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
    pub fn is_on(&self, key: &K) -> bool {
        self.map.get(key).copied().unwrap_or(false)
    }
    pub fn set(&mut self, key: K, on: bool) {
        self.map.insert(key, on);
    }
    /// Flip one flag, returning its new value.
    pub fn toggle(&mut self, key: K) -> bool {
        let entry = self.map.entry(key).or_insert(false);
        *entry = !*entry;
        *entry
    }
    pub fn iter(&self) -> Iter<'_, K, bool> {
        self.map.iter()
    }
    /// Keys currently on, in key order.
    pub fn enabled(&self) -> impl Iterator<Item = &K> {
        self.map.iter().filter(|(_, on)| **on).map(|(key, _)| key)
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Ord> FromIterator<(K, bool)> for Toggles<K> {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        let mut toggles = Toggles::new();
        toggles.extend(iter);
        toggles
    }
}

impl<K: Ord> IntoIterator for Toggles<K> {
    type Item = (K, bool);
    type IntoIter = IntoIter<K, bool>;
    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<K: Ord> Extend<(K, bool)> for Toggles<K> {
    fn extend<T: IntoIterator<Item = (K, bool)>>(&mut self, iter: T) {
        for (key, on) in iter.into_iter() {
            self.set(key, on);
        }
    }
}
