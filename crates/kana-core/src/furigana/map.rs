use serde::ser::{Serialize, SerializeMap, Serializer};

/// Learned kanji → katakana readings, in insertion order.
///
/// Rendering applies keys in this order, so the order is part of the value.
/// Re-inserting a key replaces its reading in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuriganaMap {
    entries: Vec<(String, String)>,
}

impl FuriganaMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace. Empty keys and readings are rejected.
    pub fn insert(&mut self, key: String, reading: String) -> bool {
        if key.is_empty() || reading.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = reading,
            None => self.entries.push((key, reading)),
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Last key (in map order) containing `fragment`, if any.
    pub(crate) fn key_containing(&self, fragment: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .map(|(k, _)| k.as_str())
            .find(|k| k.contains(fragment))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FuriganaMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FuriganaMap::new();
        for (k, v) in iter {
            map.insert(k.into(), v.into());
        }
        map
    }
}

impl Serialize for FuriganaMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            m.serialize_entry(k, v)?;
        }
        m.end()
    }
}
