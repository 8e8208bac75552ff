use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use smallvec::SmallVec;

/// Number of default entries stored inline before spilling to the heap.
/// Most routes carry `controller`, `action`, and at most a couple of
/// parameter defaults.
const MAX_INLINE_VALUES: usize = 4;

/// Ordered mapping of route value name to JSON value
///
/// Used for a descriptor's default values (`controller`, `action`, and any
/// call-site parameter values that differ from their declared defaults) and
/// for the ambient value set handed to constraints during URL generation.
///
/// Iteration order is insertion order, which for resolver-derived defaults is
/// parameter declaration order. Keys are unique; [`RouteValues::insert`]
/// overwrites, [`RouteValues::insert_if_absent`] and
/// [`RouteValues::merge_missing`] keep existing entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteValues {
    pairs: SmallVec<[(String, Value); MAX_INLINE_VALUES]>,
}

impl RouteValues {
    /// Create an empty value set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any existing entry
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Set `name` to `value` only if no entry exists under `name`
    ///
    /// Returns `true` if the entry was added.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        if self.contains_key(&name) {
            return false;
        }
        self.pairs.push((name, value));
        true
    }

    /// Copy every entry of `source` whose key this set does not already have
    ///
    /// Existing entries always win; `source` order is preserved for the
    /// entries that are copied.
    pub fn merge_missing(&mut self, source: &RouteValues) {
        for (name, value) in source.iter() {
            self.insert_if_absent(name.clone(), value.clone());
        }
    }

    /// Look up a value by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Whether an entry exists under `name`
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.pairs.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Serialize for RouteValues {
    /// Serializes as a JSON object in insertion order, for handing defaults
    /// to a host engine or logging a descriptor snapshot.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (name, value) in &self.pairs {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl FromIterator<(String, Value)> for RouteValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut values = RouteValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}
