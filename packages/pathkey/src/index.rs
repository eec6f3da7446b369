//! In-memory map keyed by pairs.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::{Key, PathKeyPair};

/// A map from [`PathKeyPair`] to values, with per-path invalidation.
///
/// Lookups go through pair equality and hashing, so a pair built
/// independently from the same path and key finds the stored entry.
///
/// # Example
///
/// ```rust
/// use pathkey::{Key, PairIndex, PathKeyPair};
///
/// let mut index = PairIndex::new();
/// index.insert(PathKeyPair::new("part-0", Key::from_static(b"a")), 1);
/// index.insert(PathKeyPair::new("part-0", Key::from_static(b"b")), 2);
/// index.insert(PathKeyPair::new("part-1", Key::from_static(b"a")), 3);
///
/// assert_eq!(index.lookup("part-0", &Key::from_static(b"b")), Some(&2));
///
/// // The file behind part-0 changed: drop everything read from it.
/// assert_eq!(index.invalidate_path("part-0"), 2);
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PairIndex<V, K = Key> {
    entries: HashMap<PathKeyPair<K>, V>,
}

impl<V, K> Default for PairIndex<V, K> {
    fn default() -> Self {
        PairIndex {
            entries: HashMap::new(),
        }
    }
}

impl<V, K: Hash + Eq> PairIndex<V, K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PairIndex {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, pair: PathKeyPair<K>, value: V) -> Option<V> {
        let previous = self.entries.insert(pair, value);
        if previous.is_some() {
            log::trace!("Replaced existing entry in pair index");
        }
        previous
    }

    pub fn get(&self, pair: &PathKeyPair<K>) -> Option<&V> {
        self.entries.get(pair)
    }

    pub fn contains(&self, pair: &PathKeyPair<K>) -> bool {
        self.entries.contains_key(pair)
    }

    pub fn remove(&mut self, pair: &PathKeyPair<K>) -> Option<V> {
        self.entries.remove(pair)
    }

    /// Look up by path and key without building a pair first.
    ///
    /// Builds a temporary pair internally, so each call copies `path` into a
    /// new `String` and clones `key`. Hold on to a pair and use
    /// [`get`](Self::get) on hot paths.
    pub fn lookup(&self, path: &str, key: &K) -> Option<&V>
    where
        K: Clone,
    {
        self.entries.get(&PathKeyPair::new(path, key.clone()))
    }

    /// Remove every entry stored under `path`.
    ///
    /// Returns the number of entries removed. Visits every entry in the
    /// index, whatever the path.
    pub fn invalidate_path(&mut self, path: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|pair, _| pair.path() != path);
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("Invalidated {} entries for {}", removed, path);
        }
        removed
    }

    /// Keys stored under `path`, in ascending order.
    pub fn keys_for_path(&self, path: &str) -> Vec<&K>
    where
        K: Ord,
    {
        let mut keys: Vec<&K> = self
            .entries
            .keys()
            .filter(|pair| pair.path() == path)
            .map(PathKeyPair::key)
            .collect();
        keys.sort();
        keys
    }

    /// Distinct paths with at least one entry, in ascending order.
    pub fn paths(&self) -> Vec<&str> {
        self.entries
            .keys()
            .map(PathKeyPair::path)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathKeyPair<K>, &V)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(path: &str, key: &'static [u8]) -> PathKeyPair {
        PathKeyPair::new(path, Key::from_static(key))
    }

    fn sample() -> PairIndex<&'static str> {
        let mut index = PairIndex::new();
        index.insert(pair("part-0", b"b"), "0b");
        index.insert(pair("part-0", b"a"), "0a");
        index.insert(pair("part-1", b"a"), "1a");
        index
    }

    #[test]
    fn new_is_empty() {
        let index: PairIndex<u32> = PairIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.paths().is_empty());
    }

    #[test]
    fn get_with_independently_built_pair() {
        let index = sample();
        let probe = PathKeyPair::new("part-0".to_string(), Key::from(b"a".to_vec()));
        assert_eq!(index.get(&probe), Some(&"0a"));
        assert!(index.contains(&probe));
    }

    #[test]
    fn get_requires_both_fields_to_match() {
        let index = sample();
        assert_eq!(index.get(&pair("part-1", b"b")), None);
        assert_eq!(index.get(&pair("part-2", b"a")), None);
    }

    #[test]
    fn insert_returns_replaced_value() {
        let mut index = sample();
        assert_eq!(index.insert(pair("part-0", b"a"), "new"), Some("0a"));
        assert_eq!(index.insert(pair("part-2", b"a"), "2a"), None);
        assert_eq!(index.get(&pair("part-0", b"a")), Some(&"new"));
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn lookup_by_parts() {
        let index = sample();
        assert_eq!(index.lookup("part-1", &Key::from_static(b"a")), Some(&"1a"));
        assert_eq!(index.lookup("part-1", &Key::from_static(b"z")), None);
    }

    #[test]
    fn remove_single_entry() {
        let mut index = sample();
        assert_eq!(index.remove(&pair("part-0", b"b")), Some("0b"));
        assert_eq!(index.remove(&pair("part-0", b"b")), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn invalidate_path_only_touches_that_path() {
        let mut index = sample();
        assert_eq!(index.invalidate_path("part-0"), 2);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&pair("part-1", b"a")), Some(&"1a"));
        assert_eq!(index.invalidate_path("part-0"), 0);
    }

    #[test]
    fn invalidate_unknown_path_keeps_everything() {
        let mut index = sample();
        assert_eq!(index.invalidate_path("part-9"), 0);
        assert_eq!(index.len(), 3);
        assert_eq!(index.paths(), ["part-0", "part-1"]);
    }

    #[test]
    fn lookup_does_not_consume_arguments() {
        let index = sample();
        let path = String::from("part-0");
        let key = Key::from_static(b"b");
        assert_eq!(index.lookup(&path, &key), Some(&"0b"));
        let built = PathKeyPair::new(path.clone(), key.clone());
        assert_eq!(index.lookup(&path, &key), index.get(&built));
    }

    #[test]
    fn keys_for_path_sorted() {
        let index = sample();
        let keys = index.keys_for_path("part-0");
        assert_eq!(keys, [&Key::from_static(b"a"), &Key::from_static(b"b")]);
        assert!(index.keys_for_path("missing").is_empty());
    }

    #[test]
    fn paths_distinct_and_sorted() {
        let index = sample();
        assert_eq!(index.paths(), ["part-0", "part-1"]);
    }

    #[test]
    fn iter_visits_everything() {
        let index = sample();
        let mut seen: Vec<String> = index
            .iter()
            .map(|(pair, value)| format!("{}={}", pair, value))
            .collect();
        seen.sort();
        assert_eq!(
            seen,
            [
                "path:part-0 key:61=0a",
                "path:part-0 key:62=0b",
                "path:part-1 key:61=1a",
            ]
        );
    }

    #[test]
    fn clear_empties() {
        let mut index = sample();
        index.clear();
        assert!(index.is_empty());
    }

    #[test]
    fn with_capacity_and_generic_key() {
        let mut index: PairIndex<u32, u64> = PairIndex::with_capacity(8);
        index.insert(PathKeyPair::new("offsets", 7), 70);
        assert_eq!(index.lookup("offsets", &7), Some(&70));
        assert_eq!(index.keys_for_path("offsets"), [&7]);
    }
}
