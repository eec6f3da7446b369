//! The PathKeyPair type.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::builder::PathKeyPairBuilder;
use crate::hash::{combine, StableHash};
use crate::Key;

/// A path and a key, compared and hashed as one value.
///
/// Pairs are immutable: there are no setters. [`with_path`](Self::with_path)
/// and [`with_key`](Self::with_key) consume the pair and return a modified
/// copy, so a pair that sits inside a `HashMap` can never change underneath
/// it.
///
/// # Equality and hashing
///
/// Two pairs are equal iff their paths are equal and their keys are equal.
/// Both `Hash` and [`StableHash`] feed the key first and the path second.
/// Ordering is by path, then key.
///
/// ```rust
/// use pathkey::{Key, PathKeyPair};
///
/// let a = PathKeyPair::new("foo", Key::from_static(&[0x0A, 0x1B]));
/// let b = PathKeyPair::new("foo".to_string(), Key::from_hex("0a1b").unwrap());
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "path:foo key:0A1B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PathKeyPair<K = Key> {
    path: String,
    key: K,
}

impl<K> PathKeyPair<K> {
    pub fn new(path: impl Into<String>, key: K) -> Self {
        PathKeyPair {
            path: path.into(),
            key,
        }
    }

    /// Start a staged construction.
    pub fn builder() -> PathKeyPairBuilder<K> {
        PathKeyPairBuilder::new()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Replace the path, keeping the key.
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        PathKeyPair {
            path: path.into(),
            key: self.key,
        }
    }

    /// Replace the key, keeping the path.
    #[must_use]
    pub fn with_key(self, key: K) -> Self {
        PathKeyPair {
            path: self.path,
            key,
        }
    }

    pub fn into_parts(self) -> (String, K) {
        (self.path, self.key)
    }
}

impl<K: PartialEq + 'static> PathKeyPair<K> {
    /// Compare against a value of unknown type.
    ///
    /// Returns `false` when `other` is not a `PathKeyPair<K>`.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<PathKeyPair<K>>()
            .is_some_and(|other| self == other)
    }
}

// Key first, then path. Must stay in step with `StableHash` below.
impl<K: Hash> Hash for PathKeyPair<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.path.hash(state);
    }
}

impl<K: StableHash> StableHash for PathKeyPair<K> {
    fn stable_hash(&self) -> i32 {
        combine(&[self.key.stable_hash(), self.path.stable_hash()])
    }
}

impl<K: fmt::Display> fmt::Display for PathKeyPair<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path:{} key:{}", self.path, self.key)
    }
}

impl<P: Into<String>, K> From<(P, K)> for PathKeyPair<K> {
    fn from((path, key): (P, K)) -> Self {
        PathKeyPair::new(path, key)
    }
}
