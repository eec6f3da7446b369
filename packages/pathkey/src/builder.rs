//! Staged construction of pairs.

use crate::error::{Error, Result};
use crate::{Key, PathKeyPair};

/// Collects a path and a key, one at a time, before producing a pair.
///
/// Use this when the two halves become known at different points (for
/// example the path when a file is opened, the key when a record is read).
/// [`build`](Self::build) fails with [`Error::MissingField`] if either half
/// is still missing.
///
/// ```rust
/// use pathkey::{Error, Key, PathKeyPair};
///
/// let pair: PathKeyPair = PathKeyPair::builder()
///     .path("foo")
///     .key(Key::from_static(b"k"))
///     .build()
///     .unwrap();
/// assert_eq!(pair.path(), "foo");
///
/// let err = PathKeyPair::<Key>::builder().path("foo").build().unwrap_err();
/// assert!(matches!(err, Error::MissingField { field: "key" }));
/// ```
#[derive(Clone, Debug)]
pub struct PathKeyPairBuilder<K = Key> {
    path: Option<String>,
    key: Option<K>,
}

impl<K> Default for PathKeyPairBuilder<K> {
    fn default() -> Self {
        PathKeyPairBuilder {
            path: None,
            key: None,
        }
    }
}

impl<K> PathKeyPairBuilder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn key(mut self, key: K) -> Self {
        self.key = Some(key);
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    pub fn set_key(&mut self, key: K) {
        self.key = Some(key);
    }

    pub fn path_ref(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn key_ref(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Finish the pair. The path is checked before the key.
    pub fn build(self) -> Result<PathKeyPair<K>> {
        let path = self.path.ok_or(Error::MissingField { field: "path" })?;
        let key = self.key.ok_or(Error::MissingField { field: "key" })?;
        Ok(PathKeyPair::new(path, key))
    }
}
