//! The Key type - an opaque owned byte sequence.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::hash::{hash_bytes, StableHash};

/// An opaque binary key.
///
/// Equality and ordering are lexicographic over the unsigned bytes, so a key
/// that is a prefix of another sorts first. The textual form is upper-case
/// hex without separators, and [`Key::from_hex`] accepts it back in either
/// case.
///
/// Backed by [`Bytes`], so clones share the underlying buffer.
///
/// ```rust
/// use pathkey::Key;
///
/// let key = Key::from_static(&[0x0A, 0x1B]);
/// assert_eq!(key.to_string(), "0A1B");
/// assert_eq!("0a1b".parse::<Key>().unwrap(), key);
/// ```
#[derive(Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key(Bytes);

impl Key {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Key(bytes.into())
    }

    /// Create a key from a static slice without copying.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Key(Bytes::from_static(bytes))
    }

    /// Parse a hex string (upper or lower case, no separators).
    pub fn from_hex(s: &str) -> Result<Self> {
        hex::decode(s)
            .map(|bytes| Key(Bytes::from(bytes)))
            .map_err(|source| Error::InvalidKey {
                input: s.to_string(),
                source,
            })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get the backing buffer (shared, not copied).
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self)
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Key::from_hex(s)
    }
}

impl StableHash for Key {
    fn stable_hash(&self) -> i32 {
        hash_bytes(&self.0)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Key {
    fn from(bytes: Bytes) -> Self {
        Key(bytes)
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Key(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for Key {
    fn from(bytes: &'static [u8]) -> Self {
        Key(Bytes::from_static(bytes))
    }
}

impl From<Key> for Bytes {
    fn from(key: Key) -> Self {
        key.0
    }
}
