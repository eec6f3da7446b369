//! Path + key pairs.
//!
//! A [`PathKeyPair`] names "the entry stored under key `K` in the location
//! `path`". It is an immutable value type meant to be used as the key of
//! hash maps and ordered maps:
//! - `path`: an opaque textual identifier (usually a file path), never parsed
//! - `key`: an opaque key, by default a [`Key`] byte sequence
//!
//! Both fields are required at construction. Staged construction goes through
//! [`PathKeyPairBuilder`], which reports a missing field as an [`Error`]
//! instead of handing out a half-initialized pair.
//!
//! # Example
//!
//! ```rust
//! use pathkey::{Key, PairIndex, PathKeyPair};
//!
//! let pair = PathKeyPair::new("/data/part-00000", Key::from_static(&[0x0A, 0x1B]));
//! assert_eq!(pair.to_string(), "path:/data/part-00000 key:0A1B");
//!
//! let mut index = PairIndex::new();
//! index.insert(pair.clone(), "value");
//! assert_eq!(index.get(&pair), Some(&"value"));
//! ```

pub use bytes::Bytes;

mod builder;
mod error;
pub mod hash;
mod index;
mod key;
mod pair;

pub use builder::PathKeyPairBuilder;
pub use error::{Error, Result};
pub use hash::StableHash;
pub use index::PairIndex;
pub use key::Key;
pub use pair::PathKeyPair;
