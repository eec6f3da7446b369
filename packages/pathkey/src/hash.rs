//! Deterministic 32-bit hashing.
//!
//! `std::hash::Hash` is randomly seeded per process, so it cannot be used for
//! anything that has to agree across runs (partitioning, bucketing, logs).
//! [`StableHash`] is the fixed alternative: polynomial hashes over bytes and
//! over UTF-16 string units, and an order-sensitive [`combine`] for
//! aggregates.

use bytes::Bytes;

/// Seed of both the byte hash and [`combine`].
const SEED: i32 = 1;

/// Multiplier of both the byte hash and [`combine`].
const MULTIPLIER: i32 = 31;

/// A hash that is identical across processes, platforms and releases.
///
/// Values that compare equal must return equal hashes.
pub trait StableHash {
    fn stable_hash(&self) -> i32;
}

/// Hash a byte sequence.
///
/// `h = 1; for b in bytes: h = 31 * h + b`, with each byte taken as a signed
/// 8-bit value and wrapping 32-bit arithmetic.
pub fn hash_bytes(bytes: &[u8]) -> i32 {
    bytes.iter().fold(SEED, |h, &b| {
        h.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(b as i8))
    })
}

/// Hash a string.
///
/// `h = 0; for c in utf16(s): h = 31 * h + c`, wrapping. Characters outside
/// the basic plane contribute both of their surrogate code units.
pub fn hash_str(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0, |h, c| h.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(c)))
}

/// Combine hashes in order.
///
/// `h = 1; for x in hashes: h = 31 * h + x`, wrapping. The result depends on
/// the order of `hashes`. An empty slice gives `1`.
pub fn combine(hashes: &[i32]) -> i32 {
    hashes
        .iter()
        .fold(SEED, |h, &x| h.wrapping_mul(MULTIPLIER).wrapping_add(x))
}

impl StableHash for [u8] {
    fn stable_hash(&self) -> i32 {
        hash_bytes(self)
    }
}

impl StableHash for Vec<u8> {
    fn stable_hash(&self) -> i32 {
        hash_bytes(self)
    }
}

impl StableHash for Bytes {
    fn stable_hash(&self) -> i32 {
        hash_bytes(self)
    }
}

impl StableHash for str {
    fn stable_hash(&self) -> i32 {
        hash_str(self)
    }
}

impl StableHash for String {
    fn stable_hash(&self) -> i32 {
        hash_str(self)
    }
}

impl<T: StableHash + ?Sized> StableHash for &T {
    fn stable_hash(&self) -> i32 {
        (**self).stable_hash()
    }
}
