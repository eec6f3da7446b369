//! Error types for pair construction and key parsing.

/// Errors produced while building pairs or parsing keys.
///
/// A fully constructed [`PathKeyPair`](crate::PathKeyPair) never fails; these
/// only come out of the staged and textual entry points.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A builder was finished before one of its fields was set.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// A key string was not valid hex.
    #[error("invalid key {input:?}: {source}")]
    InvalidKey {
        input: String,
        #[source]
        source: hex::FromHexError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
