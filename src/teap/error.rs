use thiserror::Error;
use rand::rand_core;

/// TEA Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// TEA Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a TEA key from a slice that is not 16 bytes long.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Provided a raw buffer whose length is not a multiple of the 8-byte block size.
    #[error("invalid input length: {len} bytes ({context})")]
    InvalidLength { len: usize, context: &'static str },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
