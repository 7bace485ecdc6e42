//! Defines the [`Key`] struct, which holds a 128-bit TEA key as four 32-bit words.
//! Keys can be randomly generated, built from words, or parsed from a byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::teap::error::{Error, Result};

/// Contains a 128-bit TEA key. Can be instantiated with a random key, built
/// directly from four 32-bit words, or parsed from a 16-byte slice (words are
/// taken big-endian). A `Key` object is required to instantiate a
/// [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> teap::Result<()> {
/// use teap::Key;
///
/// // Instantiate a random key:
/// let rk = Key::rand_key()?;
///
/// // Instantiate a key from bytes or from words:
/// let key_bytes: [u8; 16] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
///                            0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F];
/// let my_key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(my_key, Key::from_words([0x00010203, 0x04050607, 0x08090A0B, 0x0C0D0E0F]));
///
/// // Internal bytes of Key objects are accessible and match the original key:
/// assert_eq!(my_key.to_bytes(), key_bytes);
///
/// // Attempting to instantiate with an invalid key size (not 16 bytes)
/// // returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..12]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    words: [u32; 4],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self::from_bytes(&k))
    }

    /// Builds a key directly from four 32-bit words.
    pub fn from_words(words: [u32; 4]) -> Self {
        Self { words }
    }

    /// Attempts to build a key from a slice of bytes. Will return an
    /// InvalidKeyLength error if the input slice is anything other than 16
    /// bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            16 => Ok(Self::from_bytes(bytes.try_into().unwrap())), // match condition guarantees safe unwrap
            len => Err(Error::InvalidKeyLength { len }),
        }
    }

    /// Returns a reference to the internal key as an array of 32-bit words.
    pub fn as_words(&self) -> &[u32; 4] {
        &self.words
    }

    /// Returns the key as 16 bytes, each word serialised big-endian.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes(chunk.try_into().unwrap()); // chunks_exact guarantees 4 bytes
        }
        Self { words }
    }
}
