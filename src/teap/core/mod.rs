//! Core TEA implementation for enciphering and deciphering a single 64-bit block. Exports encipher and decipher.

mod decryption;
mod encryption;

pub use decryption::decipher;
pub use encryption::encipher;

/// Round constant, derived from the golden ratio (2^32 / phi). Added to the
/// running accumulator every round to defeat slide attacks.
pub(crate) const DELTA: u32 = 0x9E37_79B9;

/// Number of Feistel rounds. Both directions must use the same value, and it
/// must match the `DELTA * ROUNDS` starting accumulator in [`decipher`].
pub(crate) const ROUNDS: u32 = 32;
