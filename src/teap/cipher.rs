use crate::teap::core::{decipher, encipher};
use crate::teap::error::Result;
use crate::teap::key::Key;
use crate::teap::util::{PARALLEL_THRESHOLD, bytes_from_words, words_from_bytes};

use crate::teap::raw::*;

/// Provides enciphering and deciphering of single 64-bit blocks
/// ([encipher_block](crate::Cipher::encipher_block)) and of raw block-aligned
/// byte buffers ([encipher_raw](crate::Cipher::encipher_raw)).
/// Instantiated with a TEA [Key], whose four words are stored in the instance.
///
/// TEA has no key schedule: the round function selects key words directly off
/// the running accumulator, so construction stores the key as-is with no
/// expansion step.
pub struct Cipher {
    key: [u32; 4],
}

impl Cipher {
    /// Stores the key words of the provided key in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            key: *key.as_words(),
        }
    }

    /// Getter for the internal key words.
    pub fn get_key_words(&self) -> &[u32; 4] {
        &self.key
    }

    /// Enciphers a single 64-bit block in place.
    ///
    /// Runs 32 Feistel rounds over the two words. Total over all inputs: any
    /// pair of words is a valid block and no error can occur.
    pub fn encipher_block(&self, block: &mut [u32; 2]) {
        encipher(block, &self.key);
    }

    /// Deciphers a single 64-bit block in place, exactly inverting
    /// [encipher_block](crate::Cipher::encipher_block) under the same key.
    pub fn decipher_block(&self, block: &mut [u32; 2]) {
        decipher(block, &self.key);
    }

    /// Enciphers a single 8-byte block, treating it as two big-endian words.
    pub fn encipher_bytes(&self, block: &[u8; 8]) -> [u8; 8] {
        let mut v = words_from_bytes(block);
        encipher(&mut v, &self.key);
        bytes_from_words(&v)
    }

    /// Deciphers a single 8-byte block, treating it as two big-endian words.
    pub fn decipher_bytes(&self, block: &[u8; 8]) -> [u8; 8] {
        let mut v = words_from_bytes(block);
        decipher(&mut v, &self.key);
        bytes_from_words(&v)
    }

    /// Enciphers a buffer of 8-byte blocks, each block independently.
    ///
    /// The input length must be a multiple of 8 bytes; this primitive does no
    /// padding and no chaining (both are caller responsibilities). Buffers of
    /// 4 KiB and above are processed in parallel; blocks are independent, so
    /// the parallel path produces output identical to the serial path.
    pub fn encipher_raw(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() >= PARALLEL_THRESHOLD {
            raw_enc_parallel(input, &self.key)
        } else {
            raw_enc_serial(input, &self.key)
        }
    }

    /// Deciphers a buffer of 8-byte blocks, each block independently.
    ///
    /// Assumes input was produced by [encipher_raw](crate::Cipher::encipher_raw)
    /// (or is at least block-aligned).
    pub fn decipher_raw(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() >= PARALLEL_THRESHOLD {
            raw_dec_parallel(input, &self.key)
        } else {
            raw_dec_serial(input, &self.key)
        }
    }
}
