use rayon::prelude::*;

use crate::teap::core::{decipher, encipher};
use crate::teap::error::*;
use crate::teap::util::{bytes_from_words, words_from_bytes};

/// Core raw enciphering algorithm. Enciphers input in independent 8-byte
/// blocks. Input must already be block-aligned: this crate does no padding.
pub fn raw_enc_serial(input: &[u8], key: &[u32; 4]) -> Result<Vec<u8>> {
    check_block_aligned(input, "encipher input not a multiple of 8 bytes")?;

    let mut output = vec![0u8; input.len()];

    for (pt, ct) in input.chunks_exact(8).zip(output.chunks_exact_mut(8)) {
        let pt_block: &[u8; 8] = pt.try_into().unwrap(); // safe unwrap, loop guarantees exact chunks 8
        let mut v = words_from_bytes(pt_block);
        encipher(&mut v, key);
        ct.copy_from_slice(&bytes_from_words(&v));
    }

    Ok(output)
}

/// Core raw deciphering algorithm. Mirror of [`raw_enc_serial`].
pub fn raw_dec_serial(input: &[u8], key: &[u32; 4]) -> Result<Vec<u8>> {
    check_block_aligned(input, "decipher input not a multiple of 8 bytes")?;

    let mut output = vec![0u8; input.len()];

    for (ct, pt) in input.chunks_exact(8).zip(output.chunks_exact_mut(8)) {
        let ct_block: &[u8; 8] = ct.try_into().unwrap(); // safe unwrap, loop guarantees exact chunks 8
        let mut v = words_from_bytes(ct_block);
        decipher(&mut v, key);
        pt.copy_from_slice(&bytes_from_words(&v));
    }

    Ok(output)
}

/// Parallel raw enciphering. Blocks are transformed independently with no
/// shared state, so the output is byte-identical to [`raw_enc_serial`].
pub fn raw_enc_parallel(input: &[u8], key: &[u32; 4]) -> Result<Vec<u8>> {
    check_block_aligned(input, "encipher input not a multiple of 8 bytes")?;

    // initialise vector for parallelisation
    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(8)
        .zip(input.par_chunks(8))
        .for_each(|(out_chunk, in_chunk)| {
            let pt_block: &[u8; 8] = in_chunk.try_into().unwrap();
            let mut v = words_from_bytes(pt_block);
            encipher(&mut v, key);
            out_chunk.copy_from_slice(&bytes_from_words(&v));
        });

    Ok(output)
}

/// Parallel raw deciphering. Mirror of [`raw_enc_parallel`].
pub fn raw_dec_parallel(input: &[u8], key: &[u32; 4]) -> Result<Vec<u8>> {
    check_block_aligned(input, "decipher input not a multiple of 8 bytes")?;

    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(8)
        .zip(input.par_chunks(8))
        .for_each(|(out_chunk, in_chunk)| {
            let ct_block: &[u8; 8] = in_chunk.try_into().unwrap();
            let mut v = words_from_bytes(ct_block);
            decipher(&mut v, key);
            out_chunk.copy_from_slice(&bytes_from_words(&v));
        });

    Ok(output)
}

fn check_block_aligned(input: &[u8], context: &'static str) -> Result<()> {
    if input.len() % 8 != 0 {
        return Err(Error::InvalidLength {
            len: input.len(),
            context,
        });
    }
    Ok(())
}
