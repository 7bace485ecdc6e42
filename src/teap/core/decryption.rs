use super::{DELTA, ROUNDS};

/// Core TEA deciphering function. Decrypts a 64-bit block in place using the
/// provided 128-bit key, exactly inverting [`encipher`](super::encipher) under
/// the same key.
///
/// The accumulator starts at `DELTA * ROUNDS`, the final value of a full
/// forward run, and each round undoes the forward half-updates in reverse
/// order: v1 first (against the current v0), then v0 (against the new v1).
#[inline(always)]
pub fn decipher(v: &mut [u32; 2], k: &[u32; 4]) {
    let [mut v0, mut v1] = *v;
    let mut sum: u32 = DELTA.wrapping_mul(ROUNDS);

    for _ in 0..ROUNDS {
        v1 = v1.wrapping_sub(
            ((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0)
                ^ sum.wrapping_add(k[((sum >> 11) & 3) as usize]),
        );
        sum = sum.wrapping_sub(DELTA);
        v0 = v0.wrapping_sub(
            ((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1) ^ sum.wrapping_add(k[(sum & 3) as usize]),
        );
    }

    v[0] = v0;
    v[1] = v1;
}
