use super::{DELTA, ROUNDS};

/// Core TEA enciphering function. Encrypts a 64-bit block in place using the
/// provided 128-bit key. The key is read only; the block words are overwritten
/// with the ciphertext.
///
/// The grouping inside each half-update is load-bearing: the shift-xor term
/// plus the half is computed first, then xor'd with `sum + k[..]`, and only
/// that result is added to the other half. Regrouping yields a different,
/// non-interoperable cipher.
#[inline(always)]
pub fn encipher(v: &mut [u32; 2], k: &[u32; 4]) {
    let [mut v0, mut v1] = *v;
    let mut sum: u32 = 0;

    for _ in 0..ROUNDS {
        v0 = v0.wrapping_add(
            ((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1) ^ sum.wrapping_add(k[(sum & 3) as usize]),
        );
        sum = sum.wrapping_add(DELTA);
        v1 = v1.wrapping_add(
            ((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0)
                ^ sum.wrapping_add(k[((sum >> 11) & 3) as usize]),
        );
    }

    v[0] = v0;
    v[1] = v1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teap::util::test_util::{CT_WORDS, KEY_WORDS, PT_WORDS};

    #[test]
    fn test_encipher_zero_vector() {
        // all-zero key and block must still produce a non-zero, pinned output
        let mut block = [0u32; 2];
        encipher(&mut block, &[0u32; 4]);

        assert_eq!(
            block,
            [0xDEE9D4D8, 0xF7131ED9],
            "all-zero vector does not match reference output"
        );
    }

    #[test]
    fn test_encipher_reference_vector() {
        let mut block = PT_WORDS;
        encipher(&mut block, &KEY_WORDS);

        assert_eq!(block, CT_WORDS, "enciphered block does not match reference");
    }

    #[test]
    fn test_encipher_wraparound() {
        // saturating inputs exercise wrapping at 2^32; pinned from the
        // reference implementation, which relies on modular arithmetic
        let mut block = [0xFFFF_FFFF, 0xFFFF_FFFF];
        encipher(&mut block, &[0xFFFF_FFFF; 4]);

        assert_eq!(block, [0x28FC2891, 0xE623566A]);
    }

    #[test]
    fn test_encipher_deterministic() {
        let mut a = PT_WORDS;
        let mut b = PT_WORDS;
        encipher(&mut a, &KEY_WORDS);
        encipher(&mut b, &KEY_WORDS);

        assert_eq!(a, b, "identical inputs must produce identical outputs");
    }
}
