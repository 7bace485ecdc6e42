pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // transform in parallel if input size gt 4 KiB

#[inline(always)]
pub(crate) fn words_from_bytes(block: &[u8; 8]) -> [u32; 2] {
    [
        u32::from_be_bytes([block[0], block[1], block[2], block[3]]),
        u32::from_be_bytes([block[4], block[5], block[6], block[7]]),
    ]
}

#[inline(always)]
pub(crate) fn bytes_from_words(v: &[u32; 2]) -> [u8; 8] {
    let a = v[0].to_be_bytes();
    let b = v[1].to_be_bytes();
    [a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3]]
}
