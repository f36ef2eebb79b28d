// Shared helpers for integration tests.

#![allow(dead_code)]

/// SplitMix64 output as little-endian bytes.
///
/// Fixed, documented generator so reference fixtures can be reproduced in
/// any language.
pub fn splitmix_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        out.extend_from_slice(&z.to_le_bytes());
    }
    out.truncate(len);
    out
}

/// Running end offsets of a chunk-length sequence.
pub fn boundaries(lengths: &[u64]) -> Vec<u64> {
    lengths
        .iter()
        .scan(0u64, |end, &len| {
            *end += len;
            Some(*end)
        })
        .collect()
}
