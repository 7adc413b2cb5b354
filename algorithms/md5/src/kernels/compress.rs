//! MD5 compression function.
//!
//! Mixes one 64-byte block into the four chaining words. Runs the fixed
//! 64-round schedule from [`constants`](super::constants) with plain
//! wrapping arithmetic.

use crate::kernels::constants::{
    BLOCK_SIZE, BLOCK_WORDS, ROTATIONS, ROUNDS, ROUND_CONSTANTS, WORD_INDEX,
};

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Group 1: bitwise select of `c` or `d` by `b`.
#[inline]
const fn f1(b: u32, c: u32, d: u32) -> u32 {
    d ^ (b & (c ^ d))
}

/// Group 2: `f1` with rotated operands.
#[inline]
const fn f2(b: u32, c: u32, d: u32) -> u32 {
    c ^ (d & (b ^ c))
}

/// Group 3: parity.
#[inline]
const fn f3(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Group 4: `c ^ (b | !d)`.
#[inline]
const fn f4(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

// =============================================================================
// BLOCK DECODING
// =============================================================================

/// Decode a 64-byte block into 16 little-endian words.
///
/// Byte order is fixed by MD5, not by the host: this is the portable form of
/// an explicit byte swap on big-endian machines.
#[must_use]
pub fn decode_block(bytes: &[u8; BLOCK_SIZE]) -> [u32; BLOCK_WORDS] {
    let mut words = [0u32; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// Apply one MD5 compression step and return the new chaining words.
///
/// Pure and total: the same `(state, block)` always yields the same result.
#[must_use]
pub fn compress(state: [u32; 4], block: &[u32; BLOCK_WORDS]) -> [u32; 4] {
    let [mut a, mut b, mut c, mut d] = state;

    for round in 0..ROUNDS {
        let mix = match round / 16 {
            0 => f1(b, c, d),
            1 => f2(b, c, d),
            2 => f3(b, c, d),
            _ => f4(b, c, d),
        };

        let rotated = a
            .wrapping_add(mix)
            .wrapping_add(block[WORD_INDEX[round]])
            .wrapping_add(ROUND_CONSTANTS[round])
            .rotate_left(ROTATIONS[round]);

        // (a, b, c, d) -> (d, a', b, c)
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
    ]
}

/// Decode `bytes` and compress it into `state`.
#[inline]
pub fn compress_bytes(state: &mut [u32; 4], bytes: &[u8; BLOCK_SIZE]) {
    *state = compress(*state, &decode_block(bytes));
}

// =============================================================================
// TESTS
// =============================================================================
