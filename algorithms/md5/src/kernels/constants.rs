//! MD5 Kernel Constants
//!
//! Initial chaining values, the 64-entry round schedule and the structural
//! sizes of the algorithm, as published in RFC 1321.
//!
//! The round constants are `floor(|sin(i + 1)| * 2^32)` for `i` in `0..64`.
//! They are stored as literals; nothing is computed at runtime.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Block size for the compression function (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in one block.
pub const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Final digest size (in bytes).
pub const DIGEST_SIZE: usize = 16;

/// Offset inside the last block where the 8-byte bit-length trailer starts.
pub const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// First padding byte appended after the message.
pub const PADDING_MARKER: u8 = 0x80;

/// Total rounds per block (4 groups of 16).
pub const ROUNDS: usize = 64;

// =============================================================================
// INITIALIZATION CONSTANTS
// =============================================================================

/// Chaining values `A, B, C, D` loaded by `init()`.
pub const INIT_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// =============================================================================
// ROUND SCHEDULE
// =============================================================================

/// Additive round constants `K[i]`.
#[rustfmt::skip]
pub const ROUND_CONSTANTS: [u32; ROUNDS] = [
    // Group 1
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee,
    0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
    0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be,
    0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
    // Group 2
    0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa,
    0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
    0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
    // Group 3
    0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c,
    0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
    0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05,
    0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
    // Group 4
    0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039,
    0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1,
    0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

/// Left-rotation amount per round.
#[rustfmt::skip]
pub const ROTATIONS: [u32; ROUNDS] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Message word consumed per round.
#[rustfmt::skip]
pub const WORD_INDEX: [usize; ROUNDS] = [
    0, 1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
    1, 6, 11,  0,  5, 10, 15,  4,  9, 14,  3,  8, 13,  2,  7, 12,
    5, 8, 11, 14,  1,  4,  7, 10, 13,  0,  3,  6,  9, 12, 15,  2,
    0, 7, 14,  5, 12,  3, 10,  1,  8, 15,  6, 13,  4, 11,  2,  9,
];
