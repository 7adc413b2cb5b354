//! Digest Accumulator
//!
//! Running chaining words, a one-block buffer and the byte counter. Turns an
//! unbounded byte stream into whole 64-byte blocks and applies the final
//! padding.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::kernels::compress::compress_bytes;
use crate::kernels::constants::{
    BLOCK_SIZE, DIGEST_SIZE, INIT_STATE, LENGTH_OFFSET, PADDING_MARKER,
};
use crate::types::{Md5Output, Phase, StateError};

// =============================================================================
// ACCUMULATOR
// =============================================================================

/// Incremental MD5 state.
///
/// Created by [`init`](Self::init), fed by [`update`](Self::update) and
/// consumed by [`finalize`](Self::finalize). After `finalize` every field is
/// zeroed and further calls return [`StateError::Finalized`] until
/// [`reinit`](Self::reinit). Dropping an accumulator zeroes it too.
///
/// # Example
/// ```rust
/// use md5_engine::Accumulator;
///
/// let mut acc = Accumulator::init();
/// acc.update(b"a")?;
/// acc.update(b"bc")?;
/// assert_eq!(acc.finalize()?, md5_engine::digest(b"abc"));
/// # Ok::<(), md5_engine::StateError>(())
/// ```
#[derive(Clone)]
pub struct Accumulator {
    /// Chaining words `A, B, C, D`
    state: [u32; 4],
    /// Partial block; only `total_bytes % 64` leading bytes are live
    buffer: [u8; BLOCK_SIZE],
    /// Bytes absorbed since `init`, modulo 2^64
    total_bytes: u64,
    phase: Phase,
}

impl Accumulator {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Start a new computation from the MD5 initial constants.
    #[must_use]
    pub const fn init() -> Self {
        Self {
            state: INIT_STATE,
            buffer: [0u8; BLOCK_SIZE],
            total_bytes: 0,
            phase: Phase::Absorbing,
        }
    }

    /// Alias for [`init`](Self::init).
    #[must_use]
    pub const fn new() -> Self {
        Self::init()
    }

    /// Re-initialize in place, making a finalized accumulator usable again.
    pub fn reinit(&mut self) {
        *self = Self::init();
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    /// Current lifecycle phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of bytes absorbed since `init`, modulo 2^64.
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Bytes currently waiting in the partial block.
    #[allow(clippy::cast_possible_truncation)] // always < BLOCK_SIZE
    const fn buffered_len(&self) -> usize {
        (self.total_bytes % BLOCK_SIZE as u64) as usize
    }

    const fn ensure_absorbing(&self) -> Result<(), StateError> {
        match self.phase {
            Phase::Absorbing => Ok(()),
            Phase::Finalized => Err(StateError::Finalized),
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb `data` into the running digest.
    ///
    /// Any chunking of the same byte stream gives the same final digest.
    ///
    /// # Errors
    /// Returns [`StateError::Finalized`] if called after `finalize` without
    /// an intervening `reinit`. No input is absorbed in that case.
    pub fn update(&mut self, data: &[u8]) -> Result<(), StateError> {
        self.ensure_absorbing()?;
        self.absorb(data);
        Ok(())
    }

    /// Pad the stream, process the last block(s) and return the digest.
    ///
    /// The accumulator is wiped afterwards.
    ///
    /// # Errors
    /// Returns [`StateError::Finalized`] if the accumulator was already
    /// finalized. No digest is produced in that case.
    pub fn finalize(&mut self) -> Result<Md5Output, StateError> {
        self.ensure_absorbing()?;
        Ok(self.finish())
    }

    /// Unchecked `update`, for owners that cannot reach the finalized phase.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        let offset = self.buffered_len();
        self.total_bytes = self.total_bytes.wrapping_add(data.len() as u64);

        // Top up a partially filled buffer first
        if offset > 0 {
            let room = BLOCK_SIZE - offset;
            if data.len() < room {
                self.buffer[offset..offset + data.len()].copy_from_slice(data);
                return;
            }
            let (head, rest) = data.split_at(room);
            self.buffer[offset..].copy_from_slice(head);
            compress_bytes(&mut self.state, &self.buffer);
            data = rest;
        }

        // Whole blocks straight from the input
        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            let mut bytes = [0u8; BLOCK_SIZE];
            bytes.copy_from_slice(block);
            compress_bytes(&mut self.state, &bytes);
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    /// Unchecked `finalize`.
    pub(crate) fn finish(&mut self) -> Md5Output {
        let offset = self.buffered_len();
        let bit_len = self.total_bytes.wrapping_mul(8);

        // There is always room for the marker: offset < BLOCK_SIZE
        self.buffer[offset] = PADDING_MARKER;
        self.buffer[offset + 1..].fill(0);

        // Marker ate into the trailer: flush and pad a fresh block
        if offset >= LENGTH_OFFSET {
            compress_bytes(&mut self.state, &self.buffer);
            self.buffer.fill(0);
        }

        // Bit length as two LE words, low word first
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_le_bytes());
        compress_bytes(&mut self.state, &self.buffer);

        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        self.zeroize();
        self.phase = Phase::Finalized;
        out
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Accumulator {
    fn default() -> Self {
        Self::init()
    }
}

impl Zeroize for Accumulator {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.total_bytes.zeroize();
    }
}

impl Drop for Accumulator {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Accumulator {}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("total_bytes", &self.total_bytes)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
