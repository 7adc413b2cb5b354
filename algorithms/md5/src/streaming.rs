//! Streaming Hasher
//!
//! Owning wrapper around [`Accumulator`] for callers that feed data in
//! chunks. `finalize` consumes the hasher, so post-finalize misuse does not
//! compile and no lifecycle errors surface here.

use zeroize::ZeroizeOnDrop;

use crate::accumulator::Accumulator;
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::Md5Output;

#[cfg(feature = "digest-trait")]
use crypto_common::BlockSizeUser;
#[cfg(feature = "digest-trait")]
use digest::typenum::{U16, U64};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming MD5 hasher.
///
/// The internal state is wiped when the hasher is finalized or dropped.
#[derive(Clone, Debug, Default)]
pub struct Md5Hasher {
    acc: Accumulator,
}

impl Md5Hasher {
    /// MD5 block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Create new streaming hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            acc: Accumulator::init(),
        }
    }

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.acc.absorb(data);
    }

    /// Total bytes fed so far, modulo 2^64.
    pub const fn bytes_processed(&self) -> u64 {
        self.acc.total_bytes()
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> Md5Output {
        self.acc.finish()
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        self.acc.reinit();
    }
}

// The inner accumulator wipes itself on drop
impl ZeroizeOnDrop for Md5Hasher {}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "std")]
impl std::io::Write for Md5Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Md5Hasher {
    type OutputSize = U16;
}

#[cfg(feature = "digest-trait")]
impl BlockSizeUser for Md5Hasher {
    type BlockSize = U64;
}

#[cfg(feature = "digest-trait")]
impl Update for Md5Hasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Md5Hasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Md5Hasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Md5Hasher {}
