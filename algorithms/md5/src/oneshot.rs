//! Public API Layer
//!
use crate::accumulator::Accumulator;
use crate::types::Md5Output;
use subtle::ConstantTimeEq;

// =============================================================================
// ONE-SHOT DIGEST
// =============================================================================

/// Compute the MD5 digest of `input`.
///
/// Equivalent to `init`, one `update` and `finalize`.
///
/// # Example
/// ```rust
/// let d = md5_engine::digest(b"abc");
/// assert_eq!(d[..4], [0x90, 0x01, 0x50, 0x98]);
/// ```
#[must_use]
#[inline]
pub fn digest(input: &[u8]) -> Md5Output {
    let mut acc = Accumulator::init();
    acc.absorb(input);
    acc.finish()
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the digest of `input` and compare it with `expected`.
///
/// The comparison runs in constant time. The digest computation does not,
/// and MD5 gives no collision resistance: use this for integrity checks
/// against accidental corruption only.
///
/// # Example
/// ```rust
/// let data = b"payload";
/// let d = md5_engine::digest(data);
/// assert!(md5_engine::verify(data, &d));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Md5Output) -> bool {
    let computed = digest(input);
    computed.ct_eq(expected).into()
}
