//! Shared types used across the MD5 engine.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::DIGEST_SIZE;

// =============================================================================
// OUTPUT
// =============================================================================

/// A finished 16-byte MD5 digest.
pub type Md5Output = [u8; DIGEST_SIZE];

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Where an [`Accumulator`](crate::Accumulator) is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input; `update` and `finalize` are allowed.
    Absorbing,
    /// A digest has been produced and the state wiped.
    Finalized,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Lifecycle misuse of an [`Accumulator`](crate::Accumulator).
///
/// The digest computation itself cannot fail. This error only reports a
/// caller bug, so there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `update` or `finalize` was called after `finalize` without `reinit`.
    Finalized,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finalized => f.write_str(
                "accumulator already finalized; call reinit() before absorbing more input",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for StateError {}
