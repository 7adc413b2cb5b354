#![cfg_attr(not(feature = "std"), no_std)]

//! # md5-engine
//!
//! Streaming MD5 (RFC 1321) message digest.
//! Portable, allocation-free, bit-exact.

//! # Usage
//! ```rust
//! // 1. One-shot
//! let d = md5_engine::digest(b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(d[0], 0x9e);
//!
//! // 2. Streaming (Big Data / Files)
//! use md5_engine::Md5Hasher;
//!
//! let mut hasher = Md5Hasher::new();
//! hasher.update(b"The quick brown fox ");
//! hasher.update(b"jumps over the lazy dog");
//! assert_eq!(hasher.finalize(), d);
//!
//! // 3. Explicit lifecycle
//! use md5_engine::{Accumulator, StateError};
//!
//! let mut acc = Accumulator::init();
//! acc.update(b"abc")?;
//! let first = acc.finalize()?;
//! assert_eq!(acc.update(b"more"), Err(StateError::Finalized));
//!
//! acc.reinit();
//! acc.update(b"abc")?;
//! assert_eq!(acc.finalize()?, first);
//! # Ok::<(), StateError>(())
//! ```
//!
//! MD5 is broken for collision resistance and this implementation is not
//! constant-time. Use it for interoperability and integrity checks only.

// =============================================================================
// MODULES
// =============================================================================

mod accumulator;
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
#[cfg(feature = "multithread")]
mod parallel;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use accumulator::Accumulator;
#[cfg(feature = "digest-trait")]
pub use ::digest;
pub use kernels::constants::{BLOCK_SIZE, DIGEST_SIZE};
pub use oneshot::{digest, verify};
#[cfg(feature = "multithread")]
pub use parallel::digest_batch;
pub use streaming::Md5Hasher;
pub use types::{Md5Output, Phase, StateError};
