//! Batch digests on the rayon pool.
//!
//! Every input gets its own accumulator; nothing is shared between tasks.

use rayon::prelude::*;

use crate::oneshot::digest;
use crate::types::Md5Output;

/// Digest each input independently, in parallel.
///
/// Output order matches input order.
///
/// # Example
/// ```rust
/// let out = md5_engine::digest_batch(&[&b"a"[..], &b"b"[..]]);
/// assert_eq!(out[0], md5_engine::digest(b"a"));
/// assert_eq!(out[1], md5_engine::digest(b"b"));
/// ```
#[must_use]
pub fn digest_batch<T>(inputs: &[T]) -> Vec<Md5Output>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|input| digest(input.as_ref()))
        .collect()
}
