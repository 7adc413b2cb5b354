//! MD5 Kernels
//!
//! Round schedule constants and the portable compression function.

pub mod compress;
pub mod constants;

pub use compress::{compress, decode_block};
