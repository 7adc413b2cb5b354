#![no_main]

use libfuzzer_sys::fuzz_target;
use md5_engine::{Accumulator, Md5Hasher};

/// Split `message` into chunks whose lengths cycle through `sizes`.
/// A zero size yields an empty chunk; the cycle still advances.
fn plan(message: &[u8], sizes: [usize; 3]) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut rest = message;
    for size in sizes.into_iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(size.min(rest.len()));
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

fuzz_target!(|data: &[u8]| {
    // Leading three bytes pick the chunk-size cycle; the rest is the message
    let Some((sizes, message)) = data.split_first_chunk::<3>() else {
        return;
    };
    // A cycle of only zero sizes would never consume the message
    let sizes = sizes.map(|s| usize::from(s % 130));
    if sizes == [0; 3] {
        return;
    }
    let reference = md5_engine::digest(message);
    let chunks = plan(message, sizes);

    // =============================================================================
    // CHECKED PATH (ACCUMULATOR)
    // =============================================================================

    let mut acc = Accumulator::init();
    for chunk in &chunks {
        acc.update(chunk).unwrap();
    }
    assert_eq!(acc.total_bytes(), message.len() as u64);
    assert_eq!(acc.finalize().unwrap(), reference, "Accumulator chunking diverged");

    // =============================================================================
    // OWNING PATH (HASHER)
    // =============================================================================

    // Dirty the hasher first so the chunked pass runs after a reset
    let mut hasher = Md5Hasher::new();
    hasher.update(message);
    hasher.reset();
    for chunk in &chunks {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), reference, "Hasher chunking diverged");
});
