#![no_main]

use libfuzzer_sys::fuzz_target;
use md5_engine::{Accumulator, StateError};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // FIRST PASS
    // =============================================================================

    let mut acc = Accumulator::init();
    let mid = data.len() / 2;
    acc.update(&data[..mid]).unwrap();
    acc.update(&data[mid..]).unwrap();
    let first = acc.finalize().unwrap();
    assert_eq!(first, md5_engine::digest(data));

    // =============================================================================
    // MISUSE
    // =============================================================================

    assert_eq!(acc.update(data), Err(StateError::Finalized));
    assert_eq!(acc.finalize(), Err(StateError::Finalized));

    // =============================================================================
    // REUSE
    // =============================================================================

    acc.reinit();
    acc.update(data).unwrap();
    assert_eq!(acc.finalize().unwrap(), first, "Reinit must reproduce the digest");
});
