use bolero::check;
use md5_engine::{digest, Md5Hasher};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<Vec<u8>>>().for_each(|inputs| {
        // =============================================================================
        // PARALLEL EXECUTION (RAYON)
        // =============================================================================

        #[cfg(feature = "multithread")]
        {
            let batch = md5_engine::digest_batch(inputs);
            assert_eq!(batch.len(), inputs.len());
            for (input, out) in inputs.iter().zip(&batch) {
                assert_eq!(*out, digest(input), "Batch digest mismatch");
            }
        }

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        // One hasher over the concatenation must not depend on how inputs were grouped.
        let joined: Vec<u8> = inputs.concat();
        let mut hasher = Md5Hasher::new();
        for input in inputs {
            hasher.update(input);
        }
        assert_eq!(hasher.finalize(), digest(&joined), "Concatenation mismatch");
    });
}
