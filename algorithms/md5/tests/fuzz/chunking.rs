use bolero::check;
use md5_engine::{digest, Accumulator};

#[test]
fn fuzz_random_partitions() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(data, cuts)| {
            let expected = digest(data);

            // Each cut byte is the next chunk length; 0 means an empty update.
            let mut acc = Accumulator::init();
            let mut rest = data.as_slice();
            for &cut in cuts {
                let take = usize::from(cut % 80).min(rest.len());
                let (chunk, tail) = rest.split_at(take);
                acc.update(chunk).unwrap();
                rest = tail;
            }
            acc.update(rest).unwrap();

            assert_eq!(acc.total_bytes(), data.len() as u64);
            assert_eq!(acc.finalize().unwrap(), expected, "Partition mismatch");
        });
}
