#![no_main]

use libfuzzer_sys::fuzz_target;
use stream_cardinality::{Estimator, EstimatorKind, EstimatorTrait, HashLayer};
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let seed = wyhash(data, 0);
    let kinds = EstimatorKind::reference_suite();
    let kind = kinds[seed as usize % kinds.len()];

    let mut estimator = Estimator::with_hasher(kind, HashLayer::from_seed(seed)).unwrap();
    for chunk in data.chunks(4) {
        estimator.observe(chunk);
        let estimate = estimator.estimate();
        assert!(estimate.is_finite() && estimate >= 0.0);
        assert!(estimator.size_of() > 0);
    }

    // re-observing the same stream is a no-op
    let before = estimator.clone();
    for chunk in data.chunks(4) {
        estimator.observe(chunk);
    }
    assert!(before == estimator);
});
