#![no_main]

use libfuzzer_sys::fuzz_target;
use stream_cardinality::{Estimator, EstimatorKind, EstimatorTrait};

fuzz_target!(|data: &[u8]| {
    let Ok(label) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(kind) = label.parse::<EstimatorKind>() {
        assert_eq!(kind.to_string().parse::<EstimatorKind>(), Ok(kind));
        // keep allocations bounded
        if kind.registers().unwrap_or(0) <= 1 << 16 {
            let mut estimator = Estimator::new(kind).unwrap();
            estimator.observe(data);
            assert!(estimator.estimate().is_finite());
        }
    }
});
