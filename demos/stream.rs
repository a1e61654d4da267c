//! Feeds random 6-character strings into every reference estimator and prints
//! the final estimates next to the exact count.
//!
//! Usage: `cargo run --release --example stream -- [ITEMS] [LABEL...]`
//! e.g. `cargo run --release --example stream -- 1000000 exact hll_257 sa_1531`.

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stream_cardinality::{Estimator, EstimatorError, EstimatorKind, EstimatorTrait};
use tracing::info;
use tracing_subscriber::EnvFilter;

const STRING_LENGTH: usize = 6;
const DEFAULT_ITEMS: usize = 5_000_000;

fn main() -> Result<(), EstimatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let items = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_ITEMS);
    let labels: Vec<String> = args.collect();
    let kinds = if labels.is_empty() {
        EstimatorKind::reference_suite()
    } else {
        labels
            .iter()
            .map(|label| label.parse())
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut estimators = kinds
        .into_iter()
        .map(Estimator::new)
        .collect::<Result<Vec<_>, _>>()?;

    info!(items, estimators = estimators.len(), "streaming random strings");

    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let chars = Uniform::new_inclusive(b'A', b'z');
    let mut item = [0u8; STRING_LENGTH];
    for _ in 0..items {
        item.iter_mut().for_each(|c| *c = rng.sample(&chars));
        for estimator in estimators.iter_mut() {
            estimator.observe(&item);
        }
    }

    for estimator in &estimators {
        println!(
            "{:>8} count: {:.0}",
            estimator.kind().to_string(),
            estimator.estimate()
        );
    }

    Ok(())
}
