use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use pprof::criterion::{Output, PProfProfiler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stream_cardinality::{Estimator, EstimatorKind, EstimatorTrait, HashLayer};
use tabled::settings::{Settings, Style};
use tabled::{Table, Tabled};

/// Observe and estimate operations are benchmarked against cardinalities ranging from 0 to
/// `DEFAULT_MAX_CARDINALITY` or environment variable `N` (if defined) with cardinality multiplied
/// by 16 with every iteration as [0, 1, 16, 256, ..., N].
const DEFAULT_MAX_CARDINALITY: usize = 65536;

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Protobuf));
    targets = benchmark
}
criterion_main!(benches);

fn benchmark(c: &mut Criterion) {
    let max_cardinality = std::env::var("N")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CARDINALITY);

    let cardinalities: Vec<usize> = std::iter::once(0)
        .chain((0..).map(|c| 1 << (4 * c)))
        .take_while(|&c| c <= max_cardinality)
        .collect();

    let kinds = EstimatorKind::reference_suite();

    let mut group = c.benchmark_group("observe");
    for &cardinality in &cardinalities {
        group.throughput(Throughput::Elements(cardinality.max(1) as u64));
        for &kind in &kinds {
            bench_observe(&mut group, kind, cardinality);
        }
    }
    group.finish();

    let mut group = c.benchmark_group("estimate");
    group.throughput(Throughput::Elements(1));
    for &cardinality in &cardinalities {
        for &kind in &kinds {
            bench_estimate(&mut group, kind, cardinality);
        }
    }
    group.finish();

    // Relative error table is written next to criterion reports when requested.
    if let Ok(bench_results_path) = std::env::var("BENCH_RESULTS_PATH") {
        let results: Vec<ErrorRecord> = kinds
            .iter()
            .map(|&kind| ErrorRecord {
                estimator: kind.to_string(),
                relative_error: cardinalities
                    .iter()
                    .map(|&cardinality| measure_error(kind, cardinality))
                    .collect::<Vec<_>>()
                    .join(" / "),
            })
            .collect();

        let table_config = Settings::default().with(Style::markdown());
        let path = format!("{}/relative_error.md", bench_results_path);
        if let Err(e) = std::fs::write(&path, Table::new(results).with(table_config).to_string()) {
            eprintln!("failed to write {}: {}", path, e);
        }
    }
}

fn build(kind: EstimatorKind) -> Estimator {
    Estimator::new(kind).expect("reference kinds are valid")
}

fn bench_observe(group: &mut BenchmarkGroup<WallTime>, kind: EstimatorKind, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new(kind.to_string(), cardinality),
        &cardinality,
        |b, &cardinality| {
            b.iter(|| {
                let mut estimator = build(kind);
                for i in 0..black_box(cardinality) {
                    estimator.observe(black_box(&i.to_le_bytes()));
                }
            });
        },
    );
}

fn bench_estimate(group: &mut BenchmarkGroup<WallTime>, kind: EstimatorKind, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new(kind.to_string(), cardinality),
        &cardinality,
        |b, &cardinality| {
            let mut estimator = build(kind);
            for i in 0..black_box(cardinality) {
                estimator.observe(black_box(&i.to_le_bytes()));
            }
            b.iter(|| estimator.estimate());
        },
    );
}

fn measure_error(kind: EstimatorKind, cardinality: usize) -> String {
    let n = 20;
    let mut total_relative_error: f64 = 0.0;
    let mut rng = StdRng::seed_from_u64(12345);
    for trial in 0..n {
        let mut estimator =
            Estimator::with_hasher(kind, HashLayer::from_seed(trial)).expect("valid kind");
        for _ in 0..cardinality {
            estimator.observe(&rng.gen::<u64>().to_le_bytes());
        }
        let relative_error = if cardinality == 0 {
            0.0
        } else {
            (estimator.estimate() - cardinality as f64).abs() / cardinality as f64
        };
        total_relative_error += relative_error;
    }
    let avg_relative_error = total_relative_error / (n as f64);

    if avg_relative_error < 1.0 {
        format!("{:.4}", avg_relative_error)
    } else {
        format!("{:.2e}", avg_relative_error)
    }
}

#[derive(Tabled)]
struct ErrorRecord {
    estimator: String,
    relative_error: String,
}
