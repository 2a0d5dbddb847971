use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fundscope_ai::{
    vectorize, BinaryAdapter, LinearModel, ModelSchema, MulticlassAdapter, Predictor, StandardScaler,
};
use fundscope_core::RawRecord;

fn record() -> RawRecord {
    RawRecord::default()
        .with("founded_at", 2010)
        .with("first_funding_at", 2011)
        .with("last_funding_at", 2012)
        .with("funding_rounds", 2)
        .with("funding_total_usd", 1_000_000)
        .with("first_milestone_at", 2011)
        .with("last_milestone_at", 2013)
        .with("milestones", 2)
        .with("relationships", 5)
        .with("investment_rounds", 1)
        .with("lat", 37.7)
        .with("lng", -122.4)
        .with("category", "software")
        .with("country", "USA")
}

/// Roughly the width of a trained multiclass model: engineered columns plus
/// `n_indicators` category/country indicators.
fn wide_schema(n_indicators: usize) -> Vec<String> {
    let mut columns: Vec<String> = [
        "founded_at",
        "funding_rounds",
        "funding_total_usd",
        "milestones",
        "relationships",
        "Age_day",
        "funding_per_round",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    for i in 0..n_indicators {
        if i % 2 == 0 {
            columns.push(format!("category_c{i}"));
        } else {
            columns.push(format!("country_k{i}"));
        }
    }
    columns.push("category_software".to_string());
    columns.push("country_USA".to_string());
    columns
}

fn bench_vectorize(c: &mut Criterion) {
    let record = record();
    c.bench_function("vectorize", |b| b.iter(|| vectorize(black_box(&record)).unwrap()));
}

fn bench_align(c: &mut Criterion) {
    let table = vectorize(&record()).unwrap();
    let mut group = c.benchmark_group("align");
    for n in [16usize, 64, 256] {
        let schema = ModelSchema::new(wide_schema(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &schema, |b, schema| {
            b.iter(|| schema.align(black_box(&table)))
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let record = record();

    let mut weights = vec![0.0; 12];
    weights[7] = 1.0;
    let binary = BinaryAdapter::new(
        StandardScaler::identity(12),
        LinearModel::new(vec![0, 1], vec![weights], vec![-3.0], vec![]).unwrap(),
    );
    c.bench_function("predict_binary", |b| {
        b.iter(|| binary.predict_record(black_box(&record)).unwrap())
    });

    let columns = wide_schema(256);
    let width = columns.len();
    let multiclass = MulticlassAdapter::new(
        LinearModel::new(vec![0, 1, 2, 3], vec![vec![0.01; width]; 4], vec![0.0; 4], columns).unwrap(),
    );
    c.bench_function("predict_multiclass", |b| {
        b.iter(|| multiclass.predict_record(black_box(&record)).unwrap())
    });
}

criterion_group!(benches, bench_vectorize, bench_align, bench_predict);
criterion_main!(benches);
