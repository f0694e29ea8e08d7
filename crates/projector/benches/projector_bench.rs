use criterion::{Criterion, criterion_group, criterion_main};
use projector::{Projector, Record};
use serde_json::json;

/// Builds N records with a handful of scalar and nested fields.
fn make_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let value = json!({
                "id": i,
                "name": format!("user-{i}"),
                "age": i % 90,
                "birthplace": "Algeria",
                "address": {"number": i, "street": "Rue Daoudi"},
                "tags": ["a", "b", "c"],
            });
            match value {
                serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect()
}

fn bench_project_1000_records(c: &mut Criterion) {
    let data = make_records(1000);
    let projector = Projector::new(["name", "age", "gender"]);

    c.bench_function("projector/project_1000_records", |b| {
        b.iter(|| projector.project(std::hint::black_box(&data)));
    });
}

fn bench_project_nested_values(c: &mut Criterion) {
    let data = make_records(1000);
    let projector = Projector::new(["address", "tags"]);

    c.bench_function("projector/project_nested_values", |b| {
        b.iter(|| projector.project(std::hint::black_box(&data)));
    });
}

fn bench_decode_and_project(c: &mut Criterion) {
    let body = serde_json::to_vec(&json!({
        "data": make_records(1000),
        "fields": ["id", "name"],
    }))
    .unwrap();

    c.bench_function("projector/decode_and_project", |b| {
        b.iter(|| {
            let req = projector::SelectRequest::from_slice(std::hint::black_box(&body)).unwrap();
            req.project()
        });
    });
}

criterion_group!(
    benches,
    bench_project_1000_records,
    bench_project_nested_values,
    bench_decode_and_project,
);
criterion_main!(benches);
