use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use joinsteps::{Row, Table, Value};
use std::hint::black_box;
use std::sync::Arc;

fn owners(n: usize) -> Table {
    let rows = (0..n)
        .map(|i| {
            Row::from_pairs([
                ("id", Value::Int(i as i64)),
                (
                    "first_name",
                    Value::Text(Arc::from(format!("owner{}", i).as_str())),
                ),
            ])
        })
        .collect();
    Table::new(
        "owners".into(),
        vec!["id".into(), "first_name".into()],
        Some("id".into()),
        rows,
    )
    .unwrap()
}

// Every other dog points at an existing owner, the rest are strays, so the
// outer joins always have rows to pad.
fn dogs(n: usize, owner_count: usize) -> Table {
    let rows = (0..n)
        .map(|i| {
            let owner_id = if i % 2 == 0 {
                (i % owner_count) as i64
            } else {
                -1
            };
            Row::from_pairs([
                ("name", Value::Text(Arc::from(format!("dog{}", i).as_str()))),
                ("owner_id", Value::Int(owner_id)),
            ])
        })
        .collect();
    Table::new(
        "dogs".into(),
        vec!["name".into(), "owner_id".into()],
        Some("name".into()),
        rows,
    )
    .unwrap()
}

fn bench_cross_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cross_Join");

    for n in [10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let left = owners(n);
            let right = dogs(n, n);
            b.iter(|| {
                let crossed = left.cross_join(black_box(&right));
                black_box(crossed);
            });
        });
    }
    group.finish();
}

fn bench_inner_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inner_Join");

    for n in [100, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let left = owners(n);
            let right = dogs(n, n);
            b.iter(|| {
                let joined =
                    left.inner_join(black_box(&right), |o, d| o.get("id") == d.get("owner_id"));
                black_box(joined);
            });
        });
    }
    group.finish();
}

fn bench_left_outer_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("Left_Outer_Join");

    for n in [100, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let left = owners(n);
            let right = dogs(n, n);
            b.iter(|| {
                let joined = left
                    .left_outer_join(black_box(&right), |o, d| o.get("id") == d.get("owner_id"))
                    .unwrap();
                black_box(joined);
            });
        });
    }
    group.finish();
}

fn bench_right_outer_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("Right_Outer_Join");

    for n in [100, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let left = owners(n);
            let right = dogs(n, n);
            b.iter(|| {
                let joined = left
                    .right_outer_join(black_box(&right), |o, d| o.get("id") == d.get("owner_id"))
                    .unwrap();
                black_box(joined);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cross_join,
    bench_inner_join,
    bench_left_outer_join,
    bench_right_outer_join
);
criterion_main!(benches);
