use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qseq::prelude::*;

fn make_rows(rows: usize) -> Sequence<(i64, i64, f64)> {
    let data: Vec<(i64, i64, f64)> = (0..rows)
        .map(|i| ((i % 17) as i64, (i * 7919 % 1000) as i64, (i % 10) as f64))
        .collect();
    qseq::from(data)
}

fn bench_lazy_pipeline(c: &mut Criterion) {
    let rows = make_rows(10_000);
    c.bench_function("filter_select_take", |b| {
        b.iter(|| {
            rows.filter(|r| r.1 % 3 == 0)
                .select(|r| r.2 * 2.0)
                .take(1_000)
                .reduce_seeded(0.0, |acc, x| acc + x)
        })
    });
}

fn bench_order_by(c: &mut Criterion) {
    let rows = make_rows(10_000);
    c.bench_function("order_by_then_by", |b| {
        b.iter(|| {
            let sorted = rows.order_by(|r| r.0).then_by_descending(|r| r.1);
            black_box(sorted.first())
        })
    });
}

fn bench_group_by(c: &mut Criterion) {
    let rows = make_rows(10_000);
    c.bench_function("group_by_sum", |b| {
        b.iter(|| {
            rows.group_by_with_result(
                |r| r.0,
                |r| r.2,
                |k, vals| (k, vals.reduce_seeded(0.0, |a, v| a + v)),
            )
            .count()
        })
    });
}

fn bench_set_strategies(c: &mut Criterion) {
    let left = qseq::from((0..2_000).map(|i| i % 700).collect::<Vec<i64>>());
    let right = qseq::from((0..2_000).map(|i| i % 900).collect::<Vec<i64>>());
    c.bench_function("union_by_equality", |b| {
        b.iter(|| left.union_by(&right, |a, b| a == b).count())
    });
    c.bench_function("union_by_key", |b| {
        b.iter(|| left.union_by_key(&right, |x| *x).count())
    });
}

fn bench_join(c: &mut Criterion) {
    let outer = make_rows(5_000);
    let inner = qseq::from((0..17).map(|k| (k, format!("dim-{k}"))).collect::<Vec<_>>());
    c.bench_function("hash_join", |b| {
        b.iter(|| {
            outer
                .join(&inner, |r| r.0, |d| d.0, |r, d| (r.1, d.1.len()))
                .count()
        })
    });
}

criterion_group!(
    queries,
    bench_lazy_pipeline,
    bench_order_by,
    bench_group_by,
    bench_set_strategies,
    bench_join
);
criterion_main!(queries);
