use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quill::{Cond, Query, begin, select};

/// Build a query with an `n`-condition AND chain plus pagination:
/// select * from t where (col0 = $1 AND col1 = $2 ...) offset $n+1 limit $n+2
fn build_query(n: usize) -> Query {
    let mut group = begin(Cond::eq("col0", 0_i64));
    for i in 1..n {
        group = group.and(Cond::eq(format!("col{i}"), i as i64));
    }
    select("*", "t", "").filter(group).offset(20).limit(10)
}

fn bench_to_executable(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble/to_executable");

    for n in [1, 5, 10, 50, 100] {
        let query = build_query(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(query.to_executable().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble/build_and_assemble");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let query = build_query(n);
                black_box(query.to_executable().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_executable, bench_build_and_assemble);
criterion_main!(benches);
