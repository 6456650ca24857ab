use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use relalg::prelude::*;

/// SELECT "t"."col0",... FROM "t" WHERE ("t"."col0"=?) AND ("t"."col1"=?) ...
fn build_selection(n: usize) -> Selection {
    let t = Table::new("t");
    let mut sel = Selection::new(t.clone());
    for i in 0..n {
        sel = sel.project(t.col(format!("col{i}")));
    }
    for i in 0..n {
        sel = sel.filter(t.col(format!("col{i}")).eq(i as i64));
    }
    sel
}

fn bench_compile_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/select");

    for dialect in [Dialect::Generic, Dialect::Postgres] {
        for n in [1, 5, 10, 50, 100] {
            let sel = build_selection(n).with_dialect(dialect);
            group.bench_with_input(
                BenchmarkId::new(dialect.as_str(), n),
                &sel,
                |b, sel| {
                    b.iter(|| black_box(sel.compile()));
                },
            );
        }
    }

    group.finish();
}

fn bench_build_and_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/build_and_compile");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_selection(n).compile()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/in_list");
    let config = CompileConfig::new(Dialect::Postgres);

    for n in [5, 20, 100, 500] {
        let node = Node::column("id").is_in(0..n as i64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &node, |b, node| {
            b.iter(|| black_box(compile(node, &config)));
        });
    }

    group.finish();
}

fn bench_literal_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/literal_expansion");
    let config = CompileConfig::new(Dialect::Postgres);

    for n in [5, 20, 100, 500] {
        let node = Node::literal("id IN(?...)", 0..n as i64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &node, |b, node| {
            b.iter(|| black_box(compile(node, &config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compile_select,
    bench_build_and_compile,
    bench_in_list,
    bench_literal_expansion
);
criterion_main!(benches);
