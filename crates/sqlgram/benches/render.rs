use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlgram::prelude::*;

/// A table `t` with columns `col0 .. col{n-1}`.
fn wide_table(n: usize) -> Table {
    let mut t = Table::new("t");
    for i in 0..n {
        t.add_column(format!("col{i}"));
    }
    t
}

/// SELECT col0, col1, ... FROM t WHERE (col0 = ? AND col1 = ? ...)
fn build_select(t: &Table, n: usize) -> Selection {
    let mut selection = select([t]);
    for i in 0..n {
        if let Some(column) = t.c(&format!("col{i}")) {
            selection = selection.where_(equal(column, i as i64));
        }
    }
    selection
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/string_args");

    for n in [1, 5, 10, 50, 100] {
        let t = wide_table(n);
        let selection = build_select(&t, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &selection, |b, s| {
            b.iter(|| black_box(s.to_sql_args()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        let t = wide_table(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(&t, n).to_sql_args()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/in_list");
    let t = wide_table(1);
    let builder = Builder::new().with_dialect(Dialect::PostgreSql);

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let Some(col) = t.c("col0") else { return };
                let selection = select([col]).where_(in_list(col, values.iter().copied()));
                black_box(builder.string_args(&selection));
            });
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut meta = Meta::new();
    meta.add_table("users").add_column("id").add_column("name");
    meta.add_table("articles")
        .add_column("id")
        .add_column("author")
        .add_column("title");

    c.bench_function("render/join_group_order", |b| {
        b.iter(|| {
            let (Some(users), Some(articles)) = (meta.t("users"), meta.t("articles")) else {
                return;
            };
            let (Some(user_id), Some(name), Some(author)) =
                (users.c("id"), users.c("name"), articles.c("author"))
            else {
                return;
            };
            let selection = select([name])
                .column(count(author).alias("n"))
                .join(articles, equal(user_id, author))
                .group_by([name])
                .order_by([name.desc()])
                .limit(10);
            black_box(selection.to_sql_args());
        });
    });
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_render,
    bench_in_list,
    bench_join
);
criterion_main!(benches);
