//! Benchmark for table reshaping.
//!
//! Measures pivoting and unpivoting as the number of groups and attribute
//! columns grows.

use adjunct::table::{pivot, unpivot, unpivot_rest};
use adjunct::value::Row;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn wide_rows(row_count: usize, column_count: usize) -> (Vec<String>, Vec<Row>) {
    let columns: Vec<String> = (0..column_count).map(|index| format!("c{index}")).collect();
    let rows = (0..row_count)
        .map(|row_index| {
            let mut row = Row::new();
            row.insert("key".to_string(), json!(format!("k{row_index}")));
            for (position, column) in columns.iter().enumerate() {
                row.insert(column.clone(), json!(row_index * column_count + position));
            }
            row
        })
        .collect();
    (columns, rows)
}

// =============================================================================
// 1. Unpivot
// =============================================================================

fn benchmark_unpivot(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unpivot");

    for row_count in [10, 100, 1_000] {
        let (columns, rows) = wide_rows(row_count, 8);
        let names: Vec<&str> = columns.iter().map(String::as_str).collect();

        group.bench_with_input(BenchmarkId::new("listed", row_count), &rows, |bencher, rows| {
            bencher.iter(|| black_box(unpivot(&names, "attribute", "value", black_box(rows))));
        });
        group.bench_with_input(BenchmarkId::new("rest", row_count), &rows, |bencher, rows| {
            bencher.iter(|| black_box(unpivot_rest(&["key"], "attribute", "value", black_box(rows))));
        });
    }

    group.finish();
}

// =============================================================================
// 2. Pivot
// =============================================================================

fn benchmark_pivot(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pivot");

    for column_count in [2, 8, 32] {
        let (columns, rows) = wide_rows(200, column_count);
        let names: Vec<&str> = columns.iter().map(String::as_str).collect();
        let long = unpivot(&names, "attribute", "value", &rows);

        group.bench_with_input(
            BenchmarkId::from_parameter(column_count),
            &long,
            |bencher, long| {
                bencher.iter(|| black_box(pivot("attribute", "value", black_box(long))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_unpivot, benchmark_pivot);
criterion_main!(benches);
