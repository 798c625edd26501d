use criterion::{Criterion, black_box, criterion_group, criterion_main};
use groundwater_analytics::{Dataset, diagnose_location};
use std::fmt::Write;

const HEADER: &str = "Location,Year,Water_Level,Rainfall,Groundwater_Depletion,pH,Agricultural_Usage,Industrial_Usage,Household_Usage";

/// 200 locations with 25 years each
fn synthetic_table() -> String {
    let mut table = String::from(HEADER);
    for well in 0..200 {
        for year in 2000..2025 {
            let drift = (year - 2000) as f64 * 0.3;
            let _ = write!(
                table,
                "\nWell {:03},{},{:.1},{},{},{:.1},{},{},{}",
                well,
                year,
                4.0 + (well % 17) as f64 + drift,
                600 + (well * 7 + year) % 700,
                (well * 3 + year) % 90,
                6.4 + (well % 25) as f64 * 0.1,
                200 + well % 300,
                40 + well % 120,
                30 + well % 60,
            );
        }
    }
    table.push('\n');
    table
}

fn bench_parse(c: &mut Criterion) {
    let table = synthetic_table();
    c.bench_function("parse 5000 rows", |b| {
        b.iter(|| Dataset::parse(black_box(&table)))
    });
}

fn bench_diagnose(c: &mut Criterion) {
    let dataset = match Dataset::parse(&synthetic_table()) {
        Ok(dataset) => dataset,
        Err(e) => panic!("synthetic table failed to parse: {}", e),
    };

    c.bench_function("diagnose one location", |b| {
        b.iter(|| diagnose_location(black_box(&dataset), black_box("well 117"), 5))
    });

    c.bench_function("diagnose unknown location", |b| {
        b.iter(|| diagnose_location(black_box(&dataset), black_box("Nowhere"), 5))
    });
}

criterion_group!(benches, bench_parse, bench_diagnose);
criterion_main!(benches);
