use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_fx::currency::CurrencyCode;
use rusty_fx::fx::{RateResolver, RateTable};

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::new(s).unwrap()
}

fn benchmark_direct_conversion(c: &mut Criterion) {
    let resolver = RateResolver::new(RateTable::reference());
    let (usd, eur) = (code("USD"), code("EUR"));

    c.bench_function("convert_direct", |b| {
        b.iter(|| resolver.convert(black_box(100.0), &usd, &eur));
    });
}

fn benchmark_bridged_conversion(c: &mut Criterion) {
    let resolver = RateResolver::new(RateTable::reference());
    let (cad, aud) = (code("CAD"), code("AUD"));

    c.bench_function("convert_bridged", |b| {
        b.iter(|| resolver.convert(black_box(200.0), &cad, &aud));
    });
}

fn benchmark_large_table(c: &mut Criterion) {
    // 500 currencies quoted against USD only
    let mut table = RateTable::new();
    for i in 0..500 {
        let other = code(&format!("C{:03}", i));
        table
            .insert(other, CurrencyCode::usd(), 1.0 + i as f64 / 1000.0)
            .unwrap();
    }
    let resolver = RateResolver::new(table);
    let (from, to) = (code("C010"), code("C490"));

    c.bench_function("convert_bridged_500_currencies", |b| {
        b.iter(|| resolver.convert(black_box(1.0), &from, &to));
    });
}

fn benchmark_request_parsing(c: &mut Criterion) {
    c.bench_function("parse_request", |b| {
        b.iter(|| black_box("100 usd eur").parse::<rusty_fx::fx::ConversionRequest>());
    });
}

criterion_group!(
    benches,
    benchmark_direct_conversion,
    benchmark_bridged_conversion,
    benchmark_large_table,
    benchmark_request_parsing
);
criterion_main!(benches);
