// Predicate construction and check throughput for textshape-validator
// Run with: cargo bench --bench validators

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use textshape_validator::{Configuration, FqdnOptions, ValidationMode};

// ================================
// Construction
// ================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    let config = Configuration::new(ValidationMode::Strict);

    group.bench_function("is_email", |b| b.iter(|| black_box(config.is_email())));
    group.bench_function("is_phone", |b| {
        b.iter(|| config.is_phone(black_box("en-US")))
    });
    group.bench_function("is_before", |b| {
        b.iter(|| config.is_before(black_box("01/06/2020")))
    });
    group.bench_function("predicate_for", |b| {
        b.iter(|| config.predicate_for(black_box("isISBN"), black_box(&["13"])))
    });

    group.finish();
}

// ================================
// Structural validators
// ================================

fn benchmark_structural(c: &mut Criterion) {
    let mut group = c.benchmark_group("check/structural");
    let config = Configuration::new(ValidationMode::Strict);

    let ipv6 = config.is_ipv6();
    for address in ["::", "2001:db8::1", "::ffff:192.0.2.1", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"] {
        group.bench_with_input(BenchmarkId::new("ipv6", address), address, |b, value| {
            b.iter(|| ipv6.check(black_box(value)))
        });
    }

    let isbn10 = config.is_isbn10();
    let isbn13 = config.is_isbn13();
    group.bench_function("isbn10", |b| b.iter(|| isbn10.check(black_box("0-306-40615-2"))));
    group.bench_function("isbn13", |b| {
        b.iter(|| isbn13.check(black_box("978-0-306-40615-7")))
    });

    let fqdn = config.is_fqdn(FqdnOptions::DEFAULT);
    group.bench_function("fqdn", |b| {
        b.iter(|| fqdn.check(black_box("api.eu-west-1.example.com")))
    });

    group.finish();
}

// ================================
// Pattern validators
// ================================

fn benchmark_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("check/pattern");
    let config = Configuration::new(ValidationMode::Strict);

    let email = config.is_email();
    let card = config.is_credit_card();
    let date = config.is_date();
    let length = config.min_length(8);

    group.bench_function("email", |b| {
        b.iter(|| email.check(black_box("first.last@example.com")))
    });
    group.bench_function("credit_card", |b| {
        b.iter(|| card.check(black_box("4111 1111 1111 1111")))
    });
    group.bench_function("date", |b| b.iter(|| date.check(black_box("25/12/2020"))));
    group.bench_function("min_length_graphemes", |b| {
        b.iter(|| length.check(black_box("naïve café façade")))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_structural,
    benchmark_patterns
);
criterion_main!(benches);
