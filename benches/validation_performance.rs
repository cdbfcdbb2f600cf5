//! Performance benchmarks for form-validator.
//!
//! Covers single-field validation, whole-form validation, and validator
//! reads through a shared handle.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use form_validator::prelude::*;
use std::sync::{Arc, RwLock};

fn valid_values() -> FormValues {
    FormValues {
        name: "Grace Hopper".to_string(),
        email: "grace@navy.mil".to_string(),
        password: "Cobol1959".to_string(),
        age: "85".to_string(),
    }
}

/// Benchmark one field against passing and failing inputs
fn benchmark_validate_field(c: &mut Criterion) {
    let validator = FormValidator::new(RuleSettings::default()).unwrap();
    let inputs = [
        (Field::Name, "Grace Hopper"),
        (Field::Name, "Gr4ce"),
        (Field::Email, "grace@navy.mil"),
        (Field::Email, "not-an-email"),
        (Field::Password, "Cobol1959"),
        (Field::Password, "cobolcobol"),
        (Field::Age, "85"),
        (Field::Age, "0x55"),
        (Field::Age, "eighty"),
    ];

    let mut group = c.benchmark_group("validate_field");
    for (field, value) in inputs {
        group.bench_with_input(
            BenchmarkId::new(field.as_str(), value),
            &(field, value),
            |b, &(field, value)| {
                b.iter(|| black_box(validator.validate(field, black_box(value))));
            },
        );
    }
    group.finish();
}

/// Benchmark validating the whole form
fn benchmark_validate_all(c: &mut Criterion) {
    let validator = FormValidator::new(RuleSettings::default()).unwrap();
    let valid = valid_values();
    let empty = FormValues::default();

    let mut group = c.benchmark_group("validate_all");
    group.bench_function("all_valid", |b| {
        b.iter(|| black_box(validator.validate_all(black_box(&valid))));
    });
    group.bench_function("all_empty", |b| {
        b.iter(|| black_box(validator.validate_all(black_box(&empty))));
    });
    group.finish();
}

/// Benchmark handle reads against a lock-based alternative
fn benchmark_handle_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_reads");

    let handle = ValidatorHandle::new(FormValidator::new(RuleSettings::default()).unwrap());
    group.bench_function("arcswap_get", |b| {
        b.iter(|| {
            let validator = handle.get();
            black_box(validator.validate(Field::Age, "42"));
        });
    });

    let locked = RwLock::new(Arc::new(
        FormValidator::new(RuleSettings::default()).unwrap(),
    ));
    group.bench_function("rwlock_read", |b| {
        b.iter(|| {
            let validator = locked.read().unwrap();
            black_box(validator.validate(Field::Age, "42"));
        });
    });

    group.finish();
}

/// Benchmark rebuilding a validator, the cost paid on every reload
fn benchmark_rebuild(c: &mut Criterion) {
    let handle = ValidatorHandle::new(FormValidator::new(RuleSettings::default()).unwrap());
    let mut age_min = 13;

    c.bench_function("handle_update", |b| {
        b.iter(|| {
            age_min = if age_min == 13 { 18 } else { 13 };
            handle
                .update(RuleSettings {
                    age_min,
                    ..RuleSettings::default()
                })
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    benchmark_validate_field,
    benchmark_validate_all,
    benchmark_handle_reads,
    benchmark_rebuild,
);

criterion_main!(benches);
