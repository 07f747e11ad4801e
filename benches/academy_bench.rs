use chrono::{NaiveDate, NaiveTime, Weekday};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use academy::core::*;
use academy::stats::*;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, 1).unwrap()
}

fn build_receipts(n: i64) -> Vec<Receipt> {
    (0..n)
        .map(|i| {
            let issued = start_date() + chrono::Duration::days(i % 400);
            let builder = ReceiptBuilder::new(format!("REC-{i:05}"), format!("st-{}", i % 150), Decimal::new(6500, 2), issued)
                .concept("Monthly fee")
                .due_date(issued + chrono::Duration::days(10));
            let builder = if i % 3 == 0 {
                builder
            } else {
                builder.paid_on(issued + chrono::Duration::days(2))
            };
            builder.build_unchecked().unwrap()
        })
        .collect()
}

fn build_sessions(n: i64) -> Vec<ClassSession> {
    (0..n)
        .map(|i| ClassSession {
            id: format!("s{i}"),
            course_id: format!("c{}", i % 20),
            instructor_id: Some(format!("in-{}", i % 8)),
            date: start_date() + chrono::Duration::days(i % 300),
            start: NaiveTime::from_hms_opt(9 + (i % 10) as u32, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(10 + (i % 10) as u32, 30, 0).unwrap(),
            room: None,
        })
        .collect()
}

fn bench_document_number(c: &mut Criterion) {
    c.bench_function("document_number_valid", |b| {
        b.iter(|| black_box(is_valid_document_number(black_box("12345678Z"))));
    });
}

fn bench_iban(c: &mut Criterion) {
    c.bench_function("iban_valid_spaced", |b| {
        b.iter(|| black_box(is_valid_iban(black_box("ES91 2100 0418 4502 0005 1332"))));
    });
    c.bench_function("bank_identifier_lookup", |b| {
        b.iter(|| black_box(resolve_bank_identifier(black_box("ES9121000418450200051332"))));
    });
}

fn bench_monthly_buckets(c: &mut Criterion) {
    let receipts = build_receipts(5_000);
    let reference = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
    c.bench_function("monthly_buckets_5000_receipts_12_months", |b| {
        b.iter(|| black_box(monthly_buckets(black_box(&receipts), reference, 12)));
    });
}

fn bench_schedule(c: &mut Criterion) {
    let sessions = build_sessions(5_000);
    let week = week_of(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), Weekday::Mon);
    c.bench_function("sessions_by_day_5000", |b| {
        b.iter(|| black_box(sessions_by_day(black_box(&sessions), week)));
    });
    let year = Period::new(start_date(), start_date() + chrono::Duration::days(365));
    c.bench_function("hours_by_instructor_5000", |b| {
        b.iter(|| black_box(hours_by_instructor(black_box(&sessions), year)));
    });
}

criterion_group!(
    benches,
    bench_document_number,
    bench_iban,
    bench_monthly_buckets,
    bench_schedule,
);
criterion_main!(benches);
