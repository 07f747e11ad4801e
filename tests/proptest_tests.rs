//! Property-based tests for the validators and aggregations.
//!
//! Run with: `cargo test --features all --test proptest_tests`

use academy::core::*;
use proptest::prelude::*;

/// Build a checksum-valid 24-character IBAN from a 20-digit BBAN.
fn with_check_digits(country: &str, bban: &str) -> String {
    let rem = iban_remainder(&format!("{country}00{bban}")).unwrap();
    format!("{country}{:02}{bban}", 98 - rem)
}

fn arb_bban() -> impl Strategy<Value = String> {
    "[0-9]{20}"
}

proptest! {
    #[test]
    fn document_letter_iff_checksum(n in 0u32..100_000_000, letter in proptest::char::range('A', 'Z'), lower in any::<bool>()) {
        let letter = if lower { letter.to_ascii_lowercase() } else { letter };
        let value = format!("{n:08}{letter}");
        let expected = LETTER_SEQUENCE[(n % 23) as usize] as char;
        prop_assert_eq!(
            is_valid_document_number(&value),
            letter.to_ascii_uppercase() == expected
        );
    }

    #[test]
    fn document_never_panics(s in "\\PC*") {
        let _ = is_valid_document_number(&s);
    }

    #[test]
    fn document_rejects_off_pattern(s in "[0-9A-Za-z ]{0,12}") {
        let bytes = s.as_bytes();
        let on_pattern = bytes.len() == 9
            && bytes[..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_alphabetic();
        if !on_pattern {
            prop_assert!(!is_valid_document_number(&s));
        }
    }

    #[test]
    fn generated_iban_is_valid(bban in arb_bban()) {
        let iban = with_check_digits("ES", &bban);
        prop_assert!(is_valid_iban(&iban), "{}", iban);
        prop_assert_eq!(iban_remainder(&iban), Some(1));
        prop_assert!(is_valid_iban(&format_iban(&iban).to_lowercase()));
    }

    #[test]
    fn generated_iban_agrees_with_iban_validate(bban in arb_bban()) {
        let iban = with_check_digits("ES", &bban);
        prop_assert!(iban.parse::<iban::Iban>().is_ok(), "{}", iban);
    }

    #[test]
    fn single_digit_mutation_detected(bban in arb_bban(), pos in 2usize..24, delta in 1u8..10) {
        let iban = with_check_digits("ES", &bban);
        let mut bytes = iban.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert!(!is_valid_iban(&mutated), "{}", mutated);
    }

    #[test]
    fn iban_never_panics(s in "\\PC*") {
        let _ = is_valid_iban(&s);
        let _ = resolve_bank_identifier(&s);
        let _ = iban_remainder(&s);
        let _ = format_iban(&s);
    }

    #[test]
    fn bank_lookup_ignores_checksum(bban in arb_bban(), check in 0u32..100) {
        let valid = with_check_digits("ES", &bban);
        let arbitrary = format!("ES{check:02}{bban}");
        prop_assert_eq!(resolve_bank_identifier(&valid), resolve_bank_identifier(&arbitrary));
    }
}

#[cfg(feature = "stats")]
mod aggregations {
    use academy::core::*;
    use academy::stats::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn arb_receipt() -> impl Strategy<Value = Receipt> {
        (0i64..730, 1i64..100_000, 0u8..3, 0i64..60).prop_map(|(day, cents, status, delay)| {
            let issue_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Duration::days(day);
            let status = match status {
                0 => ReceiptStatus::Pending,
                1 => ReceiptStatus::Paid,
                _ => ReceiptStatus::Cancelled,
            };
            Receipt {
                number: format!("R-{day}-{cents}"),
                student_id: "st".into(),
                concept: "fee".into(),
                amount: Decimal::new(cents, 2),
                issue_date,
                due_date: issue_date + chrono::Duration::days(10),
                status,
                paid_on: (status == ReceiptStatus::Paid)
                    .then(|| issue_date + chrono::Duration::days(delay)),
            }
        })
    }

    proptest! {
        #[test]
        fn buckets_are_calendar_ordered(receipts in prop::collection::vec(arb_receipt(), 0..40), months in 1u32..30) {
            let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let buckets = monthly_buckets(&receipts, reference, months);
            prop_assert_eq!(buckets.len(), months as usize);
            for pair in buckets.windows(2) {
                prop_assert!((pair[0].year, pair[0].month) < (pair[1].year, pair[1].month));
            }
            let last = buckets.last().unwrap();
            prop_assert_eq!((last.year, last.month), (2024, 6));
        }

        #[test]
        fn buckets_independent_of_order(mut receipts in prop::collection::vec(arb_receipt(), 0..40)) {
            let reference = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            let before = monthly_buckets(&receipts, reference, 24);
            receipts.reverse();
            prop_assert_eq!(before.clone(), monthly_buckets(&receipts, reference, 24));
            prop_assert_eq!(before, monthly_buckets(&receipts, reference, 24));
        }

        #[test]
        fn full_window_issued_matches_total(receipts in prop::collection::vec(arb_receipt(), 0..40)) {
            // 2023-01 .. 2024-12 covers every generated issue date.
            let reference = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            let issued: Decimal = monthly_buckets(&receipts, reference, 24)
                .iter()
                .map(|b| b.issued)
                .sum();
            let expected: Decimal = receipts
                .iter()
                .filter(|r| r.status != ReceiptStatus::Cancelled)
                .map(|r| r.amount)
                .sum();
            prop_assert_eq!(issued, expected);
        }

        #[test]
        fn occupancy_levels_partition(capacity in 0u32..200, active in 0u32..200) {
            let s = classify_occupancy(capacity, active);
            prop_assert_eq!(s.available, i64::from(capacity) - i64::from(active));
            let expected = if s.available <= 0 {
                OccupancyLevel::Full
            } else if s.available <= 3 {
                OccupancyLevel::NearFull
            } else {
                OccupancyLevel::Open
            };
            prop_assert_eq!(s.level, expected);
        }
    }
}
