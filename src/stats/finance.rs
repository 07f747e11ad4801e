//! Monthly billing buckets, overdue receipts and outstanding balance.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Receipt, ReceiptStatus};

/// Billing totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// Sum of non-cancelled receipts issued in the month.
    pub issued: Decimal,
    /// Sum of receipts paid in the month.
    pub collected: Decimal,
    /// Number of non-cancelled receipts issued in the month.
    pub count: usize,
}

/// Longest window [`monthly_buckets`] produces: one hundred years.
pub const MAX_BUCKET_MONTHS: u32 = 1200;

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Monthly totals for the `months` calendar months ending with the month of
/// `reference`, oldest first.
///
/// Every month in the window gets a bucket, empty months included, so the
/// output always has exactly `months` entries in calendar order regardless
/// of input order. Windows longer than [`MAX_BUCKET_MONTHS`] are cut to the
/// most recent [`MAX_BUCKET_MONTHS`] months.
pub fn monthly_buckets<'a>(
    receipts: impl IntoIterator<Item = &'a Receipt>,
    reference: NaiveDate,
    months: u32,
) -> Vec<MonthlyBucket> {
    if months == 0 {
        return Vec::new();
    }

    let months = months.min(MAX_BUCKET_MONTHS);
    let last = month_index(reference);
    let first = last - i64::from(months) + 1;
    let mut buckets: Vec<MonthlyBucket> = (first..=last)
        .map(|idx| MonthlyBucket {
            year: idx.div_euclid(12) as i32,
            month: idx.rem_euclid(12) as u32 + 1,
            issued: Decimal::ZERO,
            collected: Decimal::ZERO,
            count: 0,
        })
        .collect();

    let slot = |date: NaiveDate| -> Option<usize> {
        let idx = month_index(date);
        (first..=last).contains(&idx).then(|| (idx - first) as usize)
    };

    for receipt in receipts {
        if receipt.status == ReceiptStatus::Cancelled {
            continue;
        }
        if let Some(i) = slot(receipt.issue_date) {
            buckets[i].issued += receipt.amount;
            buckets[i].count += 1;
        }
        if receipt.status == ReceiptStatus::Paid {
            if let Some(i) = receipt.paid_on.and_then(slot) {
                buckets[i].collected += receipt.amount;
            }
        }
    }

    buckets
}

/// Pending receipts whose due date is before `today`.
pub fn overdue_receipts<'a>(
    receipts: impl IntoIterator<Item = &'a Receipt>,
    today: NaiveDate,
) -> Vec<&'a Receipt> {
    receipts
        .into_iter()
        .filter(|r| r.status == ReceiptStatus::Pending && r.due_date < today)
        .collect()
}

/// Sum of all pending receipts.
pub fn outstanding_total<'a>(receipts: impl IntoIterator<Item = &'a Receipt>) -> Decimal {
    receipts
        .into_iter()
        .filter(|r| r.status == ReceiptStatus::Pending)
        .map(|r| r.amount)
        .sum()
}
