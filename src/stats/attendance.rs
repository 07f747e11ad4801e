//! Attendance counts and rates.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{AttendanceRecord, AttendanceStatus};

/// Per-status attendance counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub justified: usize,
}

impl AttendanceSummary {
    fn add(&mut self, status: AttendanceStatus) {
        self.total += 1;
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Justified => self.justified += 1,
        }
    }

    /// Share of records where the student attended (present or late), as a
    /// percentage rounded half-up to 2 decimal places. `None` when empty.
    pub fn attendance_rate(&self) -> Option<Decimal> {
        if self.total == 0 {
            return None;
        }
        let attended = Decimal::from(self.present + self.late);
        let rate = attended * Decimal::ONE_HUNDRED / Decimal::from(self.total);
        Some(rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Count attendance records by status.
///
/// Callers filter by course, student or date range before passing records in.
pub fn summarize_attendance<'a>(
    records: impl IntoIterator<Item = &'a AttendanceRecord>,
) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for record in records {
        summary.add(record.status);
    }
    summary
}

/// Attendance summaries keyed by student id.
pub fn attendance_by_student<'a>(
    records: impl IntoIterator<Item = &'a AttendanceRecord>,
) -> BTreeMap<String, AttendanceSummary> {
    let mut by_student: BTreeMap<String, AttendanceSummary> = BTreeMap::new();
    for record in records {
        by_student
            .entry(record.student_id.clone())
            .or_default()
            .add(record.status);
    }
    by_student
}
