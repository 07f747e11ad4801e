//! Home dashboard figures composed from the other aggregations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::summarize_attendance;
use super::finance::{outstanding_total, overdue_receipts};
use super::occupancy::{OccupancyLevel, course_occupancy};
use super::schedule::{month_of, sessions_this_week};
use crate::core::{AcademyConfig, AcademyRecords};

/// Figures shown on the home dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_students: usize,
    pub active_courses: usize,
    pub sessions_this_week: usize,
    /// Attendance rate over the current calendar month.
    pub attendance_rate: Option<Decimal>,
    pub outstanding: Decimal,
    pub overdue_receipts: usize,
    /// Active courses with no free seats.
    pub full_courses: usize,
    /// Active courses with 1 to 3 free seats.
    pub near_full_courses: usize,
}

/// Compute the dashboard for `today`.
pub fn dashboard_summary(
    records: &AcademyRecords,
    today: NaiveDate,
    config: &AcademyConfig,
) -> DashboardSummary {
    let month = month_of(today);
    let attendance = summarize_attendance(
        records
            .attendance
            .iter()
            .filter(|a| month.contains(a.date) && a.date <= today),
    );

    let mut full_courses = 0;
    let mut near_full_courses = 0;
    for course in records.courses.iter().filter(|c| c.active) {
        match course_occupancy(course, &records.enrollments).level {
            OccupancyLevel::Full => full_courses += 1,
            OccupancyLevel::NearFull => near_full_courses += 1,
            OccupancyLevel::Open => {}
        }
    }

    DashboardSummary {
        active_students: records.students.iter().filter(|s| s.active).count(),
        active_courses: records.courses.iter().filter(|c| c.active).count(),
        sessions_this_week: sessions_this_week(&records.sessions, today, config.week_start),
        attendance_rate: attendance.attendance_rate(),
        outstanding: outstanding_total(&records.receipts),
        overdue_receipts: overdue_receipts(&records.receipts, today).len(),
        full_courses,
        near_full_courses,
    }
}
