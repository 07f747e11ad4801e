//! Derived views for dashboards and schedules.
//!
//! Every function here is a pure aggregation over borrowed records: the
//! output is recomputed from scratch on each call and depends only on the
//! arguments. Time-relative views take the reference date explicitly and
//! never read the clock.
//!
//! # Example
//!
//! ```
//! use academy::stats::*;
//!
//! let seats = classify_occupancy(10, 7);
//! assert_eq!(seats.level, OccupancyLevel::NearFull);
//! assert_eq!(seats.available, 3);
//! ```

mod attendance;
mod dashboard;
mod finance;
mod hours;
mod occupancy;
mod schedule;

pub use attendance::{AttendanceSummary, attendance_by_student, summarize_attendance};
pub use dashboard::{DashboardSummary, dashboard_summary};
pub use finance::{
    MAX_BUCKET_MONTHS, MonthlyBucket, monthly_buckets, outstanding_total, overdue_receipts,
};
pub use hours::{hours_by_instructor, total_class_hours};
pub use occupancy::{
    NEAR_FULL_SEATS, OccupancyLevel, SeatAvailability, classify_occupancy, course_occupancy,
};
pub use schedule::{month_of, sessions_by_day, sessions_this_week, week_of};
