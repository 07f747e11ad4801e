//! Seat occupancy thresholds.
//!
//! - No seats left (or overbooked): full
//! - At most 3 seats left: near full
//! - Otherwise: open

use serde::{Deserialize, Serialize};

use crate::core::{Course, Enrollment};

/// Courses with at most this many free seats are near full.
pub const NEAR_FULL_SEATS: i64 = 3;

/// Occupancy classification of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyLevel {
    Full,
    NearFull,
    Open,
}

/// Seat availability of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAvailability {
    pub capacity: u32,
    pub active: u32,
    /// `capacity - active`; negative when overbooked.
    pub available: i64,
    pub level: OccupancyLevel,
}

/// Classify a course by its free seats.
pub fn classify_occupancy(capacity: u32, active: u32) -> SeatAvailability {
    let available = i64::from(capacity) - i64::from(active);
    let level = if available <= 0 {
        OccupancyLevel::Full
    } else if available <= NEAR_FULL_SEATS {
        OccupancyLevel::NearFull
    } else {
        OccupancyLevel::Open
    };
    SeatAvailability {
        capacity,
        active,
        available,
        level,
    }
}

/// Classify `course` counting its active enrollments.
pub fn course_occupancy<'a>(
    course: &Course,
    enrollments: impl IntoIterator<Item = &'a Enrollment>,
) -> SeatAvailability {
    let active = enrollments
        .into_iter()
        .filter(|e| e.course_id == course.id && e.is_active())
        .count();
    classify_occupancy(course.capacity, u32::try_from(active).unwrap_or(u32::MAX))
}
