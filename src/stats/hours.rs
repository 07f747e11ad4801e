//! Class-hour totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::core::{ClassSession, Period};

/// Total scheduled hours of the sessions falling within `period`.
pub fn total_class_hours<'a>(
    sessions: impl IntoIterator<Item = &'a ClassSession>,
    period: Period,
) -> Decimal {
    sessions
        .into_iter()
        .filter(|s| period.contains(s.date))
        .map(ClassSession::duration_hours)
        .sum()
}

/// Hours per instructor within `period`. Sessions without an instructor
/// are not counted.
pub fn hours_by_instructor<'a>(
    sessions: impl IntoIterator<Item = &'a ClassSession>,
    period: Period,
) -> BTreeMap<String, Decimal> {
    let mut hours: BTreeMap<String, Decimal> = BTreeMap::new();
    for session in sessions.into_iter().filter(|s| period.contains(s.date)) {
        if let Some(instructor) = &session.instructor_id {
            *hours.entry(instructor.clone()).or_default() += session.duration_hours();
        }
    }
    hours
}
