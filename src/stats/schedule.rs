//! Calendar windows and per-day grouping of classes.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::core::{ClassSession, Period};

/// The week containing `date`, starting on `week_start`.
///
/// Weeks that run past either end of the calendar are clamped to
/// [`NaiveDate::MIN`] or [`NaiveDate::MAX`].
pub fn week_of(date: NaiveDate, week_start: Weekday) -> Period {
    let offset = (date.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    let start = date
        .checked_sub_signed(Duration::days(i64::from(offset)))
        .unwrap_or(NaiveDate::MIN);
    let end = date
        .checked_add_signed(Duration::days(i64::from(6 - offset)))
        .unwrap_or(NaiveDate::MAX);
    Period::new(start, end)
}

/// The calendar month containing `date`.
pub fn month_of(date: NaiveDate) -> Period {
    let start = date.with_day(1).unwrap_or(date);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(date);
    Period::new(start, end)
}

/// Sessions within `period` grouped by day, each day ordered by start time.
pub fn sessions_by_day<'a>(
    sessions: impl IntoIterator<Item = &'a ClassSession>,
    period: Period,
) -> BTreeMap<NaiveDate, Vec<&'a ClassSession>> {
    let mut days: BTreeMap<NaiveDate, Vec<&'a ClassSession>> = BTreeMap::new();
    for session in sessions.into_iter().filter(|s| period.contains(s.date)) {
        days.entry(session.date).or_default().push(session);
    }
    for day in days.values_mut() {
        day.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
    }
    days
}

/// Number of sessions in the week containing `today`.
pub fn sessions_this_week<'a>(
    sessions: impl IntoIterator<Item = &'a ClassSession>,
    today: NaiveDate,
    week_start: Weekday,
) -> usize {
    let week = week_of(today, week_start);
    sessions
        .into_iter()
        .filter(|s| week.contains(s.date))
        .count()
}
