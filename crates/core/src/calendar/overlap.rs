//! Overlap predicates for time-of-day and date periods.

use chrono::{Days, NaiveDate, NaiveTime};

/// Returns true if two time-of-day periods overlap.
///
/// Open-interval comparison: periods that merely touch at an endpoint
/// (one ends exactly when the other starts) do not overlap.
#[must_use]
pub fn time_periods_overlap(
    start1: NaiveTime,
    end1: NaiveTime,
    start2: NaiveTime,
    end2: NaiveTime,
) -> bool {
    start1 < end2 && end1 > start2
}

/// Last day of a closed date period starting at `start` and spanning `days`.
///
/// A period of 1 day ends on its start date. Saturates at the calendar
/// boundary instead of wrapping.
#[must_use]
pub fn period_end(start: NaiveDate, days: u32) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns true if two date periods overlap.
///
/// Each period is the closed interval `[start, start + days - 1]`; sharing
/// a boundary day counts as overlap.
#[must_use]
pub fn date_periods_overlap(start1: NaiveDate, days1: u32, start2: NaiveDate, days2: u32) -> bool {
    let end1 = period_end(start1, days1);
    let end2 = period_end(start2, days2);
    start1 <= end2 && end1 >= start2
}
