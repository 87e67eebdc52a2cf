//! Business-day queries and monthly weekday counting.

use chrono::{Datelike, NaiveDate};

use super::holiday::HolidayCalendar;

/// Returns true if the day is a weekday and not a holiday.
#[must_use]
pub fn is_business_day(day: NaiveDate, holidays: &impl HolidayCalendar) -> bool {
    day.weekday().num_days_from_monday() < 5 && !holidays.is_holiday(day)
}

/// Number of calendar days in a month, or `None` for an invalid month/year.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first_of_next_month(year, month)?;
    u32::try_from((next - first).num_days()).ok()
}

/// Number of weekday (Mon-Fri) calendar slots in a month, or `None` for an
/// invalid month/year.
///
/// Counted purely from weekday position; the holiday table is NOT consulted.
/// Monthly aggregation is specified against this holiday-blind count.
#[must_use]
pub fn weekday_slots_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first_of_next_month(year, month)?;

    let slots = first
        .iter_days()
        .take_while(|day| *day < next)
        .filter(|day| day.weekday().num_days_from_monday() < 5)
        .count();
    u32::try_from(slots).ok()
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}
