//! Shift duration computation.

use chrono::NaiveTime;
use rust_decimal::Decimal;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Hours worked in a shift, with the automatic break deduction.
///
/// An end time earlier than the start time means the shift crosses
/// midnight. A raw span of more than 6 hours deducts 1 hour of unpaid
/// break. The result is never negative.
#[must_use]
pub fn shift_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut span_secs = (end - start).num_seconds();
    if span_secs < 0 {
        span_secs += SECONDS_PER_DAY;
    }

    let hours = Decimal::from(span_secs) / Decimal::from(SECONDS_PER_HOUR);

    if hours > Decimal::from(6) {
        hours - Decimal::ONE
    } else {
        hours
    }
}
