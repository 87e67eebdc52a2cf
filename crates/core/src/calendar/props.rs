//! Property-based tests for calendar utilities.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::overlap::{date_periods_overlap, time_periods_overlap};
use super::shift::shift_hours;

fn any_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..86_400).prop_map(|secs| {
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).expect("in range")
    })
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("in range"))
}

proptest! {
    /// Time-period overlap does not depend on argument order.
    #[test]
    fn test_time_overlap_symmetric(
        s1 in any_time(), e1 in any_time(),
        s2 in any_time(), e2 in any_time(),
    ) {
        prop_assert_eq!(
            time_periods_overlap(s1, e1, s2, e2),
            time_periods_overlap(s2, e2, s1, e1)
        );
    }

    /// Shift duration is bounded: the raw span is below 24h, and the break
    /// deduction can only shorten it.
    #[test]
    fn test_shift_hours_bounds(start in any_time(), end in any_time()) {
        let hours = shift_hours(start, end);
        prop_assert!(hours >= Decimal::ZERO);
        prop_assert!(hours < Decimal::from(24));
    }

    /// Spans of at most 6h are returned exactly; longer spans lose exactly
    /// one hour of unpaid break.
    #[test]
    fn test_shift_hours_break_rule(start in any_time(), end in any_time()) {
        let mut span_secs = (end - start).num_seconds();
        if span_secs < 0 {
            span_secs += 86_400;
        }
        let raw = Decimal::from(span_secs) / Decimal::from(3_600);

        let expected = if raw > Decimal::from(6) {
            raw - Decimal::ONE
        } else {
            raw
        };
        prop_assert_eq!(shift_hours(start, end), expected);
    }

    /// Date-period overlap does not depend on argument order.
    #[test]
    fn test_date_overlap_symmetric(
        s1 in any_date(), d1 in 1u32..60,
        s2 in any_date(), d2 in 1u32..60,
    ) {
        prop_assert_eq!(
            date_periods_overlap(s1, d1, s2, d2),
            date_periods_overlap(s2, d2, s1, d1)
        );
    }

    /// A single-day period overlaps a multi-day period exactly when the day
    /// falls inside the closed interval.
    #[test]
    fn test_single_day_overlap_matches_interval(
        start in any_date(), days in 1u32..60, offset in 0i64..120,
    ) {
        let day = start + chrono::Duration::days(offset);
        let inside = offset < i64::from(days);
        prop_assert_eq!(date_periods_overlap(start, days, day, 1), inside);
    }
}
