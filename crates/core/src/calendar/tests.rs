//! Unit tests for calendar utilities.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;

use super::business::{days_in_month, is_business_day, weekday_slots_in_month};
use super::holiday::{HolidayCalendar, HolidaySet};
use super::overlap::{date_periods_overlap, period_end, time_periods_overlap};
use super::shift::shift_hours;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[rstest]
#[case(time(9, 0), time(12, 0), dec!(3))]
#[case(time(8, 0), time(14, 0), dec!(6))] // exactly 6h: no break
#[case(time(8, 0), time(14, 30), dec!(5.5))] // 6.5h raw: break deducted
#[case(time(8, 0), time(17, 0), dec!(8))] // 9h raw: break deducted
#[case(time(23, 0), time(1, 0), dec!(2))] // crosses midnight, no break
#[case(time(22, 0), time(6, 0), dec!(7))] // crosses midnight, break deducted
#[case(time(9, 0), time(9, 0), dec!(0))] // zero-length shift
fn test_shift_hours(
    #[case] start: chrono::NaiveTime,
    #[case] end: chrono::NaiveTime,
    #[case] expected: rust_decimal::Decimal,
) {
    assert_eq!(shift_hours(start, end), expected);
}

#[test]
fn test_time_periods_touching_do_not_overlap() {
    assert!(!time_periods_overlap(
        time(9, 0),
        time(12, 0),
        time(12, 0),
        time(15, 0)
    ));
}

#[test]
fn test_time_periods_one_minute_past_overlaps() {
    assert!(time_periods_overlap(
        time(9, 0),
        time(12, 1),
        time(12, 0),
        time(15, 0)
    ));
}

#[test]
fn test_time_periods_overlap_is_symmetric() {
    assert!(time_periods_overlap(
        time(12, 0),
        time(15, 0),
        time(9, 0),
        time(12, 1)
    ));
}

#[test]
fn test_contained_period_overlaps() {
    assert!(time_periods_overlap(
        time(10, 0),
        time(11, 0),
        time(9, 0),
        time(17, 0)
    ));
}

#[test]
fn test_period_end_single_day() {
    assert_eq!(period_end(date(2024, 1, 1), 1), date(2024, 1, 1));
}

#[test]
fn test_period_end_spans_month_boundary() {
    assert_eq!(period_end(date(2024, 1, 30), 5), date(2024, 2, 3));
}

#[test]
fn test_date_periods_sharing_boundary_day_overlap() {
    assert!(date_periods_overlap(date(2024, 1, 1), 5, date(2024, 1, 5), 1));
}

#[test]
fn test_date_periods_adjacent_do_not_overlap() {
    assert!(!date_periods_overlap(
        date(2024, 1, 1),
        5,
        date(2024, 1, 6),
        1
    ));
}

#[rstest]
#[case(2024, 1, 23)] // starts on a Monday, 31 days
#[case(2024, 2, 21)] // leap February
#[case(2024, 4, 22)]
#[case(2023, 12, 21)]
fn test_weekday_slots_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
    assert_eq!(weekday_slots_in_month(year, month), Some(expected));
}

#[test]
fn test_weekday_slots_ignore_holidays() {
    // The monthly slot count is holiday-blind on purpose: New Year's Day
    // 2024 is a Monday and still counts as a slot.
    assert_eq!(weekday_slots_in_month(2024, 1), Some(23));
}

#[rstest]
#[case(2024, 2, Some(29))]
#[case(2023, 2, Some(28))]
#[case(2024, 4, Some(30))]
#[case(2024, 12, Some(31))]
#[case(2024, 13, None)]
#[case(2024, 0, None)]
fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: Option<u32>) {
    assert_eq!(days_in_month(year, month), expected);
}

#[test]
fn test_business_day_weekday_without_holiday() {
    let holidays = HolidaySet::default();
    assert!(is_business_day(date(2024, 1, 2), &holidays)); // Tuesday
}

#[test]
fn test_business_day_excludes_weekends() {
    let holidays = HolidaySet::default();
    assert!(!is_business_day(date(2024, 1, 6), &holidays)); // Saturday
    assert!(!is_business_day(date(2024, 1, 7), &holidays)); // Sunday
}

#[test]
fn test_business_day_excludes_holidays() {
    let holidays: HolidaySet = [date(2024, 1, 1)].into_iter().collect();
    assert!(holidays.is_holiday(date(2024, 1, 1)));
    assert!(!is_business_day(date(2024, 1, 1), &holidays)); // Monday, holiday
    assert!(is_business_day(date(2024, 1, 8), &holidays)); // Monday, ordinary
}

#[test]
fn test_holiday_set_len() {
    let holidays = HolidaySet::new([date(2024, 1, 1), date(2024, 12, 25)]);
    assert_eq!(holidays.len(), 2);
    assert!(!holidays.is_empty());
}
