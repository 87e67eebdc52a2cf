//! Unit tests for the aggregation engine, run against the in-memory store.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal_macros::dec;
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use super::{SummaryError, SummaryService};
use crate::entry::{AbsenceType, EntryStore, InMemoryStore, NonAccountingEntry, TimeEntry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn service() -> (Arc<InMemoryStore>, SummaryService<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let summaries = SummaryService::new(Arc::clone(&store));
    (store, summaries)
}

async fn seed_shift(
    store: &InMemoryStore,
    owner: UserId,
    on: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) {
    store
        .insert_time_entry(TimeEntry {
            id: TimeEntryId::new(),
            owner,
            date: on,
            start_time: start,
            end_time: end,
            comment: None,
        })
        .await
        .expect("seed shift");
}

async fn seed_absence(
    store: &InMemoryStore,
    owner: UserId,
    start: NaiveDate,
    days: u32,
    kind: AbsenceType,
) {
    store
        .insert_non_accounting_entry(NonAccountingEntry {
            id: NonAccountingEntryId::new(),
            owner,
            start_date: start,
            days,
            kind,
            comment: None,
        })
        .await
        .expect("seed absence");
}

/// First `count` weekdays of a month.
fn weekdays_of(year: i32, month: u32, count: usize) -> Vec<NaiveDate> {
    let first = date(year, month, 1);
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| d.weekday().num_days_from_monday() < 5)
        .take(count)
        .collect()
}

#[tokio::test]
async fn test_empty_month_summary() {
    let (_store, summaries) = service();
    let owner = UserId::new();

    // April 2024: 30 days, 22 weekday slots.
    let summary = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(summary.total_days, 30);
    assert_eq!(summary.non_accounting_days, 0);
    assert_eq!(summary.working_days, 22);
    assert_eq!(summary.expected_hours, dec!(176));
    assert_eq!(summary.worked_hours, dec!(0));
    assert_eq!(summary.balance_hours, dec!(-176));
}

#[tokio::test]
async fn test_month_summary_with_worked_hours() {
    let (store, summaries) = service();
    let owner = UserId::new();

    // Twenty 9h-raw shifts, 8h each after the break: 160 worked hours
    // against 22 slots * 8h = 176 expected.
    for day in weekdays_of(2024, 4, 20) {
        seed_shift(&store, owner, day, time(9, 0), time(18, 0)).await;
    }

    let summary = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(summary.working_days, 22);
    assert_eq!(summary.expected_hours, dec!(176));
    assert_eq!(summary.worked_hours, dec!(160));
    assert_eq!(summary.balance_hours, dec!(-16));
}

#[tokio::test]
async fn test_worked_hours_apply_break_rule_per_shift() {
    let (store, summaries) = service();
    let owner = UserId::new();

    seed_shift(&store, owner, date(2024, 4, 1), time(8, 0), time(17, 0)).await; // 8h net
    seed_shift(&store, owner, date(2024, 4, 2), time(9, 0), time(12, 0)).await; // 3h, no break

    let summary = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(summary.worked_hours, dec!(11));
}

#[tokio::test]
async fn test_non_accounting_days_reduce_working_days() {
    let (store, summaries) = service();
    let owner = UserId::new();
    seed_absence(&store, owner, date(2024, 4, 8), 5, AbsenceType::Vacation).await;

    let summary = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(summary.non_accounting_days, 5);
    assert_eq!(summary.working_days, 17);
    assert_eq!(summary.expected_hours, dec!(136));
}

#[tokio::test]
async fn test_working_days_floor_at_zero() {
    let (store, summaries) = service();
    let owner = UserId::new();
    seed_absence(&store, owner, date(2024, 4, 1), 28, AbsenceType::MedicalLeave).await;

    let summary = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(summary.non_accounting_days, 28);
    assert_eq!(summary.working_days, 0);
    assert_eq!(summary.expected_hours, dec!(0));
}

#[tokio::test]
async fn test_month_spanning_absence_counts_in_start_month_only() {
    let (store, summaries) = service();
    let owner = UserId::new();
    // Starts 2024-04-29, runs 5 days into May.
    seed_absence(&store, owner, date(2024, 4, 29), 5, AbsenceType::Vacation).await;

    let april = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    let may = summaries.month_summary(owner, 2024, 5).await.expect("summary");

    assert_eq!(april.non_accounting_days, 5);
    assert_eq!(may.non_accounting_days, 0);
}

#[tokio::test]
async fn test_summaries_are_owner_scoped() {
    let (store, summaries) = service();
    let owner = UserId::new();
    seed_shift(&store, UserId::new(), date(2024, 4, 1), time(9, 0), time(17, 0)).await;
    seed_absence(&store, UserId::new(), date(2024, 4, 8), 5, AbsenceType::Other).await;

    let summary = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(summary.worked_hours, dec!(0));
    assert_eq!(summary.non_accounting_days, 0);
}

#[tokio::test]
async fn test_month_summary_is_idempotent() {
    let (store, summaries) = service();
    let owner = UserId::new();
    for day in weekdays_of(2024, 4, 10) {
        seed_shift(&store, owner, day, time(9, 0), time(18, 0)).await;
    }
    seed_absence(&store, owner, date(2024, 4, 22), 3, AbsenceType::Vacation).await;

    let first = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    let second = summaries.month_summary(owner, 2024, 4).await.expect("summary");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_year_summary_has_twelve_ordered_months() {
    let (_store, summaries) = service();
    let owner = UserId::new();

    let year = summaries.year_summary(owner, 2024).await.expect("summary");
    assert_eq!(year.len(), 12);
    let months: Vec<u32> = year.keys().copied().collect();
    assert_eq!(months, (1..=12).collect::<Vec<u32>>());
    // 2024 is a leap year.
    assert_eq!(year[&2].total_days, 29);
}

#[tokio::test]
async fn test_year_totals_equal_fieldwise_sum_of_months() {
    let (store, summaries) = service();
    let owner = UserId::new();
    for day in weekdays_of(2024, 3, 15) {
        seed_shift(&store, owner, day, time(9, 0), time(18, 0)).await;
    }
    seed_absence(&store, owner, date(2024, 7, 1), 10, AbsenceType::Vacation).await;

    let months = summaries.year_summary(owner, 2024).await.expect("summary");
    let totals = summaries.year_totals(owner, 2024).await.expect("totals");

    let mut expected = super::MonthlySummary::default();
    for summary in months.values() {
        expected.accumulate(summary);
    }
    assert_eq!(totals, expected);
    assert_eq!(totals.total_days, 366);
}

#[tokio::test]
async fn test_month_detail_returns_raw_entries() {
    let (store, summaries) = service();
    let owner = UserId::new();
    seed_shift(&store, owner, date(2024, 4, 1), time(9, 0), time(17, 0)).await;
    seed_absence(&store, owner, date(2024, 4, 8), 5, AbsenceType::Vacation).await;
    // Dated outside April: must not show up.
    seed_shift(&store, owner, date(2024, 3, 29), time(9, 0), time(17, 0)).await;

    let detail = summaries.month_detail(owner, 2024, 4).await.expect("detail");
    assert_eq!(detail.time_entries.len(), 1);
    assert_eq!(detail.non_accounting_entries.len(), 1);
    assert_eq!(detail.summary.non_accounting_days, 5);
}

#[tokio::test]
async fn test_invalid_month_rejected() {
    let (_store, summaries) = service();
    let owner = UserId::new();

    assert!(matches!(
        summaries.month_summary(owner, 2024, 13).await,
        Err(SummaryError::InvalidMonth(13))
    ));
    assert!(matches!(
        summaries.month_summary(owner, 2024, 0).await,
        Err(SummaryError::InvalidMonth(0))
    ));
}

#[tokio::test]
async fn test_store_failure_surfaces_as_store_error() {
    let (store, summaries) = service();
    let owner = UserId::new();
    store.set_unavailable(true);

    let err = summaries
        .month_summary(owner, 2024, 4)
        .await
        .expect_err("store is down");
    assert!(matches!(err, SummaryError::Store(_)));
    assert_eq!(err.http_status_code(), 503);
}
