//! Unit tests for the validation engine, run against the in-memory store.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use super::{ValidationError, ValidationService};
use crate::entry::{
    AbsenceType, EntryStore, InMemoryStore, NonAccountingEntry, NonAccountingEntryDraft,
    TimeEntry, TimeEntryDraft,
};

// Friday, 2024-06-14.
fn today() -> NaiveDate {
    date(2024, 6, 14)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn service() -> (Arc<InMemoryStore>, ValidationService<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let validator = ValidationService::new(Arc::clone(&store));
    (store, validator)
}

fn shift_draft(on: NaiveDate, start: NaiveTime, end: NaiveTime) -> TimeEntryDraft {
    TimeEntryDraft {
        date: on,
        start_time: start,
        end_time: end,
        comment: None,
    }
}

fn absence_draft(start: NaiveDate, days: u32, kind: AbsenceType) -> NonAccountingEntryDraft {
    NonAccountingEntryDraft {
        start_date: start,
        days,
        kind,
        comment: None,
    }
}

async fn seed_shift(
    store: &InMemoryStore,
    owner: UserId,
    on: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> TimeEntry {
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
        .expect("seed shift")
}

async fn seed_absence(
    store: &InMemoryStore,
    owner: UserId,
    start: NaiveDate,
    days: u32,
    kind: AbsenceType,
) -> NonAccountingEntry {
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
        .expect("seed absence")
}

// ===== time entries =====

#[tokio::test]
async fn test_accepts_clean_time_entry() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let candidate = shift_draft(date(2024, 6, 13), time(9, 0), time(17, 30));
    assert!(
        validator
            .validate_time_entry(owner, &candidate, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_rejects_future_dated_entry() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let tomorrow = shift_draft(date(2024, 6, 15), time(9, 0), time(17, 0));
    assert!(matches!(
        validator
            .validate_time_entry(owner, &tomorrow, today(), None)
            .await,
        Err(ValidationError::FutureDate)
    ));
}

#[tokio::test]
async fn test_accepts_entry_dated_today() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let candidate = shift_draft(today(), time(9, 0), time(17, 0));
    assert!(
        validator
            .validate_time_entry(owner, &candidate, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_rejects_overlapping_shift_same_day() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_shift(&store, owner, date(2024, 6, 13), time(9, 0), time(12, 0)).await;

    let candidate = shift_draft(date(2024, 6, 13), time(11, 0), time(13, 0));
    assert!(matches!(
        validator
            .validate_time_entry(owner, &candidate, today(), None)
            .await,
        Err(ValidationError::OverlappingShift)
    ));
}

#[tokio::test]
async fn test_accepts_touching_shifts() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_shift(&store, owner, date(2024, 6, 13), time(9, 0), time(12, 0)).await;

    let candidate = shift_draft(date(2024, 6, 13), time(12, 0), time(15, 0));
    assert!(
        validator
            .validate_time_entry(owner, &candidate, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_other_owners_shifts_do_not_conflict() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_shift(&store, UserId::new(), date(2024, 6, 13), time(9, 0), time(12, 0)).await;

    let candidate = shift_draft(date(2024, 6, 13), time(9, 0), time(12, 0));
    assert!(
        validator
            .validate_time_entry(owner, &candidate, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_update_does_not_conflict_with_itself() {
    let (store, validator) = service();
    let owner = UserId::new();
    let existing = seed_shift(&store, owner, date(2024, 6, 13), time(9, 0), time(12, 0)).await;

    let candidate = shift_draft(date(2024, 6, 13), time(9, 30), time(12, 30));
    assert!(
        validator
            .validate_time_entry(owner, &candidate, today(), Some(existing.id))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_rejects_shift_on_absence_day() {
    let (store, validator) = service();
    let owner = UserId::new();
    // 2024-06-10 through 2024-06-14.
    seed_absence(&store, owner, date(2024, 6, 10), 5, AbsenceType::MedicalLeave).await;

    let covered = shift_draft(date(2024, 6, 14), time(9, 0), time(12, 0));
    assert!(matches!(
        validator
            .validate_time_entry(owner, &covered, today(), None)
            .await,
        Err(ValidationError::DayCoveredByAbsence)
    ));
}

#[tokio::test]
async fn test_accepts_shift_after_absence_ends() {
    let (store, validator) = service();
    let owner = UserId::new();
    // 2024-06-03 through 2024-06-07; the 10th is clear.
    seed_absence(&store, owner, date(2024, 6, 3), 5, AbsenceType::Other).await;

    let candidate = shift_draft(date(2024, 6, 10), time(9, 0), time(12, 0));
    assert!(
        validator
            .validate_time_entry(owner, &candidate, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_accepts_midnight_crossing_shift() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let overnight = shift_draft(date(2024, 6, 13), time(23, 0), time(1, 0));
    assert!(
        validator
            .validate_time_entry(owner, &overnight, today(), None)
            .await
            .is_ok()
    );
}

// ===== non-accounting entries =====

#[tokio::test]
async fn test_rejects_zero_day_absence() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let candidate = absence_draft(date(2024, 6, 3), 0, AbsenceType::Other);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &candidate, today(), None)
            .await,
        Err(ValidationError::NonPositiveDays)
    ));
}

#[tokio::test]
async fn test_absence_type_ceilings() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let marriage = absence_draft(date(2024, 6, 3), 4, AbsenceType::MarriageLeave);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &marriage, today(), None)
            .await,
        Err(ValidationError::AbsenceCeilingExceeded { max: 3, .. })
    ));

    let bereavement = absence_draft(date(2024, 6, 3), 3, AbsenceType::BereavementLeave);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &bereavement, today(), None)
            .await,
        Err(ValidationError::AbsenceCeilingExceeded { max: 2, .. })
    ));

    // Medical leave and "other" are uncapped.
    let medical = absence_draft(date(2024, 1, 8), 120, AbsenceType::MedicalLeave);
    assert!(
        validator
            .validate_non_accounting_entry(owner, &medical, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_vacation_ceiling_applies_before_balance() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let candidate = absence_draft(date(2024, 6, 3), 31, AbsenceType::Vacation);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &candidate, today(), None)
            .await,
        Err(ValidationError::AbsenceCeilingExceeded { max: 30, .. })
    ));
}

#[tokio::test]
async fn test_vacation_balance_starts_at_allowance() {
    let (_store, validator) = service();
    let owner = UserId::new();

    let balance = validator.vacation_balance(owner, today()).await.expect("balance");
    assert_eq!(balance.total_days, 30);
    assert_eq!(balance.used_days, 0);
    assert_eq!(balance.available_days, 30);
}

#[tokio::test]
async fn test_vacation_balance_decreases_and_rejects_excess() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_absence(&store, owner, date(2024, 3, 4), 10, AbsenceType::Vacation).await;

    let balance = validator.vacation_balance(owner, today()).await.expect("balance");
    assert_eq!(balance.used_days, 10);
    assert_eq!(balance.available_days, 20);

    let too_long = absence_draft(date(2024, 5, 6), 21, AbsenceType::Vacation);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &too_long, today(), None)
            .await,
        Err(ValidationError::VacationBalanceExceeded { available: 20 })
    ));

    let within = absence_draft(date(2024, 5, 6), 20, AbsenceType::Vacation);
    assert!(
        validator
            .validate_non_accounting_entry(owner, &within, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_vacation_balance_only_counts_current_year() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_absence(&store, owner, date(2023, 7, 3), 30, AbsenceType::Vacation).await;

    let balance = validator.vacation_balance(owner, today()).await.expect("balance");
    assert_eq!(balance.available_days, 30);
}

#[tokio::test]
async fn test_non_vacation_absences_do_not_consume_balance() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_absence(&store, owner, date(2024, 2, 5), 15, AbsenceType::MedicalLeave).await;

    let balance = validator.vacation_balance(owner, today()).await.expect("balance");
    assert_eq!(balance.used_days, 0);
    assert_eq!(balance.available_days, 30);
}

#[tokio::test]
async fn test_rejects_overlapping_absence_periods() {
    let (store, validator) = service();
    let owner = UserId::new();
    // 2024-06-03 through 2024-06-07.
    seed_absence(&store, owner, date(2024, 6, 3), 5, AbsenceType::Other).await;

    // Shares the boundary day 2024-06-07.
    let overlapping = absence_draft(date(2024, 6, 7), 3, AbsenceType::MedicalLeave);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &overlapping, today(), None)
            .await,
        Err(ValidationError::OverlappingAbsence)
    ));

    // Starts the day after the period ends.
    let adjacent = absence_draft(date(2024, 6, 8), 3, AbsenceType::MedicalLeave);
    assert!(
        validator
            .validate_non_accounting_entry(owner, &adjacent, today(), None)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_absence_update_does_not_conflict_with_itself() {
    let (store, validator) = service();
    let owner = UserId::new();
    let existing = seed_absence(&store, owner, date(2024, 6, 3), 5, AbsenceType::Other).await;

    let candidate = absence_draft(date(2024, 6, 4), 5, AbsenceType::Other);
    assert!(
        validator
            .validate_non_accounting_entry(owner, &candidate, today(), Some(existing.id))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_rejects_absence_covering_worked_day() {
    let (store, validator) = service();
    let owner = UserId::new();
    seed_shift(&store, owner, date(2024, 6, 5), time(9, 0), time(17, 0)).await;

    let candidate = absence_draft(date(2024, 6, 3), 5, AbsenceType::Other);
    assert!(matches!(
        validator
            .validate_non_accounting_entry(owner, &candidate, today(), None)
            .await,
        Err(ValidationError::PeriodCoversWorkedDay)
    ));
}

// ===== store failures =====

#[tokio::test]
async fn test_store_failure_is_not_a_rejection() {
    let (store, validator) = service();
    let owner = UserId::new();
    store.set_unavailable(true);

    let candidate = shift_draft(date(2024, 6, 13), time(9, 0), time(17, 0));
    let err = validator
        .validate_time_entry(owner, &candidate, today(), None)
        .await
        .expect_err("store is down");

    assert!(!err.is_rule_violation());
    assert_eq!(err.http_status_code(), 503);
}
