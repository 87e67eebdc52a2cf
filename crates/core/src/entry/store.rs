//! Abstract entry store gateway.
//!
//! The core never talks to a database directly. Persistence implements this
//! trait; tests substitute the in-memory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use super::types::{NonAccountingEntry, NonAccountingEntryDraft, TimeEntry, TimeEntryDraft};

/// Half-open date range `[start, end)` used for month and year bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First date in the range (inclusive).
    pub start: NaiveDate,
    /// First date past the range (exclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from explicit bounds.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range covering one calendar month, or `None` for an invalid
    /// month or a year outside the calendar.
    #[must_use]
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self { start, end })
    }

    /// The range covering one calendar year.
    #[must_use]
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
        Some(Self { start, end })
    }

    /// Returns true if the date falls inside the half-open range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }
}

/// Errors surfaced by the entry store.
///
/// A timed-out or failed store call is never treated as "no conflicts
/// found"; callers propagate it as a distinct error kind.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store did not answer within the configured timeout.
    #[error("entry store request timed out")]
    Timeout,

    /// Transport or backend failure reaching the store.
    #[error("entry store unavailable: {0}")]
    Unavailable(String),
}

/// Abstract gateway to persisted entries, always scoped by owner.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Time entries for an owner on one calendar date.
    async fn time_entries_for_day(
        &self,
        owner: UserId,
        day: NaiveDate,
    ) -> Result<Vec<TimeEntry>, StoreError>;

    /// Time entries for an owner with a date inside the half-open range.
    async fn time_entries_in_range(
        &self,
        owner: UserId,
        range: DateRange,
    ) -> Result<Vec<TimeEntry>, StoreError>;

    /// Non-accounting entries for an owner.
    ///
    /// With a range, only entries whose START date falls inside the range
    /// are returned (month bucketing attributes a period to the month it
    /// starts in). `None` returns the unbounded history.
    async fn non_accounting_entries(
        &self,
        owner: UserId,
        range: Option<DateRange>,
    ) -> Result<Vec<NonAccountingEntry>, StoreError>;

    /// Persists a new time entry.
    async fn insert_time_entry(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError>;

    /// Rewrites an existing time entry owned by `owner`.
    ///
    /// Returns `Ok(None)` when no entry with that id exists for the owner.
    async fn update_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
        draft: TimeEntryDraft,
    ) -> Result<Option<TimeEntry>, StoreError>;

    /// Deletes a time entry owned by `owner`.
    ///
    /// Returns `Ok(false)` when no entry with that id exists for the owner.
    async fn delete_time_entry(&self, owner: UserId, id: TimeEntryId)
    -> Result<bool, StoreError>;

    /// Persists a new non-accounting entry.
    async fn insert_non_accounting_entry(
        &self,
        entry: NonAccountingEntry,
    ) -> Result<NonAccountingEntry, StoreError>;

    /// Rewrites an existing non-accounting entry owned by `owner`.
    ///
    /// Returns `Ok(None)` when no entry with that id exists for the owner.
    async fn update_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
        draft: NonAccountingEntryDraft,
    ) -> Result<Option<NonAccountingEntry>, StoreError>;

    /// Deletes a non-accounting entry owned by `owner`.
    ///
    /// Returns `Ok(false)` when no entry with that id exists for the owner.
    async fn delete_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
    ) -> Result<bool, StoreError>;
}
