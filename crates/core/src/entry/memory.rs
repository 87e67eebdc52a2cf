//! In-memory entry store.
//!
//! Backs the unit tests with a deterministic store; also usable for local
//! experiments without a database.

use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use super::store::{DateRange, EntryStore, StoreError};
use super::types::{NonAccountingEntry, NonAccountingEntryDraft, TimeEntry, TimeEntryDraft};

/// Entry store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

#[derive(Debug, Default)]
struct Inner {
    time_entries: Vec<TimeEntry>,
    non_accounting: Vec<NonAccountingEntry>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `StoreError::Unavailable`.
    ///
    /// Lets tests assert that store failures are surfaced as their own
    /// error kind instead of passing validation.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EntryStore for InMemoryStore {
    async fn time_entries_for_day(
        &self,
        owner: UserId,
        day: NaiveDate,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.check_available()?;
        Ok(self
            .read()
            .time_entries
            .iter()
            .filter(|e| e.owner == owner && e.date == day)
            .cloned()
            .collect())
    }

    async fn time_entries_in_range(
        &self,
        owner: UserId,
        range: DateRange,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.check_available()?;
        Ok(self
            .read()
            .time_entries
            .iter()
            .filter(|e| e.owner == owner && range.contains(e.date))
            .cloned()
            .collect())
    }

    async fn non_accounting_entries(
        &self,
        owner: UserId,
        range: Option<DateRange>,
    ) -> Result<Vec<NonAccountingEntry>, StoreError> {
        self.check_available()?;
        Ok(self
            .read()
            .non_accounting
            .iter()
            .filter(|e| {
                e.owner == owner && range.is_none_or(|r| r.contains(e.start_date))
            })
            .cloned()
            .collect())
    }

    async fn insert_time_entry(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.check_available()?;
        self.write().time_entries.push(entry.clone());
        Ok(entry)
    }

    async fn update_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
        draft: TimeEntryDraft,
    ) -> Result<Option<TimeEntry>, StoreError> {
        self.check_available()?;
        let mut inner = self.write();
        let Some(existing) = inner
            .time_entries
            .iter_mut()
            .find(|e| e.owner == owner && e.id == id)
        else {
            return Ok(None);
        };
        *existing = draft.into_entry(id, owner);
        Ok(Some(existing.clone()))
    }

    async fn delete_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut inner = self.write();
        let before = inner.time_entries.len();
        inner
            .time_entries
            .retain(|e| !(e.owner == owner && e.id == id));
        Ok(inner.time_entries.len() < before)
    }

    async fn insert_non_accounting_entry(
        &self,
        entry: NonAccountingEntry,
    ) -> Result<NonAccountingEntry, StoreError> {
        self.check_available()?;
        self.write().non_accounting.push(entry.clone());
        Ok(entry)
    }

    async fn update_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
        draft: NonAccountingEntryDraft,
    ) -> Result<Option<NonAccountingEntry>, StoreError> {
        self.check_available()?;
        let mut inner = self.write();
        let Some(existing) = inner
            .non_accounting
            .iter_mut()
            .find(|e| e.owner == owner && e.id == id)
        else {
            return Ok(None);
        };
        *existing = draft.into_entry(id, owner);
        Ok(Some(existing.clone()))
    }

    async fn delete_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut inner = self.write();
        let before = inner.non_accounting.len();
        inner
            .non_accounting
            .retain(|e| !(e.owner == owner && e.id == id));
        Ok(inner.non_accounting.len() < before)
    }
}
