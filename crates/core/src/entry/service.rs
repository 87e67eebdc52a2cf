//! Entry service: validate-then-persist with per-owner serialization.
//!
//! Validation and the following write are a check-then-act sequence; two
//! concurrent writers for the same owner could otherwise both pass the
//! conflict check and both commit. Mutations for one owner are therefore
//! funneled through a per-owner async mutex. Owners never contend with
//! each other.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use super::store::{EntryStore, StoreError};
use super::types::{NonAccountingEntry, NonAccountingEntryDraft, TimeEntry, TimeEntryDraft};
use crate::validation::{ValidationError, ValidationService};

/// Errors from entry mutations.
#[derive(Debug, Error)]
pub enum EntryError {
    /// A business rule rejected the candidate entry.
    #[error(transparent)]
    Rejected(ValidationError),

    /// Update or delete target does not exist for this owner.
    #[error("entry not found")]
    NotFound,

    /// The underlying entry store failed or timed out.
    #[error(transparent)]
    Store(StoreError),
}

impl From<ValidationError> for EntryError {
    fn from(err: ValidationError) -> Self {
        // Keep store failures a distinct kind even when they surface
        // through validation.
        match err {
            ValidationError::Store(e) => Self::Store(e),
            other => Self::Rejected(other),
        }
    }
}

impl From<StoreError> for EntryError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl EntryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected(e) => e.error_code(),
            Self::NotFound => "ENTRY_NOT_FOUND",
            Self::Store(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Rejected(e) => e.http_status_code(),
            Self::NotFound => 404,
            Self::Store(_) => 503,
        }
    }
}

/// Service owning the validate-then-persist sequence for both entry kinds.
#[derive(Debug)]
pub struct EntryService<S> {
    store: Arc<S>,
    validator: ValidationService<S>,
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl<S: EntryStore> EntryService<S> {
    /// Creates an entry service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        let validator = ValidationService::new(Arc::clone(&store));
        Self {
            store,
            validator,
            locks: DashMap::new(),
        }
    }

    fn owner_lock(&self, owner: UserId) -> Arc<Mutex<()>> {
        self.locks
            .entry(owner)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Validates and persists a new time entry.
    ///
    /// # Errors
    ///
    /// `EntryError::Rejected` with the violated rule, or
    /// `EntryError::Store` when the store is unreachable.
    pub async fn create_time_entry(
        &self,
        owner: UserId,
        draft: TimeEntryDraft,
        today: NaiveDate,
    ) -> Result<TimeEntry, EntryError> {
        let lock = self.owner_lock(owner);
        let _guard = lock.lock().await;

        self.validator
            .validate_time_entry(owner, &draft, today, None)
            .await?;
        let entry = draft.into_entry(TimeEntryId::new(), owner);
        Ok(self.store.insert_time_entry(entry).await?)
    }

    /// Validates and rewrites an existing time entry.
    ///
    /// # Errors
    ///
    /// `EntryError::NotFound` when the id does not exist for this owner,
    /// otherwise as for create.
    pub async fn update_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
        draft: TimeEntryDraft,
        today: NaiveDate,
    ) -> Result<TimeEntry, EntryError> {
        let lock = self.owner_lock(owner);
        let _guard = lock.lock().await;

        self.validator
            .validate_time_entry(owner, &draft, today, Some(id))
            .await?;
        self.store
            .update_time_entry(owner, id, draft)
            .await?
            .ok_or(EntryError::NotFound)
    }

    /// Deletes a time entry. Deletion runs no business-rule checks.
    ///
    /// # Errors
    ///
    /// `EntryError::NotFound` when the id does not exist for this owner.
    pub async fn delete_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
    ) -> Result<(), EntryError> {
        let lock = self.owner_lock(owner);
        let _guard = lock.lock().await;

        if self.store.delete_time_entry(owner, id).await? {
            Ok(())
        } else {
            Err(EntryError::NotFound)
        }
    }

    /// Validates and persists a new non-accounting entry.
    ///
    /// # Errors
    ///
    /// As for `create_time_entry`.
    pub async fn create_non_accounting_entry(
        &self,
        owner: UserId,
        draft: NonAccountingEntryDraft,
        today: NaiveDate,
    ) -> Result<NonAccountingEntry, EntryError> {
        let lock = self.owner_lock(owner);
        let _guard = lock.lock().await;

        self.validator
            .validate_non_accounting_entry(owner, &draft, today, None)
            .await?;
        let entry = draft.into_entry(NonAccountingEntryId::new(), owner);
        Ok(self.store.insert_non_accounting_entry(entry).await?)
    }

    /// Validates and rewrites an existing non-accounting entry.
    ///
    /// # Errors
    ///
    /// As for `update_time_entry`.
    pub async fn update_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
        draft: NonAccountingEntryDraft,
        today: NaiveDate,
    ) -> Result<NonAccountingEntry, EntryError> {
        let lock = self.owner_lock(owner);
        let _guard = lock.lock().await;

        self.validator
            .validate_non_accounting_entry(owner, &draft, today, Some(id))
            .await?;
        self.store
            .update_non_accounting_entry(owner, id, draft)
            .await?
            .ok_or(EntryError::NotFound)
    }

    /// Deletes a non-accounting entry. Deletion runs no business-rule
    /// checks.
    ///
    /// # Errors
    ///
    /// `EntryError::NotFound` when the id does not exist for this owner.
    pub async fn delete_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
    ) -> Result<(), EntryError> {
        let lock = self.owner_lock(owner);
        let _guard = lock.lock().await;

        if self.store.delete_non_accounting_entry(owner, id).await? {
            Ok(())
        } else {
            Err(EntryError::NotFound)
        }
    }
}
