//! `SeaORM`-backed implementation of the core entry store.
//!
//! Every call is wrapped in a timeout. A call that does not answer in time
//! surfaces as `StoreError::Timeout`, a distinct error kind; it is never
//! treated as "no conflicts found".

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use worklog_core::entry::{
    DateRange, EntryStore, NonAccountingEntry, NonAccountingEntryDraft, StoreError, TimeEntry,
    TimeEntryDraft,
};
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use crate::entities::{non_accounting_entries, time_entries};
use crate::repositories::{
    NonAccountingEntryRepository, TimeEntryRepository, UpdateNonAccountingEntry, UpdateTimeEntry,
};

/// Entry store backed by the `SeaORM` repositories.
#[derive(Debug, Clone)]
pub struct SeaOrmEntryStore {
    time_entries: TimeEntryRepository,
    non_accounting: NonAccountingEntryRepository,
    timeout: Duration,
}

impl SeaOrmEntryStore {
    /// Creates a store over the given connection with a per-call timeout.
    #[must_use]
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self {
            time_entries: TimeEntryRepository::new(db.clone()),
            non_accounting: NonAccountingEntryRepository::new(db),
            timeout,
        }
    }

    async fn call<T, E, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, E>> + Send,
        E: std::fmt::Display,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout)?
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn time_entry_from_model(model: time_entries::Model) -> TimeEntry {
    TimeEntry {
        id: TimeEntryId::from_uuid(model.id),
        owner: UserId::from_uuid(model.user_id),
        date: model.entry_date,
        start_time: model.start_time,
        end_time: model.end_time,
        comment: model.comment,
    }
}

fn absence_from_model(model: non_accounting_entries::Model) -> NonAccountingEntry {
    NonAccountingEntry {
        id: NonAccountingEntryId::from_uuid(model.id),
        owner: UserId::from_uuid(model.user_id),
        start_date: model.start_date,
        // days carries a CHECK (days > 0) constraint.
        days: u32::try_from(model.days).unwrap_or(0),
        kind: model.kind.into(),
        comment: model.comment,
    }
}

fn time_update_from_draft(draft: TimeEntryDraft) -> UpdateTimeEntry {
    UpdateTimeEntry {
        entry_date: draft.date,
        start_time: draft.start_time,
        end_time: draft.end_time,
        comment: draft.comment,
    }
}

fn absence_update_from_draft(draft: NonAccountingEntryDraft) -> UpdateNonAccountingEntry {
    UpdateNonAccountingEntry {
        start_date: draft.start_date,
        days: i32::try_from(draft.days).unwrap_or(i32::MAX),
        kind: draft.kind.into(),
        comment: draft.comment,
    }
}

#[async_trait]
impl EntryStore for SeaOrmEntryStore {
    async fn time_entries_for_day(
        &self,
        owner: UserId,
        day: NaiveDate,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        let models = self
            .call(self.time_entries.list_for_day(owner.into_inner(), day))
            .await?;
        Ok(models.into_iter().map(time_entry_from_model).collect())
    }

    async fn time_entries_in_range(
        &self,
        owner: UserId,
        range: DateRange,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        let models = self
            .call(
                self.time_entries
                    .list_in_range(owner.into_inner(), range.start, range.end),
            )
            .await?;
        Ok(models.into_iter().map(time_entry_from_model).collect())
    }

    async fn non_accounting_entries(
        &self,
        owner: UserId,
        range: Option<DateRange>,
    ) -> Result<Vec<NonAccountingEntry>, StoreError> {
        let models = self
            .call(
                self.non_accounting
                    .list_for_owner(owner.into_inner(), range.map(|r| (r.start, r.end))),
            )
            .await?;
        Ok(models.into_iter().map(absence_from_model).collect())
    }

    async fn insert_time_entry(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        let id = entry.id;
        let owner = entry.owner;
        let update = UpdateTimeEntry {
            entry_date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
            comment: entry.comment,
        };
        let model = self
            .call(
                self.time_entries
                    .insert(id.into_inner(), owner.into_inner(), update),
            )
            .await?;
        Ok(time_entry_from_model(model))
    }

    async fn update_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
        draft: TimeEntryDraft,
    ) -> Result<Option<TimeEntry>, StoreError> {
        let model = self
            .call(self.time_entries.update_for_owner(
                owner.into_inner(),
                id.into_inner(),
                time_update_from_draft(draft),
            ))
            .await?;
        Ok(model.map(time_entry_from_model))
    }

    async fn delete_time_entry(
        &self,
        owner: UserId,
        id: TimeEntryId,
    ) -> Result<bool, StoreError> {
        self.call(
            self.time_entries
                .delete_for_owner(owner.into_inner(), id.into_inner()),
        )
        .await
    }

    async fn insert_non_accounting_entry(
        &self,
        entry: NonAccountingEntry,
    ) -> Result<NonAccountingEntry, StoreError> {
        let id = entry.id;
        let owner = entry.owner;
        let update = UpdateNonAccountingEntry {
            start_date: entry.start_date,
            days: i32::try_from(entry.days).unwrap_or(i32::MAX),
            kind: entry.kind.into(),
            comment: entry.comment,
        };
        let model = self
            .call(
                self.non_accounting
                    .insert(id.into_inner(), owner.into_inner(), update),
            )
            .await?;
        Ok(absence_from_model(model))
    }

    async fn update_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
        draft: NonAccountingEntryDraft,
    ) -> Result<Option<NonAccountingEntry>, StoreError> {
        let model = self
            .call(self.non_accounting.update_for_owner(
                owner.into_inner(),
                id.into_inner(),
                absence_update_from_draft(draft),
            ))
            .await?;
        Ok(model.map(absence_from_model))
    }

    async fn delete_non_accounting_entry(
        &self,
        owner: UserId,
        id: NonAccountingEntryId,
    ) -> Result<bool, StoreError> {
        self.call(
            self.non_accounting
                .delete_for_owner(owner.into_inner(), id.into_inner()),
        )
        .await
    }
}
