//! Time entry repository.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::time_entries;

/// Error types for time entry operations.
#[derive(Debug, thiserror::Error)]
pub enum TimeEntryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Replacement fields for an update.
#[derive(Debug, Clone)]
pub struct UpdateTimeEntry {
    /// New calendar date.
    pub entry_date: NaiveDate,
    /// New start time.
    pub start_time: NaiveTime,
    /// New end time.
    pub end_time: NaiveTime,
    /// New comment.
    pub comment: Option<String>,
}

/// Time entry repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TimeEntryRepository {
    db: DatabaseConnection,
}

impl TimeEntryRepository {
    /// Creates a new time entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's entries on one calendar date, earliest shift first.
    pub async fn list_for_day(
        &self,
        user_id: Uuid,
        day: NaiveDate,
    ) -> Result<Vec<time_entries::Model>, TimeEntryError> {
        Ok(time_entries::Entity::find()
            .filter(time_entries::Column::UserId.eq(user_id))
            .filter(time_entries::Column::EntryDate.eq(day))
            .order_by_asc(time_entries::Column::StartTime)
            .all(&self.db)
            .await?)
    }

    /// Lists a user's entries with a date in the half-open range
    /// `[start, end)`, ordered by date and start time.
    pub async fn list_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<time_entries::Model>, TimeEntryError> {
        Ok(time_entries::Entity::find()
            .filter(time_entries::Column::UserId.eq(user_id))
            .filter(time_entries::Column::EntryDate.gte(start))
            .filter(time_entries::Column::EntryDate.lt(end))
            .order_by_asc(time_entries::Column::EntryDate)
            .order_by_asc(time_entries::Column::StartTime)
            .all(&self.db)
            .await?)
    }

    /// Inserts a new entry.
    pub async fn insert(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: UpdateTimeEntry,
    ) -> Result<time_entries::Model, TimeEntryError> {
        let model = time_entries::ActiveModel {
            id: Set(id),
            user_id: Set(user_id),
            entry_date: Set(update.entry_date),
            start_time: Set(update.start_time),
            end_time: Set(update.end_time),
            comment: Set(update.comment),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    /// Rewrites an entry owned by `user_id`.
    ///
    /// Returns `Ok(None)` when the id does not exist for that user.
    pub async fn update_for_owner(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: UpdateTimeEntry,
    ) -> Result<Option<time_entries::Model>, TimeEntryError> {
        let Some(existing) = time_entries::Entity::find_by_id(id)
            .filter(time_entries::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model: time_entries::ActiveModel = existing.into();
        model.entry_date = Set(update.entry_date);
        model.start_time = Set(update.start_time);
        model.end_time = Set(update.end_time);
        model.comment = Set(update.comment);

        Ok(Some(model.update(&self.db).await?))
    }

    /// Deletes an entry owned by `user_id`.
    ///
    /// Returns `Ok(false)` when the id does not exist for that user.
    pub async fn delete_for_owner(&self, user_id: Uuid, id: Uuid) -> Result<bool, TimeEntryError> {
        let result = time_entries::Entity::delete_many()
            .filter(time_entries::Column::Id.eq(id))
            .filter(time_entries::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
