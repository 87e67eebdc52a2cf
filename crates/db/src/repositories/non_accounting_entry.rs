//! Non-accounting entry repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{non_accounting_entries, sea_orm_active_enums::AbsenceType};

/// Error types for non-accounting entry operations.
#[derive(Debug, thiserror::Error)]
pub enum NonAccountingEntryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Replacement fields for an update.
#[derive(Debug, Clone)]
pub struct UpdateNonAccountingEntry {
    /// New first day of the absence.
    pub start_date: NaiveDate,
    /// New day count.
    pub days: i32,
    /// New absence kind.
    pub kind: AbsenceType,
    /// New comment.
    pub comment: Option<String>,
}

/// Non-accounting entry repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct NonAccountingEntryRepository {
    db: DatabaseConnection,
}

impl NonAccountingEntryRepository {
    /// Creates a new non-accounting entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's entries, earliest period first.
    ///
    /// With a range, only entries whose start date falls in `[start, end)`
    /// are returned; month bucketing attributes a period to the month it
    /// starts in.
    pub async fn list_for_owner(
        &self,
        user_id: Uuid,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<non_accounting_entries::Model>, NonAccountingEntryError> {
        let mut query = non_accounting_entries::Entity::find()
            .filter(non_accounting_entries::Column::UserId.eq(user_id));

        if let Some((start, end)) = range {
            query = query
                .filter(non_accounting_entries::Column::StartDate.gte(start))
                .filter(non_accounting_entries::Column::StartDate.lt(end));
        }

        Ok(query
            .order_by_asc(non_accounting_entries::Column::StartDate)
            .all(&self.db)
            .await?)
    }

    /// Inserts a new entry.
    pub async fn insert(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: UpdateNonAccountingEntry,
    ) -> Result<non_accounting_entries::Model, NonAccountingEntryError> {
        let model = non_accounting_entries::ActiveModel {
            id: Set(id),
            user_id: Set(user_id),
            start_date: Set(update.start_date),
            days: Set(update.days),
            kind: Set(update.kind),
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
        update: UpdateNonAccountingEntry,
    ) -> Result<Option<non_accounting_entries::Model>, NonAccountingEntryError> {
        let Some(existing) = non_accounting_entries::Entity::find_by_id(id)
            .filter(non_accounting_entries::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model: non_accounting_entries::ActiveModel = existing.into();
        model.start_date = Set(update.start_date);
        model.days = Set(update.days);
        model.kind = Set(update.kind);
        model.comment = Set(update.comment);

        Ok(Some(model.update(&self.db).await?))
    }

    /// Deletes an entry owned by `user_id`.
    ///
    /// Returns `Ok(false)` when the id does not exist for that user.
    pub async fn delete_for_owner(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<bool, NonAccountingEntryError> {
        let result = non_accounting_entries::Entity::delete_many()
            .filter(non_accounting_entries::Column::Id.eq(id))
            .filter(non_accounting_entries::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
