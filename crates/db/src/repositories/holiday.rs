//! Holiday table repository.
//!
//! Holidays are an external fact table: rows are seeded or imported, never
//! computed. The server loads the whole table once at startup to build the
//! in-process holiday set.

use chrono::{Datelike, NaiveDate};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::holidays;

/// Error types for holiday operations.
#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    /// A date outside the supported calendar was requested.
    #[error("year {0} is outside the supported calendar")]
    InvalidYear(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Holiday repository.
#[derive(Debug, Clone)]
pub struct HolidayRepository {
    db: DatabaseConnection,
}

impl HolidayRepository {
    /// Creates a new holiday repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the whole holiday table, ordered by date.
    pub async fn list_all(&self) -> Result<Vec<holidays::Model>, HolidayError> {
        Ok(holidays::Entity::find()
            .order_by_asc(holidays::Column::HolidayDate)
            .all(&self.db)
            .await?)
    }

    /// Lists the holidays of one calendar year, ordered by date.
    pub async fn list_for_year(&self, year: i32) -> Result<Vec<holidays::Model>, HolidayError> {
        let start =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(HolidayError::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .ok_or(HolidayError::InvalidYear(year))?;

        Ok(holidays::Entity::find()
            .filter(holidays::Column::HolidayDate.gte(start))
            .filter(holidays::Column::HolidayDate.lt(end))
            .order_by_asc(holidays::Column::HolidayDate)
            .all(&self.db)
            .await?)
    }

    /// Inserts a holiday, updating the name if the date already exists.
    pub async fn upsert(&self, date: NaiveDate, name: &str) -> Result<(), HolidayError> {
        tracing::debug!(year = date.year(), %date, "upserting holiday");

        let model = holidays::ActiveModel {
            id: Set(Uuid::now_v7()),
            holiday_date: Set(date),
            name: Set(name.to_string()),
            ..Default::default()
        };

        holidays::Entity::insert(model)
            .on_conflict(
                OnConflict::column(holidays::Column::HolidayDate)
                    .update_column(holidays::Column::Name)
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
