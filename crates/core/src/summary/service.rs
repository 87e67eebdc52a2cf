//! Summary service.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use worklog_shared::types::UserId;

use super::error::SummaryError;
use super::types::{MonthDetail, MonthlySummary};
use crate::calendar::{days_in_month, shift_hours, weekday_slots_in_month};
use crate::entry::{DateRange, EntryStore};

const WORKDAY_HOURS: u32 = 8;

/// Summary service over an abstract entry store.
///
/// All queries are read-only and idempotent for a fixed store snapshot.
#[derive(Debug)]
pub struct SummaryService<S> {
    store: Arc<S>,
}

impl<S> Clone for SummaryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EntryStore> SummaryService<S> {
    /// Creates a summary service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Derives the summary for one calendar month.
    ///
    /// A non-accounting period is attributed in full to the month its
    /// start date falls in, never pro-rated across months.
    ///
    /// # Errors
    ///
    /// `SummaryError::InvalidMonth`/`InvalidYear` for out-of-calendar
    /// input, `SummaryError::Store` when the store is unreachable.
    pub async fn month_summary(
        &self,
        owner: UserId,
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary, SummaryError> {
        let (range, total_days, weekday_slots) = month_parts(year, month)?;

        let non_accounting_days: u32 = self
            .store
            .non_accounting_entries(owner, Some(range))
            .await?
            .iter()
            .map(|e| e.days)
            .sum();

        // The slot count is holiday-blind on purpose; see calendar::business.
        let working_days = weekday_slots.saturating_sub(non_accounting_days);
        let expected_hours = Decimal::from(working_days * WORKDAY_HOURS);

        let worked_hours: Decimal = self
            .store
            .time_entries_in_range(owner, range)
            .await?
            .iter()
            .map(|e| shift_hours(e.start_time, e.end_time))
            .sum();

        Ok(MonthlySummary {
            total_days,
            non_accounting_days,
            working_days,
            expected_hours,
            worked_hours,
            balance_hours: worked_hours - expected_hours,
        })
    }

    /// Derives summaries for every month of a year, keyed 1-12.
    ///
    /// # Errors
    ///
    /// As for `month_summary`.
    pub async fn year_summary(
        &self,
        owner: UserId,
        year: i32,
    ) -> Result<BTreeMap<u32, MonthlySummary>, SummaryError> {
        let mut summaries = BTreeMap::new();
        for month in 1..=12 {
            summaries.insert(month, self.month_summary(owner, year, month).await?);
        }
        Ok(summaries)
    }

    /// Field-wise totals across the 12 monthly summaries of a year.
    ///
    /// # Errors
    ///
    /// As for `month_summary`.
    pub async fn year_totals(&self, owner: UserId, year: i32) -> Result<MonthlySummary, SummaryError> {
        let mut totals = MonthlySummary::default();
        for summary in self.year_summary(owner, year).await?.values() {
            totals.accumulate(summary);
        }
        Ok(totals)
    }

    /// Monthly summary plus the raw entries behind it.
    ///
    /// # Errors
    ///
    /// As for `month_summary`.
    pub async fn month_detail(
        &self,
        owner: UserId,
        year: i32,
        month: u32,
    ) -> Result<MonthDetail, SummaryError> {
        let summary = self.month_summary(owner, year, month).await?;
        let (range, _, _) = month_parts(year, month)?;

        let time_entries = self.store.time_entries_in_range(owner, range).await?;
        let non_accounting_entries = self
            .store
            .non_accounting_entries(owner, Some(range))
            .await?;

        Ok(MonthDetail {
            summary,
            time_entries,
            non_accounting_entries,
        })
    }
}

fn month_parts(year: i32, month: u32) -> Result<(DateRange, u32, u32), SummaryError> {
    if !(1..=12).contains(&month) {
        return Err(SummaryError::InvalidMonth(month));
    }
    let range = DateRange::month(year, month).ok_or(SummaryError::InvalidYear(year))?;
    let total_days = days_in_month(year, month).ok_or(SummaryError::InvalidYear(year))?;
    let weekday_slots = weekday_slots_in_month(year, month).ok_or(SummaryError::InvalidYear(year))?;
    Ok((range, total_days, weekday_slots))
}
