//! Validation service.
//!
//! Decides whether a candidate entry is admissible against the owner's
//! stored entries and accumulated absence history. No state is retained
//! between calls; the current date is supplied by the caller so rules stay
//! deterministic under test.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use super::error::ValidationError;
use crate::calendar::{date_periods_overlap, period_end, shift_hours, time_periods_overlap};
use crate::entry::{
    AbsenceType, DateRange, EntryStore, NonAccountingEntryDraft, TimeEntryDraft,
    VACATION_ALLOWANCE_DAYS,
};

/// Vacation balance for one owner, recomputed from the entry history on
/// every query to avoid drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VacationBalance {
    /// Days granted per calendar year.
    pub total_days: u32,
    /// Vacation days consumed this year.
    pub used_days: u32,
    /// Days still available.
    pub available_days: u32,
}

/// Validation service over an abstract entry store.
#[derive(Debug)]
pub struct ValidationService<S> {
    store: Arc<S>,
}

impl<S> Clone for ValidationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EntryStore> ValidationService<S> {
    /// Creates a validation service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validates a candidate time entry.
    ///
    /// `exclude` names the entry being updated so it does not conflict with
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, or `ValidationError::Store` if the
    /// entry store could not be consulted.
    pub async fn validate_time_entry(
        &self,
        owner: UserId,
        candidate: &TimeEntryDraft,
        today: NaiveDate,
        exclude: Option<TimeEntryId>,
    ) -> Result<(), ValidationError> {
        if candidate.date > today {
            return Err(ValidationError::FutureDate);
        }

        let hours = shift_hours(candidate.start_time, candidate.end_time);
        if hours > Decimal::from(24) {
            return Err(ValidationError::ShiftTooLong);
        }

        let same_day = self
            .store
            .time_entries_for_day(owner, candidate.date)
            .await?;
        for existing in &same_day {
            if Some(existing.id) == exclude {
                continue;
            }
            if time_periods_overlap(
                candidate.start_time,
                candidate.end_time,
                existing.start_time,
                existing.end_time,
            ) {
                return Err(ValidationError::OverlappingShift);
            }
        }

        // Absence periods block the whole day, regardless of hours.
        let absences = self.store.non_accounting_entries(owner, None).await?;
        for absence in &absences {
            if date_periods_overlap(absence.start_date, absence.days, candidate.date, 1) {
                return Err(ValidationError::DayCoveredByAbsence);
            }
        }

        Ok(())
    }

    /// Validates a candidate non-accounting entry.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, or `ValidationError::Store` if the
    /// entry store could not be consulted.
    pub async fn validate_non_accounting_entry(
        &self,
        owner: UserId,
        candidate: &NonAccountingEntryDraft,
        today: NaiveDate,
        exclude: Option<NonAccountingEntryId>,
    ) -> Result<(), ValidationError> {
        if candidate.days == 0 {
            return Err(ValidationError::NonPositiveDays);
        }

        if let Some(max) = candidate.kind.max_days() {
            if candidate.days > max {
                return Err(ValidationError::AbsenceCeilingExceeded {
                    kind: candidate.kind,
                    max,
                });
            }
        }

        if candidate.kind == AbsenceType::Vacation {
            let balance = self.vacation_balance(owner, today).await?;
            if candidate.days > balance.available_days {
                return Err(ValidationError::VacationBalanceExceeded {
                    available: balance.available_days,
                });
            }
        }

        let existing = self.store.non_accounting_entries(owner, None).await?;
        for entry in &existing {
            if Some(entry.id) == exclude {
                continue;
            }
            if date_periods_overlap(
                entry.start_date,
                entry.days,
                candidate.start_date,
                candidate.days,
            ) {
                return Err(ValidationError::OverlappingAbsence);
            }
        }

        // The mirror of the time-entry check: a day is either worked or
        // absent, never both.
        let end_exclusive = period_end(candidate.start_date, candidate.days)
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        let worked = self
            .store
            .time_entries_in_range(owner, DateRange::new(candidate.start_date, end_exclusive))
            .await?;
        if !worked.is_empty() {
            return Err(ValidationError::PeriodCoversWorkedDay);
        }

        Ok(())
    }

    /// Vacation balance for the calendar year containing `today`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Store` if the entry store could not be
    /// consulted.
    pub async fn vacation_balance(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> Result<VacationBalance, ValidationError> {
        // A year at the edge of the supported calendar holds no history.
        let Some(year) = DateRange::year(today.year()) else {
            return Ok(VacationBalance {
                total_days: VACATION_ALLOWANCE_DAYS,
                used_days: 0,
                available_days: VACATION_ALLOWANCE_DAYS,
            });
        };
        let entries = self.store.non_accounting_entries(owner, Some(year)).await?;

        let used_days: u32 = entries
            .iter()
            .filter(|e| e.kind == AbsenceType::Vacation)
            .map(|e| e.days)
            .sum();

        Ok(VacationBalance {
            total_days: VACATION_ALLOWANCE_DAYS,
            used_days,
            available_days: VACATION_ALLOWANCE_DAYS.saturating_sub(used_days),
        })
    }
}
