//! Validation error types.
//!
//! Every rejection carries a specific human-readable reason. Store failures
//! are a separate variant so callers can tell "rejected" from "the store
//! could not be reached".

use thiserror::Error;

use crate::entry::{AbsenceType, StoreError};

/// Reasons a candidate entry is rejected, plus store failure passthrough.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Time entries may not be dated after the current date.
    #[error("time entries cannot be recorded for a future date")]
    FutureDate,

    /// A single shift is capped at 24 hours.
    #[error("a shift cannot exceed 24 hours")]
    ShiftTooLong,

    /// The candidate shift overlaps another shift on the same day.
    #[error("the shift overlaps another time entry on the same day")]
    OverlappingShift,

    /// The candidate shift falls on a day covered by an absence period.
    #[error("the day falls within a non-accounting period")]
    DayCoveredByAbsence,

    /// Day count must be a positive integer.
    #[error("day count must be greater than zero")]
    NonPositiveDays,

    /// The absence kind caps the days a single entry may span.
    #[error("at most {max} days allowed for {kind}")]
    AbsenceCeilingExceeded {
        /// Kind of absence being requested.
        kind: AbsenceType,
        /// Ceiling for that kind.
        max: u32,
    },

    /// The vacation request exceeds the remaining yearly balance.
    #[error("insufficient vacation balance: {available} days available")]
    VacationBalanceExceeded {
        /// Days still available this year.
        available: u32,
    },

    /// The candidate period overlaps another absence period.
    #[error("the period overlaps another non-accounting period")]
    OverlappingAbsence,

    /// The candidate period covers days with recorded shifts.
    #[error("the period overlaps days with recorded time entries")]
    PeriodCoversWorkedDay,

    /// The entry store failed or timed out; NOT a rejection.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ValidationError {
    /// Returns true for business-rule rejections the caller can fix by
    /// adjusting input, false for store failures.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        !matches!(self, Self::Store(_))
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::FutureDate => "FUTURE_DATE",
            Self::ShiftTooLong => "SHIFT_TOO_LONG",
            Self::OverlappingShift => "OVERLAPPING_SHIFT",
            Self::DayCoveredByAbsence => "DAY_COVERED_BY_ABSENCE",
            Self::NonPositiveDays => "NON_POSITIVE_DAYS",
            Self::AbsenceCeilingExceeded { .. } => "ABSENCE_CEILING_EXCEEDED",
            Self::VacationBalanceExceeded { .. } => "VACATION_BALANCE_EXCEEDED",
            Self::OverlappingAbsence => "OVERLAPPING_ABSENCE",
            Self::PeriodCoversWorkedDay => "PERIOD_COVERS_WORKED_DAY",
            Self::Store(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - malformed input, caught before rules run
            Self::NonPositiveDays => 400,

            // 422 Unprocessable - business rule rejections
            Self::FutureDate
            | Self::ShiftTooLong
            | Self::OverlappingShift
            | Self::DayCoveredByAbsence
            | Self::AbsenceCeilingExceeded { .. }
            | Self::VacationBalanceExceeded { .. }
            | Self::OverlappingAbsence
            | Self::PeriodCoversWorkedDay => 422,

            // 503 Service Unavailable - the store, not the input
            Self::Store(_) => 503,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violations_are_distinguished_from_store_failures() {
        assert!(ValidationError::FutureDate.is_rule_violation());
        assert!(ValidationError::OverlappingShift.is_rule_violation());
        assert!(!ValidationError::Store(StoreError::Timeout).is_rule_violation());
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(ValidationError::NonPositiveDays.http_status_code(), 400);
        assert_eq!(ValidationError::FutureDate.http_status_code(), 422);
        assert_eq!(
            ValidationError::Store(StoreError::Timeout).http_status_code(),
            503
        );
    }

    #[test]
    fn test_reason_strings_are_specific() {
        let err = ValidationError::AbsenceCeilingExceeded {
            kind: AbsenceType::MarriageLeave,
            max: 3,
        };
        assert_eq!(err.to_string(), "at most 3 days allowed for marriage_leave");

        let err = ValidationError::VacationBalanceExceeded { available: 20 };
        assert_eq!(
            err.to_string(),
            "insufficient vacation balance: 20 days available"
        );
    }
}
