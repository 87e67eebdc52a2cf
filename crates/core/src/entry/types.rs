//! Entry domain types.

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use worklog_shared::types::{NonAccountingEntryId, TimeEntryId, UserId};

use crate::calendar::{period_end, shift_hours};

/// Vacation days granted per calendar year.
pub const VACATION_ALLOWANCE_DAYS: u32 = 30;

/// Kind of a non-accounting (absence) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    /// Paid vacation, drawn from the yearly allowance.
    Vacation,
    /// Medical leave.
    MedicalLeave,
    /// Marriage leave.
    MarriageLeave,
    /// Bereavement leave.
    BereavementLeave,
    /// Any other justified absence.
    Other,
}

impl AbsenceType {
    /// Maximum days a single entry of this kind may span, if capped.
    #[must_use]
    pub const fn max_days(self) -> Option<u32> {
        match self {
            Self::Vacation => Some(30),
            Self::MarriageLeave => Some(3),
            Self::BereavementLeave => Some(2),
            Self::MedicalLeave | Self::Other => None,
        }
    }

    /// Stable identifier used in API payloads and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vacation => "vacation",
            Self::MedicalLeave => "medical_leave",
            Self::MarriageLeave => "marriage_leave",
            Self::BereavementLeave => "bereavement_leave",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded work shift.
///
/// Month and year are always derived from `date`; they are never stored or
/// accepted from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier.
    pub id: TimeEntryId,
    /// Owner the entry is scoped to.
    pub owner: UserId,
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Start time of day.
    pub start_time: NaiveTime,
    /// End time of day. Earlier than `start_time` only when the shift
    /// crosses midnight.
    pub end_time: NaiveTime,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl TimeEntry {
    /// Month (1-12) derived from the entry date.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Year derived from the entry date.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Worked hours for this shift, break rule applied.
    #[must_use]
    pub fn hours(&self) -> Decimal {
        shift_hours(self.start_time, self.end_time)
    }
}

/// Candidate payload for creating or updating a time entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryDraft {
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Start time of day.
    pub start_time: NaiveTime,
    /// End time of day.
    pub end_time: NaiveTime,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl TimeEntryDraft {
    /// Materializes the draft into an owned entry.
    #[must_use]
    pub fn into_entry(self, id: TimeEntryId, owner: UserId) -> TimeEntry {
        TimeEntry {
            id,
            owner,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            comment: self.comment,
        }
    }
}

/// A recorded absence covering a contiguous closed interval of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonAccountingEntry {
    /// Unique identifier.
    pub id: NonAccountingEntryId,
    /// Owner the entry is scoped to.
    pub owner: UserId,
    /// First day of the absence.
    pub start_date: NaiveDate,
    /// Number of days covered, strictly positive.
    pub days: u32,
    /// Kind of absence.
    pub kind: AbsenceType,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl NonAccountingEntry {
    /// Last day of the absence (inclusive).
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        period_end(self.start_date, self.days)
    }

    /// Returns true if the closed interval covers the given day.
    #[must_use]
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date()
    }
}

/// Candidate payload for creating or updating a non-accounting entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonAccountingEntryDraft {
    /// First day of the absence.
    pub start_date: NaiveDate,
    /// Number of days covered.
    pub days: u32,
    /// Kind of absence.
    pub kind: AbsenceType,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl NonAccountingEntryDraft {
    /// Materializes the draft into an owned entry.
    #[must_use]
    pub fn into_entry(self, id: NonAccountingEntryId, owner: UserId) -> NonAccountingEntry {
        NonAccountingEntry {
            id,
            owner,
            start_date: self.start_date,
            days: self.days,
            kind: self.kind,
            comment: self.comment,
        }
    }
}
