//! Summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entry::{NonAccountingEntry, TimeEntry};

/// Derived monthly summary of expected versus worked hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar days in the month.
    pub total_days: u32,
    /// Non-accounting days attributed to the month.
    pub non_accounting_days: u32,
    /// Weekday slots minus non-accounting days, floored at zero.
    pub working_days: u32,
    /// Working days times the 8-hour day.
    pub expected_hours: Decimal,
    /// Sum of shift durations, break rule applied.
    pub worked_hours: Decimal,
    /// Worked minus expected hours.
    pub balance_hours: Decimal,
}

impl MonthlySummary {
    /// Field-wise accumulation, used for yearly totals.
    pub fn accumulate(&mut self, other: &Self) {
        self.total_days += other.total_days;
        self.non_accounting_days += other.non_accounting_days;
        self.working_days += other.working_days;
        self.expected_hours += other.expected_hours;
        self.worked_hours += other.worked_hours;
        self.balance_hours += other.balance_hours;
    }
}

/// Monthly summary together with the raw entries behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDetail {
    /// The derived summary.
    pub summary: MonthlySummary,
    /// Time entries dated in the month.
    pub time_entries: Vec<TimeEntry>,
    /// Non-accounting entries starting in the month.
    pub non_accounting_entries: Vec<NonAccountingEntry>,
}
