//! Calendar utilities.
//!
//! This module implements the date and time primitives every business rule
//! is built on:
//! - Holiday table abstraction and business-day queries
//! - Weekday slot counting for monthly aggregation
//! - Shift duration with the automatic unpaid-break deduction
//! - Overlap predicates for time-of-day and date periods

pub mod business;
pub mod holiday;
pub mod overlap;
pub mod shift;

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;

pub use business::{days_in_month, is_business_day, weekday_slots_in_month};
pub use holiday::{HolidayCalendar, HolidaySet};
pub use overlap::{date_periods_overlap, period_end, time_periods_overlap};
pub use shift::shift_hours;
