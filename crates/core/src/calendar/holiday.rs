//! Holiday table abstraction.
//!
//! Holiday data is an external fact table keyed by date. It is loaded once at
//! process start and injected by reference, so tests can run against
//! synthetic holiday sets.

use std::collections::HashSet;

use chrono::NaiveDate;

/// Read-only holiday lookup keyed by date.
pub trait HolidayCalendar {
    /// Returns true if the given day is a holiday.
    fn is_holiday(&self, day: NaiveDate) -> bool;
}

/// Holiday calendar backed by a set of dates.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    /// Builds a holiday set from any collection of dates.
    #[must_use]
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Number of holidays in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the set holds no holidays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_holiday(&self, day: NaiveDate) -> bool {
        self.dates.contains(&day)
    }
}
