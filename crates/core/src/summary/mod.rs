//! Monthly and yearly expected-vs-worked aggregation.
//!
//! Summaries are derived values: nothing here is persisted, every query
//! recomputes from the entry store snapshot it reads.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::SummaryError;
pub use service::SummaryService;
pub use types::{MonthDetail, MonthlySummary};
