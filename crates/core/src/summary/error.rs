//! Summary error types.

use thiserror::Error;

use crate::entry::StoreError;

/// Errors from summary queries.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Month outside 1-12.
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// Year outside the supported calendar.
    #[error("year {0} is outside the supported calendar")]
    InvalidYear(i32),

    /// The entry store failed or timed out.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SummaryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::InvalidYear(_) => "INVALID_YEAR",
            Self::Store(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidMonth(_) | Self::InvalidYear(_) => 400,
            Self::Store(_) => 503,
        }
    }
}
