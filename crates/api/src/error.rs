//! Error-to-HTTP mapping.
//!
//! Core errors already know their status and code; this type carries them
//! across the Axum boundary as `{ "error": code, "message": reason }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use worklog_core::entry::EntryError;
use worklog_core::summary::SummaryError;
use worklog_core::validation::ValidationError;
use worklog_db::repositories::{HolidayError, UserError};

/// API error response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Builds an error from raw parts.
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 401 with the given message.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    /// 400 with the given message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }

    /// 500 with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    fn from_parts(status_code: u16, code: &'static str, message: String) -> Self {
        let status =
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            code,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, message = %self.message, "request failed");
        }
        (
            self.status,
            Json(json!({ "error": self.code, "message": self.message })),
        )
            .into_response()
    }
}

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        Self::from_parts(err.http_status_code(), err.error_code(), err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::from_parts(err.http_status_code(), err.error_code(), err.to_string())
    }
}

impl From<SummaryError> for ApiError {
    fn from(err: SummaryError) -> Self {
        Self::from_parts(err.http_status_code(), err.error_code(), err.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::NotFound => {
                Self::new(StatusCode::NOT_FOUND, "USER_NOT_FOUND", err.to_string())
            }
            UserError::EmailTaken => {
                Self::new(StatusCode::CONFLICT, "EMAIL_TAKEN", err.to_string())
            }
            UserError::Database(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<HolidayError> for ApiError {
    fn from(err: HolidayError) -> Self {
        match &err {
            HolidayError::InvalidYear(_) => Self::bad_request(err.to_string()),
            HolidayError::Database(_) => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worklog_core::entry::StoreError;

    #[test]
    fn test_rule_violation_maps_to_422() {
        let err = ApiError::from(ValidationError::FutureDate);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, "FUTURE_DATE");
    }

    #[test]
    fn test_store_failure_maps_to_503() {
        let err = ApiError::from(ValidationError::Store(StoreError::Timeout));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code, "STORE_UNAVAILABLE");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(EntryError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "ENTRY_NOT_FOUND");
    }
}
