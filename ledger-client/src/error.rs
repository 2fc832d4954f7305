//! Client error types

use reqwest::StatusCode;
use shared::error::{ApiErrorBody, AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required: {0}")]
    Unauthorized(AppError),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(AppError),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(AppError),

    /// Request rejected by validation (400)
    #[error("Validation error: {0}")]
    Validation(AppError),

    /// Duplicate or in-use resource (409)
    #[error("Conflict: {0}")]
    Conflict(AppError),

    /// Any other failure status
    #[error("Internal error: {0}")]
    Internal(AppError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a failed response to an error
    ///
    /// The backend's `{ code, message, details }` envelope is decoded first; a
    /// known `code` decides the variant, otherwise the HTTP status does. A
    /// body that is not an envelope is used as the message.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let text = body.trim();
        let envelope =
            serde_json::from_str::<ApiErrorBody>(text).unwrap_or_else(|_| ApiErrorBody {
                message: (!text.is_empty()).then(|| text.to_string()),
                ..Default::default()
            });
        Self::from_app_error(envelope.into_app_error(status))
    }

    /// Wrap an [`AppError`] in the variant matching its code's HTTP status
    pub fn from_app_error(error: AppError) -> Self {
        match error.http_status() {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(error),
            StatusCode::FORBIDDEN => Self::Forbidden(error),
            StatusCode::NOT_FOUND => Self::NotFound(error),
            StatusCode::BAD_REQUEST => Self::Validation(error),
            StatusCode::CONFLICT => Self::Conflict(error),
            _ => Self::Internal(error),
        }
    }

    /// Backend error carried by this failure, if the backend answered
    pub fn api_error(&self) -> Option<&AppError> {
        match self {
            Self::Unauthorized(e)
            | Self::Forbidden(e)
            | Self::NotFound(e)
            | Self::Validation(e)
            | Self::Conflict(e)
            | Self::Internal(e) => Some(e),
            _ => None,
        }
    }

    /// Backend-facing message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::InvalidResponse(m) => m.clone(),
            Self::Http(e) => e.to_string(),
            Self::Serialization(e) => e.to_string(),
            _ => self.api_error().map(|e| e.message.clone()).unwrap_or_default(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            _ => self.api_error().map_or(ErrorCode::InternalError, |e| e.code),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(e)
            | ClientError::Forbidden(e)
            | ClientError::NotFound(e)
            | ClientError::Validation(e)
            | ClientError::Conflict(e)
            | ClientError::Internal(e) => e,
            other => AppError::with_message(other.code(), other.message()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_message_preferred() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Invalid email or password"}"#,
        );
        assert!(matches!(&err, ClientError::Validation(e) if e.message == "Invalid email or password"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_envelope_code_wins_over_status() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"code":4001,"message":"No such order"}"#,
        );
        assert!(matches!(&err, ClientError::NotFound(_)));
        assert_eq!(err.code(), ErrorCode::OrderNotFound);
        assert_eq!(err.message(), "No such order");

        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, r#"{"code":3002}"#);
        assert!(matches!(&err, ClientError::Conflict(_)));
        assert_eq!(err.code(), ErrorCode::QualityNameExists);
        assert_eq!(err.message(), ErrorCode::QualityNameExists.message());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, ""),
            ClientError::Unauthorized(e) if e.message == "User is not authenticated"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, "nope"),
            ClientError::Forbidden(e) if e.message == "nope"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "{}"),
            ClientError::NotFound(e) if e.message == "Resource not found"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::CONFLICT, r#"{"message":"in use"}"#),
            ClientError::Conflict(e) if e.message == "in use"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            ClientError::Internal(e) if e.message == "<html>bad gateway</html>"
        ));
    }

    #[test]
    fn test_into_app_error_keeps_backend_error() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"code":2003,"message":"Bad phone","details":{"field":"phone"}}"#,
        );
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::InvalidPhone);
        assert_eq!(app.message, "Bad phone");
        assert_eq!(app.details.unwrap()["field"], "phone");

        let app: AppError = ClientError::InvalidResponse("Missing login token".into()).into();
        assert_eq!(app.code, ErrorCode::InvalidFormat);
        assert_eq!(app.message, "Missing login token");
    }
}
