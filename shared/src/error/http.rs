//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::PartyNotFound
            | Self::QualityNotFound
            | Self::OrderNotFound
            | Self::ReportNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::PartyInUse
            | Self::QualityNameExists
            | Self::QualityInUse
            | Self::OrderAlreadyCompleted
            | Self::OrderAlreadyCancelled => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::ResetLinkInvalid
            | Self::InvalidGstNumber
            | Self::InvalidPhone
            | Self::InvalidCommissionBase
            | Self::InvalidCommissionValue
            | Self::InvalidQuantityUnit
            | Self::InvalidRate
            | Self::InvalidQuantity
            | Self::InvalidOrderDate
            | Self::InvalidProgress
            | Self::InvalidDateRange => StatusCode::BAD_REQUEST,

            Self::TimeoutError => StatusCode::GATEWAY_TIMEOUT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::Unknown
            | Self::ReportGenerationFailed
            | Self::InternalError
            | Self::DatabaseError
            | Self::NetworkError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Best-effort mapping from an HTTP status returned by the backend
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            s if s.is_success() => Self::Success,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::GATEWAY_TIMEOUT | StatusCode::REQUEST_TIMEOUT => Self::TimeoutError,
            StatusCode::SERVICE_UNAVAILABLE => Self::ServiceUnavailable,
            _ => Self::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(
            ErrorCode::PartyNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::QualityNameExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::TokenExpired.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::InvalidGstNumber.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_http_status() {
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::CREATED),
            ErrorCode::Success
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::UNPROCESSABLE_ENTITY),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::BAD_GATEWAY),
            ErrorCode::InternalError
        );
    }
}
