//! Unified error codes for the ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Party (customer / manufacturer) errors
//! - 3xxx: Quality errors
//! - 4xxx: Order errors
//! - 5xxx: Report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Permission denied
    PermissionDenied = 1005,
    /// Password reset link is invalid or used
    ResetLinkInvalid = 1006,

    // ==================== 2xxx: Party ====================
    /// Customer or manufacturer not found
    PartyNotFound = 2001,
    /// GSTIN does not match the expected format
    InvalidGstNumber = 2002,
    /// Phone is not a valid 10-digit mobile number
    InvalidPhone = 2003,
    /// Commission base is not PERCENT or LOT
    InvalidCommissionBase = 2004,
    /// Commission percent / lot rate missing or not positive
    InvalidCommissionValue = 2005,
    /// Party is referenced by existing orders
    PartyInUse = 2006,

    // ==================== 3xxx: Quality ====================
    /// Quality not found
    QualityNotFound = 3001,
    /// Quality name already exists
    QualityNameExists = 3002,
    /// Quality is referenced by existing orders
    QualityInUse = 3003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Quantity unit is not TAKKA, LOT or METER
    InvalidQuantityUnit = 4002,
    /// Rate missing or not positive
    InvalidRate = 4003,
    /// Quantity missing or not positive
    InvalidQuantity = 4004,
    /// Order date missing or not YYYY-MM-DD
    InvalidOrderDate = 4005,
    /// Processed quantity increment is not a whole non-negative number
    InvalidProgress = 4006,
    /// Order already completed
    OrderAlreadyCompleted = 4007,
    /// Order already cancelled
    OrderAlreadyCancelled = 4008,

    // ==================== 5xxx: Report ====================
    /// Report endpoint not found
    ReportNotFound = 5001,
    /// Report generation failed on the backend
    ReportGenerationFailed = 5002,
    /// Date range filter is invalid
    InvalidDateRange = 5003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Request timed out
    TimeoutError = 9004,
    /// Service unavailable
    ServiceUnavailable = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::ResetLinkInvalid => "Password reset link is invalid or expired",

            // Party
            ErrorCode::PartyNotFound => "Party not found",
            ErrorCode::InvalidGstNumber => "Enter a valid GSTIN (example: 27ABCDE1234F1Z5)",
            ErrorCode::InvalidPhone => "Enter a valid 10-digit Indian mobile number",
            ErrorCode::InvalidCommissionBase => "Select a valid commission base",
            ErrorCode::InvalidCommissionValue => "Commission value must be greater than 0",
            ErrorCode::PartyInUse => "Party is referenced by existing orders",

            // Quality
            ErrorCode::QualityNotFound => "Quality not found",
            ErrorCode::QualityNameExists => "Quality name already exists",
            ErrorCode::QualityInUse => "Quality is referenced by existing orders",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidQuantityUnit => "Quantity unit must be TAKKA, LOT or METER",
            ErrorCode::InvalidRate => "Rate must be greater than 0",
            ErrorCode::InvalidQuantity => "Quantity must be greater than 0",
            ErrorCode::InvalidOrderDate => "Use YYYY-MM-DD format",
            ErrorCode::InvalidProgress => {
                "Add processed quantity must be a whole number and cannot be negative."
            }
            ErrorCode::OrderAlreadyCompleted => "Order is already completed",
            ErrorCode::OrderAlreadyCancelled => "Order is already cancelled",

            // Report
            ErrorCode::ReportNotFound => "Report not found",
            ErrorCode::ReportGenerationFailed => "Report generation failed",
            ErrorCode::InvalidDateRange => "Invalid date range",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ServiceUnavailable => "Service unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::PermissionDenied),
            1006 => Ok(ErrorCode::ResetLinkInvalid),

            // Party
            2001 => Ok(ErrorCode::PartyNotFound),
            2002 => Ok(ErrorCode::InvalidGstNumber),
            2003 => Ok(ErrorCode::InvalidPhone),
            2004 => Ok(ErrorCode::InvalidCommissionBase),
            2005 => Ok(ErrorCode::InvalidCommissionValue),
            2006 => Ok(ErrorCode::PartyInUse),

            // Quality
            3001 => Ok(ErrorCode::QualityNotFound),
            3002 => Ok(ErrorCode::QualityNameExists),
            3003 => Ok(ErrorCode::QualityInUse),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidQuantityUnit),
            4003 => Ok(ErrorCode::InvalidRate),
            4004 => Ok(ErrorCode::InvalidQuantity),
            4005 => Ok(ErrorCode::InvalidOrderDate),
            4006 => Ok(ErrorCode::InvalidProgress),
            4007 => Ok(ErrorCode::OrderAlreadyCompleted),
            4008 => Ok(ErrorCode::OrderAlreadyCancelled),

            // Report
            5001 => Ok(ErrorCode::ReportNotFound),
            5002 => Ok(ErrorCode::ReportGenerationFailed),
            5003 => Ok(ErrorCode::InvalidDateRange),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ServiceUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
