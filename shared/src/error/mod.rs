//! Unified error system for the ledger
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiErrorBody`]: Error envelope returned by the backend
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Party errors
//! - 3xxx: Quality errors
//! - 4xxx: Order errors
//! - 5xxx: Report errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound);
//! assert_eq!(err.message, "Order not found");
//!
//! let err = AppError::with_message(ErrorCode::InvalidRate, "Rate must be a number");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiErrorBody, AppError, AppResult};
