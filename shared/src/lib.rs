//! Shared types for the cloth ledger
//!
//! Wire models exchanged with the ledger backend (parties, qualities,
//! orders, reports), list envelopes, and the unified error system.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{CommissionBase, CommissionConfig, QuantityUnit, UnitParseError};
pub use response::{ListQuery, Page, Pagination, SortOrder};
