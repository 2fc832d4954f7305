//! Data models
//!
//! Mirrors the JSON exchanged with the ledger backend (camelCase on the
//! wire). IDs are kept as strings; the backend may send numbers.

pub mod lenient;
pub mod order;
pub mod party;
pub mod quality;
pub mod report;
pub mod unit;
pub mod user;

// Re-exports
pub use order::*;
pub use party::*;
pub use quality::*;
pub use report::*;
pub use unit::*;
pub use user::*;
