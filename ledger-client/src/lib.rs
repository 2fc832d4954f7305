//! Ledger Client - REST client for the ledger backend
//!
//! Typed async calls for parties, qualities, orders and Excel reports, plus
//! environment configuration and logging setup for the command-line tools.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{LedgerApi, NetworkApiClient};
pub use logger::init_logger_with_file;

// Re-export shared types for convenience
pub use shared::models::{AuthResponse, Order, Party, PartyType, Quality, User};
pub use shared::response::{ListQuery, Page, Pagination, SortOrder};
