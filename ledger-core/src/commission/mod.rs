//! Commission engine
//!
//! Order entry flows through here as:
//!
//! ```text
//! (quantity, unit) ──┐
//!                    ├─> to_meters ─> commission_breakdown ─> format_amount
//! lot meter basis ───┘
//! ```
//!
//! The lot meter basis is a randomized meters-per-lot factor, only used for
//! TAKKA/LOT quantities. It is produced by a [`LotMeterSampler`] so callers
//! (and tests) can pin it.
//!
//! The engine never fails: degenerate inputs yield a zero commission.

mod calculator;
mod format;
mod lot_basis;
mod units;

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;

pub use calculator::{CommissionBreakdown, CommissionRule, commission_breakdown, compute_commission};
pub use format::{basis_label, format_amount, lot_basis_display};
pub use lot_basis::{FixedLotSampler, LotMeterSampler, RandomLotSampler, sample_lot_meters};
pub use units::to_meters;

/// TAKKA pieces in one LOT
pub const TAKKA_PER_LOT: f64 = 12.0;

/// Lower bound (inclusive) of the meters-per-lot band
pub const LOT_MIN_METERS: f64 = 1450.0;

/// Upper bound (exclusive) of the meters-per-lot band
pub const LOT_MAX_METERS: f64 = 1550.0;

/// GST applied to the base amount before percentage commission (5%)
pub const GST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Commission percent used when a customer has none (or a non-positive one)
pub const DEFAULT_COMMISSION_PERCENT: f64 = 1.0;
