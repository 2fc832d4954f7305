//! Money calculation utilities using rust_decimal for precision
//!
//! Inputs arrive as `f64` from forms and API payloads. Arithmetic is done in
//! `Decimal`, then converted back to `f64` rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal, `None` when non-finite or beyond Decimal range
#[inline]
pub fn try_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Round a Decimal to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// `round(value * 100) / 100` on an f64, computed through Decimal when it fits
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    try_decimal(value)
        .map(to_f64)
        .or_else(|| round2_wide(value))
        .unwrap_or_default()
}

/// `round(value * 100) / 100` in plain f64
///
/// Used for amounts too large for Decimal. `None` when the result is not finite.
#[inline]
pub fn round2_wide(value: f64) -> Option<f64> {
    let rounded = (value * 100.0).round() / 100.0;
    rounded.is_finite().then_some(rounded)
}
