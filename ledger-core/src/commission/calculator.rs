//! Commission Calculator
//!
//! Uses rust_decimal for the money steps, returns f64 rounded to 2 places.

use super::{DEFAULT_COMMISSION_PERCENT, GST_RATE, to_meters};
use crate::money::{round2_wide, to_f64, try_decimal};
use rust_decimal::prelude::*;
use shared::models::{CommissionBase, CommissionConfig, QuantityUnit};

/// Commission rule resolved from a customer's configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommissionRule {
    /// Percentage of (amount + GST)
    Percent(f64),
    /// Flat rate per unit of ordered quantity
    PerLot(f64),
}

impl CommissionRule {
    /// Resolve the active rule
    ///
    /// A missing or non-positive percent falls back to
    /// [`DEFAULT_COMMISSION_PERCENT`]; a missing or negative lot rate is 0.
    pub fn resolve(config: &CommissionConfig) -> Self {
        match config.commission_base {
            CommissionBase::Lot => Self::PerLot(
                config
                    .commission_lot_rate
                    .filter(|r| r.is_finite() && *r >= 0.0)
                    .unwrap_or(0.0),
            ),
            CommissionBase::Percent => Self::Percent(
                config
                    .commission_percent
                    .filter(|p| p.is_finite() && *p > 0.0)
                    .unwrap_or(DEFAULT_COMMISSION_PERCENT),
            ),
        }
    }
}

impl From<&CommissionConfig> for CommissionRule {
    fn from(config: &CommissionConfig) -> Self {
        Self::resolve(config)
    }
}

/// Intermediate values of a commission computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommissionBreakdown {
    Percent {
        percent: f64,
        /// Billed meters (unrounded)
        meters: f64,
        base_amount: f64,
        gst_amount: f64,
        amount: f64,
    },
    PerLot {
        lot_rate: f64,
        quantity: f64,
        amount: f64,
    },
}

impl CommissionBreakdown {
    pub fn amount(&self) -> f64 {
        match self {
            Self::Percent { amount, .. } | Self::PerLot { amount, .. } => *amount,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Compute a commission with its intermediate values
///
/// Returns `None` when rate or quantity is not a positive finite number, or
/// when the amounts are not finite. Amounts beyond Decimal range are
/// computed in f64.
pub fn commission_breakdown(
    rate: f64,
    quantity: f64,
    unit: QuantityUnit,
    lot_meters_basis: f64,
    config: &CommissionConfig,
) -> Option<CommissionBreakdown> {
    if !is_positive(rate) || !is_positive(quantity) {
        return None;
    }

    match CommissionRule::resolve(config) {
        CommissionRule::PerLot(lot_rate) => {
            // Raw quantity, independent of unit and basis
            let amount = try_decimal(quantity)
                .zip(try_decimal(lot_rate))
                .and_then(|(q, r)| q.checked_mul(r))
                .map(to_f64)
                .or_else(|| {
                    tracing::debug!(quantity, lot_rate, "Lot commission beyond decimal range");
                    round2_wide(quantity * lot_rate)
                });
            let Some(amount) = amount else {
                tracing::warn!(quantity, lot_rate, "Lot commission is not finite, using zero");
                return None;
            };
            Some(CommissionBreakdown::PerLot {
                lot_rate,
                quantity,
                amount,
            })
        }
        CommissionRule::Percent(percent) => {
            let meters = to_meters(quantity, unit, lot_meters_basis);
            if !meters.is_finite() {
                tracing::warn!(meters, %unit, lot_meters_basis, "Billed meters out of range, using zero");
                return None;
            }

            let amounts = percent_amounts(meters, rate, percent).or_else(|| {
                tracing::debug!(meters, rate, percent, "Percent commission beyond decimal range");
                percent_amounts_wide(meters, rate, percent)
            });
            let Some((base_amount, gst_amount, amount)) = amounts else {
                tracing::warn!(meters, rate, percent, "Percent commission is not finite, using zero");
                return None;
            };

            Some(CommissionBreakdown::Percent {
                percent,
                meters,
                base_amount,
                gst_amount,
                amount,
            })
        }
    }
}

/// `(base, gst, commission)` computed in Decimal
fn percent_amounts(meters: f64, rate: f64, percent: f64) -> Option<(f64, f64, f64)> {
    let base = try_decimal(meters)?.checked_mul(try_decimal(rate)?)?;
    let gst = base.checked_mul(GST_RATE)?;
    let total = base.checked_add(gst)?;
    let amount = total.checked_mul(try_decimal(percent)?)? / Decimal::ONE_HUNDRED;
    Some((to_f64(base), to_f64(gst), to_f64(amount)))
}

/// Same steps in f64 for amounts that do not fit a Decimal
fn percent_amounts_wide(meters: f64, rate: f64, percent: f64) -> Option<(f64, f64, f64)> {
    let base = meters * rate;
    let gst = base * GST_RATE.to_f64()?;
    let amount = (base + gst) * percent / 100.0;
    Some((round2_wide(base)?, round2_wide(gst)?, round2_wide(amount)?))
}

/// Commission preview amount, rounded to 2 decimal places
///
/// Always finite and non-negative; degenerate input gives 0.
pub fn compute_commission(
    rate: f64,
    quantity: f64,
    unit: QuantityUnit,
    lot_meters_basis: f64,
    config: &CommissionConfig,
) -> f64 {
    commission_breakdown(rate, quantity, unit, lot_meters_basis, config)
        .map_or(0.0, |b| b.amount())
}
