//! Preview formatting

use super::calculator::CommissionRule;
use crate::money::{round_money, round2, try_decimal};
use rust_decimal::Decimal;
use shared::models::CommissionConfig;

/// Render an amount with exactly 2 decimal places
///
/// Non-finite values render as `"0.00"`. Values beyond Decimal range use
/// plain f64 formatting.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }
    let Some(value) = try_decimal(amount) else {
        return format!("{amount:.2}");
    };
    let mut value = round_money(value);
    if value.is_zero() {
        // -0.001 rounds to a signed zero
        value = Decimal::ZERO;
    }
    value.rescale(2);
    value.to_string()
}

/// Human label of the commission basis shown next to the preview
pub fn basis_label(config: &CommissionConfig) -> String {
    match CommissionRule::resolve(config) {
        CommissionRule::PerLot(rate) => format!("LOT ({rate} x Qty)"),
        CommissionRule::Percent(percent) => format!("{percent}% on (Amount + GST)"),
    }
}

/// Lot meter basis rounded for display, e.g. `"1498.27"`
pub fn lot_basis_display(basis: f64) -> String {
    format_amount(round2(basis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(52.5), "52.50");
        assert_eq!(format_amount(6300.0), "6300.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1.234), "1.23");
        assert_eq!(format_amount(0.125), "0.13");
    }

    #[test]
    fn test_format_beyond_decimal_range() {
        let text = format_amount(1e30);
        assert!(text.starts_with("1000000000000000"));
        assert!(text.ends_with(".00"));
        assert_eq!(text.len(), 34);
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_amount(f64::NAN), "0.00");
        assert_eq!(format_amount(f64::INFINITY), "0.00");
        assert_eq!(format_amount(f64::NEG_INFINITY), "0.00");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_basis_label() {
        assert_eq!(basis_label(&CommissionConfig::lot(12.5)), "LOT (12.5 x Qty)");
        assert_eq!(basis_label(&CommissionConfig::lot(-3.0)), "LOT (0 x Qty)");
        assert_eq!(basis_label(&CommissionConfig::percent(2.0)), "2% on (Amount + GST)");
        assert_eq!(basis_label(&CommissionConfig::default()), "1% on (Amount + GST)");
    }

    #[test]
    fn test_lot_basis_display() {
        assert_eq!(lot_basis_display(1498.2671), "1498.27");
        assert_eq!(lot_basis_display(1500.0), "1500.00");
    }
}
