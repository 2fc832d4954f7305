//! Order preview session
//!
//! Holds the order-form state the commission preview depends on and owns
//! the lot meter basis for the lifetime of one entry or edit session.
//!
//! Basis lifecycle:
//! - fresh entry: sampled when the session starts, then resampled whenever
//!   the unit actually changes to TAKKA or LOT
//! - edit: pinned to the order's stored `lotMeters` when it has one

use crate::commission::{
    LotMeterSampler, basis_label, compute_commission, format_amount, lot_basis_display,
};
use shared::models::{CommissionBase, CommissionConfig, Order, Party, QuantityUnit};

/// What the order form renders under the preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSnapshot {
    pub amount: f64,
    /// Amount with exactly 2 decimals
    pub amount_display: String,
    pub basis_label: String,
    /// Shown only for TAKKA/LOT orders with a quantity
    pub lot_basis_display: Option<String>,
}

/// Parse a numeric form input: blank is 0, garbage is NaN
fn parse_input(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

#[derive(Debug)]
pub struct OrderPreview<S: LotMeterSampler> {
    sampler: S,
    unit: QuantityUnit,
    lot_meters_basis: f64,
    /// Basis came from a stored order and must not be resampled
    pinned: bool,
    rate: f64,
    quantity: f64,
    customer: Option<CommissionConfig>,
}

impl<S: LotMeterSampler> OrderPreview<S> {
    /// Fresh order entry (unit TAKKA, basis sampled now)
    pub fn new(mut sampler: S) -> Self {
        let lot_meters_basis = sampler.sample();
        tracing::debug!(lot_meters_basis, "Sampled lot meter basis for new order");
        Self {
            sampler,
            unit: QuantityUnit::default(),
            lot_meters_basis,
            pinned: false,
            rate: 0.0,
            quantity: 0.0,
            customer: None,
        }
    }

    /// Edit an existing order
    pub fn for_order(order: &Order, sampler: S) -> Self {
        let mut preview = Self::new(sampler);
        preview.unit = order.quantity_unit.unwrap_or_default();
        preview.rate = order.rate;
        preview.quantity = order.quantity;
        preview.customer = order.customer.as_ref().map(|c| c.commission);
        if let Some(stored) = order.lot_meters.filter(|m| m.is_finite() && *m > 0.0) {
            tracing::debug!(order_id = %order.id, lot_meters = stored, "Using stored lot meter basis");
            preview.lot_meters_basis = stored;
            preview.pinned = true;
        }
        preview
    }

    /// Change the quantity unit
    ///
    /// Setting the current unit again is not a change and keeps the basis.
    pub fn set_unit(&mut self, unit: QuantityUnit) {
        if unit == self.unit {
            return;
        }
        self.unit = unit;
        if unit.is_lot_denominated() && !self.pinned {
            self.lot_meters_basis = self.sampler.sample();
            tracing::debug!(
                lot_meters_basis = self.lot_meters_basis,
                %unit,
                "Resampled lot meter basis"
            );
        }
    }

    /// Pick a customer; LOT-based customers switch the unit to LOT
    pub fn select_customer(&mut self, customer: &Party) {
        self.customer = Some(customer.commission);
        if customer.commission.commission_base == CommissionBase::Lot {
            self.set_unit(QuantityUnit::Lot);
        }
    }

    pub fn clear_customer(&mut self) {
        self.customer = None;
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    pub fn set_rate_input(&mut self, input: &str) {
        self.rate = parse_input(input);
    }

    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = parse_input(input);
    }

    /// Clear rate and quantity after submit, keeping unit, customer and basis
    pub fn reset_after_submit(&mut self) {
        self.rate = 0.0;
        self.quantity = 0.0;
    }

    pub fn unit(&self) -> QuantityUnit {
        self.unit
    }

    pub fn lot_meters_basis(&self) -> f64 {
        self.lot_meters_basis
    }

    pub fn is_basis_pinned(&self) -> bool {
        self.pinned
    }

    /// Selected customer's config, or the default PERCENT config
    pub fn commission_config(&self) -> CommissionConfig {
        self.customer.unwrap_or_default()
    }

    pub fn commission(&self) -> f64 {
        compute_commission(
            self.rate,
            self.quantity,
            self.unit,
            self.lot_meters_basis,
            &self.commission_config(),
        )
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        let amount = self.commission();
        let show_basis = self.unit.is_lot_denominated() && self.quantity > 0.0;
        PreviewSnapshot {
            amount,
            amount_display: format_amount(amount),
            basis_label: basis_label(&self.commission_config()),
            lot_basis_display: show_basis.then(|| lot_basis_display(self.lot_meters_basis)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::{FixedLotSampler, LOT_MAX_METERS, LOT_MIN_METERS, RandomLotSampler};

    /// Hands out 1450, 1460, 1470, ... and counts draws
    #[derive(Debug, Default)]
    struct StepSampler {
        draws: u32,
    }

    impl LotMeterSampler for StepSampler {
        fn sample(&mut self) -> f64 {
            let value = 1450.0 + 10.0 * f64::from(self.draws);
            self.draws += 1;
            value
        }
    }

    fn lot_customer(rate: f64) -> Party {
        Party {
            id: "c-1".into(),
            name: "Ramesh".into(),
            commission: CommissionConfig::lot(rate),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_samples_once() {
        let preview = OrderPreview::new(StepSampler::default());
        assert_eq!(preview.unit(), QuantityUnit::Takka);
        assert_eq!(preview.lot_meters_basis(), 1450.0);
        assert_eq!(preview.sampler.draws, 1);
        assert!(!preview.is_basis_pinned());
    }

    #[test]
    fn test_resample_on_unit_transition() {
        let mut preview = OrderPreview::new(StepSampler::default());

        // same unit again is not a change
        preview.set_unit(QuantityUnit::Takka);
        assert_eq!(preview.sampler.draws, 1);

        preview.set_unit(QuantityUnit::Lot);
        assert_eq!(preview.lot_meters_basis(), 1460.0);

        // METER keeps the previous basis
        preview.set_unit(QuantityUnit::Meter);
        assert_eq!(preview.lot_meters_basis(), 1460.0);
        assert_eq!(preview.sampler.draws, 2);

        preview.set_unit(QuantityUnit::Takka);
        assert_eq!(preview.lot_meters_basis(), 1470.0);
        assert_eq!(preview.sampler.draws, 3);
    }

    #[test]
    fn test_basis_stable_across_recomputation() {
        let mut preview = OrderPreview::new(RandomLotSampler::seeded(3));
        let basis = preview.lot_meters_basis();
        assert!((LOT_MIN_METERS..LOT_MAX_METERS).contains(&basis));
        preview.set_rate_input("200");
        for qty in ["1", "12", "24"] {
            preview.set_quantity_input(qty);
            let _ = preview.commission();
            assert_eq!(preview.lot_meters_basis(), basis);
        }
    }

    #[test]
    fn test_default_customer_preview() {
        let mut preview = OrderPreview::new(FixedLotSampler(1500.0));
        preview.set_rate_input("200");
        preview.set_quantity_input("24");
        let snapshot = preview.snapshot();
        assert_eq!(
            snapshot,
            PreviewSnapshot {
                amount: 6300.0,
                amount_display: "6300.00".into(),
                basis_label: "1% on (Amount + GST)".into(),
                lot_basis_display: Some("1500.00".into()),
            }
        );
    }

    #[test]
    fn test_meter_hides_lot_basis() {
        let mut preview = OrderPreview::new(FixedLotSampler(1500.0));
        preview.select_customer(&Party {
            commission: CommissionConfig::percent(5.0),
            ..Default::default()
        });
        preview.set_unit(QuantityUnit::Meter);
        preview.set_rate(100.0);
        preview.set_quantity(10.0);
        let snapshot = preview.snapshot();
        assert_eq!(snapshot.amount_display, "52.50");
        assert_eq!(snapshot.basis_label, "5% on (Amount + GST)");
        assert_eq!(snapshot.lot_basis_display, None);
    }

    #[test]
    fn test_lot_customer_switches_unit() {
        let mut preview = OrderPreview::new(StepSampler::default());
        preview.select_customer(&lot_customer(12.5));
        assert_eq!(preview.unit(), QuantityUnit::Lot);
        assert_eq!(preview.lot_meters_basis(), 1460.0);

        preview.set_rate_input("80");
        preview.set_quantity_input("4");
        let snapshot = preview.snapshot();
        assert_eq!(snapshot.amount, 50.0);
        assert_eq!(snapshot.basis_label, "LOT (12.5 x Qty)");

        preview.clear_customer();
        assert_eq!(preview.commission_config(), CommissionConfig::default());
    }

    #[test]
    fn test_blank_and_garbage_inputs() {
        let mut preview = OrderPreview::new(FixedLotSampler(1500.0));
        preview.set_rate_input("");
        preview.set_quantity_input("10");
        assert_eq!(preview.commission(), 0.0);

        preview.set_rate_input("12x");
        assert_eq!(preview.snapshot().amount_display, "0.00");

        // no quantity, no basis line
        preview.set_rate_input("100");
        preview.set_quantity_input(" ");
        assert_eq!(preview.snapshot().lot_basis_display, None);
    }

    #[test]
    fn test_reset_after_submit() {
        let mut preview = OrderPreview::new(FixedLotSampler(1500.0));
        preview.select_customer(&lot_customer(10.0));
        preview.set_rate(100.0);
        preview.set_quantity(3.0);
        assert_eq!(preview.commission(), 30.0);

        preview.reset_after_submit();
        assert_eq!(preview.commission(), 0.0);
        assert_eq!(preview.unit(), QuantityUnit::Lot);
        assert_eq!(preview.commission_config(), CommissionConfig::lot(10.0));
    }

    #[test]
    fn test_edit_flow_pins_stored_basis() {
        let order = Order {
            id: "o-1".into(),
            rate: 200.0,
            quantity: 24.0,
            quantity_unit: Some(QuantityUnit::Takka),
            lot_meters: Some(1512.0),
            ..Default::default()
        };
        let mut preview = OrderPreview::for_order(&order, StepSampler::default());
        assert!(preview.is_basis_pinned());
        assert_eq!(preview.lot_meters_basis(), 1512.0);

        preview.set_unit(QuantityUnit::Lot);
        preview.set_unit(QuantityUnit::Takka);
        assert_eq!(preview.lot_meters_basis(), 1512.0);
        // 24 takka = 2 lots of 1512 m
        assert_eq!(preview.commission(), 6350.4);
    }

    #[test]
    fn test_edit_flow_without_stored_basis_samples() {
        let order = Order {
            id: "o-2".into(),
            quantity_unit: Some(QuantityUnit::Meter),
            lot_meters: None,
            ..Default::default()
        };
        let mut preview = OrderPreview::for_order(&order, StepSampler::default());
        assert!(!preview.is_basis_pinned());
        assert_eq!(preview.unit(), QuantityUnit::Meter);

        preview.set_unit(QuantityUnit::Lot);
        assert_eq!(preview.lot_meters_basis(), 1460.0);
    }

    #[test]
    fn test_edit_flow_uses_order_customer() {
        let order = Order {
            id: "o-3".into(),
            rate: 80.0,
            quantity: 4.0,
            quantity_unit: Some(QuantityUnit::Meter),
            customer: Some(lot_customer(12.5)),
            ..Default::default()
        };
        let preview = OrderPreview::for_order(&order, FixedLotSampler(1500.0));
        assert_eq!(preview.commission(), 50.0);
        // loading an order does not rewrite its unit
        assert_eq!(preview.unit(), QuantityUnit::Meter);
    }
}
