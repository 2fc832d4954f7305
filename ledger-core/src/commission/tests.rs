use super::*;
use crate::money::round2;
use proptest::prelude::*;
use shared::models::{CommissionConfig, QuantityUnit};

fn unit_strategy() -> impl Strategy<Value = QuantityUnit> {
    prop_oneof![
        Just(QuantityUnit::Takka),
        Just(QuantityUnit::Lot),
        Just(QuantityUnit::Meter),
    ]
}

// ==================== Calculator ====================

#[test]
fn test_percent_commission_meter() {
    let config = CommissionConfig::percent(5.0);
    let amount = compute_commission(100.0, 10.0, QuantityUnit::Meter, 1500.0, &config);
    assert_eq!(amount, 52.5);
    assert_eq!(format_amount(amount), "52.50");
}

#[test]
fn test_default_percent_takka() {
    let amount = compute_commission(
        200.0,
        24.0,
        QuantityUnit::Takka,
        1500.0,
        &CommissionConfig::default(),
    );
    assert_eq!(amount, 6300.0);
    assert_eq!(format_amount(amount), "6300.00");
}

#[test]
fn test_percent_breakdown_values() {
    let breakdown = commission_breakdown(
        200.0,
        24.0,
        QuantityUnit::Takka,
        1500.0,
        &CommissionConfig::default(),
    )
    .unwrap();
    assert_eq!(
        breakdown,
        CommissionBreakdown::Percent {
            percent: 1.0,
            meters: 3000.0,
            base_amount: 600000.0,
            gst_amount: 30000.0,
            amount: 6300.0,
        }
    );
}

#[test]
fn test_lot_base_uses_raw_quantity() {
    let config = CommissionConfig::lot(12.5);
    for unit in QuantityUnit::ALL {
        for basis in [1450.0, 1500.0, 1549.99] {
            assert_eq!(compute_commission(80.0, 4.0, unit, basis, &config), 50.0);
        }
    }
    let breakdown = commission_breakdown(80.0, 4.0, QuantityUnit::Meter, 1500.0, &config);
    assert_eq!(
        breakdown,
        Some(CommissionBreakdown::PerLot {
            lot_rate: 12.5,
            quantity: 4.0,
            amount: 50.0,
        })
    );
}

#[test]
fn test_lot_base_without_rate_is_zero() {
    let config = CommissionConfig {
        commission_base: shared::models::CommissionBase::Lot,
        commission_percent: Some(5.0),
        commission_lot_rate: None,
    };
    assert_eq!(compute_commission(100.0, 10.0, QuantityUnit::Lot, 1500.0, &config), 0.0);
}

#[test]
fn test_non_positive_inputs_give_zero() {
    let config = CommissionConfig::percent(5.0);
    for (rate, quantity) in [(0.0, 10.0), (100.0, 0.0), (-1.0, 10.0), (100.0, -5.0)] {
        assert_eq!(
            compute_commission(rate, quantity, QuantityUnit::Meter, 1500.0, &config),
            0.0
        );
        assert!(commission_breakdown(rate, quantity, QuantityUnit::Meter, 1500.0, &config).is_none());
    }
}

#[test]
fn test_non_finite_inputs_give_zero() {
    let config = CommissionConfig::lot(10.0);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(compute_commission(bad, 10.0, QuantityUnit::Lot, 1500.0, &config), 0.0);
        assert_eq!(compute_commission(100.0, bad, QuantityUnit::Lot, 1500.0, &config), 0.0);
    }
}

#[test]
fn test_non_finite_basis_gives_zero_for_lot_units() {
    let config = CommissionConfig::default();
    assert_eq!(compute_commission(100.0, 1.0, QuantityUnit::Takka, f64::NAN, &config), 0.0);
    // METER never reads the basis
    assert_eq!(compute_commission(100.0, 10.0, QuantityUnit::Meter, f64::NAN, &config), 10.5);
}

#[test]
fn test_lot_amount_beyond_decimal_range() {
    let amount = compute_commission(
        100.0,
        1e10,
        QuantityUnit::Meter,
        1500.0,
        &CommissionConfig::lot(1e20),
    );
    assert_eq!(amount, 1e30);
}

#[test]
fn test_percent_amount_beyond_decimal_range() {
    let breakdown = commission_breakdown(
        1e30,
        1e30,
        QuantityUnit::Meter,
        1500.0,
        &CommissionConfig::default(),
    )
    .unwrap();
    let CommissionBreakdown::Percent {
        base_amount,
        gst_amount,
        amount,
        ..
    } = breakdown
    else {
        panic!("expected percent breakdown, got {breakdown:?}");
    };
    assert!((base_amount / 1e60 - 1.0).abs() < 1e-12);
    assert!((gst_amount / 5e58 - 1.0).abs() < 1e-12);
    assert!((amount / 1.05e58 - 1.0).abs() < 1e-12);
}

#[test]
fn test_non_finite_amount_is_zero() {
    let amount = compute_commission(
        1e300,
        1e300,
        QuantityUnit::Meter,
        1500.0,
        &CommissionConfig::default(),
    );
    assert_eq!(amount, 0.0);
    let amount = compute_commission(
        1.0,
        1e300,
        QuantityUnit::Meter,
        1500.0,
        &CommissionConfig::lot(1e300),
    );
    assert_eq!(amount, 0.0);
}

#[test]
fn test_lot_rate_midpoint_rounds_up() {
    let amount = compute_commission(
        100.0,
        1.0,
        QuantityUnit::Lot,
        1500.0,
        &CommissionConfig::lot(1.005),
    );
    assert_eq!(amount, 1.01);
}

#[test]
fn test_zero_or_unset_percent_falls_back_to_one() {
    let expected = compute_commission(
        100.0,
        10.0,
        QuantityUnit::Meter,
        1500.0,
        &CommissionConfig::percent(1.0),
    );
    assert_eq!(expected, 10.5);
    for percent in [Some(0.0), Some(-2.0), Some(f64::NAN), None] {
        let config = CommissionConfig {
            commission_percent: percent,
            ..CommissionConfig::default()
        };
        assert_eq!(
            compute_commission(100.0, 10.0, QuantityUnit::Meter, 1500.0, &config),
            expected
        );
    }
}

#[test]
fn test_rule_resolution() {
    assert_eq!(
        CommissionRule::resolve(&CommissionConfig::percent(2.5)),
        CommissionRule::Percent(2.5)
    );
    assert_eq!(
        CommissionRule::from(&CommissionConfig::default()),
        CommissionRule::Percent(DEFAULT_COMMISSION_PERCENT)
    );
    assert_eq!(
        CommissionRule::resolve(&CommissionConfig::lot(f64::INFINITY)),
        CommissionRule::PerLot(0.0)
    );
}

#[test]
fn test_gst_rate_is_five_percent() {
    assert_eq!(GST_RATE.to_string(), "0.05");
}

// ==================== Sampler ====================

#[test]
fn test_sampler_band_10k() {
    let mut sampler = RandomLotSampler::seeded(42);
    for _ in 0..10_000 {
        let basis = sampler.sample();
        assert!(
            (LOT_MIN_METERS..LOT_MAX_METERS).contains(&basis),
            "basis {basis} out of band"
        );
    }
}

#[test]
fn test_thread_sampler_band() {
    for _ in 0..10_000 {
        let basis = sample_lot_meters();
        assert!((LOT_MIN_METERS..LOT_MAX_METERS).contains(&basis));
    }
}

#[test]
fn test_seeded_sampler_is_reproducible() {
    let mut a = RandomLotSampler::seeded(7);
    let mut b = RandomLotSampler::seeded(7);
    for _ in 0..100 {
        assert_eq!(a.sample(), b.sample());
    }
}

#[test]
fn test_fixed_sampler_through_references() {
    fn draw<S: LotMeterSampler>(mut sampler: S) -> f64 {
        sampler.sample()
    }

    let mut fixed = FixedLotSampler(1500.0);
    assert_eq!(draw(&mut fixed), 1500.0);

    let mut boxed: Box<dyn LotMeterSampler> = Box::new(FixedLotSampler(1475.5));
    assert_eq!(boxed.sample(), 1475.5);
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_meter_is_identity(q in 0.0f64..1e6, b in LOT_MIN_METERS..LOT_MAX_METERS) {
        prop_assert_eq!(to_meters(q, QuantityUnit::Meter, b), q);
    }

    #[test]
    fn prop_lot_is_quantity_times_basis(q in 0.0f64..1e6, b in LOT_MIN_METERS..LOT_MAX_METERS) {
        prop_assert_eq!(to_meters(q, QuantityUnit::Lot, b), q * b);
    }

    #[test]
    fn prop_takka_is_twelfth_of_lot(q in 0.0f64..1e6, b in LOT_MIN_METERS..LOT_MAX_METERS) {
        let takka = to_meters(q, QuantityUnit::Takka, b);
        let expected = q * b / TAKKA_PER_LOT;
        prop_assert!((takka - expected).abs() <= expected.abs() * 1e-12);
    }

    #[test]
    fn prop_lot_base_independent_of_unit_and_basis(
        qty in 1u32..10_000,
        rate_cents in 0u32..100_000,
        unit in unit_strategy(),
        b in LOT_MIN_METERS..LOT_MAX_METERS,
    ) {
        let quantity = f64::from(qty);
        let lot_rate = f64::from(rate_cents) / 100.0;
        let config = CommissionConfig::lot(lot_rate);
        let amount = compute_commission(150.0, quantity, unit, b, &config);
        prop_assert_eq!(amount, round2(quantity * lot_rate));
        prop_assert_eq!(amount, compute_commission(150.0, quantity, QuantityUnit::Meter, 1500.0, &config));
    }

    #[test]
    fn prop_result_finite_and_non_negative(
        rate in -1e6f64..1e6,
        quantity in -1e4f64..1e4,
        unit in unit_strategy(),
        b in LOT_MIN_METERS..LOT_MAX_METERS,
        percent in proptest::option::of(-10.0f64..50.0),
    ) {
        let config = CommissionConfig {
            commission_percent: percent,
            ..CommissionConfig::default()
        };
        let amount = compute_commission(rate, quantity, unit, b, &config);
        prop_assert!(amount.is_finite());
        prop_assert!(amount >= 0.0);
    }

    #[test]
    fn prop_pure(
        rate in 0.01f64..1e4,
        quantity in 0.01f64..1e3,
        unit in unit_strategy(),
        b in LOT_MIN_METERS..LOT_MAX_METERS,
    ) {
        let config = CommissionConfig::percent(2.0);
        let first = compute_commission(rate, quantity, unit, b, &config);
        let second = compute_commission(rate, quantity, unit, b, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_amount_has_two_decimals(
        rate in 0.01f64..1e4,
        quantity in 0.01f64..1e3,
        unit in unit_strategy(),
        b in LOT_MIN_METERS..LOT_MAX_METERS,
    ) {
        let amount = compute_commission(rate, quantity, unit, b, &CommissionConfig::default());
        prop_assert_eq!(round2(amount), amount);
        prop_assert_eq!(format_amount(amount).split('.').nth(1).map(str::len), Some(2));
    }
}
