//! Unit normalizer

use super::TAKKA_PER_LOT;
use shared::models::QuantityUnit;

/// Convert a quantity into billed meters
///
/// `lot_meters_basis` is only read for TAKKA and LOT quantities.
pub fn to_meters(quantity: f64, unit: QuantityUnit, lot_meters_basis: f64) -> f64 {
    match unit {
        QuantityUnit::Meter => quantity,
        QuantityUnit::Lot => quantity * lot_meters_basis,
        QuantityUnit::Takka => quantity * (lot_meters_basis / TAKKA_PER_LOT),
    }
}
