//! Cloth quantity units

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit an order quantity is expressed in
///
/// 1 LOT = 12 TAKKA. METER quantities are already in the billing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuantityUnit {
    #[default]
    Takka,
    Lot,
    Meter,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 3] = [Self::Takka, Self::Lot, Self::Meter];

    /// Wire name (`"TAKKA"`, `"LOT"`, `"METER"`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Takka => "TAKKA",
            Self::Lot => "LOT",
            Self::Meter => "METER",
        }
    }

    /// Display label used in unit pickers
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Takka => "Takka",
            Self::Lot => "Lot",
            Self::Meter => "Meter",
        }
    }

    /// TAKKA and LOT quantities need a lot-to-meter basis to be billed
    pub const fn is_lot_denominated(&self) -> bool {
        matches!(self, Self::Takka | Self::Lot)
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown quantity unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantity unit '{0}', expected TAKKA, LOT or METER")]
pub struct UnitParseError(pub String);

impl FromStr for QuantityUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnitParseError(trimmed.to_string()))
    }
}

/// Deserialize an optional unit, dropping values that are not a known unit
pub fn lenient_unit<'de, D>(deserializer: D) -> Result<Option<QuantityUnit>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
