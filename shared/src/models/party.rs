//! Party Model (customers and manufacturers)

use super::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which side of an order a party sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    Customer,
    Manufacturer,
}

impl PartyType {
    /// REST collection the party type lives under
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Customer => "customers",
            Self::Manufacturer => "manufacturers",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Manufacturer => "manufacturer",
        }
    }
}

impl FromStr for PartyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "manufacturer" => Ok(Self::Manufacturer),
            _ => Err("Select a valid user type".to_string()),
        }
    }
}

/// How a customer's commission is computed
///
/// - `Percent`: a percentage of (amount + GST)
/// - `Lot`: a flat rate per unit of ordered quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommissionBase {
    #[default]
    Percent,
    Lot,
}

impl CommissionBase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "PERCENT",
            Self::Lot => "LOT",
        }
    }

    /// Read a base the way the order form does: case-insensitive, anything
    /// other than `LOT` (including a missing value) is `PERCENT`.
    pub fn from_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("LOT") => Self::Lot,
            _ => Self::Percent,
        }
    }
}

impl fmt::Display for CommissionBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommissionBase {
    type Err = String;

    /// Strict parse used by party validation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("PERCENT") {
            Ok(Self::Percent)
        } else if trimmed.eq_ignore_ascii_case("LOT") {
            Ok(Self::Lot)
        } else {
            Err("Select a valid commission base".to_string())
        }
    }
}

impl<'de> Deserialize<'de> for CommissionBase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(Self::from_lenient(raw.as_ref().and_then(Value::as_str)))
    }
}

/// Commission settings carried on a customer record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionConfig {
    #[serde(default)]
    pub commission_base: CommissionBase,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub commission_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub commission_lot_rate: Option<f64>,
}

impl CommissionConfig {
    pub fn percent(percent: f64) -> Self {
        Self {
            commission_base: CommissionBase::Percent,
            commission_percent: Some(percent),
            commission_lot_rate: None,
        }
    }

    pub fn lot(lot_rate: f64) -> Self {
        Self {
            commission_base: CommissionBase::Lot,
            commission_percent: None,
            commission_lot_rate: Some(lot_rate),
        }
    }
}

/// Customer or manufacturer entity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firm_name: Option<String>,
    #[serde(default)]
    pub gst_no: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub commission: CommissionConfig,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Primary/secondary labels for a party cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyDisplay {
    pub primary: String,
    pub secondary: String,
}

impl Party {
    /// Firm name first, falling back to the contact name
    pub fn display(&self) -> PartyDisplay {
        let firm = self.firm_name.as_deref().filter(|s| !s.is_empty());
        let name = Some(self.name.as_str()).filter(|s| !s.is_empty());
        let primary = firm.or(name).unwrap_or("-").to_string();
        let secondary = match (firm, name) {
            (Some(_), Some(n)) => n.to_string(),
            _ => String::new(),
        };
        PartyDisplay { primary, secondary }
    }

    /// Case-insensitive, whitespace-trimmed name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Normalised create/update payload for a party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyPayload {
    pub user_type: Option<PartyType>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_base: Option<CommissionBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_lot_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone: String,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserialize_with_commission() {
        let json = r#"{
            "id": 7,
            "name": "Ramesh",
            "firmName": "Shree Textiles",
            "commissionBase": "lot",
            "commissionLotRate": "12.5"
        }"#;
        let party: Party = serde_json::from_str(json).unwrap();
        assert_eq!(party.id, "7");
        assert_eq!(party.commission.commission_base, CommissionBase::Lot);
        assert_eq!(party.commission.commission_lot_rate, Some(12.5));
        assert_eq!(party.commission.commission_percent, None);
    }

    #[test]
    fn test_missing_or_unknown_base_is_percent() {
        let party: Party = serde_json::from_str(r#"{"id": "a", "name": "A"}"#).unwrap();
        assert_eq!(party.commission.commission_base, CommissionBase::Percent);

        let party: Party =
            serde_json::from_str(r#"{"id": "a", "name": "A", "commissionBase": null}"#).unwrap();
        assert_eq!(party.commission.commission_base, CommissionBase::Percent);

        let party: Party =
            serde_json::from_str(r#"{"id": "a", "name": "A", "commissionBase": "FLAT"}"#).unwrap();
        assert_eq!(party.commission.commission_base, CommissionBase::Percent);
    }

    #[test]
    fn test_strict_base_parse() {
        assert_eq!("percent".parse::<CommissionBase>(), Ok(CommissionBase::Percent));
        assert_eq!("LOT".parse::<CommissionBase>(), Ok(CommissionBase::Lot));
        assert!("FLAT".parse::<CommissionBase>().is_err());
    }

    #[test]
    fn test_display_prefers_firm_name() {
        let party = Party {
            id: "1".into(),
            name: "Ramesh".into(),
            firm_name: Some("Shree Textiles".into()),
            ..Default::default()
        };
        let display = party.display();
        assert_eq!(display.primary, "Shree Textiles");
        assert_eq!(display.secondary, "Ramesh");
    }

    #[test]
    fn test_display_without_firm_name() {
        let party = Party {
            id: "1".into(),
            name: "Ramesh".into(),
            ..Default::default()
        };
        assert_eq!(
            party.display(),
            PartyDisplay {
                primary: "Ramesh".into(),
                secondary: String::new()
            }
        );

        let empty = Party::default();
        assert_eq!(empty.display().primary, "-");
    }

    #[test]
    fn test_matches_name() {
        let party = Party {
            id: "1".into(),
            name: "  Shree Textiles ".into(),
            ..Default::default()
        };
        assert!(party.matches_name("shree textiles"));
        assert!(!party.matches_name("shree"));
    }

    #[test]
    fn test_payload_skips_stripped_fields() {
        let payload = PartyPayload {
            user_type: Some(PartyType::Manufacturer),
            name: "Mill".into(),
            phone: "9876543210".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["userType"], "manufacturer");
        assert!(json.get("gstNo").is_none());
        assert!(json.get("commissionBase").is_none());
        assert!(json["email"].is_null());
    }
}
