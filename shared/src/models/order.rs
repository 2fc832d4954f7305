//! Order Model

use super::lenient;
use super::party::Party;
use super::quality::Quality;
use super::unit::{QuantityUnit, lenient_unit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
    /// Any status this client does not know about
    Unknown,
}

impl OrderStatus {
    /// Case-insensitive parse; unrecognised values are [`OrderStatus::Unknown`]
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "COMPLETED" => Self::Completed,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Pending, Self::parse_lenient))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WhatsApp deep links returned when an order is created
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhatsappLinks {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
}

impl WhatsappLinks {
    pub fn is_empty(&self) -> bool {
        let blank = |l: &Option<String>| l.as_deref().is_none_or(str::is_empty);
        blank(&self.customer) && blank(&self.manufacturer)
    }
}

/// Order as returned by the backend
///
/// `commission_amount` and `progress_commission_amount` are derived and
/// stored by the backend; they are the authoritative commission values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub order_no: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub customer: Option<Party>,
    #[serde(default)]
    pub manufacturer: Option<Party>,
    #[serde(default)]
    pub quality: Option<Quality>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub rate: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_unit")]
    pub quantity_unit: Option<QuantityUnit>,
    /// Meters-per-lot basis recorded when the order was saved
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub lot_meters: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub processed_quantity: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub commission_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub progress_commission_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub payment_due_on: Option<u32>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub whatsapp_links: Option<WhatsappLinks>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    /// `"24 TAKKA"` style quantity label
    pub fn quantity_label(&self) -> String {
        match self.quantity_unit {
            Some(unit) => format!("{} {}", self.quantity, unit),
            None => self.quantity.to_string(),
        }
    }
}

/// Create-order request body
///
/// Only raw inputs are submitted; the backend derives the commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: String,
    pub manufacturer_id: String,
    pub quality_name: String,
    pub rate: f64,
    pub quantity: f64,
    pub quantity_unit: QuantityUnit,
    pub payment_due_on: Option<u32>,
    pub remarks: Option<String>,
    pub order_date: String,
}

/// Partial order update (progress, completion, cancellation)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_quantity_add: Option<u64>,
    /// `Some(None)` clears the manufacturer firm name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_firm_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_quantity: Option<f64>,
}

impl OrderUpdate {
    /// Add processed quantity and set the manufacturer firm name
    pub fn progress(add: u64, manufacturer_firm_name: &str) -> Self {
        let firm = manufacturer_firm_name.trim();
        Self {
            processed_quantity_add: Some(add),
            manufacturer_firm_name: Some((!firm.is_empty()).then(|| firm.to_string())),
            ..Default::default()
        }
    }

    pub fn complete(processed_quantity: f64) -> Self {
        Self {
            status: Some(OrderStatus::Completed),
            processed_quantity: Some(processed_quantity),
            ..Default::default()
        }
    }

    pub fn cancel() -> Self {
        Self {
            status: Some(OrderStatus::Cancelled),
            ..Default::default()
        }
    }
}
