//! Order entry form and order progress validation

use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, ValidationErrors, validate_optional_text,
    validate_positive_number, validate_required_text,
};
use chrono::{NaiveDate, Utc};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderCreate, OrderStatus, Party, Quality, QuantityUnit};

/// Order dates are plain calendar days
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date as the form expects it
pub fn today() -> String {
    Utc::now().date_naive().format(ORDER_DATE_FORMAT).to_string()
}

/// Raw order entry form, as typed by the operator
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub customer_name: String,
    pub manufacturer_name: String,
    pub quality_name: String,
    pub rate: String,
    pub quantity: String,
    pub quantity_unit: QuantityUnit,
    /// Payment dhara, in days
    pub payment_due_on: String,
    pub remarks: String,
    pub order_date: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            manufacturer_name: String::new(),
            quality_name: String::new(),
            rate: String::new(),
            quantity: String::new(),
            quantity_unit: QuantityUnit::default(),
            payment_due_on: String::new(),
            remarks: String::new(),
            order_date: today(),
        }
    }
}

/// Form values that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub quality_name: String,
    pub rate: f64,
    pub quantity: f64,
    pub quantity_unit: QuantityUnit,
    pub payment_due_on: Option<u32>,
    pub remarks: Option<String>,
    pub order_date: String,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field, collecting all failures
    pub fn validate(&self) -> Result<ValidatedOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check(&mut errors).ok_or(errors)
    }

    fn check(&self, errors: &mut ValidationErrors) -> Option<ValidatedOrder> {
        validate_required_text(
            errors,
            &self.customer_name,
            "customerName",
            "Customer",
            MAX_NAME_LEN,
        );
        validate_required_text(
            errors,
            &self.manufacturer_name,
            "manufacturerName",
            "Manufacturer",
            MAX_NAME_LEN,
        );
        let quality_name = validate_required_text(
            errors,
            &self.quality_name,
            "qualityName",
            "Quality",
            MAX_NAME_LEN,
        );
        let rate =
            validate_positive_number(errors, &self.rate, "rate", "Rate", ErrorCode::InvalidRate);
        let quantity = validate_positive_number(
            errors,
            &self.quantity,
            "quantity",
            "Quantity",
            ErrorCode::InvalidQuantity,
        );
        let payment_due_on = validate_payment_days(errors, &self.payment_due_on);
        let remarks = validate_optional_text(
            errors,
            Some(self.remarks.as_str()),
            "remarks",
            "Remarks",
            MAX_NOTE_LEN,
        );
        let order_date = validate_order_date(errors, &self.order_date);

        if !errors.is_empty() {
            return None;
        }
        Some(ValidatedOrder {
            quality_name: quality_name?.to_string(),
            rate: rate?,
            quantity: quantity?,
            quantity_unit: self.quantity_unit,
            payment_due_on: payment_due_on?,
            remarks,
            order_date: order_date?,
        })
    }

    /// Build the create-order request
    ///
    /// Customer and manufacturer must have been picked from the list. When a
    /// known quality was picked its stored name is sent instead of the typed
    /// text. Only raw inputs are submitted; the backend derives commission.
    pub fn to_create_payload(
        &self,
        customer_id: Option<&str>,
        manufacturer_id: Option<&str>,
        quality: Option<&Quality>,
    ) -> Result<OrderCreate, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let validated = self.check(&mut errors);

        let customer_id = customer_id.map(str::trim).filter(|id| !id.is_empty());
        if customer_id.is_none() {
            errors.push(
                "customerName",
                ErrorCode::PartyNotFound,
                "Select a valid customer from list",
            );
        }
        let manufacturer_id = manufacturer_id.map(str::trim).filter(|id| !id.is_empty());
        if manufacturer_id.is_none() {
            errors.push(
                "manufacturerName",
                ErrorCode::PartyNotFound,
                "Select a valid manufacturer from list",
            );
        }

        let (Some(v), Some(customer_id), Some(manufacturer_id)) =
            (validated, customer_id, manufacturer_id)
        else {
            return Err(errors);
        };

        let quality_name = quality
            .map(|q| q.name.trim())
            .filter(|name| !name.is_empty())
            .map_or(v.quality_name, str::to_string);

        Ok(OrderCreate {
            customer_id: customer_id.to_string(),
            manufacturer_id: manufacturer_id.to_string(),
            quality_name,
            rate: v.rate,
            quantity: v.quantity,
            quantity_unit: v.quantity_unit,
            payment_due_on: v.payment_due_on,
            remarks: v.remarks,
            order_date: v.order_date,
        })
    }

    /// Clear per-order fields after a successful submit
    ///
    /// Parties, quality and unit stay selected for the next entry.
    pub fn reset_after_submit(&mut self) {
        self.rate.clear();
        self.quantity.clear();
        self.payment_due_on.clear();
        self.remarks.clear();
        self.order_date = today();
    }
}

/// `Some(None)` when blank, `Some(Some(days))` when valid, `None` on error
fn validate_payment_days(errors: &mut ValidationErrors, value: &str) -> Option<Option<u32>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    match trimmed.parse::<u32>() {
        Ok(days) => Some(Some(days)),
        Err(_) => {
            errors.push(
                "paymentDueOn",
                ErrorCode::InvalidFormat,
                "Payment days must be a whole number",
            );
            None
        }
    }
}

fn validate_order_date(errors: &mut ValidationErrors, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push("orderDate", ErrorCode::RequiredField, "Order date is required");
        return None;
    }
    let well_formed = trimmed.len() == 10
        && NaiveDate::parse_from_str(trimmed, ORDER_DATE_FORMAT).is_ok();
    if !well_formed {
        errors.push("orderDate", ErrorCode::InvalidOrderDate, "Use YYYY-MM-DD format");
        return None;
    }
    Some(trimmed.to_string())
}

/// Selections carried over from the most recent order
#[derive(Debug, Clone, Default)]
pub struct OrderFormDefaults {
    pub customer: Option<Party>,
    pub manufacturer: Option<Party>,
    pub quality_name: Option<String>,
    pub quantity_unit: Option<QuantityUnit>,
}

impl OrderFormDefaults {
    pub fn from_last_order(order: &Order) -> Self {
        Self {
            customer: order.customer.clone(),
            manufacturer: order.manufacturer.clone(),
            quality_name: order
                .quality
                .as_ref()
                .map(|q| q.name.clone())
                .filter(|name| !name.is_empty()),
            quantity_unit: order.quantity_unit,
        }
    }

    /// Defaults from a newest-first order list
    pub fn from_recent_orders(orders: &[Order]) -> Self {
        orders.first().map(Self::from_last_order).unwrap_or_default()
    }

    /// Prefill the form; fields without a default are left alone
    pub fn apply(&self, form: &mut OrderForm) {
        if let Some(customer) = &self.customer {
            form.customer_name = customer.name.clone();
        }
        if let Some(manufacturer) = &self.manufacturer {
            form.manufacturer_name = manufacturer.name.clone();
        }
        if let Some(quality) = &self.quality_name {
            form.quality_name = quality.clone();
        }
        if let Some(unit) = self.quantity_unit {
            form.quantity_unit = unit;
        }
    }
}

/// Parse the "add processed quantity" input
///
/// Blank means 0. Anything else must be a whole, non-negative number.
pub fn parse_processed_increment(input: &str) -> AppResult<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AppError::new(ErrorCode::InvalidProgress))?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(AppError::new(ErrorCode::InvalidProgress));
    }
    Ok(value as u64)
}

/// Whether to offer marking the order completed after a progress update
pub fn needs_completion_prompt(order: &Order) -> bool {
    order.status == OrderStatus::Pending && order.processed_quantity >= order.quantity
}
