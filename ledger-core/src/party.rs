//! Customer / manufacturer form validation

use crate::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, ValidationErrors, validate_optional_text,
    validate_positive_number, validate_required_text,
};
use regex::Regex;
use shared::error::ErrorCode;
use shared::models::{CommissionBase, PartyPayload, PartyType};
use std::sync::LazyLock;

/// Indian GSTIN, e.g. `27ABCDE1234F1Z5`
static GSTIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("GSTIN pattern")
});

/// 10-digit Indian mobile number
static INDIAN_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Digits only, at most 10 (applied while typing)
pub fn sanitize_phone_input(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(10).collect()
}

/// Raw party form, as typed by the operator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyForm {
    pub user_type: String,
    pub name: String,
    pub firm_name: String,
    pub gst_no: String,
    pub commission_base: String,
    pub commission_percent: String,
    pub commission_lot_rate: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl PartyForm {
    /// Empty customer form (commission base PERCENT)
    pub fn customer() -> Self {
        Self {
            user_type: PartyType::Customer.label().to_string(),
            commission_base: CommissionBase::Percent.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn manufacturer() -> Self {
        Self {
            user_type: PartyType::Manufacturer.label().to_string(),
            ..Default::default()
        }
    }

    /// Validate and normalise into a create/update payload
    ///
    /// GST and commission fields only apply to customers and are dropped
    /// for manufacturers.
    pub fn validate(&self) -> Result<PartyPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_type = if self.user_type.trim().is_empty() {
            errors.push("userType", ErrorCode::RequiredField, "User type is required");
            None
        } else {
            match self.user_type.parse::<PartyType>() {
                Ok(t) => Some(t),
                Err(msg) => {
                    errors.push("userType", ErrorCode::InvalidRequest, msg);
                    None
                }
            }
        };
        let is_customer = user_type == Some(PartyType::Customer);

        let name = validate_required_text(&mut errors, &self.name, "name", "Name", MAX_NAME_LEN)
            .map(str::to_string);

        let (firm_name, address) = if is_customer {
            let firm_name = validate_required_text(
                &mut errors,
                &self.firm_name,
                "firmName",
                "Firm name",
                MAX_NAME_LEN,
            );
            let address = validate_required_text(
                &mut errors,
                &self.address,
                "address",
                "Address",
                MAX_ADDRESS_LEN,
            );
            (firm_name.map(str::to_string), address.map(str::to_string))
        } else {
            let firm_name = validate_optional_text(
                &mut errors,
                Some(self.firm_name.as_str()),
                "firmName",
                "Firm name",
                MAX_NAME_LEN,
            );
            let address = validate_optional_text(
                &mut errors,
                Some(self.address.as_str()),
                "address",
                "Address",
                MAX_ADDRESS_LEN,
            );
            (firm_name, address)
        };

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push("phone", ErrorCode::RequiredField, "Phone is required");
        } else if !INDIAN_PHONE.is_match(phone) {
            errors.push(
                "phone",
                ErrorCode::InvalidPhone,
                "Enter a valid 10-digit Indian mobile number",
            );
        }

        let email = Some(self.email.trim().to_lowercase()).filter(|e| !e.is_empty());
        if let Some(e) = &email
            && (e.len() > MAX_EMAIL_LEN || !EMAIL.is_match(e))
        {
            errors.push("email", ErrorCode::InvalidFormat, "Enter a valid email");
        }

        let mut payload = PartyPayload {
            user_type,
            name: name.unwrap_or_default(),
            firm_name,
            address,
            phone: phone.to_string(),
            email,
            ..Default::default()
        };
        if is_customer {
            self.validate_customer_fields(&mut errors, &mut payload);
        }

        errors.into_result(payload)
    }

    fn validate_customer_fields(&self, errors: &mut ValidationErrors, payload: &mut PartyPayload) {
        let gst_no = self.gst_no.trim().to_uppercase();
        if !gst_no.is_empty() {
            if GSTIN.is_match(&gst_no) {
                payload.gst_no = Some(gst_no);
            } else {
                errors.push(
                    "gstNo",
                    ErrorCode::InvalidGstNumber,
                    "Enter a valid GSTIN (example: 27ABCDE1234F1Z5)",
                );
            }
        }

        if self.commission_base.trim().is_empty() {
            errors.push(
                "commissionBase",
                ErrorCode::RequiredField,
                "Commission base is required",
            );
            return;
        }
        let base = match self.commission_base.parse::<CommissionBase>() {
            Ok(base) => base,
            Err(msg) => {
                errors.push("commissionBase", ErrorCode::InvalidCommissionBase, msg);
                return;
            }
        };
        payload.commission_base = Some(base);

        match base {
            CommissionBase::Percent => {
                payload.commission_percent = validate_positive_number(
                    errors,
                    &self.commission_percent,
                    "commissionPercent",
                    "Commission percent",
                    ErrorCode::InvalidCommissionValue,
                );
            }
            CommissionBase::Lot => {
                payload.commission_lot_rate = validate_positive_number(
                    errors,
                    &self.commission_lot_rate,
                    "commissionLotRate",
                    "Lot rate",
                    ErrorCode::InvalidCommissionValue,
                );
            }
        }
    }
}
