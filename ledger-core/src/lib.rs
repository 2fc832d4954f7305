//! Ledger core
//!
//! Commission and quantity normalization engine for the cloth ledger, plus
//! the order-form preview session and form validation that feed it.
//!
//! Everything here is synchronous and free of I/O. Orders are submitted with
//! raw inputs; the backend stores the authoritative commission, so the
//! values computed here are previews.

pub mod commission;
pub mod form;
pub mod money;
pub mod party;
pub mod preview;
pub mod validation;

// Re-exports
pub use commission::{
    CommissionBreakdown, CommissionRule, FixedLotSampler, LotMeterSampler, RandomLotSampler,
    basis_label, commission_breakdown, compute_commission, format_amount, lot_basis_display,
    sample_lot_meters, to_meters,
};
pub use commission::{
    DEFAULT_COMMISSION_PERCENT, GST_RATE, LOT_MAX_METERS, LOT_MIN_METERS, TAKKA_PER_LOT,
};
pub use form::{
    OrderForm, OrderFormDefaults, ValidatedOrder, needs_completion_prompt,
    parse_processed_increment,
};
pub use party::{PartyForm, sanitize_phone_input};
pub use preview::{OrderPreview, PreviewSnapshot};
pub use validation::{FieldError, ValidationErrors};
