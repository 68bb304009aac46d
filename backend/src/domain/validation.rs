//! Invoice form schema validation.
//!
//! Pure transform from raw, string-valued form fields to a typed
//! [`InvoiceDraft`]. Rules are checked independently and errors accumulate
//! per field; the validator never short-circuits on the first failure and
//! performs no I/O. Create and update share the same rule set — identity and
//! date are never user-supplied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::invoice::{InvoiceDraft, InvoiceStatus};

/// Error message attached to a missing or empty customer selection.
pub const CUSTOMER_ERROR: &str = "Please select a customer.";
/// Error message attached to a non-numeric or non-positive amount.
pub const AMOUNT_ERROR: &str = "Please enter an amount greater than $0.";
/// Error message attached to an unknown invoice status.
pub const STATUS_ERROR: &str = "Please select an invoice status.";

/// Raw invoice form fields as submitted, before any typing.
///
/// All fields are optional strings: absence and emptiness are validation
/// concerns, not deserialisation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormData {
    /// Selected customer id, if any.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Decimal currency amount as typed, e.g. `"15.50"`.
    #[serde(default)]
    pub amount: Option<String>,
    /// Invoice status literal, `"pending"` or `"paid"`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Ordered field-name → error-messages mapping.
///
/// `BTreeMap` keeps the field order stable for rendering and assertions.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}

// The rule is presence, nothing more: the reference stays opaque here and is
// resolved against the customer set by the store, so a malformed id surfaces
// as a storage failure rather than a field error.
fn parse_customer_id(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.to_owned())
}

fn parse_amount_cents(raw: Option<&str>) -> Option<i64> {
    let amount = raw?.trim().parse::<f64>().ok()?;
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    // Scale to integer cents, rounding half away from zero.
    let cents = (amount * 100.0).round();
    if cents > i64::MAX as f64 {
        return None;
    }
    Some(cents as i64)
}

fn parse_status(raw: Option<&str>) -> Option<InvoiceStatus> {
    raw?.parse::<InvoiceStatus>().ok()
}

/// Validate raw form input into a typed draft.
///
/// Returns the accumulated per-field errors when any rule fails; no partial
/// draft is ever produced.
pub fn validate_invoice(form: &InvoiceFormData) -> Result<InvoiceDraft, FieldErrors> {
    let customer_id = parse_customer_id(form.customer_id.as_deref());
    let amount_cents = parse_amount_cents(form.amount.as_deref());
    let status = parse_status(form.status.as_deref());

    let mut errors = FieldErrors::new();
    if customer_id.is_none() {
        push_error(&mut errors, "customerId", CUSTOMER_ERROR);
    }
    if amount_cents.is_none() {
        push_error(&mut errors, "amount", AMOUNT_ERROR);
    }
    if status.is_none() {
        push_error(&mut errors, "status", STATUS_ERROR);
    }

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) => Ok(InvoiceDraft {
            customer_id,
            amount_cents,
            status,
        }),
        _ => Err(errors),
    }
}
