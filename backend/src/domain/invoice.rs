//! Invoice data model.
//!
//! Purpose: strongly typed invoice records shared by the mutation and query
//! pipelines. Amounts are stored in integer cents; the creation date is
//! assigned by the store and never user-editable.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Invoice lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued but not yet settled.
    Pending,
    /// Settled in full.
    Paid,
}

impl InvoiceStatus {
    /// Wire representation used in forms and search matching.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a raw status string is not a known enum literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invoice status must be \"pending\" or \"paid\", got {value:?}")]
pub struct InvalidInvoiceStatus {
    /// The rejected raw input.
    pub value: String,
}

impl FromStr for InvoiceStatus {
    type Err = InvalidInvoiceStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(InvalidInvoiceStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// Persisted invoice record.
///
/// ## Invariants
/// - `id` is assigned by the store on insert and immutable thereafter.
/// - `customer_id` references a customer known to the store at write time.
/// - `amount_cents` is strictly positive on input.
/// - `date` is the creation date; updates never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Store-assigned identity.
    pub id: Uuid,
    /// Referenced customer.
    pub customer_id: Uuid,
    /// Amount in integer cents.
    pub amount_cents: i64,
    /// Lifecycle state.
    pub status: InvoiceStatus,
    /// Creation date, assigned by the store.
    pub date: NaiveDate,
}

/// Validated candidate for an insert or update.
///
/// Carries only the user-mutable fields; identity and date belong to the
/// store. The customer reference is kept as submitted — resolving it against
/// the known customer set is the store's write-time constraint, not a
/// validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    /// Customer reference as submitted on the form.
    pub customer_id: String,
    /// Amount in integer cents, strictly positive.
    pub amount_cents: i64,
    /// Lifecycle state.
    pub status: InvoiceStatus,
}

/// Invoice row joined with customer display fields for the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListRow {
    /// Invoice identity.
    pub id: Uuid,
    /// Referenced customer.
    pub customer_id: Uuid,
    /// Customer display name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Amount in integer cents.
    pub amount_cents: i64,
    /// Lifecycle state.
    pub status: InvoiceStatus,
    /// Creation date.
    pub date: NaiveDate,
}
