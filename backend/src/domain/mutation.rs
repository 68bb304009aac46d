//! Invoice mutation orchestration.
//!
//! Composes the schema validator and the persistence gateway, threading a
//! [`MutationResult`] across resubmissions. Side effects are strictly
//! ordered: validate → persist → invalidate → (navigate | return result).
//! Invalidation and navigation happen only after a confirmed persist, and
//! invalidation is fire-and-forget — there is no compensating rollback.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{InvoiceCommand, InvoiceRepository, ListViewCache, INVOICE_LIST_VIEW};
use crate::domain::validation::{validate_invoice, FieldErrors, InvoiceFormData};

/// Route the form navigates to after a successful create or update.
pub const INVOICE_LIST_PATH: &str = "/dashboard/invoices";

/// Message returned when create input fails validation.
pub const CREATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Invoice.";
/// Message returned when update input fails validation.
pub const UPDATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Update Invoice.";
/// Message returned when the store rejects a create.
pub const CREATE_STORAGE_FAILED: &str = "Database Error: Failed to Create Invoice.";
/// Message returned when the store rejects an update.
pub const UPDATE_STORAGE_FAILED: &str = "Database Error: Failed to Update Invoice.";
/// Message returned when the store rejects a delete.
pub const DELETE_STORAGE_FAILED: &str = "Database Error: Failed to Delete Invoice.";
/// Message returned after a successful delete.
pub const DELETED_INVOICE: &str = "Deleted Invoice.";

/// Per-attempt mutation feedback returned to the form.
///
/// Lives for exactly one submission attempt: constructed here, rendered with
/// the user's original (unpersisted) input, then discarded on the next
/// attempt or once control leaves the form after success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult {
    /// Field name → ordered error messages; absent when validation passed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Top-level summary: validation summary or storage failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResult {
    /// Feedback for a validation failure: field errors plus a summary.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    /// Feedback carrying a top-level message only.
    ///
    /// Used for storage failures, where the input is not re-validated so the
    /// form keeps showing the user's entered values.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }
}

/// Where control goes after a mutation attempt.
///
/// Success diverges into navigation rather than returning feedback; callers
/// branch explicitly instead of relying on non-local control transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Transfer control to the given route; nothing is re-rendered.
    Navigate(String),
    /// Re-render the form with this feedback and the original input.
    Feedback(MutationResult),
}

/// Mutation orchestrator over the repository and invalidation ports.
#[derive(Clone)]
pub struct InvoiceMutationService<R, C> {
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> InvoiceMutationService<R, C> {
    /// Create a new service with the given adapters.
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }
}

impl<R, C> InvoiceMutationService<R, C>
where
    R: InvoiceRepository,
    C: ListViewCache,
{
    async fn invalidate_list(&self) {
        self.cache.invalidate(INVOICE_LIST_VIEW).await;
    }
}

#[async_trait]
impl<R, C> InvoiceCommand for InvoiceMutationService<R, C>
where
    R: InvoiceRepository,
    C: ListViewCache,
{
    async fn create_invoice(
        &self,
        _previous: MutationResult,
        input: InvoiceFormData,
    ) -> MutationOutcome {
        let draft = match validate_invoice(&input) {
            Ok(draft) => draft,
            Err(errors) => {
                return MutationOutcome::Feedback(MutationResult::invalid(
                    errors,
                    CREATE_MISSING_FIELDS,
                ));
            }
        };

        match self.repo.insert(&draft).await {
            Ok(invoice) => {
                info!(invoice_id = %invoice.id, "invoice created");
                self.invalidate_list().await;
                MutationOutcome::Navigate(INVOICE_LIST_PATH.to_owned())
            }
            Err(err) => {
                error!(error = %err, "invoice insert failed");
                MutationOutcome::Feedback(MutationResult::message(CREATE_STORAGE_FAILED))
            }
        }
    }

    async fn update_invoice(
        &self,
        id: Uuid,
        _previous: MutationResult,
        input: InvoiceFormData,
    ) -> MutationOutcome {
        let draft = match validate_invoice(&input) {
            Ok(draft) => draft,
            Err(errors) => {
                return MutationOutcome::Feedback(MutationResult::invalid(
                    errors,
                    UPDATE_MISSING_FIELDS,
                ));
            }
        };

        match self.repo.update(id, &draft).await {
            Ok(()) => {
                info!(invoice_id = %id, "invoice updated");
                self.invalidate_list().await;
                MutationOutcome::Navigate(INVOICE_LIST_PATH.to_owned())
            }
            Err(err) => {
                error!(invoice_id = %id, error = %err, "invoice update failed");
                MutationOutcome::Feedback(MutationResult::message(UPDATE_STORAGE_FAILED))
            }
        }
    }

    async fn delete_invoice(&self, id: Uuid) -> MutationResult {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!(invoice_id = %id, "invoice deleted");
                self.invalidate_list().await;
                MutationResult::message(DELETED_INVOICE)
            }
            Err(err) => {
                error!(invoice_id = %id, error = %err, "invoice delete failed");
                MutationResult::message(DELETE_STORAGE_FAILED)
            }
        }
    }
}
