//! Driving port for invoice mutations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::mutation::{MutationOutcome, MutationResult};
use crate::domain::validation::InvoiceFormData;

/// Use-case surface for the validated write pipeline.
///
/// `create` and `update` take the previous [`MutationResult`] for signature
/// uniformity with the form's retry/re-render contract, even though the
/// current rules never read it.
#[async_trait]
pub trait InvoiceCommand: Send + Sync {
    /// Validate and persist a new invoice.
    async fn create_invoice(
        &self,
        previous: MutationResult,
        input: InvoiceFormData,
    ) -> MutationOutcome;

    /// Validate and persist changes to an existing invoice.
    async fn update_invoice(
        &self,
        id: Uuid,
        previous: MutationResult,
        input: InvoiceFormData,
    ) -> MutationOutcome;

    /// Delete an invoice, returning pass/fail feedback only.
    async fn delete_invoice(&self, id: Uuid) -> MutationResult;
}
