//! Driving port for the invoice list and edit-form read paths.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::customer::CustomerSummary;
use crate::domain::error::DomainError;
use crate::domain::invoice::{Invoice, InvoiceListRow};
use crate::domain::query_state::QueryState;

/// One recomputed page of the invoice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePage {
    /// Ordered rows for the requested page; empty beyond the last page.
    pub invoices: Vec<InvoiceListRow>,
    /// Total page count for the current filter.
    pub total_pages: u64,
}

/// Use-case surface for the query pipeline.
#[async_trait]
pub trait InvoiceQuery: Send + Sync {
    /// Recompute the page slice and total page count for a query state.
    async fn fetch_page(&self, state: &QueryState) -> Result<InvoicePage, DomainError>;

    /// Count rows matching the filter text.
    async fn count_matches(&self, query: &str) -> Result<u64, DomainError>;

    /// Read one invoice for the edit form.
    ///
    /// A missing record is a distinct not-found outcome, not a storage error:
    /// the user can take no corrective action on the form.
    async fn find_invoice(&self, id: Uuid) -> Result<Invoice, DomainError>;

    /// List customers for form population.
    async fn list_customers(&self) -> Result<Vec<CustomerSummary>, DomainError>;
}
