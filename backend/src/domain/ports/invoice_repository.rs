//! Port for invoice persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::CustomerSummary;
use crate::domain::invoice::{Invoice, InvoiceDraft, InvoiceListRow};

/// Storage errors raised by invoice repository adapters.
///
/// Opaque to the orchestrator: callers learn that the store failed, never
/// why. Variants exist so adapters can log precise causes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvoiceStoreError {
    /// Store connection could not be established.
    #[error("invoice store connection failed: {message}")]
    Connection {
        /// Adapter-internal cause, for logs only.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("invoice store operation failed: {message}")]
    Query {
        /// Adapter-internal cause, for logs only.
        message: String,
    },
    /// A write constraint was violated, e.g. an unknown customer reference.
    #[error("invoice store constraint violated: {message}")]
    Constraint {
        /// Adapter-internal cause, for logs only.
        message: String,
    },
    /// An update targeted a row that is not present.
    #[error("invoice {id} is not present in the store")]
    RowMissing {
        /// The id the update targeted.
        id: Uuid,
    },
}

impl InvoiceStoreError {
    /// Build a [`InvoiceStoreError::Query`] from any message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Build a [`InvoiceStoreError::Constraint`] from any message.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }
}

/// Port for the invoice record store.
///
/// Five operations consumed by the pipelines: insert-one, update-one-by-id,
/// delete-one-by-id, count-matching, and fetch-page-matching — plus the edit
/// form's read-by-id and the form-population customer listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Append a new invoice, assigning its id and creation date.
    ///
    /// No partial write is visible on failure.
    async fn insert(&self, draft: &InvoiceDraft) -> Result<Invoice, InvoiceStoreError>;

    /// Replace the mutable fields of the row with the matching id.
    ///
    /// A missing row is a storage error, never a silent no-op.
    async fn update(&self, id: Uuid, draft: &InvoiceDraft) -> Result<(), InvoiceStoreError>;

    /// Remove the row with the matching id.
    ///
    /// Deleting a nonexistent id succeeds; the operation is idempotent.
    async fn delete(&self, id: Uuid) -> Result<(), InvoiceStoreError>;

    /// Fetch a single invoice for the edit form read path.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceStoreError>;

    /// Count rows matching the filter text.
    async fn count_matching(&self, query: &str) -> Result<u64, InvoiceStoreError>;

    /// Fetch the ordered page slice for the filter text.
    ///
    /// Ordering is by invoice date descending, ties broken by id. A page
    /// beyond the last one yields an empty slice rather than an error.
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<InvoiceListRow>, InvoiceStoreError>;

    /// List customers for form population, ordered by name.
    async fn list_customers(&self) -> Result<Vec<CustomerSummary>, InvoiceStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_missing_names_the_id() {
        let id = Uuid::nil();
        let err = InvoiceStoreError::RowMissing { id };
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn constructors_accept_str() {
        assert_eq!(
            InvoiceStoreError::query("broken"),
            InvoiceStoreError::Query {
                message: "broken".to_owned()
            }
        );
    }
}
