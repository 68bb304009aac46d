//! List query engine for the invoice dashboard.
//!
//! Given a canonical [`QueryState`], recomputes the matching row count, the
//! total page count, and the ordered page slice against the record store.
//! Each invocation is an independent, request-scoped unit of work.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::customer::CustomerSummary;
use crate::domain::error::DomainError;
use crate::domain::invoice::Invoice;
use crate::domain::ports::{InvoicePage, InvoiceQuery, InvoiceRepository, InvoiceStoreError};
use crate::domain::query_state::QueryState;

/// Fixed number of rows on an invoice list page.
pub const ROWS_PER_PAGE: u64 = 6;

/// Total page count implied by a matching row count.
pub fn total_pages(count: u64) -> u64 {
    count.div_ceil(ROWS_PER_PAGE)
}

/// Query engine over the invoice repository port.
#[derive(Clone)]
pub struct InvoiceListService<R> {
    repo: Arc<R>,
}

impl<R> InvoiceListService<R> {
    /// Create a new engine over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_store_error(error: InvoiceStoreError) -> DomainError {
    // The store's reasons stay in the logs; callers get an opaque failure.
    error!(error = %error, "invoice store read failed");
    DomainError::internal("invoice store unavailable")
}

#[async_trait]
impl<R> InvoiceQuery for InvoiceListService<R>
where
    R: InvoiceRepository,
{
    async fn fetch_page(&self, state: &QueryState) -> Result<InvoicePage, DomainError> {
        let count = self
            .repo
            .count_matching(state.query())
            .await
            .map_err(map_store_error)?;
        let invoices = self
            .repo
            .fetch_page(state.query(), state.page())
            .await
            .map_err(map_store_error)?;
        debug!(
            query = state.query(),
            page = state.page(),
            matches = count,
            "invoice list recomputed"
        );
        Ok(InvoicePage {
            invoices,
            total_pages: total_pages(count),
        })
    }

    async fn count_matches(&self, query: &str) -> Result<u64, DomainError> {
        self.repo
            .count_matching(query)
            .await
            .map_err(map_store_error)
    }

    async fn find_invoice(&self, id: Uuid) -> Result<Invoice, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| DomainError::not_found(format!("invoice {id} not found")))
    }

    async fn list_customers(&self) -> Result<Vec<CustomerSummary>, DomainError> {
        self.repo.list_customers().await.map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::MockInvoiceRepository;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(6, 1)]
    #[case(7, 2)]
    #[case(12, 2)]
    #[case(13, 3)]
    fn total_pages_rounds_up(#[case] count: u64, #[case] expected: u64) {
        assert_eq!(total_pages(count), expected);
    }

    #[tokio::test]
    async fn fetch_page_combines_count_and_slice() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_count_matching()
            .withf(|query| query == "acme")
            .times(1)
            .return_once(|_| Ok(13));
        repo.expect_fetch_page()
            .withf(|query, page| query == "acme" && *page == 2)
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));

        let service = InvoiceListService::new(Arc::new(repo));
        let state = QueryState::from_params(Some("acme"), Some("2"));
        let page = service.fetch_page(&state).await.expect("page recomputed");

        assert_eq!(page.total_pages, 3);
        assert!(page.invoices.is_empty());
    }

    #[tokio::test]
    async fn missing_invoice_is_not_found_not_internal() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let service = InvoiceListService::new(Arc::new(repo));
        let err = service
            .find_invoice(Uuid::new_v4())
            .await
            .expect_err("missing invoice");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn store_failures_surface_as_opaque_internal_errors() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_count_matching()
            .times(1)
            .return_once(|_| Err(InvoiceStoreError::query("disk on fire")));

        let service = InvoiceListService::new(Arc::new(repo));
        let err = service.count_matches("").await.expect_err("store failed");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(!err.message().contains("disk"), "internals stay out of the payload");
    }
}
