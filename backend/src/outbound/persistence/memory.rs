//! In-memory invoice store adapter.
//!
//! Implements the [`InvoiceRepository`] port against process-local state. The
//! store is the only shared mutable resource in the system: a single `RwLock`
//! serialises conflicting writes to the same row (last write wins) while
//! reads run concurrently. Referential integrity of `customer_id` is enforced
//! here, at write time, not re-checked by the pipelines.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::customer::{Customer, CustomerSummary};
use crate::domain::invoice::{Invoice, InvoiceDraft, InvoiceListRow};
use crate::domain::list_query::ROWS_PER_PAGE;
use crate::domain::ports::{InvoiceRepository, InvoiceStoreError};

#[derive(Debug, Default)]
struct StoreInner {
    invoices: Vec<Invoice>,
    customers: Vec<Customer>,
}

/// Process-local record store holding customers and invoices.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryInvoiceStore {
    /// Create a store holding the given customer set and no invoices.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self::with_records(customers, Vec::new())
    }

    /// Create a store pre-populated with customers and invoice records.
    ///
    /// Used for seeding demo data and for tests that need rows with
    /// controlled dates.
    pub fn with_records(customers: Vec<Customer>, invoices: Vec<Invoice>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                invoices,
                customers,
            }),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreInner>, InvoiceStoreError> {
        self.inner.read().map_err(|_| InvoiceStoreError::Connection {
            message: "store lock poisoned".to_owned(),
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreInner>, InvoiceStoreError> {
        self.inner.write().map_err(|_| InvoiceStoreError::Connection {
            message: "store lock poisoned".to_owned(),
        })
    }
}

/// Resolve a raw customer reference to a known customer id.
///
/// A malformed or unknown reference is the same constraint violation: the
/// draft names a customer the store does not have.
fn resolve_customer(inner: &StoreInner, reference: &str) -> Result<Uuid, InvoiceStoreError> {
    Uuid::parse_str(reference)
        .ok()
        .filter(|id| inner.customers.iter().any(|c| c.id == *id))
        .ok_or_else(|| {
            InvoiceStoreError::constraint(format!("customer {reference:?} does not exist"))
        })
}

/// Case-insensitive substring match across the row's searchable text.
fn row_matches(row: &InvoiceListRow, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    row.customer_name.to_lowercase().contains(&needle)
        || row.customer_email.to_lowercase().contains(&needle)
        || row.amount_cents.to_string().contains(&needle)
        || row.date.to_string().contains(&needle)
        || row.status.as_str().contains(&needle)
}

/// Join invoices with customer display fields, filter, and order them
/// (date descending, ties broken by id to keep pagination stable).
fn matching_rows(inner: &StoreInner, query: &str) -> Vec<InvoiceListRow> {
    let mut rows: Vec<InvoiceListRow> = inner
        .invoices
        .iter()
        .filter_map(|invoice| {
            let customer = inner
                .customers
                .iter()
                .find(|c| c.id == invoice.customer_id)?;
            Some(InvoiceListRow {
                id: invoice.id,
                customer_id: invoice.customer_id,
                customer_name: customer.name.clone(),
                customer_email: customer.email.clone(),
                amount_cents: invoice.amount_cents,
                status: invoice.status,
                date: invoice.date,
            })
        })
        .filter(|row| row_matches(row, query))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
    rows
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceStore {
    async fn insert(&self, draft: &InvoiceDraft) -> Result<Invoice, InvoiceStoreError> {
        let mut inner = self.write()?;
        let customer_id = resolve_customer(&inner, &draft.customer_id)?;
        let invoice = Invoice {
            id: Uuid::new_v4(),
            customer_id,
            amount_cents: draft.amount_cents,
            status: draft.status,
            date: Utc::now().date_naive(),
        };
        inner.invoices.push(invoice.clone());
        debug!(invoice_id = %invoice.id, "invoice row appended");
        Ok(invoice)
    }

    async fn update(&self, id: Uuid, draft: &InvoiceDraft) -> Result<(), InvoiceStoreError> {
        let mut inner = self.write()?;
        let customer_id = resolve_customer(&inner, &draft.customer_id)?;
        let row = inner
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == id)
            .ok_or(InvoiceStoreError::RowMissing { id })?;
        row.customer_id = customer_id;
        row.amount_cents = draft.amount_cents;
        row.status = draft.status;
        // id and date are immutable; updates never touch them.
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), InvoiceStoreError> {
        let mut inner = self.write()?;
        inner.invoices.retain(|invoice| invoice.id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceStoreError> {
        let inner = self.read()?;
        Ok(inner.invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn count_matching(&self, query: &str) -> Result<u64, InvoiceStoreError> {
        let inner = self.read()?;
        Ok(matching_rows(&inner, query).len() as u64)
    }

    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<InvoiceListRow>, InvoiceStoreError> {
        let inner = self.read()?;
        let rows = matching_rows(&inner, query);
        let offset = (page.saturating_sub(1) as usize) * ROWS_PER_PAGE as usize;
        Ok(rows
            .into_iter()
            .skip(offset)
            .take(ROWS_PER_PAGE as usize)
            .collect())
    }

    async fn list_customers(&self) -> Result<Vec<CustomerSummary>, InvoiceStoreError> {
        let inner = self.read()?;
        let mut customers: Vec<CustomerSummary> =
            inner.customers.iter().map(CustomerSummary::from).collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }
}

#[cfg(test)]
mod tests;
