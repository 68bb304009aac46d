//! Domain ports: traits at the seams between the core and its adapters.
//!
//! Driven ports ([`InvoiceRepository`], [`ListViewCache`]) are implemented by
//! outbound adapters; driving ports ([`InvoiceCommand`], [`InvoiceQuery`]) are
//! implemented by domain services and consumed by the inbound HTTP adapter.

mod invoice_command;
mod invoice_query;
mod invoice_repository;
mod list_view_cache;

pub use invoice_command::InvoiceCommand;
pub use invoice_query::{InvoicePage, InvoiceQuery};
pub use invoice_repository::{InvoiceRepository, InvoiceStoreError};
pub use list_view_cache::{ListViewCache, INVOICE_LIST_VIEW};

#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
#[cfg(test)]
pub use list_view_cache::MockListViewCache;
