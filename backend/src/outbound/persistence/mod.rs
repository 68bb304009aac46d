//! Outbound persistence adapters for the invoice record store.

mod memory;

pub use memory::InMemoryInvoiceStore;
