//! Domain core: entities, validation, services, and ports.
//!
//! Purpose: keep the mutation and query pipelines transport-agnostic. The
//! inbound HTTP adapter and the outbound store/cache adapters meet the core
//! only through the traits in [`ports`].

pub mod customer;
pub mod error;
pub mod invoice;
pub mod list_query;
pub mod mutation;
pub mod ports;
pub mod query_state;
pub mod validation;

pub use self::customer::{Customer, CustomerSummary};
pub use self::error::{DomainError, ErrorCode};
pub use self::invoice::{Invoice, InvoiceDraft, InvoiceListRow, InvoiceStatus};
pub use self::list_query::{total_pages, InvoiceListService, ROWS_PER_PAGE};
pub use self::mutation::{
    InvoiceMutationService, MutationOutcome, MutationResult, INVOICE_LIST_PATH,
};
pub use self::query_state::QueryState;
pub use self::validation::{validate_invoice, FieldErrors, InvoiceFormData};
