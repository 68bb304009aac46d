//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: invoice mutations and listing, customer summaries, and
//! health probes. The generated specification backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::ports::InvoicePage;
use crate::domain::{
    CustomerSummary, DomainError, ErrorCode, Invoice, InvoiceFormData, InvoiceListRow,
    InvoiceStatus, MutationResult,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Invoice dashboard API",
        description = "HTTP interface for invoice mutations, paginated listing, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::invoices::list_invoices,
        crate::inbound::http::invoices::get_invoice,
        crate::inbound::http::invoices::create_invoice,
        crate::inbound::http::invoices::update_invoice,
        crate::inbound::http::invoices::delete_invoice,
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Invoice,
        InvoiceListRow,
        InvoiceStatus,
        InvoiceFormData,
        InvoicePage,
        MutationResult,
        CustomerSummary,
        DomainError,
        ErrorCode,
    )),
    tags(
        (name = "invoices", description = "Invoice mutations and listing"),
        (name = "customers", description = "Customer summaries for form population"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
