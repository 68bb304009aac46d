//! Invoice API handlers.
//!
//! ```text
//! GET    /api/v1/invoices?query=acme&page=2
//! GET    /api/v1/invoices/{id}
//! POST   /api/v1/invoices          customerId=...&amount=15.50&status=pending
//! PUT    /api/v1/invoices/{id}     customerId=...&amount=20&status=paid
//! DELETE /api/v1/invoices/{id}
//! ```
//!
//! Successful create/update diverges into navigation: the handler answers
//! `303 See Other` pointing at the invoice list route. Validation and storage
//! failures answer `422` with a [`MutationResult`] so the form re-renders the
//! user's original input with errors attached.

use actix_web::{delete, get, http::header, post, put, web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::domain::ports::InvoicePage;
use crate::domain::{Invoice, InvoiceFormData, MutationOutcome, MutationResult, QueryState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Recognised address parameters for the invoice list.
///
/// `page` arrives as a raw string so a non-numeric value degrades to the
/// default instead of failing extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Free-text filter; absent means unfiltered.
    pub query: Option<String>,
    /// 1-based page number; absent or non-numeric means 1.
    pub page: Option<String>,
}

impl ListParams {
    fn into_query_state(self) -> QueryState {
        QueryState::from_params(self.query.as_deref(), self.page.as_deref())
    }
}

/// List one recomputed page of invoices for the current query state.
#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    params(ListParams),
    responses(
        (status = 200, description = "Page slice and total page count", body = InvoicePage),
        (status = 500, description = "Store unavailable")
    ),
    tags = ["invoices"],
    operation_id = "listInvoices"
)]
#[get("/invoices")]
pub async fn list_invoices(
    state: web::Data<HttpState>,
    params: web::Query<ListParams>,
) -> ApiResult<web::Json<InvoicePage>> {
    let query_state = params.into_inner().into_query_state();
    let page = state.queries.fetch_page(&query_state).await?;
    Ok(web::Json(page))
}

/// Read a single invoice for the edit form.
#[utoipa::path(
    get,
    path = "/api/v1/invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice identity")),
    responses(
        (status = 200, description = "Invoice", body = Invoice),
        (status = 404, description = "Invoice does not exist"),
        (status = 500, description = "Store unavailable")
    ),
    tags = ["invoices"],
    operation_id = "getInvoice"
)]
#[get("/invoices/{id}")]
pub async fn get_invoice(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<Invoice>> {
    let invoice = state.queries.find_invoice(id.into_inner()).await?;
    Ok(web::Json(invoice))
}

fn respond(outcome: MutationOutcome) -> HttpResponse {
    match outcome {
        MutationOutcome::Navigate(target) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, target))
            .finish(),
        MutationOutcome::Feedback(result) => HttpResponse::UnprocessableEntity().json(result),
    }
}

/// Create an invoice from raw form fields.
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    request_body(content = InvoiceFormData, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; navigate to the invoice list"),
        (status = 422, description = "Validation or storage failure", body = MutationResult)
    ),
    tags = ["invoices"],
    operation_id = "createInvoice"
)]
#[post("/invoices")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    form: web::Form<InvoiceFormData>,
) -> HttpResponse {
    // The form boundary supplies the previous attempt's result implicitly;
    // a fresh submission starts from the empty result.
    let outcome = state
        .commands
        .create_invoice(MutationResult::default(), form.into_inner())
        .await;
    respond(outcome)
}

/// Update an invoice's mutable fields from raw form fields.
#[utoipa::path(
    put,
    path = "/api/v1/invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice identity")),
    request_body(content = InvoiceFormData, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; navigate to the invoice list"),
        (status = 422, description = "Validation or storage failure", body = MutationResult)
    ),
    tags = ["invoices"],
    operation_id = "updateInvoice"
)]
#[put("/invoices/{id}")]
pub async fn update_invoice(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    form: web::Form<InvoiceFormData>,
) -> HttpResponse {
    let outcome = state
        .commands
        .update_invoice(id.into_inner(), MutationResult::default(), form.into_inner())
        .await;
    respond(outcome)
}

/// Delete an invoice; answers pass/fail feedback, never navigation.
#[utoipa::path(
    delete,
    path = "/api/v1/invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice identity")),
    responses(
        (status = 200, description = "Completion or failure message", body = MutationResult)
    ),
    tags = ["invoices"],
    operation_id = "deleteInvoice"
)]
#[delete("/invoices/{id}")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> web::Json<MutationResult> {
    web::Json(state.commands.delete_invoice(id.into_inner()).await)
}
