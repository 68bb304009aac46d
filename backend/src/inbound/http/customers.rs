//! Customer API handlers: read-only form population data.

use actix_web::{get, web};

use crate::domain::CustomerSummary;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List customers for populating the invoice form select, ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    responses(
        (status = 200, description = "Customer summaries", body = [CustomerSummary]),
        (status = 500, description = "Store unavailable")
    ),
    tags = ["customers"],
    operation_id = "listCustomers"
)]
#[get("/customers")]
pub async fn list_customers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CustomerSummary>>> {
    let customers = state.queries.list_customers().await?;
    Ok(web::Json(customers))
}
