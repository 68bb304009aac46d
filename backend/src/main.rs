//! Backend entry-point: wires the invoice API, health probes, and OpenAPI docs.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use dashboard_backend::domain::{Customer, InvoiceListService, InvoiceMutationService};
use dashboard_backend::inbound::http::health::HealthState;
use dashboard_backend::inbound::http::HttpState;
use dashboard_backend::outbound::cache::InMemoryViewVersions;
use dashboard_backend::outbound::persistence::InMemoryInvoiceStore;
use dashboard_backend::server::{self, ServerConfig};

/// Seed customers so the invoice form has someone to bill from a cold start.
fn demo_customers() -> Vec<Customer> {
    [
        ("Acme Corp", "billing@acme.test"),
        ("Globex Ltd", "accounts@globex.test"),
        ("Initech", "finance@initech.test"),
    ]
    .into_iter()
    .map(|(name, email)| Customer {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        email: email.to_owned(),
    })
    .collect()
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();

    let store = Arc::new(InMemoryInvoiceStore::with_customers(demo_customers()));
    let cache = Arc::new(InMemoryViewVersions::new());
    let commands = Arc::new(InvoiceMutationService::new(Arc::clone(&store), cache));
    let queries = Arc::new(InvoiceListService::new(store));
    let state = HttpState::new(commands, queries);

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, state, &config)?;
    info!(addr = %config.bind_addr(), "invoice backend listening");
    server.await
}
