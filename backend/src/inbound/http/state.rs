//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! the domain's driving ports and stay testable without real adapters.

use std::sync::Arc;

use crate::domain::ports::{InvoiceCommand, InvoiceQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Mutation pipeline entry points.
    pub commands: Arc<dyn InvoiceCommand>,
    /// Query pipeline entry points.
    pub queries: Arc<dyn InvoiceQuery>,
}

impl HttpState {
    /// Bundle the driving port implementations for the handlers.
    pub fn new(commands: Arc<dyn InvoiceCommand>, queries: Arc<dyn InvoiceQuery>) -> Self {
        Self { commands, queries }
    }
}
