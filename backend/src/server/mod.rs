//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::customers::list_customers;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::invoices::{
    create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};
use crate::inbound::http::state::HttpState;

/// Register every route and its shared state on an application.
///
/// Returned as a closure for [`App::configure`] so the same wiring serves
/// both the real server factory and in-process test applications.
pub fn configure_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let api = web::scope("/api/v1")
            .service(list_invoices)
            .service(get_invoice)
            .service(create_invoice)
            .service(update_invoice)
            .service(delete_invoice)
            .service(list_customers);
        cfg.app_data(web::Data::new(state))
            .app_data(health_state)
            .service(api)
            .service(ready)
            .service(live);
        #[cfg(debug_assertions)]
        cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
}

/// Construct an Actix HTTP server from the assembled port implementations.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    state: HttpState,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        App::new().configure(configure_app(
            state.clone(),
            server_health_state.clone(),
        ))
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
