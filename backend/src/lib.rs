//! Invoice dashboard backend.
//!
//! The domain layer owns validation, mutation, and listing semantics behind
//! port traits; inbound HTTP handlers and outbound storage adapters plug into
//! those ports. The `client` module hosts the debounced search synchroniser
//! that keeps list navigation in step with typed filter input.

pub mod client;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
