//! HTTP inbound adapter exposing the invoice REST endpoints.

pub mod customers;
pub mod error;
pub mod health;
pub mod invoices;
pub mod state;

pub use error::ApiResult;
pub use state::HttpState;
