//! HTTP layer: axum handlers and routes, the mutation orchestrator, and
//! the transaction-backed store it runs against.

pub mod config;
pub mod error;
pub mod handlers;
pub mod orchestrator;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
