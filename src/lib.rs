//! Token-guarded HTTP service.
//!
//! Routes are registered with a [`Capability`](middleware::request_guard::Capability). Routes that
//! require a token are checked against a static allow-list, responses to authenticated requests
//! carry an `x-content-hash` header, and handler errors are normalized into a text response.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
