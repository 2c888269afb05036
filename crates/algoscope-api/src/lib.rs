//! # algoscope API
//!
//! HTTP boundary for the algoscope classifier.
//!
//! Features:
//! - Axum-based web server
//! - `POST /analyze` (auto-detection) and `POST /analyze/asserted`
//! - Tower middleware (request IDs, tracing, CORS, timeout, body limit, panic recovery)
//! - Prometheus counters and an OpenAPI document
//! - Graceful shutdown

pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::{AlgoscopeServer, ServerConfig};
