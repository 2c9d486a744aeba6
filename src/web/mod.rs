//! HTTP surface: the interactive form plus a JSON endpoint.
//!
//! | Route          | Purpose                                   |
//! |----------------|-------------------------------------------|
//! | `GET /`        | form (`?lang=tr` for Turkish)             |
//! | `POST /run`    | form submission, renders all three phases |
//! | `POST /api/run`| same run, `RunReport` as JSON             |
//! | `GET /health`  | liveness and active run settings          |

pub mod error;
pub mod render;
pub mod routes;

use crate::Growmarkt;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared across requests. Holds providers and settings only; credentials
/// arrive with each request and are dropped with it.
pub type SharedState = Arc<Growmarkt>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(routes::show_form))
        .route("/run", post(routes::submit_form))
        .route("/api/run", post(routes::run_json))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
