//! Proposal engine.
//!
//! Prices travel proposals (hotels, flights, transportation, activities and
//! custom items) with per-category markup and domestic or international VAT,
//! and composes them into a printable document. The engine lives in
//! [`pricing`] and [`proposal`]; the rest is the HTTP service around it.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod pricing;
pub mod proposal;
pub mod routes;

use config::Config;

/// Shared, read-only state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .nest("/api/pricing", pricing::router())
        .nest("/api/proposals", routes::proposals::router())
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
