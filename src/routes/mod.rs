//! HTTP route handlers outside the pricing API

pub mod proposals;

use crate::error::AppError;

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
