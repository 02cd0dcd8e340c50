//! Pricing HTTP handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::{CalculateBreakdownRequest, CalculateFlightTotalRequest};
use super::responses::{BreakdownResponse, FlightTotalResponse};
use super::services;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/breakdown", post(breakdown))
        .route("/flight-total", post(flight_total))
}

/// Price a single line
async fn breakdown(
    State(state): State<AppState>,
    Json(request): Json<CalculateBreakdownRequest>,
) -> Result<Json<BreakdownResponse>> {
    let config = &state.config;
    let result = services::calculate_breakdown(
        &request,
        config.default_vat_percent,
        &config.default_currency,
    )?;
    Ok(Json(result.into()))
}

/// Total the quotes of one flight option
async fn flight_total(
    State(state): State<AppState>,
    Json(request): Json<CalculateFlightTotalRequest>,
) -> Result<Json<FlightTotalResponse>> {
    let config = &state.config;
    let result = services::calculate_flight_quotes(
        &request,
        config.default_vat_percent,
        &config.default_currency,
    )?;
    tracing::debug!(
        "Flight total: {} quote(s), grand_total={}",
        result.quotes.len(),
        result.total.grand_total
    );
    Ok(Json(result.into()))
}
