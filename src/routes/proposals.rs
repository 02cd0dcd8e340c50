//! Proposal route handlers.
//!
//! Each handler receives a full proposal snapshot, validates it, then runs
//! the engine inline.

use axum::{response::Html, routing::post, Json, Router};
use serde::Serialize;

use crate::error::Result;
use crate::pricing::currency::Currency;
use crate::pricing::responses::BreakdownResponse;
use crate::pricing::services::PricingError;
use crate::proposal::{
    compose, plan_sections, render_html, summarize, validate_proposal, ProposalData, SectionKind,
};
use crate::AppState;

/// Routes mounted under `/api/proposals`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", post(summary))
        .route("/outline", post(outline))
        .route("/render", post(render))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLineResponse {
    pub label: String,
    pub detail: String,
    #[serde(flatten)]
    pub totals: BreakdownResponse,
}

#[derive(Debug, Serialize)]
pub struct SummaryGroupResponse {
    pub title: &'static str,
    pub lines: Vec<SummaryLineResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub groups: Vec<SummaryGroupResponse>,
    #[serde(flatten)]
    pub totals: BreakdownResponse,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub sections: Vec<SectionKind>,
}

/// Consolidated price summary
async fn summary(Json(data): Json<ProposalData>) -> Result<Json<SummaryResponse>> {
    validate_proposal(&data)?;
    let currency: Currency = data.pricing.currency.parse().map_err(PricingError::from)?;
    let summary = summarize(&data);

    let groups = summary
        .groups
        .iter()
        .map(|group| SummaryGroupResponse {
            title: group.title,
            lines: group
                .lines
                .iter()
                .map(|line| SummaryLineResponse {
                    label: line.label.clone(),
                    detail: line.detail.clone(),
                    totals: BreakdownResponse::new(&line.breakdown, &currency),
                })
                .collect(),
        })
        .collect();

    Ok(Json(SummaryResponse {
        groups,
        totals: BreakdownResponse::new(&summary.totals, &currency),
    }))
}

/// Ordered list of sections the document would contain
async fn outline(Json(data): Json<ProposalData>) -> Result<Json<OutlineResponse>> {
    validate_proposal(&data)?;
    Ok(Json(OutlineResponse {
        sections: plan_sections(&data),
    }))
}

/// Printable HTML document
async fn render(Json(data): Json<ProposalData>) -> Result<Html<String>> {
    validate_proposal(&data)?;
    let document = compose(&data)?;
    tracing::info!(
        "Rendering proposal {} ({} section(s))",
        data.id,
        document.sections.len()
    );
    Ok(Html(render_html(&document)?))
}
