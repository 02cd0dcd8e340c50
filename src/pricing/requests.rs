//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{FlightQuote, MarkupConfig, VatRule};

fn one() -> u32 {
    1
}

/// Request to price a single line
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBreakdownRequest {
    pub net: Decimal,
    pub markup: MarkupConfig,
    #[serde(default)]
    pub vat_rule: VatRule,
    #[serde(default)]
    pub vat_percent: Option<Decimal>,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default = "one")]
    pub duration: u32,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to total the seat-class quotes of a flight option
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateFlightTotalRequest {
    pub quotes: Vec<FlightQuote>,
    pub markup: MarkupConfig,
    #[serde(default)]
    pub vat_rule: VatRule,
    #[serde(default)]
    pub vat_percent: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}
