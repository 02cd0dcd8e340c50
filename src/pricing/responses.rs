//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::PriceBreakdown;
use super::currency::Currency;
use super::services::{BreakdownResult, FlightTotalResult, PricingError};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub formatted: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &Currency) -> Self {
        Self {
            amount,
            currency: currency.code().to_string(),
            formatted: currency.format(amount),
        }
    }
}

/// Sub-total, VAT and grand total as money values
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub sub_total: MoneyResponse,
    pub vat_amount: MoneyResponse,
    pub grand_total: MoneyResponse,
}

impl BreakdownResponse {
    pub fn new(breakdown: &PriceBreakdown, currency: &Currency) -> Self {
        Self {
            sub_total: MoneyResponse::new(breakdown.sub_total, currency),
            vat_amount: MoneyResponse::new(breakdown.vat_amount, currency),
            grand_total: MoneyResponse::new(breakdown.grand_total, currency),
        }
    }
}

impl From<BreakdownResult> for BreakdownResponse {
    fn from(result: BreakdownResult) -> Self {
        Self::new(&result.breakdown, &result.currency)
    }
}

/// One seat class in a flight total response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotalResponse {
    pub class: String,
    pub quantity: u32,
    #[serde(flatten)]
    pub totals: BreakdownResponse,
}

/// Response for flight total calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightTotalResponse {
    pub quotes: Vec<QuoteTotalResponse>,
    #[serde(flatten)]
    pub totals: BreakdownResponse,
}

impl From<FlightTotalResult> for FlightTotalResponse {
    fn from(result: FlightTotalResult) -> Self {
        let currency = &result.currency;
        Self {
            quotes: result
                .quotes
                .into_iter()
                .map(|(quote, breakdown)| QuoteTotalResponse {
                    class: quote.class,
                    quantity: quote.quantity,
                    totals: BreakdownResponse::new(&breakdown, currency),
                })
                .collect(),
            totals: BreakdownResponse::new(&result.total, currency),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        let details = match err {
            PricingError::InvalidInput { errors, .. } => Some(serde_json::json!(errors)),
            PricingError::UnsupportedCurrency { code } => Some(serde_json::json!({ "code": code })),
        };
        Self {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_response_serializes_amount_as_string() {
        let currency: Currency = "USD".parse().unwrap();
        let json = serde_json::to_value(MoneyResponse::new(dec!(1234.5), &currency)).unwrap();
        assert_eq!(json["amount"], "1234.5");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["formatted"], "$1,234.50");
    }

    #[test]
    fn test_quote_totals_are_flattened() {
        let currency: Currency = "USD".parse().unwrap();
        let response = QuoteTotalResponse {
            class: "Economy".to_string(),
            quantity: 2,
            totals: BreakdownResponse::new(
                &PriceBreakdown {
                    sub_total: dec!(100),
                    vat_amount: dec!(15),
                    grand_total: dec!(115),
                },
                &currency,
            ),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["class"], "Economy");
        assert_eq!(json["grandTotal"]["amount"], "115");
    }

    #[test]
    fn test_error_response_lists_details() {
        let err = PricingError::InvalidInput {
            message: "rejected".to_string(),
            errors: vec!["net must not be negative".to_string()],
        };
        let json = serde_json::to_value(PricingErrorResponse::from(&err)).unwrap();
        assert_eq!(json["errorType"], "invalid_input");
        assert_eq!(json["details"][0], "net must not be negative");
    }
}
