//! Pricing service functions used at the HTTP boundary.
//!
//! The calculators never fail; these functions validate untrusted input first
//! and resolve request defaults against the service configuration.

use rust_decimal::Decimal;

use super::calculators::{try_flight_total, try_price_breakdown, try_price_line, PriceBreakdown};
use super::currency::{Currency, CurrencyError};
use super::models::{FlightQuote, MarkupConfig};
use super::requests::{CalculateBreakdownRequest, CalculateFlightTotalRequest};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    InvalidInput {
        message: String,
        errors: Vec<String>,
    },
    UnsupportedCurrency {
        code: String,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidInput { message, errors } => {
                write!(f, "Invalid input: {} ({} problem(s))", message, errors.len())
            }
            PricingError::UnsupportedCurrency { code } => {
                write!(f, "Unsupported currency code: {:?}", code)
            }
        }
    }
}

impl std::error::Error for PricingError {}

impl From<CurrencyError> for PricingError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::InvalidCode(code) => PricingError::UnsupportedCurrency { code },
        }
    }
}

impl PricingError {
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidInput { .. } => "invalid_input",
            PricingError::UnsupportedCurrency { .. } => "unsupported_currency",
        }
    }
}

/// Collects field problems so a caller sees all of them at once
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn non_negative(&mut self, field: &str, value: Decimal) {
        if value.is_sign_negative() && !value.is_zero() {
            self.errors.push(format!("{} must not be negative", field));
        }
    }

    pub fn percentage(&mut self, field: &str, value: Decimal) {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            self.errors.push(format!("{} must be between 0 and 100", field));
        }
    }

    pub fn markup(&mut self, field: &str, markup: &MarkupConfig) {
        self.non_negative(&format!("{}.value", field), markup.value);
    }

    pub fn currency(&mut self, field: &str, code: &str) {
        if code.parse::<Currency>().is_err() {
            self.errors
                .push(format!("{} must be a three-letter currency code", field));
        }
    }

    /// Record `field` when its priced amount left the representable range.
    pub fn priceable(&mut self, field: &str, priced: Option<PriceBreakdown>) -> Option<PriceBreakdown> {
        if priced.is_none() {
            self.errors.push(format!("{} is too large to price", field));
        }
        priced
    }

    /// Turn collected problems into an error, or `Ok` if there were none.
    pub fn finish(self, message: &str) -> Result<(), PricingError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(PricingError::InvalidInput {
                message: message.to_string(),
                errors: self.errors,
            })
        }
    }
}

/// Result of a single-line calculation with resolved defaults
#[derive(Debug, Clone)]
pub struct BreakdownResult {
    pub breakdown: PriceBreakdown,
    pub currency: Currency,
}

/// Per-quote and total pricing of one flight option
#[derive(Debug, Clone)]
pub struct FlightTotalResult {
    pub quotes: Vec<(FlightQuote, PriceBreakdown)>,
    pub total: PriceBreakdown,
    pub currency: Currency,
}

/// Validate and price a single line.
///
/// `default_vat_percent` and `default_currency` fill in fields the request
/// left out.
pub fn calculate_breakdown(
    request: &CalculateBreakdownRequest,
    default_vat_percent: Decimal,
    default_currency: &str,
) -> Result<BreakdownResult, PricingError> {
    let vat_percent = request.vat_percent.unwrap_or(default_vat_percent);
    let currency_code = request.currency.as_deref().unwrap_or(default_currency);

    let mut violations = Violations::new();
    violations.non_negative("net", request.net);
    violations.markup("markup", &request.markup);
    violations.percentage("vatPercent", vat_percent);
    violations.currency("currency", currency_code);
    let priced = violations.priceable(
        "net",
        try_price_breakdown(
            request.net,
            &request.markup,
            request.vat_rule,
            vat_percent,
            request.quantity,
            request.duration,
        ),
    );
    violations.finish("Price breakdown request rejected")?;

    let currency = currency_code.parse::<Currency>()?;
    // `finish` already rejected an unpriceable line
    let breakdown = priced.unwrap_or_default();

    tracing::debug!(
        "Priced line: net={} qty={} duration={} grand_total={}",
        request.net,
        request.quantity,
        request.duration,
        breakdown.grand_total
    );

    Ok(BreakdownResult {
        breakdown,
        currency,
    })
}

/// Validate and price every quote of a flight option.
pub fn calculate_flight_quotes(
    request: &CalculateFlightTotalRequest,
    default_vat_percent: Decimal,
    default_currency: &str,
) -> Result<FlightTotalResult, PricingError> {
    let vat_percent = request.vat_percent.unwrap_or(default_vat_percent);
    let currency_code = request.currency.as_deref().unwrap_or(default_currency);

    let mut violations = Violations::new();
    let mut quotes: Vec<(FlightQuote, PriceBreakdown)> = Vec::with_capacity(request.quotes.len());
    for (i, quote) in request.quotes.iter().enumerate() {
        let field = format!("quotes[{}].price", i);
        violations.non_negative(&field, quote.price);
        let priced = try_price_line(quote, &request.markup, request.vat_rule, vat_percent);
        if let Some(breakdown) = violations.priceable(&field, priced) {
            quotes.push((quote.clone(), breakdown));
        }
    }
    violations.markup("markup", &request.markup);
    violations.percentage("vatPercent", vat_percent);
    violations.currency("currency", currency_code);
    let total = violations.priceable(
        "quotes",
        try_flight_total(&request.quotes, &request.markup, request.vat_rule, vat_percent),
    );
    violations.finish("Flight total request rejected")?;

    let currency = currency_code.parse::<Currency>()?;
    // `finish` already rejected an unpriceable total
    let total = total.unwrap_or_default();

    Ok(FlightTotalResult {
        quotes,
        total,
        currency,
    })
}
