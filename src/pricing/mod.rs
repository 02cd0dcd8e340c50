//! Pricing engine.
//!
//! Markup and VAT arithmetic for single lines and flight options, currency
//! formatting, and the JSON endpoints the proposal builder calls for live
//! price previews.

pub mod calculators;
pub mod currency;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_flight_total, calculate_price_breakdown, round_money, PriceBreakdown};
pub use currency::{format_currency, Currency};
pub use routes::router;
pub use services::{BreakdownResult, FlightTotalResult, PricingError};
