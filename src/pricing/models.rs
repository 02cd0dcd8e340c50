//! Pricing policy types shared by the calculator and the proposal model.
//!
//! Wire names follow the proposal builder front end (camelCase fields,
//! `"Fixed Amount"` / `"Percentage"` markup kinds, lowercase VAT rules).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a markup value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupType {
    /// Absolute currency amount, charged per unit per day
    #[serde(rename = "Fixed Amount", alias = "fixed", alias = "Fixed")]
    Fixed,
    /// Percentage of the net base
    #[serde(rename = "Percentage", alias = "percent", alias = "Percent")]
    Percent,
}

/// Margin added on top of the net price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupConfig {
    #[serde(rename = "type")]
    pub kind: MarkupType,
    pub value: Decimal,
}

impl MarkupConfig {
    pub fn fixed(value: Decimal) -> Self {
        Self {
            kind: MarkupType::Fixed,
            value,
        }
    }

    pub fn percent(value: Decimal) -> Self {
        Self {
            kind: MarkupType::Percent,
            value,
        }
    }

    /// Markup amount for a line with the given net base and unit count.
    ///
    /// `units` is quantity × duration; fixed markups are charged per unit.
    pub fn amount_for(&self, total_net: Decimal, units: Decimal) -> Decimal {
        match self.kind {
            MarkupType::Fixed => self.value * units,
            MarkupType::Percent => total_net * self.value / Decimal::ONE_HUNDRED,
        }
    }

    /// Same as [`MarkupConfig::amount_for`], `None` on overflow.
    pub fn checked_amount_for(&self, total_net: Decimal, units: Decimal) -> Option<Decimal> {
        match self.kind {
            MarkupType::Fixed => self.value.checked_mul(units),
            MarkupType::Percent => total_net
                .checked_mul(self.value)?
                .checked_div(Decimal::ONE_HUNDRED),
        }
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self::percent(Decimal::ZERO)
    }
}

/// Which base VAT is charged on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatRule {
    /// VAT on net plus markup
    #[default]
    Domestic,
    /// VAT on the markup only
    International,
}

/// Inventory categories that carry their own markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkupCategory {
    Hotels,
    Meetings,
    Flights,
    Transportation,
    Activities,
    CustomItems,
}

/// Per-category markup policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryMarkups {
    pub hotels: MarkupConfig,
    pub meetings: MarkupConfig,
    pub flights: MarkupConfig,
    pub transportation: MarkupConfig,
    pub activities: MarkupConfig,
    pub custom_items: MarkupConfig,
}

impl CategoryMarkups {
    pub fn for_category(&self, category: MarkupCategory) -> &MarkupConfig {
        match category {
            MarkupCategory::Hotels => &self.hotels,
            MarkupCategory::Meetings => &self.meetings,
            MarkupCategory::Flights => &self.flights,
            MarkupCategory::Transportation => &self.transportation,
            MarkupCategory::Activities => &self.activities,
            MarkupCategory::CustomItems => &self.custom_items,
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_vat_percent() -> Decimal {
    super::calculators::DEFAULT_VAT_PERCENT
}

fn default_true() -> bool {
    true
}

/// Global pricing settings of a proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Editor toggle, carried through unchanged; lines are always taxed at
    /// `vat_percent`
    #[serde(default = "default_true")]
    pub enable_vat: bool,
    #[serde(default = "default_vat_percent")]
    pub vat_percent: Decimal,
    #[serde(default)]
    pub markups: CategoryMarkups,
    #[serde(default = "default_true")]
    pub show_prices: bool,
}

impl PricingConfig {
    pub fn markup(&self, category: MarkupCategory) -> &MarkupConfig {
        self.markups.for_category(category)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            enable_vat: true,
            vat_percent: default_vat_percent(),
            markups: CategoryMarkups::default(),
            show_prices: true,
        }
    }
}

/// A seat-class quote on a flight option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightQuote {
    pub class: String,
    /// Net price per seat
    pub price: Decimal,
    /// Number of seats
    pub quantity: u32,
}

/// Anything priced as net × quantity × duration.
///
/// The VAT rule is not part of the item: rooms, meetings and dining inherit it
/// from their hotel and quotes from their flight option.
pub trait LineItem {
    fn net_price(&self) -> Decimal;

    fn quantity(&self) -> u32;

    fn duration(&self) -> u32 {
        1
    }

    fn include_in_summary(&self) -> bool {
        true
    }
}

impl LineItem for FlightQuote {
    fn net_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
