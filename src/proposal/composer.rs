//! Document composer.
//!
//! The section list is decided once from the inclusion flags and collection
//! sizes: Cover, Terms, one Hotel per option, Flights, Transportation,
//! Activities, Custom items, Summary. No section depends on another's output.

use serde::Serialize;

use crate::pricing::currency::Currency;
use crate::pricing::services::PricingError;

use super::aggregate::{
    price_activities, price_custom_items, price_flight, price_hotel, price_transportation,
};
use super::models::ProposalData;
use super::pages::{
    ActivitiesPage, CoverPage, CustomItemsPage, FlightsPage, HotelPage, SummaryPage, TermsPage,
    TransportPage,
};
use super::summary::summarize;

/// One entry of the document outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum SectionKind {
    Cover,
    Terms,
    Hotel { index: usize },
    Flights,
    Transportation,
    Activities,
    CustomItems,
    Summary,
}

/// A composed, display-ready section
#[derive(Debug, Clone)]
pub enum Section {
    Cover(CoverPage),
    Terms(TermsPage),
    Hotel(HotelPage),
    Flights(FlightsPage),
    Transportation(TransportPage),
    Activities(ActivitiesPage),
    CustomItems(CustomItemsPage),
    Summary(SummaryPage),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Cover(_) => SectionKind::Cover,
            Section::Terms(_) => SectionKind::Terms,
            Section::Hotel(page) => SectionKind::Hotel {
                index: page.number - 1,
            },
            Section::Flights(_) => SectionKind::Flights,
            Section::Transportation(_) => SectionKind::Transportation,
            Section::Activities(_) => SectionKind::Activities,
            Section::CustomItems(_) => SectionKind::CustomItems,
            Section::Summary(_) => SectionKind::Summary,
        }
    }
}

/// A proposal ready to render
#[derive(Debug, Clone)]
pub struct ProposalDocument {
    pub title: String,
    pub currency: String,
    pub sections: Vec<Section>,
}

/// Ordered list of sections the document will contain.
///
/// Hotels get one section per option whenever hotels are included; every
/// other category needs its inclusion flag and at least one item.
pub fn plan_sections(data: &ProposalData) -> Vec<SectionKind> {
    let inclusions = &data.inclusions;
    let mut plan = vec![SectionKind::Cover, SectionKind::Terms];

    if inclusions.hotels {
        plan.extend((0..data.hotel_options.len()).map(|index| SectionKind::Hotel { index }));
    }
    if inclusions.flights && !data.flight_options.is_empty() {
        plan.push(SectionKind::Flights);
    }
    if inclusions.transportation && !data.transportation.is_empty() {
        plan.push(SectionKind::Transportation);
    }
    if inclusions.activities && !data.activities.is_empty() {
        plan.push(SectionKind::Activities);
    }
    if inclusions.custom_items && !data.custom_items.is_empty() {
        plan.push(SectionKind::CustomItems);
    }

    plan.push(SectionKind::Summary);
    plan
}

/// Compose the full document in a single pass over the snapshot.
///
/// Fails only when the proposal's currency code is malformed.
pub fn compose(data: &ProposalData) -> Result<ProposalDocument, PricingError> {
    let currency: Currency = data.pricing.currency.parse()?;
    let pricing = &data.pricing;
    let show_prices = pricing.show_prices;

    let sections = plan_sections(data)
        .into_iter()
        .map(|kind| match kind {
            SectionKind::Cover => Section::Cover(CoverPage::build(
                &data.proposal_name,
                &data.customer_name,
                &data.branding,
                data.last_modified,
            )),
            SectionKind::Terms => Section::Terms(TermsPage::build()),
            SectionKind::Hotel { index } => {
                let hotel = &data.hotel_options[index];
                let priced = price_hotel(hotel, pricing);
                Section::Hotel(HotelPage::build(index, hotel, &priced, &currency, show_prices))
            }
            SectionKind::Flights => {
                let priced: Vec<_> = data
                    .flight_options
                    .iter()
                    .map(|flight| price_flight(flight, pricing))
                    .collect();
                Section::Flights(FlightsPage::build(
                    &data.flight_options,
                    &priced,
                    &currency,
                    show_prices,
                ))
            }
            SectionKind::Transportation => {
                let priced = price_transportation(&data.transportation, pricing);
                Section::Transportation(TransportPage::build(
                    &data.transportation,
                    &priced,
                    &currency,
                    show_prices,
                ))
            }
            SectionKind::Activities => {
                let priced = price_activities(&data.activities, pricing);
                Section::Activities(ActivitiesPage::build(
                    &data.activities,
                    &priced,
                    &currency,
                    show_prices,
                ))
            }
            SectionKind::CustomItems => {
                let priced = price_custom_items(&data.custom_items, pricing);
                Section::CustomItems(CustomItemsPage::build(
                    &data.custom_items,
                    &priced,
                    &currency,
                    show_prices,
                ))
            }
            SectionKind::Summary => Section::Summary(SummaryPage::build(&summarize(data), &currency)),
        })
        .collect();

    Ok(ProposalDocument {
        title: data.proposal_name.clone(),
        currency: currency.code().to_string(),
        sections,
    })
}
