//! Consolidated price summary.
//!
//! Walks the included categories in page order and accumulates every line
//! whose summary flag is set. Nothing is rounded here.

use crate::pricing::calculators::PriceBreakdown;

use super::aggregate::{
    price_activities, price_custom_items, price_flight, price_hotel, price_transportation,
    PricedLine,
};
use super::models::ProposalData;

/// A titled block of summary lines
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryGroup {
    pub title: &'static str,
    pub lines: Vec<PricedLine>,
}

/// The figures behind the price summary page
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalSummary {
    pub groups: Vec<SummaryGroup>,
    pub totals: PriceBreakdown,
}

impl ProposalSummary {
    pub fn lines(&self) -> impl Iterator<Item = &PricedLine> {
        self.groups.iter().flat_map(|group| group.lines.iter())
    }
}

struct SummaryBuilder {
    groups: Vec<SummaryGroup>,
    totals: PriceBreakdown,
}

impl SummaryBuilder {
    fn push<'a>(&mut self, title: &'static str, lines: impl IntoIterator<Item = &'a PricedLine>) {
        let lines: Vec<PricedLine> = lines.into_iter().cloned().collect();
        if lines.is_empty() {
            return;
        }
        for line in &lines {
            self.totals += line.breakdown;
        }
        self.groups.push(SummaryGroup { title, lines });
    }
}

/// Build the consolidated summary for a proposal.
///
/// Group order is Accommodation, Flights, Transportation, then Activities &
/// Extras. A category contributes only when it is included and non-empty;
/// groups left with no eligible lines are dropped.
pub fn summarize(data: &ProposalData) -> ProposalSummary {
    let pricing = &data.pricing;
    let inclusions = &data.inclusions;
    let mut builder = SummaryBuilder {
        groups: Vec::new(),
        totals: PriceBreakdown::default(),
    };

    if inclusions.hotels && !data.hotel_options.is_empty() {
        let hotels: Vec<_> = data
            .hotel_options
            .iter()
            .map(|hotel| price_hotel(hotel, pricing))
            .collect();
        builder.push(
            "Accommodation",
            hotels.iter().flat_map(|hotel| hotel.summary_lines()),
        );
    }

    if inclusions.flights && !data.flight_options.is_empty() {
        let flights: Vec<_> = data
            .flight_options
            .iter()
            .map(|flight| price_flight(flight, pricing))
            .collect();
        builder.push(
            "Flights",
            flights.iter().flat_map(|flight| flight.summary_lines()),
        );
    }

    if inclusions.transportation && !data.transportation.is_empty() {
        let transport = price_transportation(&data.transportation, pricing);
        builder.push("Transportation", transport.summary_lines());
    }

    let activities = if inclusions.activities {
        price_activities(&data.activities, pricing)
    } else {
        Default::default()
    };
    let custom_items = if inclusions.custom_items {
        price_custom_items(&data.custom_items, pricing)
    } else {
        Default::default()
    };
    builder.push(
        "Activities & Extras",
        activities
            .summary_lines()
            .chain(custom_items.summary_lines()),
    );

    tracing::debug!(
        "Summarized proposal {}: {} group(s), grand total {}",
        data.id,
        builder.groups.len(),
        builder.totals.grand_total
    );

    ProposalSummary {
        groups: builder.groups,
        totals: builder.totals,
    }
}
