//! Category aggregators.
//!
//! Each function prices every item of one category with that category's
//! markup and the applicable VAT rule, keeping input order. Labels and
//! formulas are the ones printed on the summary page.

use crate::pricing::calculators::{price_line, PriceBreakdown};
use crate::pricing::models::{LineItem, MarkupCategory, PricingConfig, VatRule};

use super::models::{
    ActivityDetails, CustomItem, FlightDetails, HotelDetails, TransportationDetails,
};

/// A priced line item
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub label: String,
    pub detail: String,
    pub breakdown: PriceBreakdown,
    pub in_summary: bool,
}

impl PricedLine {
    fn new<I: LineItem>(
        item: &I,
        label: String,
        detail: String,
        pricing: &PricingConfig,
        category: MarkupCategory,
        vat_rule: VatRule,
    ) -> Self {
        let breakdown = price_line(
            item,
            pricing.markup(category),
            vat_rule,
            pricing.vat_percent,
        );
        Self {
            label,
            detail,
            breakdown,
            in_summary: item.include_in_summary(),
        }
    }
}

/// Lines of one category plus their display total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPricing {
    pub lines: Vec<PricedLine>,
    pub total: PriceBreakdown,
}

impl CategoryPricing {
    fn from_lines(lines: Vec<PricedLine>) -> Self {
        let total = lines.iter().map(|line| line.breakdown).sum();
        Self { lines, total }
    }

    /// Lines eligible for the summary page
    pub fn summary_lines(&self) -> impl Iterator<Item = &PricedLine> {
        self.lines.iter().filter(|line| line.in_summary)
    }
}

/// Rooms, meeting rooms and dining of one hotel option
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelPricing {
    pub rooms: CategoryPricing,
    pub meetings: CategoryPricing,
    pub dining: CategoryPricing,
}

impl HotelPricing {
    pub fn total(&self) -> PriceBreakdown {
        self.rooms.total + self.meetings.total + self.dining.total
    }

    /// Summary lines in page order: rooms, then meetings, then dining
    pub fn summary_lines(&self) -> impl Iterator<Item = &PricedLine> {
        self.rooms
            .summary_lines()
            .chain(self.meetings.summary_lines())
            .chain(self.dining.summary_lines())
    }
}

/// Price a hotel option.
///
/// Rooms use the hotels markup; meeting rooms and dining both use the
/// meetings markup. Every line takes the hotel's VAT rule.
pub fn price_hotel(hotel: &HotelDetails, pricing: &PricingConfig) -> HotelPricing {
    let rooms = hotel
        .room_types
        .iter()
        .map(|room| {
            PricedLine::new(
                room,
                format!("{} - {}", hotel.name, room.name),
                format!("{} Room(s) × {} Night(s)", room.quantity, room.num_nights),
                pricing,
                MarkupCategory::Hotels,
                hotel.vat_rule,
            )
        })
        .collect();

    let meetings = hotel
        .meeting_rooms
        .iter()
        .map(|meeting| {
            PricedLine::new(
                meeting,
                format!("Meeting: {}", meeting.name),
                format!("{} Day(s) × {} Guest(s)", meeting.days, meeting.quantity),
                pricing,
                MarkupCategory::Meetings,
                hotel.vat_rule,
            )
        })
        .collect();

    let dining = hotel
        .dining
        .iter()
        .map(|meal| {
            PricedLine::new(
                meal,
                format!("Dining: {}", meal.name),
                format!("{} Day(s) × {} Guest(s)", meal.days, meal.quantity),
                pricing,
                MarkupCategory::Meetings,
                hotel.vat_rule,
            )
        })
        .collect();

    HotelPricing {
        rooms: CategoryPricing::from_lines(rooms),
        meetings: CategoryPricing::from_lines(meetings),
        dining: CategoryPricing::from_lines(dining),
    }
}

/// Price every quote of a flight option.
///
/// The option's `includeInSummary` flag applies to all of its quotes.
pub fn price_flight(flight: &FlightDetails, pricing: &PricingConfig) -> CategoryPricing {
    let in_summary = flight.include_in_summary();
    let lines = flight
        .quotes
        .iter()
        .map(|quote| {
            let mut line = PricedLine::new(
                quote,
                format!("{} ({})", flight.route_description, quote.class),
                format!("{} Seat(s)", quote.quantity),
                pricing,
                MarkupCategory::Flights,
                flight.vat_rule,
            );
            line.in_summary = in_summary;
            line
        })
        .collect();
    CategoryPricing::from_lines(lines)
}

pub fn price_transportation(
    items: &[TransportationDetails],
    pricing: &PricingConfig,
) -> CategoryPricing {
    let lines = items
        .iter()
        .map(|item| {
            PricedLine::new(
                item,
                format!("{} - {}", item.vehicle_type, item.model),
                format!("{} Car(s) × {} Day(s)", item.quantity, item.days),
                pricing,
                MarkupCategory::Transportation,
                item.vat_rule,
            )
        })
        .collect();
    CategoryPricing::from_lines(lines)
}

pub fn price_activities(items: &[ActivityDetails], pricing: &PricingConfig) -> CategoryPricing {
    let lines = items
        .iter()
        .map(|item| {
            PricedLine::new(
                item,
                item.name.clone(),
                format!("{} Guest(s) × {} Day(s)", item.guests, item.days),
                pricing,
                MarkupCategory::Activities,
                item.vat_rule,
            )
        })
        .collect();
    CategoryPricing::from_lines(lines)
}

pub fn price_custom_items(items: &[CustomItem], pricing: &PricingConfig) -> CategoryPricing {
    let lines = items
        .iter()
        .map(|item| {
            PricedLine::new(
                item,
                item.description.clone(),
                format!("{} Unit(s) × {} Day(s)", item.quantity, item.days),
                pricing,
                MarkupCategory::CustomItems,
                item.vat_rule,
            )
        })
        .collect();
    CategoryPricing::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::calculate_flight_total;
    use crate::proposal::fixtures::sample_proposal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_hotel_rooms_use_hotel_markup_and_vat_rule() {
        let data = sample_proposal();
        let pricing = price_hotel(&data.hotel_options[0], &data.pricing);

        // 2 rooms x 3 nights at 100, fixed markup 10 per room-night, domestic 15%
        let deluxe = &pricing.rooms.lines[0];
        assert_eq!(deluxe.label, "Grand Palace - Deluxe King");
        assert_eq!(deluxe.detail, "2 Room(s) × 3 Night(s)");
        assert_eq!(deluxe.breakdown.sub_total, dec!(660));
        assert_eq!(deluxe.breakdown.grand_total, dec!(759));
    }

    #[test]
    fn test_dining_uses_meetings_markup() {
        let data = sample_proposal();
        let pricing = price_hotel(&data.hotel_options[0], &data.pricing);

        // meetings markup is 20%: 50 x 10 guests x 2 days = 1000 -> 1200 -> 1380
        let meeting = &pricing.meetings.lines[0];
        assert_eq!(meeting.label, "Meeting: Board Room");
        assert_eq!(meeting.breakdown.grand_total, dec!(1380));

        // 30 x 10 guests x 1 day = 300 -> 360 -> 414
        let dinner = &pricing.dining.lines[0];
        assert_eq!(dinner.label, "Dining: Gala Dinner");
        assert_eq!(dinner.breakdown.grand_total, dec!(414));
    }

    #[test]
    fn test_hotel_total_includes_excluded_lines() {
        let data = sample_proposal();
        let pricing = price_hotel(&data.hotel_options[0], &data.pricing);

        let excluded = &pricing.rooms.lines[1];
        assert!(!excluded.in_summary);

        let all: PriceBreakdown = pricing
            .rooms
            .lines
            .iter()
            .chain(&pricing.meetings.lines)
            .chain(&pricing.dining.lines)
            .map(|l| l.breakdown)
            .sum();
        assert_eq!(pricing.total(), all);
        assert_eq!(pricing.summary_lines().count(), 3);
    }

    #[test]
    fn test_flight_lines_match_flight_total() {
        let data = sample_proposal();
        let flight = &data.flight_options[0];
        let pricing = price_flight(flight, &data.pricing);

        assert_eq!(pricing.lines.len(), 2);
        assert_eq!(pricing.lines[0].label, "RUH - LHR (Economy)");
        assert_eq!(pricing.lines[0].detail, "4 Seat(s)");
        assert_eq!(
            pricing.total,
            calculate_flight_total(
                &flight.quotes,
                &data.pricing.markups.flights,
                flight.vat_rule,
                data.pricing.vat_percent
            )
        );
    }

    #[test]
    fn test_flight_option_exclusion_applies_to_every_quote() {
        let mut data = sample_proposal();
        data.flight_options[0].include_in_summary = Some(false);
        let pricing = price_flight(&data.flight_options[0], &data.pricing);
        assert_eq!(pricing.summary_lines().count(), 0);
        assert_eq!(pricing.lines.len(), 2);
    }

    #[test]
    fn test_transportation_labels_and_vat() {
        let data = sample_proposal();
        let pricing = price_transportation(&data.transportation, &data.pricing);

        let line = &pricing.lines[0];
        assert_eq!(line.label, "Van with Driver - Hiace");
        assert_eq!(line.detail, "2 Car(s) × 3 Day(s)");
        // international: 150 x 2 x 3 = 900, 10% markup 90, VAT only on markup 13.5
        assert_eq!(line.breakdown.sub_total, dec!(990));
        assert_eq!(line.breakdown.vat_amount, dec!(13.5));
    }

    #[test]
    fn test_activities_and_custom_items() {
        let data = sample_proposal();
        let activities = price_activities(&data.activities, &data.pricing);
        let custom = price_custom_items(&data.custom_items, &data.pricing);

        assert_eq!(activities.lines[0].detail, "6 Guest(s) × 1 Day(s)");
        // 80 x 6 = 480, no markup, 15% -> 552
        assert_eq!(activities.total.grand_total, dec!(552));

        assert_eq!(custom.lines[0].label, "Airport VIP lounge");
        assert_eq!(custom.lines[0].detail, "3 Unit(s) × 1 Day(s)");
        // 40 x 3 = 120, fixed 5 per unit = 15, 15% -> 155.25
        assert_eq!(custom.total.grand_total, dec!(155.25));
    }

    #[test]
    fn test_vat_toggle_does_not_change_pricing() {
        let mut data = sample_proposal();
        let enabled = price_hotel(&data.hotel_options[0], &data.pricing);
        data.pricing.enable_vat = false;
        let disabled = price_hotel(&data.hotel_options[0], &data.pricing);

        assert_eq!(disabled.total(), enabled.total());
        // 759 + 1759.5 + 1380 + 414
        assert_eq!(disabled.total().grand_total, dec!(4312.5));
    }
}
