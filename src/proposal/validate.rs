//! Boundary checks for a proposal snapshot.
//!
//! Pricing itself accepts anything; a request is rejected here before the
//! engine runs. Every problem is reported with its JSON field path.
//!
//! Besides field checks, every line is priced once with checked arithmetic
//! and summed. With prices, markups and VAT non-negative, no section total or
//! summary total can exceed that sum, so a snapshot that passes cannot
//! overflow later.

use crate::pricing::calculators::{try_price_line, PriceBreakdown};
use crate::pricing::models::{LineItem, MarkupCategory, PricingConfig, VatRule};
use crate::pricing::services::{PricingError, Violations};

use super::models::ProposalData;

struct RangeCheck<'a> {
    pricing: &'a PricingConfig,
    total: Option<PriceBreakdown>,
}

impl RangeCheck<'_> {
    fn line<I: LineItem>(
        &mut self,
        violations: &mut Violations,
        field: &str,
        item: &I,
        category: MarkupCategory,
        vat_rule: VatRule,
    ) {
        let priced = try_price_line(
            item,
            self.pricing.markup(category),
            vat_rule,
            self.pricing.vat_percent,
        );
        if let Some(line) = violations.priceable(field, priced) {
            self.total = self.total.and_then(|total| total.checked_add(line));
        }
    }
}

fn check_ranges(data: &ProposalData, violations: &mut Violations) {
    let mut check = RangeCheck {
        pricing: &data.pricing,
        total: Some(PriceBreakdown::default()),
    };

    for (h, hotel) in data.hotel_options.iter().enumerate() {
        for (i, room) in hotel.room_types.iter().enumerate() {
            let field = format!("hotelOptions[{}].roomTypes[{}]", h, i);
            check.line(violations, &field, room, MarkupCategory::Hotels, hotel.vat_rule);
        }
        for (i, meeting) in hotel.meeting_rooms.iter().enumerate() {
            let field = format!("hotelOptions[{}].meetingRooms[{}]", h, i);
            check.line(violations, &field, meeting, MarkupCategory::Meetings, hotel.vat_rule);
        }
        for (i, meal) in hotel.dining.iter().enumerate() {
            let field = format!("hotelOptions[{}].dining[{}]", h, i);
            check.line(violations, &field, meal, MarkupCategory::Meetings, hotel.vat_rule);
        }
    }
    for (f, flight) in data.flight_options.iter().enumerate() {
        for (i, quote) in flight.quotes.iter().enumerate() {
            let field = format!("flightOptions[{}].quotes[{}]", f, i);
            check.line(violations, &field, quote, MarkupCategory::Flights, flight.vat_rule);
        }
    }
    for (i, item) in data.transportation.iter().enumerate() {
        let field = format!("transportation[{}]", i);
        check.line(violations, &field, item, MarkupCategory::Transportation, item.vat_rule);
    }
    for (i, item) in data.activities.iter().enumerate() {
        let field = format!("activities[{}]", i);
        check.line(violations, &field, item, MarkupCategory::Activities, item.vat_rule);
    }
    for (i, item) in data.custom_items.iter().enumerate() {
        let field = format!("customItems[{}]", i);
        check.line(violations, &field, item, MarkupCategory::CustomItems, item.vat_rule);
    }

    violations.priceable("proposal total", check.total);
}

pub fn validate_proposal(data: &ProposalData) -> Result<(), PricingError> {
    let mut violations = Violations::new();
    let pricing = &data.pricing;

    violations.currency("pricing.currency", &pricing.currency);
    violations.percentage("pricing.vatPercent", pricing.vat_percent);

    let markups = &pricing.markups;
    for (name, markup) in [
        ("hotels", &markups.hotels),
        ("meetings", &markups.meetings),
        ("flights", &markups.flights),
        ("transportation", &markups.transportation),
        ("activities", &markups.activities),
        ("customItems", &markups.custom_items),
    ] {
        violations.markup(&format!("pricing.markups.{}", name), markup);
    }

    for (h, hotel) in data.hotel_options.iter().enumerate() {
        for (i, room) in hotel.room_types.iter().enumerate() {
            violations.non_negative(
                &format!("hotelOptions[{}].roomTypes[{}].netPrice", h, i),
                room.net_price,
            );
        }
        for (i, meeting) in hotel.meeting_rooms.iter().enumerate() {
            violations.non_negative(
                &format!("hotelOptions[{}].meetingRooms[{}].price", h, i),
                meeting.price,
            );
        }
        for (i, meal) in hotel.dining.iter().enumerate() {
            violations.non_negative(&format!("hotelOptions[{}].dining[{}].price", h, i), meal.price);
        }
    }

    for (f, flight) in data.flight_options.iter().enumerate() {
        for (i, quote) in flight.quotes.iter().enumerate() {
            violations.non_negative(&format!("flightOptions[{}].quotes[{}].price", f, i), quote.price);
        }
    }

    for (i, item) in data.transportation.iter().enumerate() {
        violations.non_negative(
            &format!("transportation[{}].netPricePerDay", i),
            item.net_price_per_day,
        );
    }

    for (i, item) in data.activities.iter().enumerate() {
        violations.non_negative(&format!("activities[{}].pricePerPerson", i), item.price_per_person);
    }

    for (i, item) in data.custom_items.iter().enumerate() {
        violations.non_negative(&format!("customItems[{}].unitPrice", i), item.unit_price);
    }

    check_ranges(data, &mut violations);
    violations.finish("Proposal rejected")
}
