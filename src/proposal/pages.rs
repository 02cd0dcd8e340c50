//! Section renderers.
//!
//! Each builder turns one category into a display model with every money
//! figure already formatted. When prices are hidden the money fields are
//! `None` and only descriptive text remains. Missing images, logos and
//! optional fields are dropped rather than treated as errors.

use chrono::DateTime;

use crate::pricing::currency::Currency;

use super::aggregate::{CategoryPricing, HotelPricing};
use super::models::{
    ActivityDetails, Branding, CustomItem, FlightDetails, FlightLeg, HotelDetails,
    TransportationDetails, VenueBooking,
};
use super::summary::ProposalSummary;

/// Hotel sections show at most this many images
pub const MAX_HOTEL_IMAGES: usize = 4;

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// "2025-11-02 to 2025-11-03 (2 Days)" when dated, otherwise "2 Days"
fn schedule(start: Option<&str>, end: Option<&str>, days: u32) -> String {
    match (non_empty(start), non_empty(end)) {
        (Some(start), Some(end)) => format!("{} to {} ({} Days)", start, end, days),
        (Some(date), None) | (None, Some(date)) => format!("{} ({} Days)", date, days),
        (None, None) => format!("{} Days", days),
    }
}

#[derive(Debug, Clone)]
pub struct CoverPage {
    pub proposal_name: String,
    pub customer_name: String,
    pub company_logo: Option<String>,
    pub company_name: Option<String>,
    pub date: Option<String>,
    pub prepared_by: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl CoverPage {
    pub fn build(
        proposal_name: &str,
        customer_name: &str,
        branding: &Branding,
        last_modified: Option<i64>,
    ) -> Self {
        let date = last_modified
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%-m/%-d/%Y").to_string());

        Self {
            proposal_name: proposal_name.to_string(),
            customer_name: customer_name.to_string(),
            company_logo: non_empty(branding.company_logo.as_deref()),
            company_name: non_empty(branding.company_name.as_deref()),
            date,
            prepared_by: non_empty(branding.contact_name.as_deref()),
            contact_email: non_empty(branding.contact_email.as_deref()),
            contact_phone: non_empty(branding.contact_phone.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TermsClause {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TERMS_AND_CONDITIONS: [TermsClause; 6] = [
    TermsClause {
        title: "Booking Confirmation",
        body: "All bookings are subject to availability at the time of confirmation. Prices are subject to change without prior notice until the final booking is secured.",
    },
    TermsClause {
        title: "Payment Policy",
        body: "Full payment is required 14 days prior to arrival to guarantee the reservation. We accept bank transfers and major credit cards.",
    },
    TermsClause {
        title: "Cancellation Policy",
        body: "Cancellations made more than 30 days before arrival will incur no charges. Cancellations between 14-30 days will be charged 50%. Cancellations within 14 days are non-refundable.",
    },
    TermsClause {
        title: "Flight Changes",
        body: "Flight schedules are subject to change by the airline. We are not responsible for delays or cancellations by the carrier.",
    },
    TermsClause {
        title: "Travel Documents",
        body: "Passengers are responsible for ensuring they have valid passports and visas for travel.",
    },
    TermsClause {
        title: "Liability",
        body: "We act only as agents for the passenger in regard to travel, whether by railroad, motorcar, motorcoach, boat, or airplane, and assume no liability for injury, damage, loss, accident, delay, or irregularity.",
    },
];

#[derive(Debug, Clone)]
pub struct TermsPage {
    pub clauses: Vec<TermsClause>,
}

impl TermsPage {
    pub fn build() -> Self {
        Self {
            clauses: TERMS_AND_CONDITIONS.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageView {
    pub url: String,
    /// First image spans the full width, the rest half
    pub wide: bool,
}

#[derive(Debug, Clone)]
pub struct RateRow {
    pub label: String,
    pub detail: String,
    pub price: String,
}

#[derive(Debug, Clone)]
pub struct BookingRow {
    pub name: String,
    pub schedule: String,
    pub price: Option<String>,
    pub unit_price: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HotelPage {
    pub number: usize,
    pub name: String,
    pub images: Vec<ImageView>,
    pub location: Option<String>,
    pub website: Option<String>,
    /// `None` when prices are hidden
    pub room_rates: Option<Vec<RateRow>>,
    pub meetings: Vec<BookingRow>,
    pub dining: Vec<BookingRow>,
}

impl HotelPage {
    pub fn build(
        index: usize,
        hotel: &HotelDetails,
        pricing: &HotelPricing,
        currency: &Currency,
        show_prices: bool,
    ) -> Self {
        let images = hotel
            .images
            .iter()
            .filter(|image| !image.url.trim().is_empty())
            .take(MAX_HOTEL_IMAGES)
            .enumerate()
            .map(|(i, image)| ImageView {
                url: image.url.clone(),
                wide: i == 0,
            })
            .collect();

        let room_rates = show_prices.then(|| {
            hotel
                .room_types
                .iter()
                .zip(&pricing.rooms.lines)
                .map(|(room, line)| RateRow {
                    label: room.name.clone(),
                    detail: format!("{} Room(s) x {} Night(s)", room.quantity, room.num_nights),
                    price: currency.format(line.breakdown.grand_total),
                })
                .collect()
        });

        let booking_rows = |bookings: &[VenueBooking], lines: &CategoryPricing, with_unit: bool| {
            bookings
                .iter()
                .zip(&lines.lines)
                .map(|(booking, line)| BookingRow {
                    name: booking.name.clone(),
                    schedule: format!(
                        "{} • {} Guests",
                        schedule(booking.start_date.as_deref(), booking.end_date.as_deref(), booking.days),
                        booking.quantity
                    ),
                    price: show_prices.then(|| currency.format(line.breakdown.grand_total)),
                    unit_price: (show_prices && with_unit)
                        .then(|| format!("{}/guest/day", currency.format(booking.price))),
                })
                .collect::<Vec<_>>()
        };

        Self {
            number: index + 1,
            name: hotel.name.clone(),
            images,
            location: non_empty(hotel.location.as_deref()),
            website: non_empty(hotel.website.as_deref()),
            room_rates,
            meetings: booking_rows(hotel.meeting_rooms.as_slice(), &pricing.meetings, true),
            dining: booking_rows(hotel.dining.as_slice(), &pricing.dining, false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LegView {
    pub airline: String,
    pub flight_number: String,
    pub duration: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
}

impl From<&FlightLeg> for LegView {
    fn from(leg: &FlightLeg) -> Self {
        Self {
            airline: leg.airline.clone(),
            flight_number: leg.flight_number.clone(),
            duration: leg.duration.clone(),
            from: leg.from.clone(),
            to: leg.to.clone(),
            departure: format!("{} @ {}", leg.departure_date, leg.departure_time),
            arrival: format!("{} @ {}", leg.arrival_date, leg.arrival_time),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuoteRow {
    pub class: String,
    pub seats: String,
    pub price: String,
}

#[derive(Debug, Clone)]
pub struct FlightCard {
    pub title: String,
    pub outbound: Vec<LegView>,
    pub return_legs: Vec<LegView>,
    /// `None` when prices are hidden
    pub quotes: Option<Vec<QuoteRow>>,
    pub total: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FlightsPage {
    pub options: Vec<FlightCard>,
}

impl FlightsPage {
    pub fn build(
        flights: &[FlightDetails],
        pricing: &[CategoryPricing],
        currency: &Currency,
        show_prices: bool,
    ) -> Self {
        let options = flights
            .iter()
            .zip(pricing)
            .enumerate()
            .map(|(i, (flight, priced))| {
                let title = match non_empty(Some(flight.route_description.as_str())) {
                    Some(route) => route,
                    None => format!("Option {}", i + 1),
                };
                let quotes = show_prices.then(|| {
                    flight
                        .quotes
                        .iter()
                        .zip(&priced.lines)
                        .map(|(quote, line)| QuoteRow {
                            class: format!("{} Class", quote.class),
                            seats: format!("({} Seats)", quote.quantity),
                            price: currency.format(line.breakdown.grand_total),
                        })
                        .collect()
                });

                FlightCard {
                    title,
                    outbound: flight.outbound.iter().map(LegView::from).collect(),
                    return_legs: flight.return_legs.iter().map(LegView::from).collect(),
                    quotes,
                    total: show_prices.then(|| currency.format(priced.total.grand_total)),
                }
            })
            .collect();

        Self { options }
    }
}

#[derive(Debug, Clone)]
pub struct VehicleCard {
    pub model: String,
    pub subtitle: String,
    pub image: Option<String>,
    pub units: String,
    pub price: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TransportPage {
    pub vehicles: Vec<VehicleCard>,
}

impl TransportPage {
    pub fn build(
        items: &[TransportationDetails],
        pricing: &CategoryPricing,
        currency: &Currency,
        show_prices: bool,
    ) -> Self {
        let vehicles = items
            .iter()
            .zip(&pricing.lines)
            .map(|(item, line)| VehicleCard {
                model: item.model.clone(),
                subtitle: match non_empty(Some(item.description.as_str())) {
                    Some(description) => format!("{} • {}", item.vehicle_type, description),
                    None => item.vehicle_type.to_string(),
                },
                image: non_empty(item.image.as_deref()),
                units: format!("{} Vehicle(s) × {} Day(s)", item.quantity, item.days),
                price: show_prices.then(|| currency.format(line.breakdown.grand_total)),
            })
            .collect();

        Self { vehicles }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityCard {
    pub name: String,
    pub image: Option<String>,
    pub schedule: String,
    pub price: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ActivitiesPage {
    pub activities: Vec<ActivityCard>,
}

impl ActivitiesPage {
    pub fn build(
        items: &[ActivityDetails],
        pricing: &CategoryPricing,
        currency: &Currency,
        show_prices: bool,
    ) -> Self {
        let activities = items
            .iter()
            .zip(&pricing.lines)
            .map(|(item, line)| ActivityCard {
                name: item.name.clone(),
                image: non_empty(item.image.as_deref()),
                schedule: format!(
                    "{} • {} Guests",
                    schedule(item.start_date.as_deref(), item.end_date.as_deref(), item.days),
                    item.guests
                ),
                price: show_prices.then(|| currency.format(line.breakdown.grand_total)),
            })
            .collect();

        Self { activities }
    }
}

#[derive(Debug, Clone)]
pub struct CustomRow {
    pub description: String,
    pub detail: String,
    pub price: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CustomItemsPage {
    pub items: Vec<CustomRow>,
}

impl CustomItemsPage {
    pub fn build(
        items: &[CustomItem],
        pricing: &CategoryPricing,
        currency: &Currency,
        show_prices: bool,
    ) -> Self {
        let items = items
            .iter()
            .zip(&pricing.lines)
            .map(|(item, line)| CustomRow {
                description: item.description.clone(),
                detail: format!("{} Days • {} Units", item.days, item.quantity),
                price: show_prices.then(|| currency.format(line.breakdown.grand_total)),
            })
            .collect();

        Self { items }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub label: String,
    pub detail: String,
    pub price: String,
}

#[derive(Debug, Clone)]
pub struct SummaryGroupView {
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}

/// The price page always shows money, whatever `showPrices` says
#[derive(Debug, Clone)]
pub struct SummaryPage {
    pub groups: Vec<SummaryGroupView>,
    pub sub_total: String,
    pub vat_amount: String,
    pub grand_total: String,
}

impl SummaryPage {
    pub fn build(summary: &ProposalSummary, currency: &Currency) -> Self {
        let groups = summary
            .groups
            .iter()
            .map(|group| SummaryGroupView {
                title: group.title,
                rows: group
                    .lines
                    .iter()
                    .map(|line| SummaryRow {
                        label: line.label.clone(),
                        detail: line.detail.clone(),
                        price: currency.format(line.breakdown.grand_total),
                    })
                    .collect(),
            })
            .collect();

        Self {
            groups,
            sub_total: currency.format(summary.totals.sub_total),
            vat_amount: currency.format(summary.totals.vat_amount),
            grand_total: currency.format(summary.totals.grand_total),
        }
    }
}
