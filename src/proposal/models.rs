//! Proposal snapshot as sent by the proposal builder front end.
//!
//! Field names are camelCase on the wire. Optional text fields default to
//! empty so partially filled drafts still deserialize.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::models::{LineItem, PricingConfig, VatRule};

pub use crate::pricing::models::FlightQuote;

fn one() -> u32 {
    1
}

fn not_excluded(flag: Option<bool>) -> bool {
    flag != Some(false)
}

/// Logos and contact details printed on the cover
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branding {
    pub client_logo: Option<String>,
    pub company_logo: Option<String>,
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageTag {
    Interior,
    Rooms,
    Exterior,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelImage {
    pub url: String,
    #[serde(default)]
    pub tag: Option<ImageTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub net_price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default = "one")]
    pub num_nights: u32,
    #[serde(default)]
    pub include_in_summary: Option<bool>,
}

impl LineItem for RoomType {
    fn net_price(&self) -> Decimal {
        self.net_price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn duration(&self) -> u32 {
        self.num_nights
    }

    fn include_in_summary(&self) -> bool {
        not_excluded(self.include_in_summary)
    }
}

/// A per-guest, per-day hotel booking: meeting rooms and dining share a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueBooking {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Unit price per guest per day
    pub price: Decimal,
    /// Number of guests
    pub quantity: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "one")]
    pub days: u32,
    #[serde(default)]
    pub include_in_summary: Option<bool>,
}

pub type MeetingDetails = VenueBooking;
pub type DiningDetails = VenueBooking;

impl LineItem for VenueBooking {
    fn net_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn duration(&self) -> u32 {
        self.days
    }

    fn include_in_summary(&self) -> bool {
        not_excluded(self.include_in_summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetails {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub images: Vec<HotelImage>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub meeting_rooms: Vec<MeetingDetails>,
    #[serde(default)]
    pub dining: Vec<DiningDetails>,
    #[serde(default)]
    pub vat_rule: VatRule,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightLeg {
    pub from: String,
    pub to: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub duration: String,
    pub airline: String,
    pub flight_number: String,
    pub flight_class: Option<String>,
    pub luggage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub route_description: String,
    #[serde(default)]
    pub outbound: Vec<FlightLeg>,
    #[serde(default, rename = "return")]
    pub return_legs: Vec<FlightLeg>,
    #[serde(default)]
    pub quotes: Vec<FlightQuote>,
    #[serde(default)]
    pub vat_rule: VatRule,
    #[serde(default)]
    pub include_in_summary: Option<bool>,
}

impl FlightDetails {
    /// Whether this option's quotes appear on the summary page
    pub fn include_in_summary(&self) -> bool {
        not_excluded(self.include_in_summary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Sedan (Car with Driver)")]
    Sedan,
    #[serde(rename = "SUV (Car with Driver)")]
    Suv,
    #[serde(rename = "Van with Driver")]
    Van,
    #[serde(rename = "Bus with Driver")]
    Bus,
    #[serde(rename = "Car Rental (Self Drive)")]
    Rental,
    #[serde(rename = "Luxury Limo")]
    Luxury,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleType::Sedan => "Sedan (Car with Driver)",
            VehicleType::Suv => "SUV (Car with Driver)",
            VehicleType::Van => "Van with Driver",
            VehicleType::Bus => "Bus with Driver",
            VehicleType::Rental => "Car Rental (Self Drive)",
            VehicleType::Luxury => "Luxury Limo",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationDetails {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default = "one")]
    pub days: u32,
    pub net_price_per_day: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub vat_rule: VatRule,
    #[serde(default)]
    pub include_in_summary: Option<bool>,
}

impl LineItem for TransportationDetails {
    fn net_price(&self) -> Decimal {
        self.net_price_per_day
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn duration(&self) -> u32 {
        self.days
    }

    fn include_in_summary(&self) -> bool {
        not_excluded(self.include_in_summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub price_per_person: Decimal,
    pub guests: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "one")]
    pub days: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub vat_rule: VatRule,
    #[serde(default)]
    pub include_in_summary: Option<bool>,
}

impl LineItem for ActivityDetails {
    fn net_price(&self) -> Decimal {
        self.price_per_person
    }

    fn quantity(&self) -> u32 {
        self.guests
    }

    fn duration(&self) -> u32 {
        self.days
    }

    fn include_in_summary(&self) -> bool {
        not_excluded(self.include_in_summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    #[serde(default)]
    pub id: String,
    pub description: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "one")]
    pub days: u32,
    #[serde(default)]
    pub vat_rule: VatRule,
    #[serde(default)]
    pub include_in_summary: Option<bool>,
}

impl LineItem for CustomItem {
    fn net_price(&self) -> Decimal {
        self.unit_price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn duration(&self) -> u32 {
        self.days
    }

    fn include_in_summary(&self) -> bool {
        not_excluded(self.include_in_summary)
    }
}

/// Which categories appear in the document at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inclusions {
    pub hotels: bool,
    pub flights: bool,
    pub transportation: bool,
    pub custom_items: bool,
    pub activities: bool,
}

impl Default for Inclusions {
    fn default() -> Self {
        Self {
            hotels: true,
            flights: true,
            transportation: true,
            custom_items: true,
            activities: true,
        }
    }
}

/// Aggregate root handed to the engine as an immutable snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalData {
    #[serde(default)]
    pub id: String,
    /// Epoch milliseconds of the last edit
    #[serde(default)]
    pub last_modified: Option<i64>,
    #[serde(default)]
    pub proposal_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub hotel_options: Vec<HotelDetails>,
    #[serde(default)]
    pub flight_options: Vec<FlightDetails>,
    #[serde(default)]
    pub transportation: Vec<TransportationDetails>,
    #[serde(default)]
    pub custom_items: Vec<CustomItem>,
    #[serde(default)]
    pub activities: Vec<ActivityDetails>,
    #[serde(default)]
    pub inclusions: Inclusions,
}
