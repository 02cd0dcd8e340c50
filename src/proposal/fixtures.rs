//! Shared proposal fixture for unit tests.
//!
//! Expected figures (USD, 15% VAT):
//! - Deluxe King 759, Royal Suite 1759.5 (excluded from summary)
//! - Board Room 1380, Gala Dinner 414
//! - Economy 3931.2, Business 3276 (international)
//! - Van 1003.5 (international), Desert safari 552, VIP lounge 155.25
//! - Summary: sub 10953, VAT 517.95, grand 11470.95

use super::models::ProposalData;

pub fn sample_proposal_json() -> serde_json::Value {
    serde_json::json!({
        "id": "prop-001",
        "lastModified": 1760572800000i64,
        "proposalName": "Annual Leadership Summit",
        "customerName": "Acme Holdings",
        "branding": {
            "companyName": "Horizon Travel",
            "contactName": "Sara Ali",
            "contactEmail": "sara@horizon.example"
        },
        "pricing": {
            "currency": "USD",
            "enableVat": true,
            "vatPercent": 15,
            "showPrices": true,
            "markups": {
                "hotels": {"type": "Fixed Amount", "value": 10},
                "meetings": {"type": "Percentage", "value": 20},
                "flights": {"type": "Percentage", "value": 8},
                "transportation": {"type": "Percentage", "value": 10},
                "activities": {"type": "Percentage", "value": 0},
                "customItems": {"type": "Fixed Amount", "value": 5}
            }
        },
        "hotelOptions": [{
            "id": "h1",
            "name": "Grand Palace",
            "location": "Riyadh",
            "website": "https://grand-palace.example",
            "vatRule": "domestic",
            "images": [
                {"url": "lobby.jpg", "tag": "interior"},
                {"url": "room.jpg", "tag": "rooms"},
                {"url": "pool.jpg", "tag": "exterior"},
                {"url": "spa.jpg"},
                {"url": "garden.jpg"}
            ],
            "roomTypes": [
                {"id": "r1", "name": "Deluxe King", "netPrice": 100, "quantity": 2,
                 "checkIn": "2025-11-01", "checkOut": "2025-11-04", "numNights": 3},
                {"id": "r2", "name": "Royal Suite", "netPrice": 500, "quantity": 1,
                 "checkIn": "2025-11-01", "checkOut": "2025-11-04", "numNights": 3,
                 "includeInSummary": false}
            ],
            "meetingRooms": [
                {"id": "m1", "name": "Board Room", "price": 50, "quantity": 10,
                 "startDate": "2025-11-02", "endDate": "2025-11-03", "days": 2}
            ],
            "dining": [
                {"id": "d1", "name": "Gala Dinner", "price": 30, "quantity": 10, "days": 1}
            ]
        }],
        "flightOptions": [{
            "id": "f1",
            "routeDescription": "RUH - LHR",
            "vatRule": "international",
            "outbound": [{
                "from": "RUH", "to": "LHR",
                "departureDate": "2025-10-31", "departureTime": "08:00",
                "arrivalDate": "2025-10-31", "arrivalTime": "12:30",
                "duration": "7h 30m", "airline": "Saudia", "flightNumber": "SV119",
                "luggage": "2 x 23kg"
            }],
            "return": [{
                "from": "LHR", "to": "RUH",
                "departureDate": "2025-11-05", "departureTime": "14:00",
                "arrivalDate": "2025-11-05", "arrivalTime": "23:10",
                "duration": "6h 10m", "airline": "Saudia", "flightNumber": "SV120",
                "luggage": "2 x 23kg"
            }],
            "quotes": [
                {"class": "Economy", "price": 900, "quantity": 4},
                {"class": "Business", "price": 3000, "quantity": 1}
            ]
        }],
        "transportation": [{
            "id": "t1",
            "type": "Van with Driver",
            "model": "Hiace",
            "description": "Airport transfers",
            "startDate": "2025-11-01",
            "endDate": "2025-11-03",
            "days": 3,
            "netPricePerDay": 150,
            "quantity": 2,
            "vatRule": "international"
        }],
        "activities": [{
            "id": "a1",
            "name": "Desert safari",
            "pricePerPerson": 80,
            "guests": 6,
            "startDate": "2025-11-03",
            "endDate": "2025-11-03",
            "days": 1,
            "vatRule": "domestic"
        }],
        "customItems": [{
            "id": "c1",
            "description": "Airport VIP lounge",
            "unitPrice": 40,
            "quantity": 3,
            "days": 1,
            "vatRule": "domestic"
        }],
        "inclusions": {
            "hotels": true,
            "flights": true,
            "transportation": true,
            "customItems": true,
            "activities": true
        }
    })
}

pub fn sample_proposal() -> ProposalData {
    serde_json::from_value(sample_proposal_json()).expect("fixture must deserialize")
}
