//! Static travel catalogs
//!
//! Destinations, hotels, and flights are served from fixed in-process data.
//! Prices are whole currency units per person (or per night for hotels).

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
    pub description: &'static str,
    pub attractions: u32,
    pub rating: f32,
    pub price_per_person: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u32,
    pub name: &'static str,
    pub destination: &'static str,
    pub rating: f32,
    pub price_per_night: i64,
    pub amenities: &'static [&'static str],
    pub rooms: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub airline: &'static str,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub duration: &'static str,
    pub price: i64,
    pub seats: u32,
}

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        id: 1,
        name: "Paris",
        country: "France",
        description: "The City of Light - Experience romance, art, and culture",
        attractions: 45,
        rating: 4.8,
        price_per_person: 99_600,
    },
    Destination {
        id: 2,
        name: "Rome",
        country: "Italy",
        description: "Ancient history and Renaissance charm combined",
        attractions: 40,
        rating: 4.8,
        price_per_person: 91_300,
    },
    Destination {
        id: 3,
        name: "Tokyo",
        country: "Japan",
        description: "Modern metropolis blending tradition and innovation",
        attractions: 50,
        rating: 4.7,
        price_per_person: 124_500,
    },
    Destination {
        id: 4,
        name: "New York",
        country: "USA",
        description: "The city that never sleeps - Iconic landmarks and vibrant culture",
        attractions: 55,
        rating: 4.6,
        price_per_person: 74_700,
    },
    Destination {
        id: 5,
        name: "Sydney",
        country: "Australia",
        description: "Stunning harbour views and pristine beaches",
        attractions: 35,
        rating: 4.7,
        price_per_person: 107_900,
    },
    Destination {
        id: 6,
        name: "Los Angeles",
        country: "USA",
        description: "Entertainment capital with beaches and mountains",
        attractions: 42,
        rating: 4.5,
        price_per_person: 78_850,
    },
    Destination {
        id: 7,
        name: "Berlin",
        country: "Germany",
        description: "Rich history, vibrant culture, and modern innovation",
        attractions: 38,
        rating: 4.6,
        price_per_person: 70_550,
    },
    Destination {
        id: 8,
        name: "Venice",
        country: "Italy",
        description: "Romantic canals and historic architecture",
        attractions: 30,
        rating: 4.7,
        price_per_person: 87_150,
    },
    Destination {
        id: 9,
        name: "Amsterdam",
        country: "Netherlands",
        description: "Charming canals, bicycles, and cultural treasures",
        attractions: 35,
        rating: 4.6,
        price_per_person: 74_700,
    },
    Destination {
        id: 10,
        name: "Singapore",
        country: "Singapore",
        description: "Modern city-state with futuristic architecture and gardens",
        attractions: 28,
        rating: 4.7,
        price_per_person: 91_300,
    },
];

pub const HOTELS: &[Hotel] = &[
    Hotel {
        id: 1,
        name: "Luxury Palace Hotel",
        destination: "Paris",
        rating: 4.9,
        price_per_night: 20_750,
        amenities: &["WiFi", "Gym", "Pool", "Restaurant", "24/7 Service"],
        rooms: 150,
    },
    Hotel {
        id: 2,
        name: "City Center Inn",
        destination: "Tokyo",
        rating: 4.6,
        price_per_night: 14_940,
        amenities: &["WiFi", "Gym", "Cafe", "Room Service"],
        rooms: 100,
    },
    Hotel {
        id: 3,
        name: "Grand Manhattan Hotel",
        destination: "New York",
        rating: 4.7,
        price_per_night: 18_260,
        amenities: &["WiFi", "Pool", "Restaurant", "Business Center"],
        rooms: 200,
    },
    Hotel {
        id: 4,
        name: "Desert Oasis Resort",
        destination: "Dubai",
        rating: 4.8,
        price_per_night: 16_600,
        amenities: &["WiFi", "Pool", "Spa", "Multiple Restaurants", "Beach Access"],
        rooms: 300,
    },
];

pub const FLIGHTS: &[Flight] = &[
    Flight {
        id: 1,
        airline: "SkyAir Airlines",
        departure: "New York (JFK)",
        arrival: "Paris (CDG)",
        departure_time: "10:30 AM",
        arrival_time: "10:45 PM",
        duration: "7h 15m",
        price: 45_650,
        seats: 45,
    },
    Flight {
        id: 2,
        airline: "Global Airways",
        departure: "New York (JFK)",
        arrival: "Tokyo (NRT)",
        departure_time: "2:00 PM",
        arrival_time: "4:30 PM (Next Day)",
        duration: "14h 30m",
        price: 56_440,
        seats: 32,
    },
    Flight {
        id: 3,
        airline: "Premium Flights",
        departure: "Dubai (DXB)",
        arrival: "Paris (CDG)",
        departure_time: "11:00 AM",
        arrival_time: "3:30 PM",
        duration: "6h 30m",
        price: 34_860,
        seats: 60,
    },
    Flight {
        id: 4,
        airline: "Express Travel",
        departure: "Sydney (SYD)",
        arrival: "Dubai (DXB)",
        departure_time: "6:00 PM",
        arrival_time: "1:15 AM (Next Day)",
        duration: "14h 15m",
        price: 48_140,
        seats: 28,
    },
];

pub fn destination_by_id(id: u32) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

pub fn hotel_by_id(id: u32) -> Option<&'static Hotel> {
    HOTELS.iter().find(|h| h.id == id)
}

pub fn hotels_by_destination(destination: &str) -> Vec<&'static Hotel> {
    HOTELS
        .iter()
        .filter(|h| h.destination.eq_ignore_ascii_case(destination))
        .collect()
}

pub fn flight_by_id(id: u32) -> Option<&'static Flight> {
    FLIGHTS.iter().find(|f| f.id == id)
}

pub fn flights_by_route(departure: &str, arrival: &str) -> Vec<&'static Flight> {
    let dep = departure.to_ascii_lowercase();
    let arr = arrival.to_ascii_lowercase();
    FLIGHTS
        .iter()
        .filter(|f| {
            f.departure.to_ascii_lowercase().contains(&dep)
                && f.arrival.to_ascii_lowercase().contains(&arr)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(destination_by_id(3).map(|d| d.name), Some("Tokyo"));
        assert_eq!(hotel_by_id(2).map(|h| h.destination), Some("Tokyo"));
        assert_eq!(flight_by_id(4).map(|f| f.airline), Some("Express Travel"));
        assert!(destination_by_id(99).is_none());
    }

    #[test]
    fn test_hotels_by_destination_is_case_insensitive() {
        let hotels = hotels_by_destination("paris");
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Luxury Palace Hotel");
    }

    #[test]
    fn test_flights_by_route_matches_substrings() {
        let flights = flights_by_route("new york", "paris");
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].id, 1);

        assert!(flights_by_route("paris", "sydney").is_empty());
    }

    #[test]
    fn test_catalog_prices_are_positive() {
        assert!(DESTINATIONS.iter().all(|d| d.price_per_person > 0));
        assert!(HOTELS.iter().all(|h| h.price_per_night > 0));
        assert!(FLIGHTS.iter().all(|f| f.price > 0));
    }
}
