//! Static mock place data.
//!
//! Served by the place-search adapters when no API key is configured,
//! so the app demonstrates end to end without vendor credentials. The
//! entries are well-known Indian landmarks matching the app's fixed
//! country filter.

use geo::Coord;
use pillion_core::{SearchResult, SearchResultKind, MAX_RESULTS};

struct MockPlace {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    lon: f64,
    lat: f64,
    poi: bool,
}

const PLACES: &[MockPlace] = &[
    MockPlace {
        id: "mock-taj-mahal",
        name: "Taj Mahal",
        address: "Dharmapuri, Forest Colony, Tajganj, Agra, Uttar Pradesh",
        lon: 78.0421,
        lat: 27.1751,
        poi: true,
    },
    MockPlace {
        id: "mock-india-gate",
        name: "India Gate",
        address: "Kartavya Path, India Gate, New Delhi, Delhi",
        lon: 77.2295,
        lat: 28.6129,
        poi: true,
    },
    MockPlace {
        id: "mock-gateway-of-india",
        name: "Gateway of India",
        address: "Apollo Bandar, Colaba, Mumbai, Maharashtra",
        lon: 72.8347,
        lat: 18.922,
        poi: true,
    },
    MockPlace {
        id: "mock-charminar",
        name: "Charminar",
        address: "Char Kaman, Ghansi Bazaar, Hyderabad, Telangana",
        lon: 78.4747,
        lat: 17.3616,
        poi: true,
    },
    MockPlace {
        id: "mock-hawa-mahal",
        name: "Hawa Mahal",
        address: "Hawa Mahal Road, Badi Choupad, Jaipur, Rajasthan",
        lon: 75.8267,
        lat: 26.9239,
        poi: true,
    },
    MockPlace {
        id: "mock-qutub-minar",
        name: "Qutub Minar",
        address: "Seth Sarai, Mehrauli, New Delhi, Delhi",
        lon: 77.1855,
        lat: 28.5245,
        poi: true,
    },
    MockPlace {
        id: "mock-marine-drive",
        name: "Marine Drive",
        address: "Netaji Subhash Chandra Bose Road, Mumbai, Maharashtra",
        lon: 72.8231,
        lat: 18.943,
        poi: false,
    },
    MockPlace {
        id: "mock-mg-road-bangalore",
        name: "MG Road",
        address: "Mahatma Gandhi Road, Bengaluru, Karnataka",
        lon: 77.6081,
        lat: 12.9757,
        poi: false,
    },
];

/// Filter the mock table by case-insensitive substring match against
/// name or address.
///
/// # Examples
/// ```
/// let results = pillion_providers::mock::search_places("taj");
/// assert_eq!(results[0].name, "Taj Mahal");
/// ```
#[must_use]
pub fn search_places(query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    PLACES
        .iter()
        .filter(|place| {
            place.name.to_lowercase().contains(&needle)
                || place.address.to_lowercase().contains(&needle)
        })
        .take(MAX_RESULTS)
        .map(to_search_result)
        .collect()
}

fn to_search_result(place: &MockPlace) -> SearchResult {
    SearchResult {
        id: place.id.to_owned(),
        name: place.name.to_owned(),
        address: place.address.to_owned(),
        coordinates: Coord {
            x: place.lon,
            y: place.lat,
        },
        kind: if place.poi {
            SearchResultKind::PointOfInterest
        } else {
            SearchResultKind::Address
        },
    }
}
