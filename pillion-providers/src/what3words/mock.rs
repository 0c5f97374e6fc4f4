//! Static mock three-word addresses.
//!
//! Real what3words addresses for five Indian metros, used whenever the
//! live API is unavailable. Free-tier keys for this vendor are heavily
//! quota-limited, so in practice demo deployments run entirely on this
//! table.

use geo::Coord;
use pillion_core::{words, ThreeWordAddress};

/// Suggestions returned for a matching query.
const SUGGESTION_LIMIT: usize = 3;

/// Sample size for queries with no table match.
const SAMPLE_SIZE: usize = 2;

struct MockAddress {
    words: &'static str,
    lat: f64,
    lon: f64,
    nearest_place: &'static str,
}

const ADDRESSES: &[MockAddress] = &[
    MockAddress {
        words: "chilly.bunches.grumble",
        lat: 28.637_248,
        lon: 77.220_724,
        nearest_place: "New Delhi, India",
    },
    MockAddress {
        words: "organs.slows.among",
        lat: 18.967_712,
        lon: 72.807_673,
        nearest_place: "Mumbai, India",
    },
    MockAddress {
        words: "reform.wired.plumes",
        lat: 12.977_063,
        lon: 77.587_107,
        nearest_place: "Bangalore, India",
    },
    MockAddress {
        words: "earns.mount.unheard",
        lat: 22.569_531,
        lon: 88.369_881,
        nearest_place: "Kolkata, India",
    },
    MockAddress {
        words: "hobby.thin.bump",
        lat: 13.084_622,
        lon: 80.248_357,
        nearest_place: "Chennai, India",
    },
];

fn to_address(entry: &MockAddress) -> ThreeWordAddress {
    ThreeWordAddress::new(
        entry.words,
        Coord {
            x: entry.lon,
            y: entry.lat,
        },
        entry.nearest_place,
    )
}

/// Filter the table by per-word prefix match against a typed query.
///
/// A query with no match still yields a small sample so the demo UI
/// shows the suggestion flow. Callers have already verified that the
/// third word has started.
pub(super) fn filter_suggestions(query: &str) -> Vec<ThreeWordAddress> {
    let matched: Vec<ThreeWordAddress> = ADDRESSES
        .iter()
        .filter(|entry| words::matches_word_prefixes(entry.words, query))
        .take(SUGGESTION_LIMIT)
        .map(to_address)
        .collect();

    if matched.is_empty() {
        ADDRESSES.iter().take(SAMPLE_SIZE).map(to_address).collect()
    } else {
        matched
    }
}

/// Look up an exact three-word address, falling back to a fixed default
/// location so conversion always produces coordinates.
pub(super) fn convert_fallback(cleaned: &str) -> ThreeWordAddress {
    ADDRESSES
        .iter()
        .find(|entry| entry.words == cleaned)
        .map(to_address)
        .unwrap_or_else(|| {
            // New Delhi, same default as the table's first entry.
            ThreeWordAddress::new(
                cleaned,
                Coord {
                    x: 77.220_724,
                    y: 28.637_248,
                },
                "New Delhi, India",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn exact_words_match_one_entry() {
        let results = filter_suggestions("chilly.bunches.grumble");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nearest_place, "New Delhi, India");
    }

    #[rstest]
    fn prefix_typing_matches() {
        let results = filter_suggestions("hobby.thin.b");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].words, "hobby.thin.bump");
    }

    #[rstest]
    fn unmatched_query_returns_a_sample() {
        let results = filter_suggestions("zebra.quark.nimbus");
        assert_eq!(results.len(), SAMPLE_SIZE);
    }

    #[rstest]
    fn convert_finds_known_words() {
        let address = convert_fallback("organs.slows.among");
        assert_eq!(address.nearest_place, "Mumbai, India");
        assert!((address.coordinates.y - 18.967_712).abs() < 1e-9);
    }

    #[rstest]
    fn convert_defaults_unknown_words_to_delhi() {
        let address = convert_fallback("zebra.quark.nimbus");
        assert_eq!(address.words, "zebra.quark.nimbus");
        assert_eq!(address.nearest_place, "New Delhi, India");
        assert_eq!(address.map_url, "https://w3w.co/zebra.quark.nimbus");
    }
}
