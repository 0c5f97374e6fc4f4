//! Property-based tests for the encoded polyline codec.
//!
//! The codec must round-trip against the vendor's reference encoding
//! for all valid inputs: encoding a coordinate sequence and decoding it
//! back reproduces the original within the 1e-5 fixed-point tolerance.

use geo::Coord;
use proptest::prelude::*;

use pillion_core::polyline;

/// Strategy for coordinates within valid lon/lat ranges.
fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-180.0f64..=180.0, -90.0f64..=90.0).prop_map(|(x, y)| Coord { x, y })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: decode(encode(coords)) reproduces the input within
    /// the encoding's 1e-5 precision.
    #[test]
    fn encode_decode_round_trips(
        coords in proptest::collection::vec(coord_strategy(), 0..64),
    ) {
        let encoded = polyline::encode(&coords);
        let decoded = polyline::decode(&encoded).expect("encoded output must decode");

        prop_assert_eq!(decoded.len(), coords.len());
        for (got, want) in decoded.iter().zip(&coords) {
            // Half an encoding unit plus float slack.
            prop_assert!(
                (got.x - want.x).abs() <= 5.1e-6 && (got.y - want.y).abs() <= 5.1e-6,
                "decoded {:?} too far from original {:?}",
                got,
                want
            );
        }
    }

    /// Property: decoding never panics on arbitrary input; it either
    /// yields coordinates or a structured error.
    #[test]
    fn decode_is_total(input in "\\PC*") {
        let _ = polyline::decode(&input);
    }
}
