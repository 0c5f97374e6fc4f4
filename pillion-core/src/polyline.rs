//! Encoded polyline codec.
//!
//! Google's Directions API returns route geometry as an encoded
//! polyline: consecutive `(lat, lon)` points are delta-encoded at a
//! fixed-point scale of 1e-5, each delta is zigzag-folded (one's
//! complement for negative values) and written as base-63-offset
//! five-bit groups with a continuation bit.
//!
//! See: <https://developers.google.com/maps/documentation/utilities/polylinealgorithm>
//!
//! Decoded coordinates follow the crate convention of `x = lon`,
//! `y = lat`; note the encoding itself stores latitude first.

use geo::Coord;
use thiserror::Error;

/// Fixed-point scale used by the encoding.
const SCALE: f64 = 1e5;

/// Errors produced while decoding an encoded polyline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PolylineError {
    /// A byte outside the valid encoding alphabet was encountered.
    #[error("invalid polyline character {byte:#04x} at offset {offset}")]
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// Byte offset into the encoded string.
        offset: usize,
    },
    /// The input ended in the middle of a varint group.
    #[error("polyline truncated at offset {offset}")]
    Truncated {
        /// Byte offset where more input was expected.
        offset: usize,
    },
    /// A varint group carried more continuation bytes than any encoded
    /// value can need.
    #[error("polyline value overflows at offset {offset}")]
    Overflow {
        /// Byte offset of the overlong group.
        offset: usize,
    },
}

/// Decode an encoded polyline into a coordinate sequence.
///
/// # Errors
///
/// Returns [`PolylineError`] when the input contains bytes outside the
/// encoding alphabet, ends mid-value, or carries a value group with
/// more continuation bytes than a 64-bit value can hold.
///
/// # Examples
/// ```
/// use pillion_core::polyline;
///
/// let coords = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@")?;
/// assert_eq!(coords.len(), 3);
/// assert!((coords[0].y - 38.5).abs() < 1e-5);
/// assert!((coords[0].x - -120.2).abs() < 1e-5);
/// # Ok::<(), polyline::PolylineError>(())
/// ```
pub fn decode(encoded: &str) -> Result<Vec<Coord<f64>>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::new();
    let mut offset = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;

    while offset < bytes.len() {
        let (dlat, next) = decode_value(bytes, offset)?;
        let (dlon, after) = decode_value(bytes, next)?;
        lat += dlat;
        lon += dlon;
        offset = after;
        coords.push(Coord {
            x: lon as f64 / SCALE,
            y: lat as f64 / SCALE,
        });
    }

    Ok(coords)
}

/// Encode a coordinate sequence as an encoded polyline.
///
/// Coordinates are rounded to the encoding's 1e-5 precision, so
/// `decode(encode(coords))` reproduces the input within that tolerance.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pillion_core::polyline;
///
/// let coords = vec![
///     Coord { x: -120.2, y: 38.5 },
///     Coord { x: -120.95, y: 40.7 },
///     Coord { x: -126.453, y: 43.252 },
/// ];
/// assert_eq!(polyline::encode(&coords), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
#[must_use]
pub fn encode(coords: &[Coord<f64>]) -> String {
    let mut out = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for coord in coords {
        let lat = (coord.y * SCALE).round() as i64;
        let lon = (coord.x * SCALE).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

/// Decode a single zigzag-folded varint starting at `offset`.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut offset = start;
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(offset) else {
            return Err(PolylineError::Truncated { offset });
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { byte, offset });
        }
        if shift >= i64::BITS {
            return Err(PolylineError::Overflow { offset: start });
        }
        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        offset += 1;
        if chunk < 0x20 {
            break;
        }
    }

    // Sign folding: odd values are one's-complemented negatives.
    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok((value, offset))
}

/// Append a single zigzag-folded varint to `out`.
fn encode_value(value: i64, out: &mut String) {
    let mut folded = if value < 0 { !(value << 1) } else { value << 1 };
    while folded >= 0x20 {
        out.push(char::from(((folded & 0x1f) | 0x20) as u8 + 63));
        folded >>= 5;
    }
    out.push(char::from(folded as u8 + 63));
}
