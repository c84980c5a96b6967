//! Precision-5 encoded polyline codec.
//!
//! Each coordinate is stored as the difference from the previous one,
//! scaled by 1e5, zig-zag folded and written as 5-bit chunks offset by 63.

use crate::error::NavError;
use crate::geo::Coordinate;

const PRECISION: f64 = 1e5;
const CHUNK_BITS: u32 = 5;
const CONTINUATION: i64 = 0x20;
const OFFSET: u8 = 63;

type Result<T> = std::result::Result<T, NavError>;

/// Decode an encoded polyline string into coordinates.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat = accumulate(lat, decode_value(bytes, &mut index)?, index)?;
        lng = accumulate(lng, decode_value(bytes, &mut index)?, index)?;
        coords.push(Coordinate::new(
            lat as f64 / PRECISION,
            lng as f64 / PRECISION,
        ));
    }

    Ok(coords)
}

/// Encode coordinates as a polyline string. Values are rounded to 1e-5 degrees.
///
/// Fails with `InvalidCoordinate` for a non-finite latitude or longitude, or
/// one outside `[-90, 90]` / `[-180, 180]`.
pub fn encode(coords: &[Coordinate]) -> Result<String> {
    let mut out = String::with_capacity(coords.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for (index, c) in coords.iter().enumerate() {
        if !c.is_finite() || c.latitude.abs() > 90.0 || c.longitude.abs() > 180.0 {
            return Err(NavError::InvalidCoordinate { index });
        }
        // Bounded by the range check above, so the casts and deltas cannot overflow.
        let lat = (c.latitude * PRECISION).round() as i64;
        let lng = (c.longitude * PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(out)
}

/// Add a decoded delta to a running coordinate sum.
fn accumulate(sum: i64, delta: i64, offset: usize) -> Result<i64> {
    sum.checked_add(delta).ok_or(NavError::Decode {
        step: None,
        offset,
        reason: "value overflow",
    })
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(NavError::Decode {
                step: None,
                offset: *index,
                reason: "unterminated value",
            });
        };
        if !(OFFSET..=OFFSET + 0x3f).contains(&byte) {
            return Err(NavError::Decode {
                step: None,
                offset: *index,
                reason: "invalid character",
            });
        }
        if shift >= 60 {
            return Err(NavError::Decode {
                step: None,
                offset: *index,
                reason: "value overflow",
            });
        }

        let chunk = i64::from(byte - OFFSET);
        *index += 1;
        result |= (chunk & 0x1f) << shift;
        shift += CHUNK_BITS;

        if chunk < CONTINUATION {
            break;
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

fn encode_value(delta: i64, out: &mut String) {
    let mut v = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while v >= CONTINUATION {
        out.push(char::from((CONTINUATION | (v & 0x1f)) as u8 + OFFSET));
        v >>= CHUNK_BITS;
    }
    out.push(char::from(v as u8 + OFFSET));
}
