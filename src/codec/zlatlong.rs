//! Compact single-point coordinate tokens at 1e-5° resolution.
//!
//! Both coordinates are scaled to integers, zig-zag mapped to unsigned, and folded into
//! one integer with the Cantor pairing function. That integer is written in 5-bit units,
//! least significant first, over a URL-safe alphabet; the sixth bit of a unit marks that
//! more units follow.

use crate::{Codec, Error, Result};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

const SCALE: f64 = 100_000.0;

const CONTINUATION: u64 = 32;

/// The zlatlong [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Zlatlong;

impl Codec for Zlatlong {
    const SCHEME: &'static str = "zlatlong";

    fn encode(latitude: f64, longitude: f64) -> String {
        encode(latitude, longitude)
    }

    fn decode(code: &str) -> Result<(f64, f64)> {
        decode(code)
    }
}

fn invalid(code: &str, reason: &'static str) -> Error {
    Error::invalid_code(Zlatlong::SCHEME, code, reason)
}

/// Encodes one point; inputs are clamped to ±90° and ±180°.
///
/// ```rust
/// use nmea_geo::zlatlong;
///
/// assert_eq!(zlatlong::encode(51.5, -0.12), "wi6_hwgvwB");
/// assert_eq!(zlatlong::encode(0.0, 0.0), "A");
/// ```
pub fn encode(latitude: f64, longitude: f64) -> String {
    let dy = zigzag((latitude.clamp(-90.0, 90.0) * SCALE).round() as i64);
    let dx = zigzag((longitude.clamp(-180.0, 180.0) * SCALE).round() as i64);

    let mut index = triangular(dy + dx) + dy;

    let mut code = String::new();
    loop {
        let mut unit = index & 31;
        index >>= 5;
        if index > 0 {
            unit |= CONTINUATION;
        }
        code.push(char::from(ALPHABET[unit as usize]));

        if index == 0 {
            return code;
        }
    }
}

/// Decodes exactly one point.
///
/// ```rust
/// use nmea_geo::zlatlong;
///
/// assert_eq!(zlatlong::decode("wi6_hwgvwB").unwrap(), (51.5, -0.12));
/// assert!(zlatlong::decode("wi6_hwgvwBA").is_err());
/// ```
pub fn decode(code: &str) -> Result<(f64, f64)> {
    let mut n = 0u64;
    let mut shift = 0u32;
    let mut end = None;

    for (i, byte) in code.bytes().enumerate() {
        let unit = ALPHABET
            .iter()
            .position(|&c| c == byte)
            .ok_or_else(|| invalid(code, "character outside the alphabet"))? as u64;

        let bits = unit & 31;
        if shift >= 64 || bits > u64::MAX >> shift {
            return Err(invalid(code, "value exceeds 64 bits"));
        }
        n |= bits << shift;
        shift += 5;

        if unit < CONTINUATION {
            end = Some(i + 1);
            break;
        }
    }

    match end {
        None => Err(invalid(code, "no terminating character")),
        Some(end) if end < code.len() => Err(invalid(code, "more than one data point")),
        Some(_) => {
            let (ny, nx) = unpair(n);
            Ok((
                unzigzag(ny) as f64 / SCALE,
                unzigzag(nx) as f64 / SCALE,
            ))
        }
    }
}

/// `code@altitude`, altitude in shortest decimal form.
pub fn encode_3d(latitude: f64, longitude: f64, altitude: f64) -> String {
    Zlatlong::encode_3d(latitude, longitude, altitude)
}

pub fn decode_3d(code: &str) -> Result<(f64, f64, f64)> {
    Zlatlong::decode_3d(code)
}

fn zigzag(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

fn unzigzag(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}

fn triangular(d: u64) -> u64 {
    d * (d + 1) / 2
}

/// Inverse of `triangular(y + x) + y`.
fn unpair(n: u64) -> (u64, u64) {
    let wide = |d: u64| u128::from(d) * (u128::from(d) + 1) / 2;

    let mut diagonal = (((8.0 * n as f64 + 5.0).sqrt() - 1.0) / 2.0) as u64;
    while diagonal > 0 && wide(diagonal) > u128::from(n) {
        diagonal -= 1;
    }
    while wide(diagonal + 1) <= u128::from(n) {
        diagonal += 1;
    }

    let y = n - wide(diagonal) as u64;
    (y, diagonal - y)
}
