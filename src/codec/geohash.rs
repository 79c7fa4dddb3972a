//! Geohash at a fixed 60-bit precision.
//!
//! ```rust
//! use nmea_geo::geohash;
//!
//! assert_eq!(geohash::encode(57.64911, 10.40744), "u4pruydqqvj8");
//!
//! let (lat, long) = geohash::decode("u4pruydqqvj8").unwrap();
//! assert!((lat - 57.64911).abs() < 1e-5);
//! assert!((long - 10.40744).abs() < 1e-5);
//! ```

use crate::{Codec, Error, Result};

const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Characters in an encoded hash.
pub const PRECISION: usize = 12;

const BITS: u32 = 5 * PRECISION as u32;

/// The geohash [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Geohash;

impl Codec for Geohash {
    const SCHEME: &'static str = "geohash";

    fn encode(latitude: f64, longitude: f64) -> String {
        encode(latitude, longitude)
    }

    fn decode(code: &str) -> Result<(f64, f64)> {
        decode(code)
    }
}

pub fn encode(latitude: f64, longitude: f64) -> String {
    let mut hash = interleave(enc_range(latitude, 90.0), enc_range(longitude, 180.0)) >> (64 - BITS);

    let mut code = [0u8; PRECISION];
    for slot in code.iter_mut().rev() {
        *slot = ALPHABET[(hash & 0x1f) as usize];
        hash >>= 5;
    }

    code.iter().map(|&b| char::from(b)).collect()
}

/// Decodes 1 to 12 characters, case-insensitive.
///
/// The result is the cell's south-west corner rounded up to the coarsest decimal
/// power not above the cell size.
pub fn decode(code: &str) -> Result<(f64, f64)> {
    if code.is_empty() || code.len() > PRECISION {
        return Err(Error::invalid_code(
            Geohash::SCHEME,
            code,
            "length must be 1 to 12 characters",
        ));
    }

    let mut hash = 0u64;
    for byte in code.bytes() {
        let value = ALPHABET
            .iter()
            .position(|&c| c == byte.to_ascii_lowercase())
            .ok_or_else(|| {
                Error::invalid_code(Geohash::SCHEME, code, "character outside the base-32 alphabet")
            })?;
        hash = (hash << 5) | value as u64;
    }

    Ok(Cell::from_hash(hash, 5 * code.len() as u32).round())
}

/// `code@altitude`, altitude in shortest decimal form.
pub fn encode_3d(latitude: f64, longitude: f64, altitude: f64) -> String {
    Geohash::encode_3d(latitude, longitude, altitude)
}

pub fn decode_3d(code: &str) -> Result<(f64, f64, f64)> {
    Geohash::decode_3d(code)
}

struct Cell {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl Cell {
    fn from_hash(hash: u64, bits: u32) -> Self {
        let (latitude, longitude) = deinterleave(hash << (64 - bits));
        let latitude = dec_range(latitude, 90.0);
        let longitude = dec_range(longitude, 180.0);

        let latitude_error = 180.0 * 2f64.powi(-((bits / 2) as i32));
        let longitude_error = 360.0 * 2f64.powi(-((bits - bits / 2) as i32));

        Self {
            min_latitude: latitude,
            max_latitude: latitude + latitude_error,
            min_longitude: longitude,
            max_longitude: longitude + longitude_error,
        }
    }

    fn round(&self) -> (f64, f64) {
        let x = max_decimal_power(self.max_latitude - self.min_latitude);
        let y = max_decimal_power(self.max_longitude - self.min_longitude);

        (
            (self.min_latitude / x).ceil() * x,
            (self.min_longitude / y).ceil() * y,
        )
    }
}

fn max_decimal_power(r: f64) -> f64 {
    let exponent = r.log10().floor() as i32;
    if exponent < 0 {
        1.0 / 10f64.powi(-exponent)
    } else {
        10f64.powi(exponent)
    }
}

/// Maps `x` in `[-r, r]` onto `[0, 2^32)`, saturating at the ends.
fn enc_range(x: f64, r: f64) -> u32 {
    ((x + r) / (2.0 * r) * 2f64.powi(32)) as u32
}

fn dec_range(x: u32, r: f64) -> f64 {
    2.0 * r * f64::from(x) / 2f64.powi(32) - r
}

/// Longitude bits land directly above the matching latitude bits.
fn interleave(latitude: u32, longitude: u32) -> u64 {
    spread(latitude) | (spread(longitude) << 1)
}

fn deinterleave(x: u64) -> (u32, u32) {
    (squash(x), squash(x >> 1))
}

fn spread(x: u32) -> u64 {
    let mut x = u64::from(x);
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

fn squash(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
    x as u32
}
