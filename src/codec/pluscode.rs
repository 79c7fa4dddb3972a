//! Open Location Code ("plus code") with a fixed 15-digit length.
//!
//! The first ten digits are five latitude/longitude pairs in base 20, the last five
//! refine a 4 × 5 grid. A `+` follows the eighth digit.
//!
//! ```rust
//! use nmea_geo::pluscode;
//!
//! let code = pluscode::encode(20.375, 2.775);
//! assert_eq!(code, "7FG49QGG+2222222");
//! assert!(pluscode::validate_full(&code).is_ok());
//!
//! let (lat, long) = pluscode::decode(&code).unwrap();
//! assert!((lat - 20.375).abs() < 1e-6);
//! assert!((long - 2.775).abs() < 1e-6);
//! ```

use crate::{Codec, Error, Result};

const ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";
const ENCODING_BASE: i64 = 20;

const SEPARATOR: char = '+';
const SEPARATOR_POSITION: usize = 8;
const PADDING: char = '0';

/// Significant digits in an encoded code.
pub const MAX_CODE_LENGTH: usize = 15;
const PAIR_CODE_LENGTH: usize = 10;

const GRID_COLUMNS: i64 = 4;
const GRID_ROWS: i64 = 5;

const PAIR_FIRST_PLACE_VALUE: i64 = 160_000;
const PAIR_PRECISION: i64 = 8_000;
const GRID_LAT_FULL_VALUE: i64 = 3_125;
const GRID_LONG_FULL_VALUE: i64 = 1_024;
const GRID_LAT_FIRST_PLACE_VALUE: i64 = GRID_LAT_FULL_VALUE / GRID_ROWS;
const GRID_LONG_FIRST_PLACE_VALUE: i64 = GRID_LONG_FULL_VALUE / GRID_COLUMNS;
const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * GRID_LAT_FULL_VALUE;
const FINAL_LONG_PRECISION: i64 = PAIR_PRECISION * GRID_LONG_FULL_VALUE;

const LATITUDE_MAX: f64 = 90.0;
const LONGITUDE_MAX: f64 = 180.0;

/// The plus code [`Codec`]; altitudes are rendered with two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pluscode;

impl Codec for Pluscode {
    const SCHEME: &'static str = "pluscode";

    fn encode(latitude: f64, longitude: f64) -> String {
        encode(latitude, longitude)
    }

    fn decode(code: &str) -> Result<(f64, f64)> {
        decode(code)
    }

    fn format_altitude(altitude: f64) -> String {
        format!("{altitude:.2}")
    }
}

fn invalid(code: &str, reason: &'static str) -> Error {
    Error::invalid_code(Pluscode::SCHEME, code, reason)
}

pub fn encode(latitude: f64, longitude: f64) -> String {
    encode_with_length(latitude, longitude, MAX_CODE_LENGTH)
}

/// Encodes with `code_length` significant digits.
///
/// `0` means 10; other lengths are clamped to 2..=15 and odd lengths below 10 are
/// rounded up. Codes shorter than 8 digits are padded with `0` up to the separator.
///
/// ```rust
/// use nmea_geo::pluscode;
///
/// assert_eq!(pluscode::encode_with_length(20.375, 2.775, 10), "7FG49QGG+22");
/// assert_eq!(pluscode::encode_with_length(20.375, 2.775, 4), "7FG40000+");
/// ```
pub fn encode_with_length(latitude: f64, longitude: f64, code_length: usize) -> String {
    let code_length = match code_length {
        0 => PAIR_CODE_LENGTH,
        1 => 2,
        n if n < PAIR_CODE_LENGTH && n % 2 == 1 => n + 1,
        n => n.min(MAX_CODE_LENGTH),
    };

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    if latitude == LATITUDE_MAX {
        latitude -= latitude_precision(code_length);
    }

    let mut lat_val = scale(latitude + LATITUDE_MAX, FINAL_LAT_PRECISION);
    let mut long_val = scale(longitude + LONGITUDE_MAX, FINAL_LONG_PRECISION);

    let mut code = [b'2'; MAX_CODE_LENGTH];
    if code_length > PAIR_CODE_LENGTH {
        for slot in code[PAIR_CODE_LENGTH..].iter_mut().rev() {
            let row = lat_val % GRID_ROWS;
            let column = long_val % GRID_COLUMNS;
            *slot = ALPHABET[(row * GRID_COLUMNS + column) as usize];
            lat_val /= GRID_ROWS;
            long_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_LAT_FULL_VALUE;
        long_val /= GRID_LONG_FULL_VALUE;
    }

    for pair in code[..PAIR_CODE_LENGTH].chunks_exact_mut(2).rev() {
        pair[0] = ALPHABET[(lat_val % ENCODING_BASE) as usize];
        pair[1] = ALPHABET[(long_val % ENCODING_BASE) as usize];
        lat_val /= ENCODING_BASE;
        long_val /= ENCODING_BASE;
    }

    let digits: String = code[..code_length].iter().map(|&b| char::from(b)).collect();
    if code_length >= SEPARATOR_POSITION {
        let (head, tail) = digits.split_at(SEPARATOR_POSITION);
        format!("{head}{SEPARATOR}{tail}")
    } else {
        let padding = PADDING.to_string().repeat(SEPARATOR_POSITION - code_length);
        format!("{digits}{padding}{SEPARATOR}")
    }
}

/// Decodes a full code to the center of its cell.
pub fn decode(code: &str) -> Result<(f64, f64)> {
    Ok(CodeArea::decode(code)?.center())
}

/// `code@altitude`, altitude with two decimals.
pub fn encode_3d(latitude: f64, longitude: f64, altitude: f64) -> String {
    Pluscode::encode_3d(latitude, longitude, altitude)
}

pub fn decode_3d(code: &str) -> Result<(f64, f64, f64)> {
    Pluscode::decode_3d(code)
}

/// Checks the shape of a full or short code.
///
/// Accepts alphabet characters in either case, `0` padding and one `+` separator at an
/// even offset no later than 8. Padding may not lead, must come in an even count right
/// before the separator, and only in codes whose separator sits at offset 8. Exactly one
/// character after the separator is rejected.
pub fn validate(code: &str) -> Result<()> {
    let n = code.len();
    if code.is_empty() || code == "+" {
        return Err(invalid(code, "empty code"));
    }

    let mut first_separator = None;
    let mut first_padding = None;

    for (i, c) in code.char_indices() {
        if first_padding.is_some() {
            match c {
                PADDING => continue,
                SEPARATOR if first_separator.is_some() => {
                    return Err(invalid(code, "extraneous separator"));
                }
                SEPARATOR if i > SEPARATOR_POSITION || i % 2 == 1 => {
                    return Err(invalid(code, "separator in illegal position"));
                }
                SEPARATOR if i == n - 1 => {
                    first_separator = Some(i);
                    continue;
                }
                _ => {}
            }
            return Err(invalid(code, "only padding and a final separator may follow padding"));
        }

        match c {
            c if is_code_char(c) => {}
            SEPARATOR => {
                if first_separator.is_some() {
                    return Err(invalid(code, "extra separator"));
                }
                if i > SEPARATOR_POSITION || i % 2 == 1 {
                    return Err(invalid(code, "separator in illegal position"));
                }
                first_separator = Some(i);
            }
            PADDING => {
                if i == 0 {
                    return Err(invalid(code, "code starts with padding"));
                }
                first_padding = Some(i);
            }
            _ => return Err(invalid(code, "invalid character")),
        }
    }

    let Some(separator) = first_separator else {
        return Err(invalid(code, "missing separator"));
    };

    if n - separator - 1 == 1 {
        return Err(invalid(code, "only one character after separator"));
    }

    if let Some(padding) = first_padding {
        if separator < SEPARATOR_POSITION {
            return Err(invalid(code, "short codes cannot have padding"));
        }
        if (n - padding - 1) % 2 == 1 {
            return Err(invalid(code, "odd number of padding characters"));
        }
    }

    Ok(())
}

/// [`validate`], plus: the separator sits at offset 8 and the leading latitude and
/// longitude digits are in range.
pub fn validate_full(code: &str) -> Result<()> {
    validate(code)?;

    if code.find(SEPARATOR) != Some(SEPARATOR_POSITION) {
        return Err(invalid(code, "not a full code"));
    }

    let bytes = code.as_bytes();
    if digit_value(bytes[0]) * ENCODING_BASE >= 2 * LATITUDE_MAX as i64 {
        return Err(invalid(code, "latitude outside range"));
    }
    if digit_value(bytes[1]) * ENCODING_BASE >= 2 * LONGITUDE_MAX as i64 {
        return Err(invalid(code, "longitude outside range"));
    }

    Ok(())
}

fn is_code_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8).to_ascii_uppercase())
}

fn digit_value(b: u8) -> i64 {
    let b = b.to_ascii_uppercase();
    ALPHABET.iter().position(|&c| c == b).map_or(0, |i| i as i64)
}

fn scale(value: f64, precision: i64) -> i64 {
    ((value * precision as f64 * 1e6).round() / 1e6) as i64
}

fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Wraps into `[-180, 180)`.
fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid rounds up to 360 just below a multiple of it
    if wrapped >= LONGITUDE_MAX {
        wrapped - 2.0 * LONGITUDE_MAX
    } else {
        wrapped
    }
}

/// Height in degrees of a cell of `code_length` digits.
fn latitude_precision(code_length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        base.powi(code_length as i32 / -2 + 2)
    } else {
        base.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
    }
}

#[derive(Debug)]
struct CodeArea {
    lat_lo: f64,
    long_lo: f64,
    lat_hi: f64,
    long_hi: f64,
}

impl CodeArea {
    fn decode(code: &str) -> Result<Self> {
        validate_full(code)?;

        let digits: Vec<i64> = code
            .bytes()
            .filter(|&b| b != SEPARATOR as u8 && b != PADDING as u8)
            .take(MAX_CODE_LENGTH)
            .map(digit_value)
            .collect();

        let len = digits.len();
        if len < 2 {
            return Err(invalid(code, "code too short"));
        }

        let mut normal_lat = -(LATITUDE_MAX as i64) * PAIR_PRECISION;
        let mut normal_long = -(LONGITUDE_MAX as i64) * PAIR_PRECISION;
        let mut place_value = PAIR_FIRST_PLACE_VALUE;

        let pair_digits = len.min(PAIR_CODE_LENGTH);
        let mut i = 0;
        while i + 1 < pair_digits {
            normal_lat += digits[i] * place_value;
            normal_long += digits[i + 1] * place_value;
            if i + 2 < pair_digits {
                place_value /= ENCODING_BASE;
            }
            i += 2;
        }

        let mut lat_precision = place_value as f64 / PAIR_PRECISION as f64;
        let mut long_precision = lat_precision;

        let mut extra_lat = 0;
        let mut extra_long = 0;
        if len > PAIR_CODE_LENGTH {
            let mut row_place_value = GRID_LAT_FIRST_PLACE_VALUE;
            let mut column_place_value = GRID_LONG_FIRST_PLACE_VALUE;

            for (i, &value) in digits.iter().enumerate().skip(PAIR_CODE_LENGTH) {
                extra_lat += value / GRID_COLUMNS * row_place_value;
                extra_long += value % GRID_COLUMNS * column_place_value;
                if i + 1 < len {
                    row_place_value /= GRID_ROWS;
                    column_place_value /= GRID_COLUMNS;
                }
            }

            lat_precision = row_place_value as f64 / FINAL_LAT_PRECISION as f64;
            long_precision = column_place_value as f64 / FINAL_LONG_PRECISION as f64;
        }

        let lat = normal_lat as f64 / PAIR_PRECISION as f64
            + extra_lat as f64 / FINAL_LAT_PRECISION as f64;
        let long = normal_long as f64 / PAIR_PRECISION as f64
            + extra_long as f64 / FINAL_LONG_PRECISION as f64;

        Ok(Self {
            lat_lo: round_14(lat),
            long_lo: round_14(long),
            lat_hi: round_14(lat + lat_precision),
            long_hi: round_14(long + long_precision),
        })
    }

    fn center(&self) -> (f64, f64) {
        (
            (self.lat_lo + (self.lat_hi - self.lat_lo) / 2.0).min(LATITUDE_MAX),
            (self.long_lo + (self.long_hi - self.long_lo) / 2.0).min(LONGITUDE_MAX),
        )
    }
}

fn round_14(value: f64) -> f64 {
    (value * 1e14).round() / 1e14
}
