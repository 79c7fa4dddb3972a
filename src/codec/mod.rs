//! # Location codes
//!
//! Three text encodings of a latitude/longitude pair:
//!
//! - [`geohash`]: 12 base-32 characters, about 0.2 m cells
//! - [`pluscode`]: 15-digit Open Location Code with a `+` after the 8th digit
//! - [`zlatlong`]: compact variable-length token at 1e-5° resolution
//!
//! Each also has a 3-D form `<code>@<altitude>`.
//!
//! ```rust
//! use nmea_geo::{Codec, Coordinate, codec::Zlatlong};
//!
//! let here = Coordinate::new(51.5, -0.12).with_altitude(35.0);
//! let code = Zlatlong::encode_coordinate(&here);
//! assert_eq!(code, "wi6_hwgvwB@35");
//! assert_eq!(Zlatlong::decode_coordinate(&code).unwrap(), here);
//! ```

pub mod geohash;
pub mod pluscode;
pub mod zlatlong;

pub use geohash::Geohash;
pub use pluscode::Pluscode;
pub use zlatlong::Zlatlong;

use crate::{Error, Result};

/// Separates a 2-D code from its altitude.
pub const ALTITUDE_SEPARATOR: char = '@';

/// A position in decimal degrees, with optional altitude in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub fn with_altitude(self, altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            ..self
        }
    }
}

/// A reversible text encoding of a coordinate.
pub trait Codec {
    /// Name used in [`Error::InvalidCode`].
    const SCHEME: &'static str;

    fn encode(latitude: f64, longitude: f64) -> String;

    fn decode(code: &str) -> Result<(f64, f64)>;

    /// Renders the altitude part of a 3-D code.
    fn format_altitude(altitude: f64) -> String {
        altitude.to_string()
    }

    fn encode_3d(latitude: f64, longitude: f64, altitude: f64) -> String {
        format!(
            "{}{ALTITUDE_SEPARATOR}{}",
            Self::encode(latitude, longitude),
            Self::format_altitude(altitude)
        )
    }

    fn decode_3d(code: &str) -> Result<(f64, f64, f64)> {
        let (code_2d, altitude) = split_altitude(Self::SCHEME, code)?;
        let (latitude, longitude) = Self::decode(code_2d)?;
        Ok((latitude, longitude, altitude))
    }

    /// 3-D when the coordinate has an altitude, 2-D otherwise.
    fn encode_coordinate(coordinate: &Coordinate) -> String {
        match coordinate.altitude {
            Some(altitude) => Self::encode_3d(coordinate.latitude, coordinate.longitude, altitude),
            None => Self::encode(coordinate.latitude, coordinate.longitude),
        }
    }

    /// 3-D when `code` contains the altitude separator, 2-D otherwise.
    fn decode_coordinate(code: &str) -> Result<Coordinate> {
        if code.contains(ALTITUDE_SEPARATOR) {
            let (latitude, longitude, altitude) = Self::decode_3d(code)?;
            Ok(Coordinate::new(latitude, longitude).with_altitude(altitude))
        } else {
            let (latitude, longitude) = Self::decode(code)?;
            Ok(Coordinate::new(latitude, longitude))
        }
    }
}

/// Splits `<code>@<altitude>`.
fn split_altitude<'a>(scheme: &'static str, code: &'a str) -> Result<(&'a str, f64)> {
    let mut parts = code.split(ALTITUDE_SEPARATOR);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(code_2d), Some(altitude), None) => {
            let altitude = altitude
                .parse()
                .map_err(|_| Error::invalid_code(scheme, code, "altitude is not a number"))?;
            Ok((code_2d, altitude))
        }
        _ => Err(Error::invalid_code(
            scheme,
            code,
            "expected exactly one altitude separator",
        )),
    }
}
