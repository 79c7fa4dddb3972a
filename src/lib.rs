//! # NMEA 0183 decoding and location codes
//!
//! This library turns NMEA 0183 text lines into typed records and converts coordinates
//! to and from compact text codes.
//!
//! Decoding runs in two stages:
//! - the frame validator ([`RawFrame::parse`]) checks the `$TTSSS,D1,...,Dn*CC` shape,
//!   an optional `\...\` tag block and the checksum
//! - a decoder picked by sentence type reads the fields through a [`FieldParser`] and
//!   builds a [`Record`]
//!
//! Built-in decoders cover RMC, GGA, GSA, GSV, GNS, VTG and VDM/VDO; more can be
//! registered at runtime with [`register_decoder`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea_geo::{Record, decode, geohash};
//!
//! let record = decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")?;
//! if let Record::RMC(rmc) = record {
//!     assert_eq!(rmc.variation, -3.1);
//!     assert_eq!(geohash::encode(rmc.latitude, rmc.longitude).len(), 12);
//! }
//! # Ok::<(), nmea_geo::Error>(())
//! ```

pub mod codec;
pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parse;

pub use codec::{Codec, Coordinate, geohash, pluscode, zlatlong};
pub use error::{Error, Result};
pub use nmea0183::*;
pub use nmea_content::{Record, Registry, decode, decode_with, register_decoder};
pub use parse::{FieldEnum, FieldParser};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
