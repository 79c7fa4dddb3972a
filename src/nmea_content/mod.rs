//! # Sentence decoding
//!
//! Typed records for the built-in sentence types, the [`Registry`] that maps a sentence
//! type to its decoder, and the degree formatting helpers.
//!
//! ```rust
//! use nmea_geo::{Record, decode};
//!
//! match decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").unwrap() {
//!     Record::VTG(vtg) => assert_eq!(vtg.ground_speed_knots, 5.5),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod format;
pub(crate) mod parse;
mod registry;
mod sentences;

pub use format::{format_dms, format_gps};
pub use registry::{DecodeFn, Registry, decode, decode_with, register_decoder};
pub use sentences::*;
