mod gga;
mod gns;
mod gsa;
mod gsv;
mod rmc;
mod vdm;
mod vtg;

use std::{any::Any, fmt};

pub use gga::GGA;
pub use gns::GNS;
pub use gsa::GSA;
pub use gsv::GSV;
pub use rmc::RMC;
pub use vdm::VDMVDO;
pub use vtg::VTG;

use crate::{Error, RawFrame, Result};

/// A typed sentence decoded from a [`RawFrame`].
///
/// Implemented by every built-in sentence struct. A decoder reads its fields with a
/// [`FieldParser`](crate::FieldParser) and reports the first error it ran into.
///
/// ```rust
/// use nmea_geo::{RawFrame, nmea_content::{Decode, VTG}};
///
/// let frame = RawFrame::parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").unwrap();
/// let vtg = VTG::decode(frame).unwrap();
/// assert_eq!(vtg.ground_speed_kph, 10.2);
/// ```
pub trait Decode: Sized {
    /// Sentence type codes this decoder accepts.
    const TYPES: &'static [&'static str];

    fn decode(frame: RawFrame) -> Result<Self>;
}

/// A sentence produced by a decoder registered at runtime.
///
/// Returned inside [`Record::Custom`]; use [`Record::downcast_custom`] to get the
/// concrete type back.
pub trait CustomSentence: fmt::Debug + Send + Sync {
    fn frame(&self) -> &RawFrame;

    fn as_any(&self) -> &dyn Any;
}

/// A decoded sentence.
///
/// | Variant                | Sentence Type                               |
/// |------------------------|---------------------------------------------|
/// | RMC([`RMC`])           | Recommended Minimum Navigation Information  |
/// | GGA([`GGA`])           | Global Positioning System Fix Data          |
/// | GSA([`GSA`])           | GPS DOP and active satellites               |
/// | GSV([`GSV`])           | Satellites in View                          |
/// | GNS([`GNS`])           | GNSS fix data                               |
/// | VTG([`VTG`])           | Track made good and Ground speed            |
/// | VDMVDO([`VDMVDO`])     | AIS VHF data-link message (own or received) |
/// | Custom                 | Any type registered at runtime              |
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug)]
pub enum Record {
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// GNSS fix data
    GNS(GNS),
    /// Track made good and Ground speed
    VTG(VTG),
    /// AIS VHF data-link message
    VDMVDO(VDMVDO),
    /// Produced by a registered decoder
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Box<dyn CustomSentence>),
}

impl Record {
    /// Decodes `frame` with the built-in decoder for its sentence type.
    ///
    /// Fails with [`Error::UnsupportedType`] for types not in the table above.
    pub fn decode_builtin(frame: RawFrame) -> Result<Self> {
        let decode: fn(RawFrame) -> Result<Self> = match frame.sentence_type() {
            "RMC" => |f| RMC::decode(f).map(Self::RMC),
            "GGA" => |f| GGA::decode(f).map(Self::GGA),
            "GSA" => |f| GSA::decode(f).map(Self::GSA),
            "GSV" => |f| GSV::decode(f).map(Self::GSV),
            "GNS" => |f| GNS::decode(f).map(Self::GNS),
            "VTG" => |f| VTG::decode(f).map(Self::VTG),
            "VDM" | "VDO" => |f| VDMVDO::decode(f).map(Self::VDMVDO),
            _ => return Err(Error::UnsupportedType(frame.prefix())),
        };

        decode(frame)
    }

    /// The frame the record was decoded from.
    pub fn frame(&self) -> &RawFrame {
        match self {
            Self::RMC(s) => &s.frame,
            Self::GGA(s) => &s.frame,
            Self::GSA(s) => &s.frame,
            Self::GSV(s) => &s.frame,
            Self::GNS(s) => &s.frame,
            Self::VTG(s) => &s.frame,
            Self::VDMVDO(s) => &s.frame,
            Self::Custom(s) => s.frame(),
        }
    }

    pub fn sentence_type(&self) -> &str {
        self.frame().sentence_type()
    }

    /// The concrete value behind [`Record::Custom`], if it is a `T`.
    pub fn downcast_custom<T: CustomSentence + 'static>(&self) -> Option<&T> {
        match self {
            Self::Custom(s) => s.as_any().downcast_ref(),
            _ => None,
        }
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::FieldEnum for $name {
            const CODES: &'static [&'static str] = &[$($code),*];

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }
        }
    };
}

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        "A" => Valid,
        /// V - Invalid
        "V" => Invalid,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum FixQuality {
        /// 0 - Fix not available
        "0" => Invalid,
        /// 1 - GPS fix
        "1" => Gps,
        /// 2 - Differential GPS fix
        "2" => Dgps,
        /// 3 - PPS fix
        "3" => Pps,
        /// 4 - Real Time Kinematic
        "4" => Rtk,
        /// 5 - Float RTK
        "5" => FloatRtk,
        /// 6 - estimated (dead reckoning)
        "6" => Estimated,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        "A" => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixType {
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

field_enum! {
    /// Per-constellation mode indicator of a GNS sentence
    pub enum GnsMode {
        /// N - No fix
        "N" => NoFix,
        /// A - Autonomous mode
        "A" => Autonomous,
        /// D - Differential mode
        "D" => Differential,
        /// P - Precise
        "P" => Precise,
        /// R - RTK Integer mode
        "R" => FixedRtk,
        /// F - RTK Float mode
        "F" => FloatRtk,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// M - Manual Input Mode
        "M" => Manual,
        /// S - Simulated Mode
        "S" => Simulator,
    }
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub prn: i64,
    /// Degrees above the horizon
    pub elevation: i64,
    /// Degrees from true north
    pub azimuth: i64,
    /// Signal-to-noise ratio in dB, `0` when not tracking
    pub snr: i64,
}
