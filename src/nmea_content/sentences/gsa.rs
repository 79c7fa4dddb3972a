#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    FieldParser, RawFrame, Result,
    nmea_content::{Decode, FixType, SelectionMode},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    pub frame: RawFrame,
    /// Selection mode
    pub mode: Option<SelectionMode>,
    /// Fix mode
    pub fix_type: Option<FixType>,
    /// IDs of the satellites used in the fix, empty slots skipped
    pub satellites: heapless::Vec<String, 12>,
    /// Position Dilution of Precision
    pub pdop: f64,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Vertical Dilution of Precision
    pub vdop: f64,
}

impl Decode for GSA {
    const TYPES: &'static [&'static str] = &["GSA"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let mode = p.enum_value(0, "selection mode");
        let fix_type = p.enum_value(1, "fix type");

        let mut satellites = heapless::Vec::new();
        for i in 2..14 {
            let id = p.string(i, "satellite in view");
            if !id.is_empty() {
                // at most 12 slots, never full
                let _ = satellites.push(id.to_string());
            }
        }

        let pdop = p.float64(14, "pdop");
        let hdop = p.float64(15, "hdop");
        let vdop = p.float64(16, "vdop");

        p.finish()?;

        Ok(Self {
            frame,
            mode,
            fix_type,
            satellites,
            pdop,
            hdop,
            vdop,
        })
    }
}
