#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{FieldParser, RawFrame, Result, nmea_content::Decode};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    pub frame: RawFrame,
    /// Course over ground in degrees true
    pub true_track: f64,
    /// Course over ground in degrees magnetic
    pub magnetic_track: f64,
    /// Speed over ground in knots
    pub ground_speed_knots: f64,
    /// Speed over ground in km/h
    pub ground_speed_kph: f64,
}

impl Decode for VTG {
    const TYPES: &'static [&'static str] = &["VTG"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let true_track = p.float64(0, "true track");
        let magnetic_track = p.float64(2, "magnetic track");
        let ground_speed_knots = p.float64(4, "ground speed (knots)");
        let ground_speed_kph = p.float64(6, "ground speed (km/h)");

        p.finish()?;

        Ok(Self {
            frame,
            true_track,
            magnetic_track,
            ground_speed_knots,
            ground_speed_kph,
        })
    }
}
