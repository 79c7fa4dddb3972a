#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    FieldParser, RawFrame, Result,
    nmea_content::{Decode, FixQuality},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    pub frame: RawFrame,
    /// Fix time in UTC
    pub time: Option<time::Time>,
    pub latitude: f64,
    pub longitude: f64,
    /// GPS Quality Indicator
    pub fix_quality: Option<FixQuality>,
    /// Number of satellites in use
    pub satellites: i64,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: f64,
    /// Geoidal separation in meters
    pub separation: f64,
    /// Age of Differential GPS data in seconds, empty when DGPS is not used
    pub dgps_age: String,
    /// Differential reference station ID
    pub dgps_id: String,
}

impl Decode for GGA {
    const TYPES: &'static [&'static str] = &["GGA"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let time = p.time(0, "time");
        let latitude = p.lat_long(1, 2, "latitude");
        let longitude = p.lat_long(3, 4, "longitude");
        let fix_quality = p.enum_value(5, "fix quality");
        let satellites = p.int64(6, "number of satellites");
        let hdop = p.float64(7, "hdop");
        let altitude = p.float64(8, "altitude");
        let separation = p.float64(10, "separation");
        let dgps_age = p.string(12, "dgps age").to_string();
        let dgps_id = p.string(13, "dgps id").to_string();

        p.finish()?;

        Ok(Self {
            frame,
            time,
            latitude,
            longitude,
            fix_quality,
            satellites,
            hdop,
            altitude,
            separation,
            dgps_age,
            dgps_id,
        })
    }
}
