#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    FieldParser, RawFrame, Result,
    nmea_content::{Decode, GnsMode},
};

/// GNS - GNSS fix data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gns_fix_data>
///
/// ```text
///         1         2       3 4        5 6    7  8   9   10  11  12
///         |         |       | |        | |    |  |   |   |   |   |
///  $--GNS,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,c--c,xx,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Field 6 holds one mode character per constellation (GPS, GLONASS, ...).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GNS {
    pub frame: RawFrame,
    pub time: Option<time::Time>,
    pub latitude: f64,
    pub longitude: f64,
    pub mode: Vec<GnsMode>,
    /// Number of satellites in use
    pub satellites: i64,
    pub hdop: f64,
    /// Orthometric height in meters
    pub altitude: f64,
    /// Geoidal separation in meters
    pub separation: f64,
    /// Age of differential data in seconds
    pub age: f64,
    /// Differential reference station ID
    pub station: i64,
}

impl Decode for GNS {
    const TYPES: &'static [&'static str] = &["GNS"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let time = p.time(0, "time");
        let latitude = p.lat_long(1, 2, "latitude");
        let longitude = p.lat_long(3, 4, "longitude");
        let mode = p.enum_chars(5, "mode");
        let satellites = p.int64(6, "SVs");
        let hdop = p.float64(7, "HDOP");
        let altitude = p.float64(8, "altitude");
        let separation = p.float64(9, "separation");
        let age = p.float64(10, "age");
        let station = p.int64(11, "station");

        p.finish()?;

        Ok(Self {
            frame,
            time,
            latitude,
            longitude,
            mode,
            satellites,
            hdop,
            altitude,
            separation,
            age,
            station,
        })
    }
}
