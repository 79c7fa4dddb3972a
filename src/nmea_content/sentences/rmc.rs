#[cfg(feature = "serde")]
use serde::Serialize;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{
    FieldParser, RawFrame, Result,
    nmea_content::{Decode, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    pub frame: RawFrame,
    /// Fix time in UTC
    pub time: Option<time::Time>,
    /// Status Mode Indicator, `None` when the field is empty
    pub validity: Option<Status>,
    /// Latitude in degrees, south negative
    pub latitude: f64,
    /// Longitude in degrees, west negative
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed: f64,
    /// Course over ground in degrees true
    pub course: f64,
    /// Fix date in UTC
    pub date: Option<time::Date>,
    /// Magnetic variation in degrees, west negative
    pub variation: f64,
}

impl RMC {
    /// Fix date and time as one UTC timestamp, if both are present.
    ///
    /// ```rust
    /// use nmea_geo::{Record, decode};
    ///
    /// let Ok(Record::RMC(rmc)) =
    ///     decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")
    /// else {
    ///     panic!("not an RMC")
    /// };
    /// assert_eq!(rmc.timestamp().unwrap().unix_timestamp(), 764426119);
    /// ```
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        Some(PrimitiveDateTime::new(self.date?, self.time?).assume_utc())
    }
}

impl Decode for RMC {
    const TYPES: &'static [&'static str] = &["RMC"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let time = p.time(0, "time");
        let validity = p.enum_value(1, "validity");
        let latitude = p.lat_long(2, 3, "latitude");
        let longitude = p.lat_long(4, 5, "longitude");
        let speed = p.float64(6, "speed");
        let course = p.float64(7, "course");
        let date = p.date(8, "date");
        let variation = p.float64(9, "variation");
        let variation = match p.enum_string(10, "direction", &["E", "W"]) {
            "W" => -variation,
            _ => variation,
        };

        p.finish()?;

        Ok(Self {
            frame,
            time,
            validity,
            latitude,
            longitude,
            speed,
            course,
            date,
            variation,
        })
    }
}
