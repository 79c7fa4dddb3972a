#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    FieldParser, RawFrame, Result,
    nmea_content::{Decode, Satellite},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    pub frame: RawFrame,
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: i64,
    /// Sentence number of this GSV message within current group
    pub message_number: i64,
    /// Total number of satellites in view
    pub satellites_in_view: i64,
    /// Satellite information
    pub satellites: heapless::Vec<Satellite, 4>,
}

impl Decode for GSV {
    const TYPES: &'static [&'static str] = &["GSV"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let total_messages = p.int64(0, "total number of messages");
        let message_number = p.int64(1, "message number");
        let satellites_in_view = p.int64(2, "number of satellites in view");

        let mut satellites = heapless::Vec::new();
        for n in 0..4 {
            let start = 3 + 4 * n;
            if start + 4 > frame.fields().len() {
                break;
            }

            let satellite = Satellite {
                prn: p.int64(start, "satellite PRN"),
                elevation: p.int64(start + 1, "elevation"),
                azimuth: p.int64(start + 2, "azimuth"),
                snr: p.int64(start + 3, "SNR"),
            };
            // at most 4 groups, never full
            let _ = satellites.push(satellite);
        }

        p.finish()?;

        Ok(Self {
            frame,
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::framed;

    #[test]
    fn test_gsv_decoding() {
        let frame = RawFrame::parse(
            "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
        )
        .unwrap();
        let gsv = GSV::decode(frame).unwrap();

        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 11);
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(
            gsv.satellites[3],
            Satellite {
                prn: 13,
                elevation: 6,
                azimuth: 292,
                snr: 0,
            }
        );
    }

    #[test]
    fn test_gsv_last_message() {
        let frame =
            RawFrame::parse("$GPGSV,3,3,11,22,42,067,42,24,14,311,43,27,05,244,00*4D").unwrap();
        let gsv = GSV::decode(frame).unwrap();

        assert_eq!(gsv.satellites.len(), 3);
        assert_eq!(gsv.satellites[1].snr, 43);
    }

    #[test]
    fn test_gsv_parsing() {
        let cases = [
            ("GPGSV,1,1,00", 0),
            ("GPGSV,1,1,01,05,45,120,38", 1),
            ("GPGSV,1,1,01,05,45,120", 0),
            ("GPGSV,1,1,01,05,45,120,", 1),
            ("GPGSV,1,1,01,06,30,,40", 1),
            ("GPGSV,1,1,01,11,,,", 1),
            ("GPGSV,1,1,02,01,60,150,45,02,30", 1),
            (
                "GPGSV,1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,20",
                4,
            ),
        ];

        for (input, count) in cases {
            let result = GSV::decode(RawFrame::parse(&framed(input)).unwrap());
            assert!(
                matches!(&result, Ok(gsv) if gsv.satellites.len() == count),
                "Failed: {input:?}\n\t{result:?}"
            );
        }

        let cases = ["GPGSV,1,1", "GPGSV,x,1,00", "GPGSV,1,1,01,05,4x,120,38"];

        for input in cases {
            let result = GSV::decode(RawFrame::parse(&framed(input)).unwrap());
            assert!(result.is_err(), "Failed: {input:?}\n\t{result:?}");
        }
    }
}
