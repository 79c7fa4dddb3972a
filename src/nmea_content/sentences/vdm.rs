#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{FieldParser, RawFrame, Result, nmea_content::Decode};

/// VDM/VDO - AIS VHF data-link message, received (VDM) or own vessel (VDO)
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_aivdmaivdo_sentence_layer>
///
/// ```text
///         1 2 3 4 5      6
///         | | | | |      |
///  !--VDM,x,x,x,a,s--s,x*hh<CR><LF>
/// ```
///
/// The payload is unpacked to one bit per element; message content is not interpreted.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VDMVDO {
    pub frame: RawFrame,
    /// Number of fragments the message is split into
    pub number_of_fragments: i64,
    /// Index of this fragment, starting at 1
    pub fragment_number: i64,
    /// Sequential message id tying multi-fragment messages together
    pub message_id: i64,
    /// Radio channel, `A` or `B`
    pub channel: String,
    /// Payload bits, most significant first
    pub payload: Vec<u8>,
}

impl Decode for VDMVDO {
    const TYPES: &'static [&'static str] = &["VDM", "VDO"];

    fn decode(frame: RawFrame) -> Result<Self> {
        let mut p = FieldParser::new(&frame);
        p.assert_type(Self::TYPES);

        let number_of_fragments = p.int64(0, "number of fragments");
        let fragment_number = p.int64(1, "fragment number");
        let message_id = p.int64(2, "sequence number");
        let channel = p.string(3, "channel ID").to_string();
        let fill_bits = p.int64(5, "number of padding bits");
        let payload = p.six_bit_armour(4, fill_bits, "encoded payload");

        p.finish()?;

        Ok(Self {
            frame,
            number_of_fragments,
            fragment_number,
            message_id,
            channel,
            payload,
        })
    }
}
