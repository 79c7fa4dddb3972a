use nom::{IResult, Parser, bytes::complete::take_until, character::complete::char};

use super::checksum_separated;
use crate::{Error, Result, checksum, format_checksum};

/// Metadata carried in a `\key:value,...*CC\` block ahead of a sentence.
///
/// Only the keys below are kept; anything else is ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagBlock {
    /// `c` - UNIX time in seconds or milliseconds
    pub time: Option<i64>,
    /// `r` - relative time
    pub relative_time: Option<i64>,
    /// `d` - destination
    pub destination: Option<String>,
    /// `g` - sentence grouping
    pub grouping: Option<String>,
    /// `n` - line count
    pub line_count: Option<i64>,
    /// `s` - source
    pub source: Option<String>,
    /// `t` - free text
    pub text: Option<String>,
}

impl TagBlock {
    /// Parses the text between the two backslashes.
    ///
    /// ```rust
    /// use nmea_geo::TagBlock;
    ///
    /// let block = TagBlock::parse("s:Satelite_1,c:1553390539*62").unwrap();
    /// assert_eq!(block.source.as_deref(), Some("Satelite_1"));
    /// assert_eq!(block.time, Some(1553390539));
    /// ```
    pub fn parse(tags: &str) -> Result<Self> {
        let (found, data) = checksum_separated(tags)
            .map_err(|_| Error::TagBlock("missing checksum separator".to_string()))?;

        let expected = checksum(data);
        if !found.eq_ignore_ascii_case(&format_checksum(expected)) {
            return Err(Error::TagBlock(format!(
                "checksum mismatch: calculated {expected:02X}, found {found:?}"
            )));
        }

        let mut block = TagBlock::default();
        for item in data.split(',') {
            let (value, key) = key_value(item).map_err(|_| {
                Error::TagBlock(format!("field {item:?} is not shaped <key>:<value>"))
            })?;

            match key {
                "c" => block.time = Some(parse_i64(value)?),
                "d" => block.destination = Some(value.to_string()),
                "g" => block.grouping = Some(value.to_string()),
                "n" => block.line_count = Some(parse_i64(value)?),
                "r" => block.relative_time = Some(parse_i64(value)?),
                "s" => block.source = Some(value.to_string()),
                "t" => block.text = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(block)
    }
}

fn key_value(i: &str) -> IResult<&str, &str> {
    let (i, key) = take_until(":").parse(i)?;
    let (value, _) = char(':').parse(i)?;
    Ok((value, key))
}

fn parse_i64(value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::TagBlock(format!("unable to parse integer {value:?}")))
}
