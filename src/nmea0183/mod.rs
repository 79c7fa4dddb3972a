//! # NMEA 0183 Frame Validator
//!
//! This module turns one text line into a [`RawFrame`]. It handles the standard
//! NMEA 0183 format: `$TTSSS,D1,D2,...,Dn*CC\r\n`, optionally preceded by a
//! `\key:value,...*CC\` tag block, and the `!` start marker used by encapsulated
//! (AIS) sentences.
//!
//! The validator is configurable to handle variations in:
//! - Checksum requirements (required or optional)
//! - Line ending requirements (trimmed, required or forbidden)
//!
//! Nothing is interpreted beyond the talker id and sentence type; field content is
//! left to the [`FieldParser`](crate::FieldParser).

use std::fmt;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take, take_until},
    character::complete::{char, one_of},
    combinator::rest,
    sequence::delimited,
};

mod tag_block;

pub use tag_block::TagBlock;

use crate::{Error, Result};

/// Defines how the validator should handle sentence checksums.
///
/// NMEA 0183 messages carry a checksum in the format `*CC` where CC is a two-digit
/// hexadecimal value representing the XOR of all bytes in the message content
/// (excluding the `$`/`!` prefix and `*` delimiter).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// A sentence without a `*CC` checksum is rejected with [`Error::Framing`].
    /// A present checksum is validated against the calculated one.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode with legacy equipment that does not always emit checksums.
    Optional,
}

/// Defines how the validator should handle line endings.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    #[default]
    /// Surrounding whitespace, including any `\r\n`, is trimmed before validation.
    ///
    /// This is what you want for lines already split by a reader.
    Optional,

    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode for raw serial captures or log files.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode for sentences coming from APIs or databases that strip line endings.
    Forbidden,
}

/// Framing configuration.
///
/// The default requires a checksum and trims surrounding whitespace.
///
/// ```rust
/// use nmea_geo::{ChecksumMode, FrameConfig, LineEndingMode, RawFrame};
///
/// let lenient = FrameConfig {
///     checksum: ChecksumMode::Optional,
///     line_ending: LineEndingMode::Optional,
/// };
/// assert!(RawFrame::parse_with("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K", &lenient).is_ok());
/// assert!(RawFrame::parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    pub checksum: ChecksumMode,
    pub line_ending: LineEndingMode,
}

/// A validated but otherwise uninterpreted sentence.
///
/// Built by [`RawFrame::parse`]; immutable afterwards. Decoders read its fields
/// through a [`FieldParser`](crate::FieldParser).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    talker: String,
    sentence_type: String,
    fields: Vec<String>,
    checksum: Option<u8>,
    raw: String,
    tag_block: Option<TagBlock>,
}

impl RawFrame {
    /// Validates `line` with the default [`FrameConfig`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea_geo::RawFrame;
    ///
    /// let frame = RawFrame::parse("$GPGGA,123456,data*41").unwrap();
    /// assert_eq!(frame.talker(), "GP");
    /// assert_eq!(frame.sentence_type(), "GGA");
    /// assert_eq!(frame.fields(), ["123456", "data"]);
    /// assert_eq!(frame.checksum(), Some(0x41));
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        Self::parse_with(line, &FrameConfig::default())
    }

    /// Validates `line` according to `config`.
    ///
    /// 1. Validates that input is ASCII-only
    /// 2. Applies the line ending policy
    /// 3. Splits off and validates an optional tag block
    /// 4. Expects the sentence to start with `$` or `!`
    /// 5. Verifies the checksum of everything between the start marker and `*`
    /// 6. Splits the content into talker id, sentence type and fields
    pub fn parse_with(line: &str, config: &FrameConfig) -> Result<Self> {
        if !line.is_ascii() {
            return Err(Error::Framing("sentence contains non-ASCII characters"));
        }

        let line = crlf(line, config.line_ending)?;

        let (line, tag_block) = if line.starts_with('\\') {
            let (body, tags) = tag_block_delimited(line)
                .map_err(|_| Error::TagBlock("unterminated tag block".to_string()))?;
            (body, Some(TagBlock::parse(tags)?))
        } else {
            (line, None)
        };

        let (content, _) =
            sentence_start(line).map_err(|_| Error::Framing("sentence does not start with '$' or '!'"))?;

        let (data, checksum) = match checksum_separated(content) {
            Ok((found, data)) => (data, Some(verify_checksum(data, found)?)),
            Err(_) if config.checksum == ChecksumMode::Optional => (content, None),
            Err(_) => return Err(Error::Framing("sentence does not contain checksum separator")),
        };

        let mut fields = data.split(',');
        let (talker, sentence_type) = split_prefix(fields.next().unwrap_or_default());

        Ok(Self {
            talker: talker.to_string(),
            sentence_type: sentence_type.to_string(),
            fields: fields.map(str::to_string).collect(),
            checksum,
            raw: line.to_string(),
            tag_block,
        })
    }

    /// Talker id, e.g. `GP`, `GN`, `AI`, or `P`/`PMTK` for proprietary sentences.
    pub fn talker(&self) -> &str {
        &self.talker
    }

    /// Sentence type code, e.g. `RMC`.
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// Talker id followed by the sentence type, e.g. `GPRMC`.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.talker, self.sentence_type)
    }

    /// Data fields following the prefix, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The validated checksum, `None` only when [`ChecksumMode::Optional`] let a
    /// sentence without one through.
    pub fn checksum(&self) -> Option<u8> {
        self.checksum
    }

    /// The sentence text as received, without tag block and trimmed line ending.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Tag block metadata preceding the sentence, if any.
    pub fn tag_block(&self) -> Option<&TagBlock> {
        self.tag_block.as_ref()
    }

    /// `true` for sentences started with `!` (AIS and other encapsulated data).
    pub fn is_encapsulated(&self) -> bool {
        self.raw.starts_with('!')
    }
}

impl fmt::Display for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Applies the line ending policy to `line`.
///
/// # Examples
///
/// ```rust
/// use nmea_geo::{LineEndingMode, crlf};
///
/// assert_eq!(crlf("data\r\n", LineEndingMode::Required), Ok("data"));
/// assert!(crlf("data", LineEndingMode::Required).is_err());
/// assert_eq!(crlf("data", LineEndingMode::Forbidden), Ok("data"));
/// assert!(crlf("data\r\n", LineEndingMode::Forbidden).is_err());
/// assert_eq!(crlf("  data\r\n", LineEndingMode::Optional), Ok("data"));
/// ```
pub fn crlf(line: &str, mode: LineEndingMode) -> Result<&str> {
    match mode {
        LineEndingMode::Optional => Ok(line.trim()),
        LineEndingMode::Required => line
            .strip_suffix("\r\n")
            .ok_or(Error::Framing("sentence does not end with CRLF")),
        LineEndingMode::Forbidden if line.ends_with(['\r', '\n']) => {
            Err(Error::Framing("sentence ends with a line terminator"))
        }
        LineEndingMode::Forbidden => Ok(line),
    }
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of all bytes between the start marker and the `*`
/// delimiter, excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea_geo::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(data: &str) -> u8 {
    data.bytes()
        .fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea_geo::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Compares the declared checksum text against the XOR of `data`, ignoring case.
pub(crate) fn verify_checksum(data: &str, found: &str) -> Result<u8> {
    let expected = checksum(data);

    if found.eq_ignore_ascii_case(&format_checksum(expected)) {
        Ok(expected)
    } else {
        Err(Error::ChecksumMismatch {
            expected,
            found: found.to_string(),
        })
    }
}

fn tag_block_delimited(i: &str) -> IResult<&str, &str> {
    delimited(char('\\'), take_until("\\"), char('\\')).parse(i)
}

fn sentence_start(i: &str) -> IResult<&str, char> {
    one_of("$!").parse(i)
}

/// Splits `data*CC` into (`CC`, `data`).
pub(crate) fn checksum_separated(i: &str) -> IResult<&str, &str> {
    let (cc, data) = take_until("*").parse(i)?;
    let (cc, _) = char('*').parse(cc)?;
    Ok((cc, data))
}

fn prefix(i: &str) -> IResult<&str, &str> {
    alt((tag("PMTK"), tag("P"), take(2usize), rest)).parse(i)
}

/// Splits the first field into talker id and sentence type.
///
/// `PMTK` and lone `P` prefixes mark proprietary sentences; otherwise the first two
/// characters are the talker.
pub(crate) fn split_prefix(first: &str) -> (&str, &str) {
    match prefix(first) {
        Ok((sentence_type, talker)) => (talker, sentence_type),
        Err(_) => (first, ""),
    }
}
