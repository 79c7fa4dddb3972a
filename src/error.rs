//! # Error Types
//!
//! This module defines the error type used throughout the library. Every fallible
//! operation, whether it frames a sentence, reads a field or decodes a location code,
//! reports one of these variants.

/// Convenience alias for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all possible errors that can occur while decoding sentences or location codes.
///
/// Frame-level variants ([`Error::Framing`], [`Error::ChecksumMismatch`], [`Error::TagBlock`])
/// are raised before any field is looked at. Field-level variants carry the sentence prefix
/// (talker id + sentence type) and the label of the field being read. A decode only ever
/// reports the first error it ran into.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line is not shaped like a sentence.
    ///
    /// Raised for non-ASCII input, a body that does not start with `$` or `!`,
    /// a missing `*` checksum separator, or a line ending that violates the
    /// configured [`LineEndingMode`](crate::LineEndingMode).
    #[error("framing error: {0}")]
    Framing(&'static str),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the checksum calculated from the message content and the
    /// text found after the `*` separator.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:?}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum text found in the message
        found: String,
    },

    /// The tag block preceding the sentence is malformed or fails its own checksum.
    #[error("tag block error: {0}")]
    TagBlock(String),

    /// A field index past the end of the field list was requested.
    #[error("{prefix}: {context}: field index {index} out of range")]
    Index {
        prefix: String,
        context: &'static str,
        index: usize,
    },

    /// A field holds a value outside the allowed set of codes.
    #[error("{prefix}: invalid {context}: {value:?}")]
    Enum {
        prefix: String,
        context: &'static str,
        value: String,
    },

    /// A non-empty numeric field could not be parsed.
    #[error("{prefix}: invalid {context}: {value:?} is not a number")]
    Numeric {
        prefix: String,
        context: &'static str,
        value: String,
    },

    /// A latitude or longitude lies outside ±90° or ±180°.
    #[error("{prefix}: {context} {value} is out of range")]
    Range {
        prefix: String,
        context: &'static str,
        value: f64,
    },

    /// A time, date or hemisphere field does not follow its fixed format.
    #[error("{prefix}: invalid {context}: {value:?}")]
    Format {
        prefix: String,
        context: &'static str,
        value: String,
    },

    /// An AIS 6-bit armoured payload could not be unpacked.
    #[error("{prefix}: invalid {context}: {reason}")]
    Armour {
        prefix: String,
        context: &'static str,
        reason: &'static str,
    },

    /// A decoder was handed a frame of a sentence type it does not handle.
    #[error("{prefix}: unexpected sentence type, expected {expected}")]
    Type { prefix: String, expected: String },

    /// No decoder, built-in or custom, is known for the sentence type.
    ///
    /// Contains the sentence prefix (talker id + sentence type) for reference.
    #[error("sentence prefix {0:?} not supported")]
    UnsupportedType(String),

    /// A custom decoder is already registered for this sentence type.
    #[error("decoder for sentence type {0:?} already registered")]
    DuplicateRegistration(String),

    /// A geohash, pluscode or zlatlong text could not be decoded.
    #[error("invalid {scheme} code {code:?}: {reason}")]
    InvalidCode {
        /// Name of the coding scheme
        scheme: &'static str,
        /// The offending input
        code: String,
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_code(scheme: &'static str, code: &str, reason: &'static str) -> Self {
        Error::InvalidCode {
            scheme,
            code: code.to_string(),
            reason,
        }
    }

    /// Returns `true` when the error was raised before any field was parsed.
    pub fn is_frame_error(&self) -> bool {
        matches!(
            self,
            Error::Framing(_) | Error::ChecksumMismatch { .. } | Error::TagBlock(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::ChecksumMismatch {
            expected: 0x6A,
            found: "6B".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: calculated 6A, found \"6B\""
        );

        let err = Error::Enum {
            prefix: "GPRMC".to_string(),
            context: "validity",
            value: "X".to_string(),
        };
        assert_eq!(err.to_string(), "GPRMC: invalid validity: \"X\"");
    }

    #[test]
    fn test_is_frame_error() {
        assert!(Error::Framing("missing checksum separator").is_frame_error());
        assert!(Error::TagBlock("unterminated".to_string()).is_frame_error());
        assert!(!Error::UnsupportedType("GPXYZ".to_string()).is_frame_error());
    }
}
