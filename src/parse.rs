use crate::{
    Error, RawFrame,
    nmea_content::parse::{date, degrees_minutes, integer, number, time},
};

/// A closed set of single-field codes, e.g. `A`/`V` for a validity flag.
///
/// Implemented by the `field_enum!` declarations in
/// [`nmea_content`](crate::nmea_content); implement it by hand to read your own codes
/// through [`FieldParser::enum_value`] and [`FieldParser::enum_chars`].
///
/// ```rust
/// use nmea_geo::FieldEnum;
/// use nmea_geo::nmea_content::Status;
///
/// assert_eq!(Status::from_code("A"), Some(Status::Valid));
/// assert_eq!(Status::Invalid.code(), "V");
/// assert_eq!(Status::CODES, ["A", "V"]);
/// ```
pub trait FieldEnum: Sized + Copy {
    /// Every code that maps to a variant.
    const CODES: &'static [&'static str];

    fn from_code(code: &str) -> Option<Self>;

    fn code(&self) -> &'static str;
}

/// Reads typed values out of a [`RawFrame`], remembering the first failure.
///
/// Every accessor takes a field index and a context label used in error messages.
/// Once an accessor fails, all later accessors return zero values (`""`, `0`, `0.0`,
/// `None`, empty vectors) and leave the stored error untouched, so a decoder can read
/// all its fields in one straight pass and call [`FieldParser::finish`] at the end.
///
/// ```rust
/// use nmea_geo::{FieldParser, RawFrame};
///
/// let frame = RawFrame::parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").unwrap();
/// let mut p = FieldParser::new(&frame);
/// assert_eq!(p.float64(0, "true track"), 54.7);
/// assert_eq!(p.float64(12, "missing"), 0.0);
/// assert_eq!(p.float64(2, "magnetic track"), 0.0);
/// assert!(p.finish().is_err());
/// ```
#[derive(Debug)]
pub struct FieldParser<'a> {
    frame: &'a RawFrame,
    error: Option<Error>,
}

impl<'a> FieldParser<'a> {
    pub fn new(frame: &'a RawFrame) -> Self {
        Self { frame, error: None }
    }

    pub fn frame(&self) -> &'a RawFrame {
        self.frame
    }

    /// The first recorded error, if any.
    pub fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Consumes the parser, returning the first recorded error.
    pub fn finish(self) -> Result<(), Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Records `error` unless an earlier one is already stored.
    ///
    /// Custom decoders use this for checks the accessors do not cover.
    pub fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            log::trace!("{}: {error}", self.frame.prefix());
            self.error = Some(error);
        }
    }

    fn failed(&self) -> bool {
        self.error.is_some()
    }

    fn prefix(&self) -> String {
        self.frame.prefix()
    }

    /// Fails unless the sentence type is one of `expected`.
    pub fn assert_type(&mut self, expected: &[&str]) {
        if self.failed() || expected.contains(&self.frame.sentence_type()) {
            return;
        }

        let error = Error::Type {
            prefix: self.prefix(),
            expected: expected.join("/"),
        };
        self.fail(error);
    }

    /// The raw text of field `i`.
    pub fn string(&mut self, i: usize, context: &'static str) -> &'a str {
        if self.failed() {
            return "";
        }

        let frame: &'a RawFrame = self.frame;
        match frame.fields().get(i) {
            Some(field) => field.as_str(),
            None => {
                let error = Error::Index {
                    prefix: self.prefix(),
                    context,
                    index: i,
                };
                self.fail(error);
                ""
            }
        }
    }

    /// Fields `from..` as a slice.
    pub fn list_string(&mut self, from: usize, context: &'static str) -> &'a [String] {
        if self.failed() {
            return &[];
        }

        let frame: &'a RawFrame = self.frame;
        match frame.fields().get(from..) {
            Some(fields) if !fields.is_empty() => fields,
            _ => {
                let error = Error::Index {
                    prefix: self.prefix(),
                    context,
                    index: from,
                };
                self.fail(error);
                &[]
            }
        }
    }

    /// Field `i`, which must be empty or one of `options`.
    pub fn enum_string(&mut self, i: usize, context: &'static str, options: &[&str]) -> &'a str {
        let value = self.string(i, context);
        if value.is_empty() || options.contains(&value) {
            return value;
        }

        let error = Error::Enum {
            prefix: self.prefix(),
            context,
            value: value.to_string(),
        };
        self.fail(error);
        ""
    }

    /// Field `i` as a typed code; `None` when empty.
    pub fn enum_value<T: FieldEnum>(&mut self, i: usize, context: &'static str) -> Option<T> {
        let value = self.enum_string(i, context, T::CODES);
        T::from_code(value)
    }

    /// Field `i` read as a run of single-character codes, e.g. `RR` or `AN`.
    pub fn enum_chars<T: FieldEnum>(&mut self, i: usize, context: &'static str) -> Vec<T> {
        let value = self.string(i, context);

        let mut buf = [0u8; 4];
        let codes: Option<Vec<T>> = value
            .chars()
            .map(|c| T::from_code(c.encode_utf8(&mut buf)))
            .collect();

        match codes {
            Some(codes) => codes,
            None => {
                let error = Error::Enum {
                    prefix: self.prefix(),
                    context,
                    value: value.to_string(),
                };
                self.fail(error);
                Vec::new()
            }
        }
    }

    /// Field `i` as a signed integer; `0` when empty.
    pub fn int64(&mut self, i: usize, context: &'static str) -> i64 {
        let value = self.string(i, context);
        if value.is_empty() {
            return 0;
        }

        match integer(value) {
            Ok((_, v)) => v,
            Err(_) => {
                self.fail_numeric(context, value);
                0
            }
        }
    }

    /// Field `i` as a decimal; `0.0` when empty.
    pub fn float64(&mut self, i: usize, context: &'static str) -> f64 {
        let value = self.string(i, context);
        if value.is_empty() {
            return 0.0;
        }

        match number(value) {
            Ok((_, v)) => v,
            Err(_) => {
                self.fail_numeric(context, value);
                0.0
            }
        }
    }

    fn fail_numeric(&mut self, context: &'static str, value: &str) {
        let error = Error::Numeric {
            prefix: self.prefix(),
            context,
            value: value.to_string(),
        };
        self.fail(error);
    }

    fn fail_format(&mut self, context: &'static str, value: &str) {
        let error = Error::Format {
            prefix: self.prefix(),
            context,
            value: value.to_string(),
        };
        self.fail(error);
    }

    /// A `dddmm.mmmm` magnitude at `i` and its hemisphere letter at `j`, as signed
    /// decimal degrees.
    ///
    /// `S` and `W` are negative. Two empty fields read as `0.0` without error.
    pub fn lat_long(&mut self, i: usize, j: usize, context: &'static str) -> f64 {
        let magnitude = self.string(i, context);
        let hemisphere = self.string(j, context);
        if self.failed() || (magnitude.is_empty() && hemisphere.is_empty()) {
            return 0.0;
        }

        let value = match degrees_minutes(magnitude) {
            Ok((_, v)) => v,
            Err(_) => {
                self.fail_numeric(context, magnitude);
                return 0.0;
            }
        };

        let (value, limit) = match hemisphere {
            "N" => (value, 90.0),
            "S" => (-value, 90.0),
            "E" => (value, 180.0),
            "W" => (-value, 180.0),
            _ => {
                self.fail_format(context, hemisphere);
                return 0.0;
            }
        };

        if value.abs() > limit {
            let error = Error::Range {
                prefix: self.prefix(),
                context,
                value,
            };
            self.fail(error);
            return 0.0;
        }

        value
    }

    /// `hhmmss[.sss]` at `i`; `None` when empty.
    pub fn time(&mut self, i: usize, context: &'static str) -> Option<time::Time> {
        let value = self.string(i, context);
        if value.is_empty() {
            return None;
        }

        match time(value) {
            Ok((_, t)) => Some(t),
            Err(_) => {
                self.fail_format(context, value);
                None
            }
        }
    }

    /// `ddmmyy` at `i`; `None` when empty.
    pub fn date(&mut self, i: usize, context: &'static str) -> Option<time::Date> {
        let value = self.string(i, context);
        if value.is_empty() {
            return None;
        }

        match date(value) {
            Ok((_, d)) if value.len() == 6 => Some(d),
            _ => {
                self.fail_format(context, value);
                None
            }
        }
    }

    /// Unpacks the 6-bit armoured payload at `i` into one bit per byte, most
    /// significant bit first, dropping the last `fill_bits` bits.
    pub fn six_bit_armour(&mut self, i: usize, fill_bits: i64, context: &'static str) -> Vec<u8> {
        if self.failed() {
            return Vec::new();
        }

        if !(0..6).contains(&fill_bits) {
            self.fail_armour(context, "fill bits out of range");
            return Vec::new();
        }

        let payload = self.string(i, context);
        let Some(bit_count) = (payload.len() * 6).checked_sub(fill_bits as usize) else {
            self.fail_armour(context, "fill bits exceed payload");
            return Vec::new();
        };

        let mut bits = Vec::with_capacity(bit_count);
        for byte in payload.bytes() {
            if !(48..120).contains(&byte) {
                self.fail_armour(context, "data byte out of range");
                return Vec::new();
            }

            let mut value = byte - 48;
            if value > 40 {
                value -= 8;
            }

            for shift in (0..6).rev() {
                if bits.len() == bit_count {
                    break;
                }
                bits.push((value >> shift) & 1);
            }
        }

        bits
    }

    fn fail_armour(&mut self, context: &'static str, reason: &'static str) {
        let error = Error::Armour {
            prefix: self.prefix(),
            context,
            reason,
        };
        self.fail(error);
    }
}
