//! Field grammars shared by the [`FieldParser`](crate::FieldParser) accessors.
//!
//! Each parser consumes a whole field; callers treat any error as "malformed".

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    error::ErrorKind,
    number::complete::double,
    sequence::preceded,
};

/// A non-empty decimal number, e.g. `022.4`.
pub(crate) fn number(i: &str) -> IResult<&str, f64> {
    all_consuming(double).parse(i)
}

/// A signed decimal integer, e.g. `-12`.
pub(crate) fn integer(i: &str) -> IResult<&str, i64> {
    all_consuming(nom::character::complete::i64).parse(i)
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), |digits: &str| {
        digits.parse::<u8>()
    })
    .parse(i)
}

fn verify_error(i: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(i, ErrorKind::Verify))
}

/// `.sss` with any number of digits, as a fraction of a second.
fn fraction(i: &str) -> IResult<&str, f64> {
    map_res(preceded(char('.'), digit1), |digits: &str| {
        format!("0.{digits}").parse::<f64>()
    })
    .parse(i)
}

/// `hhmmss[.sss]`
pub(crate) fn time(i: &str) -> IResult<&str, time::Time> {
    let (i, (hour, minute, second, subsecond)) =
        all_consuming((two_digits, two_digits, two_digits, opt(fraction))).parse(i)?;

    let millisecond = ((subsecond.unwrap_or(0.0) * 1000.0).round() as u16).min(999);
    let time = time::Time::from_hms_milli(hour, minute, second, millisecond)
        .map_err(|_| verify_error(i))?;

    Ok((i, time))
}

/// `ddmmyy`, two-digit years 83..=99 are 19xx.
pub(crate) fn date(i: &str) -> IResult<&str, time::Date> {
    let (i, (day, month, year)) = all_consuming((two_digits, two_digits, two_digits)).parse(i)?;

    let month = time::Month::try_from(month).map_err(|_| verify_error(i))?;
    let year = match year {
        83..=99 => 1900 + i32::from(year),
        _ => 2000 + i32::from(year),
    };

    let date = time::Date::from_calendar_date(year, month, day).map_err(|_| verify_error(i))?;

    Ok((i, date))
}

/// `dddmm.mmmm` magnitude to unsigned decimal degrees.
pub(crate) fn degrees_minutes(i: &str) -> IResult<&str, f64> {
    let (i, value) = number(i)?;

    if !value.is_finite() || value < 0.0 {
        return Err(verify_error(i));
    }

    let degrees = (value / 100.0).floor();
    let minutes = value - degrees * 100.0;

    Ok((i, degrees + minutes / 60.0))
}
