use crate::{Error, LineEndingMode, nmea0183::crlf};

#[test]
fn test_crlf() {
    let res = crlf("12345\r\n", LineEndingMode::Required);
    assert_eq!(res, Ok("12345"));

    let res = crlf("12345", LineEndingMode::Required);
    assert!(matches!(res, Err(Error::Framing(_))));

    let res = crlf("12345", LineEndingMode::Forbidden);
    assert_eq!(res, Ok("12345"));

    let res = crlf("12345\r\n", LineEndingMode::Forbidden);
    assert!(matches!(res, Err(Error::Framing(_))));

    let res = crlf("12345\n", LineEndingMode::Forbidden);
    assert!(matches!(res, Err(Error::Framing(_))));

    let res = crlf(" 12345\r\n", LineEndingMode::Optional);
    assert_eq!(res, Ok("12345"));
}
