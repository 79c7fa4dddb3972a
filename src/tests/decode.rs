use crate::{
    ChecksumMode, Error, FrameConfig, Record, decode, decode_with,
    nmea_content::{FixQuality, Status},
    tests::framed,
};

#[test]
fn test_decode_rmc() {
    let record =
        decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A").unwrap();

    let Record::RMC(rmc) = record else {
        panic!("expected RMC, got {record:?}");
    };
    assert_eq!(rmc.time, Some(time::Time::from_hms(12, 35, 19).unwrap()));
    assert_eq!(rmc.validity, Some(Status::Valid));
    assert!((rmc.latitude - 48.1173).abs() < 1e-6);
    assert!((rmc.longitude - 11.516_666).abs() < 1e-6);
    assert_eq!(rmc.speed, 22.4);
    assert_eq!(rmc.course, 84.4);
    assert_eq!(
        rmc.date,
        Some(time::Date::from_calendar_date(1994, time::Month::March, 23).unwrap())
    );
    assert_eq!(rmc.variation, -3.1);
}

#[test]
fn test_decode_dispatch() {
    let cases = [
        ("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47", "GGA"),
        ("$GPGSA,A,3,22,19,18,27,14,03,,,,,,,3.1,2.0,2.4*36", "GSA"),
        ("$GPGSV,3,3,11,22,42,067,42,24,14,311,43,27,05,244,00*4D", "GSV"),
        ("$GNGNS,014035.00,4332.69262,S,17235.48549,E,RR,13,0.9,25.63,11.24,,*70", "GNS"),
        ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", "VTG"),
        ("!AIVDM,1,1,,A,13aGt0PP0jPN@9fMPKVDJgwfR>`<,0*55", "VDM"),
    ];

    for (line, sentence_type) in cases {
        let record = decode(line).unwrap();
        assert_eq!(record.sentence_type(), sentence_type);
        assert_eq!(record.frame().raw(), line);
    }

    let record = decode(&framed("AIVDO,1,1,,B,1w,2")).unwrap();
    assert!(matches!(record, Record::VDMVDO(_)));
}

#[test]
fn test_decode_gga_fields() {
    let Record::GGA(gga) =
        decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47").unwrap()
    else {
        panic!("expected GGA");
    };

    assert_eq!(gga.fix_quality, Some(FixQuality::Gps));
    assert_eq!(gga.satellites, 8);
    assert_eq!(gga.altitude, 545.4);
    assert_eq!(gga.separation, 46.9);
}

#[test]
fn test_decode_errors() {
    let cases = [
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B",
        "$GPXYZ,1,2*4F",
        "GPRMC,123519",
        "$GPRMC,123519,A,9107.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6E",
        "$GPRMC,123519,X,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*73",
        "$GPRMC,123519,A,4807.038,N,01131.000,E,abc,084.4,230394,003.1,W*20",
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,2303,003.1,W*67",
    ];

    let errors: Vec<Error> = cases.iter().map(|line| decode(line).unwrap_err()).collect();

    assert!(matches!(errors[0], Error::ChecksumMismatch { expected: 0x6A, .. }));
    assert_eq!(errors[1], Error::UnsupportedType("GPXYZ".to_string()));
    assert!(matches!(errors[2], Error::Framing(_)));
    assert!(matches!(errors[3], Error::Range { context: "latitude", .. }));
    assert!(matches!(errors[4], Error::Enum { context: "validity", .. }));
    assert!(matches!(errors[5], Error::Numeric { context: "speed", .. }));
    assert!(matches!(errors[6], Error::Format { context: "date", .. }));
}

#[test]
fn test_decode_non_finite_position() {
    let line = framed("GPRMC,123519,A,inf,N,01131.000,E,022.4,084.4,230394,003.1,W");
    assert!(matches!(
        decode(&line),
        Err(Error::Numeric { context: "latitude", .. })
    ));
}

#[test]
fn test_decode_malformed_time() {
    for time in ["12351", "12351e0", "1235+5"] {
        let line = framed(&format!(
            "GPRMC,{time},A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W"
        ));
        assert!(
            matches!(decode(&line), Err(Error::Format { context: "time", .. })),
            "{time}"
        );
    }
}

#[test]
fn test_decode_first_error_wins() {
    // bad validity and bad speed; validity is read first
    let line = framed("GPRMC,123519,X,4807.038,N,01131.000,E,abc,084.4,230394,003.1,W");
    assert!(matches!(
        decode(&line),
        Err(Error::Enum { context: "validity", .. })
    ));
}

#[test]
fn test_decode_with_config() {
    let line = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K";
    assert!(matches!(decode(line), Err(Error::Framing(_))));

    let config = FrameConfig {
        checksum: ChecksumMode::Optional,
        ..Default::default()
    };
    let record = decode_with(line, &config).unwrap();
    assert_eq!(record.frame().checksum(), None);
}
