use crate::{ChecksumMode, Error, FrameConfig, LineEndingMode, RawFrame, tests::framed};

const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

#[test]
fn test_checksum_ok() {
    let frame = RawFrame::parse(RMC).unwrap();
    assert_eq!(frame.checksum(), Some(0x6A));
    assert_eq!(frame.prefix(), "GPRMC");
    assert_eq!(frame.fields().len(), 11);
    assert_eq!(frame.raw(), RMC);
    assert_eq!(frame.to_string(), RMC);
}

#[test]
fn test_checksum_lowercase_hex() {
    let frame = RawFrame::parse(&RMC.replace("*6A", "*6a")).unwrap();
    assert_eq!(frame.checksum(), Some(0x6A));
}

#[test]
fn test_checksum_bit_flips() {
    for bit in 0..8 {
        let flipped = 0x6Au8 ^ (1 << bit);
        let line = RMC.replace("*6A", &format!("*{flipped:02X}"));

        assert_eq!(
            RawFrame::parse(&line),
            Err(Error::ChecksumMismatch {
                expected: 0x6A,
                found: format!("{flipped:02X}"),
            }),
            "{line:?}"
        );
    }
}

#[test]
fn test_checksum_malformed() {
    for suffix in ["*6", "*6A4", "*zz", "*"] {
        let line = RMC.replace("*6A", suffix);
        assert!(
            matches!(RawFrame::parse(&line), Err(Error::ChecksumMismatch { .. })),
            "{line:?}"
        );
    }
}

#[test]
fn test_checksum_missing() {
    let line = RMC.trim_end_matches("*6A");
    assert!(matches!(RawFrame::parse(line), Err(Error::Framing(_))));

    let config = FrameConfig {
        checksum: ChecksumMode::Optional,
        ..Default::default()
    };
    let frame = RawFrame::parse_with(line, &config).unwrap();
    assert_eq!(frame.checksum(), None);
    assert_eq!(frame.sentence_type(), "RMC");

    let bad = RMC.replace("*6A", "*6B");
    assert!(matches!(
        RawFrame::parse_with(&bad, &config),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_frame_shape_errors() {
    let cases = [
        "",
        "GPRMC,123519*41",
        "#GPRMC,123519*41",
        "$GPRMC,123519,\u{00B0}*41",
    ];

    for line in cases {
        let result = RawFrame::parse(line);
        assert!(
            matches!(&result, Err(e) if e.is_frame_error()),
            "Failed: {line:?}\n\t{result:?}"
        );
    }
}

#[test]
fn test_line_endings() {
    let with_crlf = format!("{RMC}\r\n");

    assert!(RawFrame::parse(&with_crlf).is_ok());

    let required = FrameConfig {
        line_ending: LineEndingMode::Required,
        ..Default::default()
    };
    assert!(RawFrame::parse_with(&with_crlf, &required).is_ok());
    assert!(RawFrame::parse_with(RMC, &required).is_err());

    let forbidden = FrameConfig {
        line_ending: LineEndingMode::Forbidden,
        ..Default::default()
    };
    assert!(RawFrame::parse_with(RMC, &forbidden).is_ok());
    assert!(RawFrame::parse_with(&with_crlf, &forbidden).is_err());
}

#[test]
fn test_encapsulated() {
    let frame = RawFrame::parse("!AIVDM,1,1,,A,13aGt0PP0jPN@9fMPKVDJgwfR>`<,0*55").unwrap();
    assert!(frame.is_encapsulated());
    assert_eq!(frame.talker(), "AI");
    assert_eq!(frame.sentence_type(), "VDM");
    assert_eq!(frame.fields()[4], "13aGt0PP0jPN@9fMPKVDJgwfR>`<");
}

#[test]
fn test_proprietary_prefix() {
    let frame = RawFrame::parse("$PMTK001,604,3*32").unwrap();
    assert_eq!(frame.talker(), "PMTK");
    assert_eq!(frame.sentence_type(), "001");
    assert_eq!(frame.fields(), ["604", "3"]);

    let frame = RawFrame::parse(&framed("PGRME,15.0,M,45.0,M,25.0,M")).unwrap();
    assert_eq!(frame.talker(), "P");
    assert_eq!(frame.sentence_type(), "GRME");

    let frame = RawFrame::parse(&framed("G")).unwrap();
    assert_eq!(frame.talker(), "G");
    assert_eq!(frame.sentence_type(), "");
    assert!(frame.fields().is_empty());
}

#[test]
fn test_tag_block() {
    let line = format!("\\s:2573535,c:1643829700*08\\{RMC}");
    let frame = RawFrame::parse(&line).unwrap();
    let block = frame.tag_block().unwrap();

    assert_eq!(block.source.as_deref(), Some("2573535"));
    assert_eq!(block.time, Some(1643829700));
    assert_eq!(frame.raw(), RMC);

    let line = format!("\\s:2573535,c:1643829700*09\\{RMC}");
    assert!(matches!(RawFrame::parse(&line), Err(Error::TagBlock(_))));

    let line = format!("\\s:2573535,c:1643829700*08{RMC}");
    assert!(matches!(RawFrame::parse(&line), Err(Error::TagBlock(_))));
}
