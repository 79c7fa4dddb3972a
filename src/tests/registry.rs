use std::{any::Any, sync::Arc, thread};

use crate::{
    Error, FieldParser, RawFrame, Record, Registry, Result,
    nmea_content::{CustomSentence, Status},
    tests::framed,
};

/// `$--XTE,A,A,x.x,a,N` cross-track error, enough of it to exercise the registry.
#[derive(Debug)]
struct XTE {
    frame: RawFrame,
    status: Option<Status>,
    distance: f64,
    steer_right: bool,
}

impl CustomSentence for XTE {
    fn frame(&self) -> &RawFrame {
        &self.frame
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn decode_xte(frame: RawFrame) -> Result<Record> {
    let mut p = FieldParser::new(&frame);
    p.assert_type(&["XTE"]);

    let status = p.enum_value(0, "status");
    let distance = p.float64(2, "distance");
    let steer_right = p.enum_string(3, "direction", &["L", "R"]) == "R";

    p.finish()?;

    Ok(Record::Custom(Box::new(XTE {
        frame,
        status,
        distance,
        steer_right,
    })))
}

#[test]
fn test_custom_decoder() {
    let registry = Registry::new();
    let line = framed("GPXTE,A,A,0.67,L,N");

    assert_eq!(
        registry.decode(&line).unwrap_err(),
        Error::UnsupportedType("GPXTE".to_string())
    );

    registry.register("XTE", decode_xte).unwrap();
    assert!(registry.is_registered("XTE"));

    let record = registry.decode(&line).unwrap();
    assert_eq!(record.sentence_type(), "XTE");
    assert!(record.downcast_custom::<XTE>().is_some());

    let xte = record.downcast_custom::<XTE>().unwrap();
    assert_eq!(xte.status, Some(Status::Valid));
    assert_eq!(xte.distance, 0.67);
    assert!(!xte.steer_right);

    let bad = framed("GPXTE,A,A,far,L,N");
    assert!(matches!(
        registry.decode(&bad),
        Err(Error::Numeric { context: "distance", .. })
    ));
}

#[test]
fn test_duplicate_registration() {
    let registry = Registry::new();
    registry.register("XTE", decode_xte).unwrap();

    let result = registry.register("XTE", |_| Err(Error::Framing("second decoder")));
    assert_eq!(result, Err(Error::DuplicateRegistration("XTE".to_string())));

    let record = registry.decode(&framed("GPXTE,A,A,1.5,R,N")).unwrap();
    assert!(record.downcast_custom::<XTE>().unwrap().steer_right);
}

#[test]
fn test_custom_overrides_builtin() {
    let registry = Registry::new();
    let line = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";
    assert!(matches!(registry.decode(line), Ok(Record::VTG(_))));

    registry
        .register("VTG", |frame| {
            Ok(Record::Custom(Box::new(XTE {
                frame,
                status: None,
                distance: 0.0,
                steer_right: false,
            })))
        })
        .unwrap();

    let record = registry.decode(line).unwrap();
    assert!(record.downcast_custom::<XTE>().is_some());

    // built-ins are not counted as registrations
    assert!(!registry.is_registered("RMC"));
    assert!(registry.register("RMC", decode_xte).is_ok());
}

#[test]
fn test_downcast_builtin() {
    let record = Registry::new()
        .decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48")
        .unwrap();
    assert!(record.downcast_custom::<XTE>().is_none());
}

#[test]
fn test_concurrent_registration() {
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let shared = registry.register("XTE", decode_xte).is_ok();
                let own = registry.register(&format!("X{i:02}"), decode_xte).is_ok();
                (shared, own)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|(shared, _)| *shared).count(), 1);
    assert!(results.iter().all(|(_, own)| *own));
    assert_eq!(format!("{registry:?}").matches("\"X").count(), 9);
    assert!(registry.decode(&framed("GPXTE,A,A,0.67,L,N")).is_ok());
}

#[test]
fn test_global_registry() {
    let line = framed("GPXTE,A,A,0.67,L,N");
    if !crate::Registry::global().is_registered("XTE") {
        crate::register_decoder("XTE", decode_xte).unwrap();
    }
    assert!(crate::decode(&line).unwrap().downcast_custom::<XTE>().is_some());
}
