use crate::{
    Codec, Coordinate, Error,
    codec::{Geohash, Pluscode, Zlatlong},
    geohash, pluscode, zlatlong,
};

const POINTS: [(f64, f64); 8] = [
    (48.1173, 11.1833),
    (51.5, -0.12),
    (-33.86514, 151.2099),
    (0.0, 0.0),
    (89.5, 179.5),
    (-89.5, -179.5),
    (37.42242, -122.08585),
    (-0.00001, 0.00001),
];

fn assert_round_trip<C: Codec>(tolerance: f64) {
    for (latitude, longitude) in POINTS {
        let code = C::encode(latitude, longitude);
        let (lat, long) = C::decode(&code).unwrap();
        assert!(
            (lat - latitude).abs() <= tolerance && (long - longitude).abs() <= tolerance,
            "{}: ({latitude}, {longitude}) -> {code} -> ({lat}, {long})",
            C::SCHEME
        );
    }
}

#[test]
fn test_round_trip_within_precision() {
    assert_round_trip::<Geohash>(1e-5);
    assert_round_trip::<Pluscode>(1e-6);
    assert_round_trip::<Zlatlong>(0.0);
}

/// Distance between two longitudes, treating -180 and 180 as the same meridian.
fn longitude_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

fn assert_grid_round_trip<C: Codec>(tolerance: f64) {
    let latitudes = (0..=24_i32).map(|i| -90.0 + 7.5 * f64::from(i));
    for latitude in latitudes {
        let longitudes = (0..=24_i32)
            .map(|i| -180.0 + 15.0 * f64::from(i))
            .chain([-180.00000000000003, 179.99999, -179.99999]);

        for longitude in longitudes {
            let code = C::encode(latitude, longitude);
            let (lat, long) = C::decode(&code).unwrap_or_else(|e| {
                panic!("{}: ({latitude}, {longitude}) -> {code}: {e}", C::SCHEME)
            });
            assert!(
                (lat - latitude).abs() <= tolerance
                    && longitude_delta(long, longitude) <= tolerance,
                "{}: ({latitude}, {longitude}) -> {code} -> ({lat}, {long})",
                C::SCHEME
            );
        }
    }
}

#[test]
fn test_round_trip_over_grid() {
    assert_grid_round_trip::<Geohash>(1e-5);
    assert_grid_round_trip::<Pluscode>(1e-6);
    assert_grid_round_trip::<Zlatlong>(1e-9);
}

#[test]
fn test_geohash_known_point() {
    let (lat, long) = geohash::decode(&geohash::encode(48.1173, 11.1833)).unwrap();
    assert!((lat - 48.1173).abs() < 1e-5);
    assert!((long - 11.1833).abs() < 1e-5);
}

#[test]
fn test_pluscode_corruption() {
    let code = pluscode::encode(20.375, 2.775);
    assert!(pluscode::validate(&code).is_ok());
    assert!(pluscode::validate_full(&code).is_ok());

    let corrupted = code.replacen('F', "I", 1);
    assert!(pluscode::validate(&corrupted).is_err());
}

#[test]
fn test_zlatlong_exact() {
    assert_eq!(
        zlatlong::decode(&zlatlong::encode(51.5, -0.12)),
        Ok((51.5, -0.12))
    );
}

#[test]
fn test_3d_forms() {
    let here = Coordinate::new(48.1173, 11.1833).with_altitude(545.4);

    let code = Geohash::encode_coordinate(&here);
    assert_eq!(code, "u0xcwrrrtfbf@545.4");

    let code = Pluscode::encode_coordinate(&here);
    assert_eq!(code, "8FWH458M+W8F4343@545.40");
    let decoded = Pluscode::decode_coordinate(&code).unwrap();
    assert_eq!(decoded.altitude, Some(545.4));

    let code = Zlatlong::encode_coordinate(&here);
    assert_eq!(code, "wowhoi9_-B@545.4");
    assert_eq!(Zlatlong::decode_coordinate(&code).unwrap(), here);
}

#[test]
fn test_invalid_codes_never_panic() {
    let inputs = ["", "@", "@@", "+", "\u{00E9}", "zzzzzzzzzzzzzzzzzzzz", "0+0", "A@A"];

    for input in inputs {
        for result in [
            geohash::decode_3d(input).map(|_| ()),
            pluscode::decode_3d(input).map(|_| ()),
            zlatlong::decode_3d(input).map(|_| ()),
            pluscode::decode(input).map(|_| ()),
        ] {
            assert!(
                matches!(result, Err(Error::InvalidCode { .. })),
                "{input:?}: {result:?}"
            );
        }
    }
}
