use std::io::{self, BufRead, IsTerminal};

use nmea_geo::{Record, decode, geohash, pluscode, zlatlong};

const SAMPLE: &[&str] = &[
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
    "$GPGSV,3,3,11,22,42,067,42,24,14,311,43,27,05,244,00*4D",
    "!AIVDM,1,1,,A,13aGt0PP0jPN@9fMPKVDJgwfR>`<,0*55",
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B",
    "$GPXYZ,1,2*4F",
];

fn print_position(latitude: f64, longitude: f64, altitude: Option<f64>) {
    println!("  position: {latitude:.6}, {longitude:.6}");
    match altitude {
        Some(altitude) => {
            println!("  geohash:  {}", geohash::encode_3d(latitude, longitude, altitude));
            println!("  pluscode: {}", pluscode::encode_3d(latitude, longitude, altitude));
            println!("  zlatlong: {}", zlatlong::encode_3d(latitude, longitude, altitude));
        }
        None => {
            println!("  geohash:  {}", geohash::encode(latitude, longitude));
            println!("  pluscode: {}", pluscode::encode(latitude, longitude));
            println!("  zlatlong: {}", zlatlong::encode(latitude, longitude));
        }
    }
}

fn print(line: &str) {
    println!("{line}");

    match decode(line) {
        Ok(Record::RMC(rmc)) => {
            if let Some(timestamp) = rmc.timestamp() {
                println!("  fix at {timestamp}");
            }
            print_position(rmc.latitude, rmc.longitude, None);
        }
        Ok(Record::GGA(gga)) => {
            println!("  {} satellites, hdop {}", gga.satellites, gga.hdop);
            print_position(gga.latitude, gga.longitude, Some(gga.altitude));
        }
        Ok(Record::VDMVDO(vdm)) => {
            println!("  {} payload bits on channel {}", vdm.payload.len(), vdm.channel);
        }
        Ok(record) => println!("  {record:?}"),
        Err(e) => println!("  error: {e}"),
    }
}

/// Decodes the lines piped in on stdin, or a built-in sample when run interactively.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        SAMPLE.iter().for_each(|line| print(line));
        return Ok(());
    }

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            print(line.trim());
        }
    }

    Ok(())
}
