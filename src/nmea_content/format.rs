/// Renders the magnitude of `degrees` as `D° M' S.SSSSSS"`.
///
/// The sign is dropped; pair the result with a hemisphere letter.
///
/// ```rust
/// use nmea_geo::nmea_content::format_dms;
///
/// assert_eq!(format_dms(48.1173), "48\u{00B0} 7' 2.280000\"");
/// ```
pub fn format_dms(degrees: f64) -> String {
    let value = degrees.abs();
    let whole = value.floor();
    let minutes = (60.0 * (value - whole)).floor();
    let seconds = 3600.0 * (value - whole - minutes / 60.0);

    format!("{}\u{00B0} {}' {seconds:.6}\"", whole as i64, minutes as i64)
}

/// Renders the magnitude of `degrees` in the NMEA `dddmm.mmmm` layout.
///
/// ```rust
/// use nmea_geo::nmea_content::format_gps;
///
/// assert_eq!(format_gps(48.1173), "4807.0380");
/// assert_eq!(format_gps(-11.516666666666667), "1131.0000");
/// ```
pub fn format_gps(degrees: f64) -> String {
    let value = degrees.abs();
    let whole = value.floor();
    let minutes = (value - whole) * 60.0;
    let padding = if minutes < 10.0 { "0" } else { "" };

    format!("{}{padding}{minutes:.4}", whole as i64)
}
