//! KML coordinate-list parsing.

/// Parse a KML `coordinates` string into `(lon, lat)` pairs.
///
/// Tuples are separated by whitespace and components by commas:
/// `"lon,lat[,alt] lon,lat[,alt] ..."`. Altitude is ignored. A tuple that
/// does not yield two finite numbers is dropped without error.
pub fn parse_coordinates(s: &str) -> Vec<(f64, f64)> {
    s.split_whitespace().filter_map(parse_tuple).collect()
}

fn parse_tuple(token: &str) -> Option<(f64, f64)> {
    let mut parts = token.split(',');
    let lon: f64 = parts.next()?.parse().ok()?;
    let lat: f64 = parts.next()?.parse().ok()?;
    if !lon.is_finite() || !lat.is_finite() {
        return None;
    }
    Some((lon, lat))
}
