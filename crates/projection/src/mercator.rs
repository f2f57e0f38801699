//! Spherical web-Mercator projection at zoom level zero.
//!
//! Coordinates are in "world units": one full wrap of the globe spans
//! [`TILE_SIZE`] units horizontally, matching a single 256px base tile.
//! X grows eastward, Y grows southward.

use std::f64::consts::PI;

/// World size in projected units (one 256px tile at zoom 0).
pub const TILE_SIZE: f64 = 256.0;

/// Latitude at which the square web-Mercator world ends.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Project a longitude in degrees to world X.
///
/// Maps [-180, 180] onto [0, 256], strictly increasing.
#[inline]
pub fn lon_to_x(lon: f64) -> f64 {
    (lon + 180.0) * (TILE_SIZE / 360.0)
}

/// Project a latitude in degrees to world Y.
///
/// Strictly decreasing in latitude: the equator lands on 128, north is up
/// (smaller Y). Latitudes are clamped to [`MAX_LATITUDE`] so poles never
/// reach the logarithm's singularity.
#[inline]
pub fn lat_to_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lat_rad = lat * PI / 180.0;
    (TILE_SIZE / 2.0 / PI) * (PI - (PI / 4.0 + lat_rad / 2.0).tan().ln())
}
