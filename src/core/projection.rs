//! Sphärische Web-Mercator-Projektion (EPSG:3857) im Kachel-Pixelraum.
//!
//! Welt-Pixel bei Zoom `z`: die gesamte Erde ist `256 * 2^z` Pixel breit,
//! Ursprung oben links (Nordwest), +Y zeigt nach Süden.

use glam::DVec2;

use super::GeoPoint;

/// Äquatorumfang der Erde in Metern (sphärisches Web-Mercator-Modell).
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;
/// Zweierpotenz der Kachelgröße (`2^8 = 256` Pixel).
pub const TILE_SIZE_EXPONENT: i32 = 8;
/// Breitengrad-Grenze des Web-Mercator-Quadrats.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Breite der Welt in Pixeln bei gegebenem (fraktionalem) Zoom.
pub fn world_size_px(zoom: f64) -> f64 {
    (zoom + TILE_SIZE_EXPONENT as f64).exp2()
}

/// Meter pro Bildschirmpixel bei gegebener Breite und Zoom.
///
/// `EARTH_CIRCUMFERENCE_M * cos(lat) / 2^(zoom + 8)`
pub fn meters_per_pixel(lat: f64, zoom: f64) -> f64 {
    EARTH_CIRCUMFERENCE_M * lat.to_radians().cos() / world_size_px(zoom)
}

/// Projiziert einen Geo-Punkt in Welt-Pixel bei gegebenem Zoom.
pub fn geo_to_world_px(point: GeoPoint, zoom: f64) -> DVec2 {
    let size = world_size_px(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0;
    let y = 0.5 - (lat.tan() + 1.0 / lat.cos()).ln() / (2.0 * std::f64::consts::PI);
    DVec2::new(x * size, y * size)
}

/// Inverse Projektion: Welt-Pixel → Geo-Punkt.
pub fn world_px_to_geo(px: DVec2, zoom: f64) -> GeoPoint {
    let size = world_size_px(zoom);
    let x = px.x / size;
    let y = px.y / size;
    let lng = x * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint::new(lat, lng)
}
