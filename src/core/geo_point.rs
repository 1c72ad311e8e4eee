//! Geographische Punkte und Bounding-Boxen (WGS84, Dezimalgrad).

use serde::{Deserialize, Serialize};

/// Ein Breiten-/Längengrad-Paar in Dezimalgrad.
///
/// Entsteht ausschließlich über Projektion oder Import und wird danach
/// nicht mehr verändert (`Copy`, keine Setter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad (Nord positiv)
    pub lat: f64,
    /// Längengrad (Ost positiv)
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt aus Breite und Länge.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Lineare Interpolation komponentenweise: `self * (1 - t) + other * t`.
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }

    /// GeoJSON-Reihenfolge `[lng, lat]`.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Baut einen Punkt aus einer GeoJSON-Position (`[lng, lat, ...]`).
    ///
    /// Gibt `None` zurück wenn weniger als zwei Komponenten vorhanden sind
    /// oder eine davon nicht endlich ist.
    pub fn from_lng_lat(position: &[f64]) -> Option<GeoPoint> {
        match position {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some(GeoPoint::new(*lat, *lng)),
            _ => None,
        }
    }
}

/// Achsenparallele Bounding-Box in Geo-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke
    pub south_west: GeoPoint,
    /// Nordost-Ecke
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Bounding-Box, die genau einen Punkt umschließt.
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Bounding-Box über beliebig viele Punkte. `None` bei leerer Eingabe.
    pub fn from_points<I: IntoIterator<Item = GeoPoint>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Erweitert die Box so, dass `point` enthalten ist.
    pub fn extend(&mut self, point: GeoPoint) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Vereinigt zwei Boxen.
    pub fn union(mut self, other: GeoBounds) -> GeoBounds {
        self.extend(other.south_west);
        self.extend(other.north_east);
        self
    }

    /// Geometrischer Mittelpunkt (in Grad, nicht in Mercator-Metern).
    pub fn center(&self) -> GeoPoint {
        self.south_west.lerp(self.north_east, 0.5)
    }
}
