//! Test-Double für `MapProvider` mit flacher 1:1-Projektion.

use glam::DVec2;
use indexmap::IndexMap;

use crate::core::{GeoBounds, GeoPoint, MapProvider, OverlayId, OverlayLayer};

/// Pixel `(x, y)` entspricht Geo-Punkt `(lat = y, lng = x)`.
pub(crate) struct FlatMap {
    pub zoom: f64,
    pub drag_enabled: bool,
    pub overlays: IndexMap<OverlayId, OverlayLayer>,
    pub fitted: Option<GeoBounds>,
    next_id: OverlayId,
}

impl Default for FlatMap {
    fn default() -> Self {
        Self {
            zoom: 10.0,
            drag_enabled: true,
            overlays: IndexMap::new(),
            fitted: None,
            next_id: 1,
        }
    }
}

impl MapProvider for FlatMap {
    fn project_to_pixel(&self, point: GeoPoint) -> DVec2 {
        DVec2::new(point.lng, point.lat)
    }

    fn project_to_geo(&self, pixel: DVec2) -> GeoPoint {
        GeoPoint::new(pixel.y, pixel.x)
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    fn add_overlay(&mut self, layer: OverlayLayer) -> OverlayId {
        let id = self.next_id;
        self.next_id += 1;
        self.overlays.insert(id, layer);
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) -> Option<OverlayLayer> {
        self.overlays.shift_remove(&id)
    }

    fn overlays(&self) -> Vec<(OverlayId, &OverlayLayer)> {
        self.overlays.iter().map(|(id, layer)| (*id, layer)).collect()
    }

    fn fit_bounds(&mut self, bounds: GeoBounds) {
        self.fitted = Some(bounds);
    }
}
