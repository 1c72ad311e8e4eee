//! Web-Mercator-Viewport für Pan und Zoom, Standard-Implementierung von `MapProvider`.

use glam::DVec2;
use indexmap::IndexMap;

use super::projection::{geo_to_world_px, world_px_to_geo};
use super::{GeoBounds, GeoPoint, MapProvider, OverlayId, OverlayLayer};

/// Kartenausschnitt mit Zentrum, Zoom und Layer-Liste.
#[derive(Debug, Clone)]
pub struct MapViewport {
    /// Geo-Zentrum des Ausschnitts
    pub center: GeoPoint,
    /// Zoom-Level (0 = ganze Welt in 256 px)
    pub zoom: f64,
    /// Viewport-Größe in Pixeln
    pub size: DVec2,
    /// Minimal erlaubter Zoom
    pub min_zoom: f64,
    /// Maximal erlaubter Zoom
    pub max_zoom: f64,
    drag_enabled: bool,
    overlays: IndexMap<OverlayId, OverlayLayer>,
    next_overlay_id: OverlayId,
}

impl MapViewport {
    /// Standard-Zoomgrenzen (Kachel-Schema 0..=19).
    pub const DEFAULT_MIN_ZOOM: f64 = 0.0;
    /// Maximaler Standard-Zoom.
    pub const DEFAULT_MAX_ZOOM: f64 = 19.0;
    /// Rand beim Einpassen einer Bounding-Box (Anteil der Viewport-Größe).
    const FIT_PADDING: f64 = 0.9;

    /// Erstellt einen Viewport um `center` bei `zoom` (Größe 800×600 bis zum ersten Resize).
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::DEFAULT_MIN_ZOOM, Self::DEFAULT_MAX_ZOOM),
            size: DVec2::new(800.0, 600.0),
            min_zoom: Self::DEFAULT_MIN_ZOOM,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
            drag_enabled: true,
            overlays: IndexMap::new(),
            next_overlay_id: 1,
        }
    }

    /// Setzt die Zoomgrenzen und klemmt den aktuellen Zoom.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Aktualisiert die Viewport-Größe (min. 1×1 Pixel).
    pub fn set_size(&mut self, size: DVec2) {
        self.size = size.max(DVec2::ONE);
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Inhalt folgt dem Zeiger).
    pub fn pan_px(&mut self, delta: DVec2) {
        let center_px = geo_to_world_px(self.center, self.zoom);
        self.center = world_px_to_geo(center_px - delta, self.zoom);
    }

    /// Setzt den Zoom (geklemmt) ohne Fokuspunkt.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Ändert den Zoom um `delta` Stufen.
    ///
    /// Falls `focus_px` angegeben ist, bleibt der Geo-Punkt unter dem Zeiger
    /// an derselben Bildschirmposition.
    pub fn zoom_around(&mut self, delta: f64, focus_px: Option<DVec2>) {
        let Some(focus) = focus_px else {
            self.set_zoom(self.zoom + delta);
            return;
        };
        let focus_geo = self.project_to_geo(focus);
        self.set_zoom(self.zoom + delta);
        // Zentrum korrigieren, damit focus_geo wieder unter focus liegt
        let drift = self.project_to_pixel(focus_geo) - focus;
        self.pan_px(-drift);
    }

    fn origin_world_px(&self) -> DVec2 {
        geo_to_world_px(self.center, self.zoom) - self.size * 0.5
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new(GeoPoint::new(0.0, 0.0), 2.0)
    }
}

impl MapProvider for MapViewport {
    fn project_to_pixel(&self, point: GeoPoint) -> DVec2 {
        geo_to_world_px(point, self.zoom) - self.origin_world_px()
    }

    fn project_to_geo(&self, pixel: DVec2) -> GeoPoint {
        world_px_to_geo(pixel + self.origin_world_px(), self.zoom)
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
        let id = self.next_overlay_id;
        self.next_overlay_id += 1;
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
        let nw = geo_to_world_px(
            GeoPoint::new(bounds.north_east.lat, bounds.south_west.lng),
            0.0,
        );
        let se = geo_to_world_px(
            GeoPoint::new(bounds.south_west.lat, bounds.north_east.lng),
            0.0,
        );
        let extent = (se - nw).abs();

        let zoom = if extent.x <= f64::EPSILON && extent.y <= f64::EPSILON {
            self.max_zoom
        } else {
            let scale_x = self.size.x / extent.x.max(f64::EPSILON);
            let scale_y = self.size.y / extent.y.max(f64::EPSILON);
            (scale_x.min(scale_y) * Self::FIT_PADDING).log2().floor()
        };
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.center = world_px_to_geo((nw + se) * 0.5, 0.0);

        log::debug!(
            "Viewport eingepasst: Zentrum ({:.5}, {:.5}), Zoom {:.1}",
            self.center.lat,
            self.center.lng,
            self.zoom
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> MapViewport {
        let mut vp = MapViewport::new(GeoPoint::new(48.137, 11.575), 13.0);
        vp.set_size(DVec2::new(800.0, 600.0));
        vp
    }

    #[test]
    fn center_projects_to_viewport_middle() {
        let vp = viewport();
        let px = vp.project_to_pixel(vp.center);
        assert_relative_eq!(px.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(px.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn pixel_geo_roundtrip() {
        let vp = viewport();
        let geo = vp.project_to_geo(DVec2::new(123.0, 456.0));
        let px = vp.project_to_pixel(geo);
        assert_relative_eq!(px.x, 123.0, epsilon = 1e-6);
        assert_relative_eq!(px.y, 456.0, epsilon = 1e-6);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut vp = viewport();
        let anchor = vp.project_to_geo(DVec2::new(100.0, 100.0));
        vp.pan_px(DVec2::new(50.0, -20.0));
        let px = vp.project_to_pixel(anchor);
        assert_relative_eq!(px.x, 150.0, epsilon = 1e-6);
        assert_relative_eq!(px.y, 80.0, epsilon = 1e-6);
    }

    #[test]
    fn zoom_around_focus_keeps_point_fixed() {
        let mut vp = viewport();
        let focus = DVec2::new(650.0, 120.0);
        let geo_under_focus = vp.project_to_geo(focus);

        vp.zoom_around(1.5, Some(focus));

        assert_relative_eq!(vp.zoom, 14.5);
        let px = vp.project_to_pixel(geo_under_focus);
        assert_relative_eq!(px.x, focus.x, epsilon = 1e-6);
        assert_relative_eq!(px.y, focus.y, epsilon = 1e-6);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut vp = viewport();
        vp.set_zoom_limits(3.0, 15.0);
        vp.zoom_around(10.0, None);
        assert_relative_eq!(vp.zoom, 15.0);
        vp.zoom_around(-20.0, None);
        assert_relative_eq!(vp.zoom, 3.0);
    }

    #[test]
    fn fit_bounds_makes_corners_visible() {
        let mut vp = viewport();
        let bounds = GeoBounds {
            south_west: GeoPoint::new(47.9, 11.2),
            north_east: GeoPoint::new(48.3, 11.9),
        };

        vp.fit_bounds(bounds);

        for corner in [bounds.south_west, bounds.north_east] {
            let px = vp.project_to_pixel(corner);
            assert!(px.x >= 0.0 && px.x <= vp.size.x, "x außerhalb: {px:?}");
            assert!(px.y >= 0.0 && px.y <= vp.size.y, "y außerhalb: {px:?}");
        }
    }

    #[test]
    fn fit_bounds_on_single_point_uses_max_zoom() {
        let mut vp = viewport();
        let p = GeoPoint::new(50.0, 8.0);
        vp.fit_bounds(GeoBounds::from_point(p));
        assert_relative_eq!(vp.zoom, vp.max_zoom);
        assert_relative_eq!(vp.center.lat, 50.0, epsilon = 1e-9);
        assert_relative_eq!(vp.center.lng, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn overlays_keep_insertion_order_and_can_be_removed() {
        let mut vp = viewport();
        let a = vp.add_overlay(OverlayLayer::tile("Basiskarte", "OSM"));
        let b = vp.add_overlay(OverlayLayer::tile("Luftbild", "Esri"));

        let ids: Vec<OverlayId> = vp.overlays().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);

        assert!(vp.remove_overlay(a).is_some());
        assert!(vp.remove_overlay(a).is_none());
        assert_eq!(vp.overlays().len(), 1);
    }

    #[test]
    fn drag_flag_roundtrip() {
        let mut vp = viewport();
        assert!(vp.drag_enabled());
        vp.set_drag_enabled(false);
        assert!(!vp.drag_enabled());
    }
}
