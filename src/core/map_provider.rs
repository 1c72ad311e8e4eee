//! MapProvider-Trait: Schnittstelle des Zeichen-Layers zur Host-Karte.
//!
//! Der Zeichen-Layer kennt weder Kachel-Server noch Widget-Objekte der
//! konkreten Kartenbibliothek. Er braucht nur Projektion, Zoom, Drag-Sperre
//! und die Overlay-Verwaltung.

use glam::DVec2;

use super::{GeoBounds, GeoPoint, OverlayId, OverlayLayer};

/// Fähigkeiten einer Host-Karte, die der Zeichen-Layer nutzt.
pub trait MapProvider {
    /// Projiziert einen Geo-Punkt in Container-Pixel (Ursprung oben links im Viewport).
    fn project_to_pixel(&self, point: GeoPoint) -> DVec2;

    /// Inverse Projektion: Container-Pixel → Geo-Punkt.
    fn project_to_geo(&self, pixel: DVec2) -> GeoPoint;

    /// Aktueller (ggf. fraktionaler) Zoom-Level.
    fn zoom(&self) -> f64;

    /// Aktiviert oder sperrt das Verschieben der Karte per Drag.
    fn set_drag_enabled(&mut self, enabled: bool);

    /// Gibt zurück, ob Drag-Panning aktuell erlaubt ist.
    fn drag_enabled(&self) -> bool;

    /// Fügt einen Layer hinzu und gibt dessen Handle zurück.
    fn add_overlay(&mut self, layer: OverlayLayer) -> OverlayId;

    /// Entfernt einen Layer. `None` wenn das Handle unbekannt ist.
    fn remove_overlay(&mut self, id: OverlayId) -> Option<OverlayLayer>;

    /// Alle Layer in Einfüge-Reihenfolge.
    fn overlays(&self) -> Vec<(OverlayId, &OverlayLayer)>;

    /// Passt Zentrum und Zoom so an, dass `bounds` vollständig sichtbar ist.
    fn fit_bounds(&mut self, bounds: GeoBounds);
}
