//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Alle Koordinaten sind bereits in Viewport-Pixel projiziert.

/// Eine Linie in Viewport-Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolyline {
    /// Punkte in Pixel-Koordinaten
    pub points: Vec<[f32; 2]>,
    /// CSS-Farbstring
    pub color: String,
    /// Strichbreite in Pixeln
    pub width: f32,
    /// Ring (letzter Punkt wird mit dem ersten verbunden)
    pub closed: bool,
}

/// Einzelner Punkt-Marker in Viewport-Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePoint {
    /// Position in Pixeln
    pub position: [f32; 2],
    /// CSS-Farbstring
    pub color: String,
}

/// Radierer-Indikator.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCircle {
    /// Mittelpunkt in Pixeln
    pub center: [f32; 2],
    /// Radius in Pixeln
    pub radius_px: f32,
    /// Radius in Metern (für die Statuszeile)
    pub radius_m: f64,
    /// CSS-Farbstring
    pub color: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Kachelgrenzen der Basiskarte (leer ohne Tile-Layer)
    pub tile_grid: Vec<ScenePolyline>,
    /// Linien und Ringe importierter Overlays
    pub overlay_lines: Vec<ScenePolyline>,
    /// Punkte importierter Overlays
    pub overlay_points: Vec<ScenePoint>,
    /// Fertige Strokes in Zeichenreihenfolge
    pub strokes: Vec<ScenePolyline>,
    /// Geglättete Vorschau des laufenden Strokes
    pub preview: Option<ScenePolyline>,
    /// Radierer-Kreis (nur im Radier-Modus)
    pub eraser: Option<SceneCircle>,
    /// Quellenangabe der Basiskarte
    pub attribution: Option<String>,
}

impl RenderScene {
    /// Gibt zurück, ob gezeichnete oder laufende Strokes vorhanden sind.
    pub fn has_strokes(&self) -> bool {
        !self.strokes.is_empty() || self.preview.is_some()
    }
}
