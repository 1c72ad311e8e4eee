//! Application State: zentrale Datenhaltung.

use super::use_cases::export::ExportVariant;
use crate::core::{GeoPoint, MapViewport, Stroke, StrokeList};
use crate::shared::DrawingOptions;

/// Exklusiver Zeichenmodus. Es ist immer genau ein Wert aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Karte verschieben, keine Zeichen-Eingabe
    #[default]
    None,
    /// Freihand zeichnen
    Draw,
    /// Punkte unter dem Zeiger radieren
    Erase,
}

impl DrawingMode {
    /// Anzeigename für Toolbar und Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            DrawingMode::None => "Navigieren",
            DrawingMode::Draw => "Zeichnen",
            DrawingMode::Erase => "Radieren",
        }
    }
}

/// Laufender Stroke zwischen Pointer-Down und Pointer-Up.
#[derive(Debug, Clone, PartialEq)]
pub struct InProgressStroke {
    /// Ungeglättete Eingabepunkte
    pub raw: Vec<GeoPoint>,
    /// Geglättete Live-Vorschau von `raw`
    pub preview: Stroke,
}

/// Radierer-Indikator; wird bei jeder Zeigerbewegung neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserCursor {
    /// Mittelpunkt unter dem Zeiger
    pub center: GeoPoint,
    /// Radius in Metern bei aktuellem Zoom und Breitengrad
    pub radius_m: f64,
}

/// Zustand des Zeichen-Layers
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Aktiver Modus
    pub mode: DrawingMode,
    /// Fertige Strokes in Zeichenreihenfolge
    pub strokes: StrokeList,
    /// Höchstens ein laufender Stroke
    pub in_progress: Option<InProgressStroke>,
    /// Farbe für neue Strokes
    pub stroke_color: String,
    /// Radierer-Kreis (nur im Radier-Modus gesetzt)
    pub eraser_cursor: Option<EraserCursor>,
}

impl DrawingState {
    /// Erstellt einen leeren Zeichenzustand mit der gegebenen Startfarbe.
    pub fn new(stroke_color: impl Into<String>) -> Self {
        Self {
            mode: DrawingMode::None,
            strokes: StrokeList::new(),
            in_progress: None,
            stroke_color: stroke_color.into(),
            eraser_cursor: None,
        }
    }

    /// Gibt zurück, ob gerade ein Stroke aufgezeichnet wird.
    pub fn is_recording(&self) -> bool {
        self.in_progress.is_some()
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new(crate::shared::options::DEFAULT_STROKE_COLOR)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Import-Datei-Dialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Export-Variante, für die der Speichern-Dialog geöffnet werden soll
    pub pending_export: Option<ExportVariant>,
    /// Temporäre Statusnachricht (Import-Fehler, Export-Ergebnis, …)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen UI-Zustand ohne offene Dialoge.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichen-Layer (Strokes, Modus, Vorschau, Radierer)
    pub drawing: DrawingState,
    /// Kartenausschnitt inkl. Overlays
    pub map: MapViewport,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: DrawingOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(DrawingOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: DrawingOptions) -> Self {
        let options = options.clamped();
        let [lat, lng] = options.initial_center;
        let mut map = MapViewport::new(GeoPoint::new(lat, lng), options.initial_zoom);
        map.set_zoom_limits(options.zoom_min, options.zoom_max);
        map.set_zoom(options.initial_zoom);

        Self {
            drawing: DrawingState::new(options.default_stroke_color.clone()),
            map,
            ui: UiState::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl fertiger Strokes (für UI-Anzeige)
    pub fn stroke_count(&self) -> usize {
        self.drawing.strokes.len()
    }

    /// Anzahl importierter Vektor-Overlays (für UI-Anzeige)
    pub fn vector_overlay_count(&self) -> usize {
        use crate::core::MapProvider;
        self.map
            .overlays()
            .iter()
            .filter(|(_, layer)| !layer.is_tile())
            .count()
    }
}
