use super::super::state::DrawingMode;
use super::super::use_cases::export::ExportVariant;
use crate::shared::DrawingOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    // ── Zeiger über der Karte (Pixel relativ zum Viewport) ──────────
    /// Primärtaste gedrückt
    PointerPressed { pos: glam::DVec2 },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { pos: glam::DVec2 },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Zeiger hat die Kartenfläche verlassen
    PointerLeft,

    // ── Zeichnen ────────────────────────────────────────────────────
    /// Modus angefordert; der aktive Modus wird dabei ausgeschaltet
    DrawingModeRequested { mode: DrawingMode },
    /// Strichfarbe für neue Strokes gewählt
    StrokeColorChanged { color: String },
    /// Zuletzt gezeichneten Stroke entfernen
    UndoRequested,
    /// Alle Strokes entfernen
    ClearDrawingsRequested,

    // ── Export / Import ─────────────────────────────────────────────
    /// Export angefordert (zeigt Speichern-Dialog)
    ExportRequested { variant: ExportVariant },
    /// Speicherpfad für den Export gewählt
    ExportPathSelected {
        variant: ExportVariant,
        path: String,
    },
    /// GeoJSON-Import angefordert (zeigt Dateidialog)
    ImportRequested,
    /// GeoJSON-Datei im Dialog gewählt
    ImportFileSelected { path: String },
    /// Datei per Drag & Drop auf die Karte gezogen
    FileDropped { name: String, contents: String },

    // ── Karte ───────────────────────────────────────────────────────
    /// Karte um ein Pixel-Delta verschieben
    CameraPan { delta: glam::DVec2 },
    /// Zoom um `delta` Stufen (optional um einen Fokuspunkt in Pixeln)
    CameraZoom {
        delta: f64,
        focus_px: Option<glam::DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,

    // ── Optionen ────────────────────────────────────────────────────
    /// Optionen geändert (wird persistiert)
    OptionsChanged { options: DrawingOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Statusnachricht schließen
    StatusMessageDismissed,
}
