use super::super::state::DrawingMode;
use super::super::use_cases::export::ExportVariant;
use crate::shared::DrawingOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Recorder ────────────────────────────────────────────────────
    /// Neuen Stroke an Pixelposition beginnen
    BeginStroke { pos: glam::DVec2 },
    /// Laufenden Stroke um einen Punkt verlängern
    ExtendStroke { pos: glam::DVec2 },
    /// Laufenden Stroke glätten und übernehmen
    FinishStroke,

    // ── Radierer ────────────────────────────────────────────────────
    /// Radier-Durchlauf an Pixelposition
    EraseAt { pos: glam::DVec2 },
    /// Radierer-Indikator ausblenden
    HideEraserCursor,

    // ── Zeichen-Steuerung ───────────────────────────────────────────
    /// Zeichenmodus setzen
    SetDrawingMode { mode: DrawingMode },
    /// Strichfarbe setzen
    SetStrokeColor { color: String },
    /// Zuletzt gezeichneten Stroke entfernen
    UndoLastStroke,
    /// Alle Strokes entfernen
    ClearStrokes,

    // ── Export / Import ─────────────────────────────────────────────
    /// Speichern-Dialog für eine Export-Variante öffnen
    RequestExportDialog { variant: ExportVariant },
    /// Export in eine Datei schreiben
    ExportDrawings {
        variant: ExportVariant,
        path: String,
    },
    /// Öffnen-Dialog für GeoJSON öffnen
    RequestImportDialog,
    /// GeoJSON-Datei als Overlay laden
    ImportGeoJsonFile { path: String },
    /// GeoJSON-Text (z.B. aus Drag & Drop) als Overlay laden
    ImportGeoJsonText { name: String, text: String },

    // ── Karte ───────────────────────────────────────────────────────
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte um Pixel-Delta verschieben
    PanMap { delta: glam::DVec2 },
    /// Zoom um `delta` Stufen mit optionalem Fokuspunkt
    ZoomMap {
        delta: f64,
        focus_px: Option<glam::DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,

    // ── Dialoge & Anwendungssteuerung ───────────────────────────────
    /// Anwendung beenden
    RequestExit,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: DrawingOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Statusnachricht entfernen
    DismissStatusMessage,
}
