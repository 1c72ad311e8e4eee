//! Zentrale Konfiguration für den Zeichen-Layer.
//!
//! `DrawingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Anzahl Glättungs-Iterationen (Corner-Cutting) pro Stroke.
pub const SMOOTHING_ITERATIONS: u32 = 2;
/// Obergrenze der Glättung. Jede Iteration verdoppelt die Punktzahl.
pub const SMOOTHING_ITERATIONS_MAX: u32 = 6;
/// Standard-Strichfarbe neuer Strokes.
pub const DEFAULT_STROKE_COLOR: &str = "#ff0000";
/// Strichbreite gezeichneter Linien in Pixeln.
pub const STROKE_WIDTH_PX: f32 = 3.0;
/// Erlaubter Bereich der Strichbreite in Pixeln.
pub const STROKE_WIDTH_RANGE_PX: std::ops::RangeInclusive<f32> = 1.0..=12.0;

// ── Radierer ────────────────────────────────────────────────────────

/// Radierer-Radius in Bildschirm-Pixeln.
pub const ERASER_RADIUS_PX: f64 = 5.0;
/// Erlaubter Bereich des Radierer-Radius in Pixeln.
pub const ERASER_RADIUS_RANGE_PX: std::ops::RangeInclusive<f64> = 1.0..=50.0;
/// Farbe des Radierer-Indikators.
pub const ERASER_INDICATOR_COLOR: &str = "#808080";

// ── Karte ───────────────────────────────────────────────────────────

/// Linienfarbe importierter Vektor-Overlays.
pub const OVERLAY_COLOR: &str = "#3388ff";
/// Start-Zentrum der Karte (Breite, Länge).
pub const INITIAL_CENTER: [f64; 2] = [51.1657, 10.4515];
/// Start-Zoom der Karte.
pub const INITIAL_ZOOM: f64 = 6.0;
/// Minimaler Zoom.
pub const ZOOM_MIN: f64 = 2.0;
/// Maximaler Zoom.
pub const ZOOM_MAX: f64 = 19.0;
/// Äußerste Zoom-Grenzen, die eine Konfiguration setzen darf.
pub const ZOOM_LIMITS: std::ops::RangeInclusive<f64> = 0.0..=22.0;
/// Zoom-Schritt für Buttons/Shortcuts (in Zoom-Stufen).
pub const ZOOM_STEP: f64 = 1.0;
/// Zoom-Schritt pro Mausrad-Raster (in Zoom-Stufen).
pub const SCROLL_ZOOM_STEP: f64 = 0.25;

// ── Export ──────────────────────────────────────────────────────────

/// Dateiname für den Export aller Overlays inkl. Zeichnungen.
pub const EXPORT_ALL_FILE_NAME: &str = "map_with_drawings.geojson";
/// Dateiname für den Export nur der gezeichneten Strokes.
pub const EXPORT_DRAWN_FILE_NAME: &str = "user_drawings.geojson";

/// Alle zur Laufzeit änderbaren Optionen des Zeichen-Layers.
/// Wird als `agro_map_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawingOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Glättungsstärke (Iterationen)
    pub smoothing_iterations: u32,
    /// Farbe neuer Strokes
    pub default_stroke_color: String,
    /// Auswahl-Palette in der Toolbar
    #[serde(default = "default_color_palette")]
    pub color_palette: Vec<String>,
    /// Strichbreite in Pixeln
    pub stroke_width_px: f32,

    // ── Radierer ────────────────────────────────────────────────
    /// Radierer-Radius in Pixeln
    pub eraser_radius_px: f64,
    /// Farbe des Radierer-Kreises
    pub eraser_indicator_color: String,

    // ── Karte ───────────────────────────────────────────────────
    /// Farbe importierter Overlays
    #[serde(default = "default_overlay_color")]
    pub overlay_color: String,
    /// Start-Zentrum `[lat, lng]`
    pub initial_center: [f64; 2],
    /// Start-Zoom
    pub initial_zoom: f64,
    /// Minimaler Zoom
    pub zoom_min: f64,
    /// Maximaler Zoom
    pub zoom_max: f64,
    /// Zoom-Schritt für Buttons/Shortcuts
    pub zoom_step: f64,
    /// Zoom-Schritt pro Mausrad-Raster
    #[serde(default = "default_scroll_zoom_step")]
    pub scroll_zoom_step: f64,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            smoothing_iterations: SMOOTHING_ITERATIONS,
            default_stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            color_palette: default_color_palette(),
            stroke_width_px: STROKE_WIDTH_PX,

            eraser_radius_px: ERASER_RADIUS_PX,
            eraser_indicator_color: ERASER_INDICATOR_COLOR.to_string(),

            overlay_color: OVERLAY_COLOR.to_string(),
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
        }
    }
}

/// Begrenzt `value` auf `range`; NaN fällt auf `fallback` zurück.
fn clamp_or_default(
    name: &str,
    value: f64,
    range: &std::ops::RangeInclusive<f64>,
    fallback: f64,
) -> f64 {
    if value.is_nan() {
        log::warn!("{} ist keine Zahl, verwende {}", name, fallback);
        return fallback;
    }
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::warn!("{} = {} außerhalb von {:?}, begrenzt auf {}", name, value, range, clamped);
    }
    clamped
}

/// Serde-Default für `color_palette` (ältere TOML-Dateien ohne Palette).
fn default_color_palette() -> Vec<String> {
    ["#ff0000", "#00a000", "#0050ff", "#ffa500", "#000000", "#ffffff"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Serde-Default für `overlay_color`.
fn default_overlay_color() -> String {
    OVERLAY_COLOR.to_string()
}

/// Serde-Default für `scroll_zoom_step`.
fn default_scroll_zoom_step() -> f64 {
    SCROLL_ZOOM_STEP
}

impl DrawingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text und begrenzt sie auf gültige Bereiche.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.clamped())
    }

    /// Begrenzt alle numerischen Werte auf die Bereiche der Toolbar-Regler.
    ///
    /// Vertauschte Zoom-Grenzen werden getauscht, nicht-endliche oder
    /// nicht-positive Zoom-Schritte fallen auf den Standard zurück.
    pub fn clamped(mut self) -> Self {
        if self.smoothing_iterations > SMOOTHING_ITERATIONS_MAX {
            log::warn!(
                "smoothing_iterations = {} zu groß, begrenzt auf {}",
                self.smoothing_iterations,
                SMOOTHING_ITERATIONS_MAX
            );
            self.smoothing_iterations = SMOOTHING_ITERATIONS_MAX;
        }

        self.eraser_radius_px = clamp_or_default(
            "eraser_radius_px",
            self.eraser_radius_px,
            &ERASER_RADIUS_RANGE_PX,
            ERASER_RADIUS_PX,
        );
        self.stroke_width_px = if self.stroke_width_px.is_nan() {
            STROKE_WIDTH_PX
        } else {
            self.stroke_width_px
                .clamp(*STROKE_WIDTH_RANGE_PX.start(), *STROKE_WIDTH_RANGE_PX.end())
        };

        self.zoom_min = clamp_or_default("zoom_min", self.zoom_min, &ZOOM_LIMITS, ZOOM_MIN);
        self.zoom_max = clamp_or_default("zoom_max", self.zoom_max, &ZOOM_LIMITS, ZOOM_MAX);
        if self.zoom_min > self.zoom_max {
            log::warn!(
                "zoom_min ({}) > zoom_max ({}), Grenzen getauscht",
                self.zoom_min,
                self.zoom_max
            );
            std::mem::swap(&mut self.zoom_min, &mut self.zoom_max);
        }
        self.initial_zoom = if self.initial_zoom.is_finite() {
            self.initial_zoom.clamp(self.zoom_min, self.zoom_max)
        } else {
            INITIAL_ZOOM.clamp(self.zoom_min, self.zoom_max)
        };

        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            self.zoom_step = ZOOM_STEP;
        }
        if !(self.scroll_zoom_step.is_finite() && self.scroll_zoom_step > 0.0) {
            self.scroll_zoom_step = SCROLL_ZOOM_STEP;
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("agro_map_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("agro_map_sketch.toml")
    }
}
