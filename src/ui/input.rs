//! Viewport-Input-Handling: Maus-Events, Drag, Scroll, Drag & Drop → AppIntent.

use glam::DVec2;

use super::keyboard;
use crate::app::{AppIntent, DrawingMode};
use crate::shared::DrawingOptions;

/// egui-Scrolldelta pro Mausrad-Raster (in Punkten).
const SCROLL_POINTS_PER_NOTCH: f64 = 50.0;

/// Dateiendungen, die als GeoJSON importiert werden.
const GEOJSON_EXTENSIONS: [&str; 2] = ["geojson", "json"];

/// Bedeutung des laufenden Primär-Drags, festgelegt beim Drag-Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrimaryGesture {
    /// Zeichnet einen Stroke
    Stroke,
    /// Radiert entlang des Zeigers
    Erase,
    /// Verschiebt die Karte
    Pan,
    /// Zeiger hat die Fläche verlassen; Rest des Drags wird ignoriert
    Ended,
}

/// Verwaltet den Input-Zustand der Kartenfläche.
#[derive(Default)]
pub struct InputState {
    pointer_inside: bool,
    primary: Option<PrimaryGesture>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Ein Primär-Drag zeichnet im Zeichenmodus, radiert im Radier-Modus und
    /// verschiebt sonst die Karte. Im Radier-Modus erzeugt zusätzlich jede
    /// Zeigerbewegung über der Karte ein `PointerMoved`.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        mode: DrawingMode,
        options: &DrawingOptions,
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: [response.rect.width(), response.rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui, mode));

        let to_local = |pos: egui::Pos2| -> DVec2 {
            let local = pos - response.rect.min;
            DVec2::new(local.x as f64, local.y as f64)
        };
        let pointer_delta = ui.input(|i| i.pointer.delta());

        // ── Verlassen der Kartenfläche ──────────────────────────────
        // Vor der Drag-Auswertung, damit der Frame des Verlassens keinen
        // Punkt außerhalb mehr aufzeichnet.
        let inside = response.contains_pointer();
        if self.pointer_inside && !inside {
            events.push(AppIntent::PointerLeft);
            if matches!(
                self.primary,
                Some(PrimaryGesture::Stroke | PrimaryGesture::Erase)
            ) {
                self.primary = Some(PrimaryGesture::Ended);
            }
        }

        // ── Primärtaste ─────────────────────────────────────────────
        if response.drag_started_by(egui::PointerButton::Primary) {
            let gesture = match mode {
                DrawingMode::Draw => PrimaryGesture::Stroke,
                DrawingMode::Erase => PrimaryGesture::Erase,
                DrawingMode::None => PrimaryGesture::Pan,
            };
            if gesture != PrimaryGesture::Pan {
                let origin = ui
                    .input(|i| i.pointer.press_origin())
                    .or_else(|| response.interact_pointer_pos());
                if let Some(pos) = origin {
                    events.push(AppIntent::PointerPressed { pos: to_local(pos) });
                }
            }
            self.primary = Some(gesture);
        }

        if response.dragged_by(egui::PointerButton::Primary) && pointer_delta != egui::Vec2::ZERO {
            match self.primary {
                Some(PrimaryGesture::Stroke | PrimaryGesture::Erase) => {
                    if let Some(pos) = response.interact_pointer_pos() {
                        events.push(AppIntent::PointerMoved { pos: to_local(pos) });
                    }
                }
                Some(PrimaryGesture::Pan) => {
                    events.push(AppIntent::CameraPan {
                        delta: DVec2::new(pointer_delta.x as f64, pointer_delta.y as f64),
                    });
                }
                Some(PrimaryGesture::Ended) | None => {}
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            events.push(AppIntent::PointerReleased);
            self.primary = None;
        }

        // ── Pan mit Mittel-/Rechtsklick in jedem Modus ──────────────
        if (response.dragged_by(egui::PointerButton::Middle)
            || response.dragged_by(egui::PointerButton::Secondary))
            && pointer_delta != egui::Vec2::ZERO
        {
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(pointer_delta.x as f64, pointer_delta.y as f64),
            });
        }

        // ── Radierer folgt dem Zeiger ───────────────────────────────
        if mode == DrawingMode::Erase && self.primary.is_none() && inside {
            if let Some(pos) = response.hover_pos() {
                if pointer_delta != egui::Vec2::ZERO || !self.pointer_inside {
                    events.push(AppIntent::PointerMoved { pos: to_local(pos) });
                }
            }
        }

        self.pointer_inside = inside;

        // ── Scroll-Zoom auf Mausposition ────────────────────────────
        let scroll = ui.input(|i| i.smooth_scroll_delta.y) as f64;
        if scroll != 0.0 && inside {
            events.push(AppIntent::CameraZoom {
                delta: scroll / SCROLL_POINTS_PER_NOTCH * options.scroll_zoom_step,
                focus_px: response.hover_pos().map(to_local),
            });
        }

        let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
        events.extend(select_dropped_geojson(dropped));
        events
    }
}

/// Wählt aus abgelegten Dateien die erste GeoJSON-Datei als Import-Intent.
///
/// Native Plattformen liefern einen Pfad, Web liefert die Bytes direkt.
/// Weitere oder fremde Dateien werden mit Warnung ignoriert.
fn select_dropped_geojson(dropped: Vec<egui::DroppedFile>) -> Option<AppIntent> {
    let mut selected = None;

    for file in dropped {
        let display_name = file
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| file.name.clone());

        if selected.is_some() {
            log::warn!("Nur eine Datei pro Drop, ignoriert: {}", display_name);
            continue;
        }
        if !has_geojson_extension(&display_name) {
            log::warn!("Keine GeoJSON-Datei, ignoriert: {}", display_name);
            continue;
        }

        selected = if let Some(path) = file.path {
            Some(AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            })
        } else {
            file.bytes.map(|bytes| AppIntent::FileDropped {
                name: file.name,
                contents: String::from_utf8_lossy(&bytes).into_owned(),
            })
        };
    }

    selected
}

fn has_geojson_extension(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            GEOJSON_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests;
