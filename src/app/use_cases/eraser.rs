//! Radierer: entfernt Stroke-Punkte innerhalb eines Pixel-Radius um den Zeiger.
//!
//! Strokes werden nur gekürzt, nie aufgeteilt. Ein Stroke mit weniger als
//! zwei verbleibenden Punkten verschwindet vollständig.

use glam::DVec2;

use crate::app::state::{DrawingMode, DrawingState, EraserCursor};
use crate::core::{meters_per_pixel, MapProvider, Stroke, StrokeList};
use crate::shared::DrawingOptions;

/// Ergebnis eines Radier-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EraseOutcome {
    /// Anzahl entfernter Punkte (inkl. Punkte gelöschter Strokes)
    pub removed_points: usize,
    /// Anzahl vollständig entfernter Strokes
    pub removed_strokes: usize,
}

impl EraseOutcome {
    /// `true` wenn der Durchlauf nichts verändert hat.
    pub fn is_empty(&self) -> bool {
        self.removed_points == 0
    }
}

/// Reiner Radier-Durchlauf über alle Strokes.
///
/// Behält nur Punkte, deren Pixel-Abstand zu `pointer_px` echt größer als
/// `radius_px` ist. Die Eingabeliste bleibt unverändert.
pub fn erase_strokes(
    strokes: &StrokeList,
    map: &dyn MapProvider,
    pointer_px: DVec2,
    radius_px: f64,
) -> (StrokeList, EraseOutcome) {
    let radius_sq = radius_px * radius_px;
    let mut outcome = EraseOutcome::default();

    let remaining = strokes.filter_map_strokes(|_, stroke| {
        let kept: Vec<_> = stroke
            .points
            .iter()
            .copied()
            .filter(|p| map.project_to_pixel(*p).distance_squared(pointer_px) > radius_sq)
            .collect();

        outcome.removed_points += stroke.len() - kept.len();

        let truncated = Stroke {
            points: kept,
            color: stroke.color.clone(),
            provenance: stroke.provenance,
        };
        if !truncated.is_renderable() {
            outcome.removed_points += truncated.len();
            outcome.removed_strokes += 1;
            return None;
        }
        Some(truncated)
    });

    (remaining, outcome)
}

/// Berechnet den Radierer-Indikator für die Zeigerposition.
pub fn eraser_cursor(map: &dyn MapProvider, pointer_px: DVec2, radius_px: f64) -> EraserCursor {
    let center = map.project_to_geo(pointer_px);
    EraserCursor {
        center,
        radius_m: radius_px * meters_per_pixel(center.lat, map.zoom()),
    }
}

/// Radiert an der Zeigerposition und aktualisiert den Indikator.
///
/// Ohne Radier-Modus passiert nichts.
pub fn erase_at(
    drawing: &mut DrawingState,
    map: &dyn MapProvider,
    options: &DrawingOptions,
    pointer_px: DVec2,
) -> EraseOutcome {
    if drawing.mode != DrawingMode::Erase {
        return EraseOutcome::default();
    }

    drawing.eraser_cursor = Some(eraser_cursor(map, pointer_px, options.eraser_radius_px));

    let (remaining, outcome) =
        erase_strokes(&drawing.strokes, map, pointer_px, options.eraser_radius_px);
    if !outcome.is_empty() {
        drawing.strokes = remaining;
        log::debug!(
            "Radiert: {} Punkte, {} Strokes entfernt",
            outcome.removed_points,
            outcome.removed_strokes
        );
    }
    outcome
}

/// Blendet den Radierer-Indikator aus.
pub fn hide_cursor(drawing: &mut DrawingState) {
    drawing.eraser_cursor = None;
}
