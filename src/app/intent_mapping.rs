//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::DrawingMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::MapProvider;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let recording = state.drawing.is_recording();

    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::PointerPressed { pos } => match state.drawing.mode {
            // Ein zweiter Pointer-Down während eines Strokes wird ignoriert
            DrawingMode::Draw if !recording => vec![AppCommand::BeginStroke { pos }],
            DrawingMode::Erase => vec![AppCommand::EraseAt { pos }],
            _ => vec![],
        },
        AppIntent::PointerMoved { pos } => match state.drawing.mode {
            DrawingMode::Draw if recording => vec![AppCommand::ExtendStroke { pos }],
            DrawingMode::Erase => vec![AppCommand::EraseAt { pos }],
            _ => vec![],
        },
        AppIntent::PointerReleased => {
            if recording {
                vec![AppCommand::FinishStroke]
            } else {
                vec![]
            }
        }
        AppIntent::PointerLeft => {
            if recording {
                vec![AppCommand::FinishStroke]
            } else if state.drawing.eraser_cursor.is_some() {
                vec![AppCommand::HideEraserCursor]
            } else {
                vec![]
            }
        }

        AppIntent::DrawingModeRequested { mode } => {
            let mode = if state.drawing.mode == mode {
                DrawingMode::None
            } else {
                mode
            };
            vec![AppCommand::SetDrawingMode { mode }]
        }
        AppIntent::StrokeColorChanged { color } => vec![AppCommand::SetStrokeColor { color }],
        AppIntent::UndoRequested => vec![AppCommand::UndoLastStroke],
        AppIntent::ClearDrawingsRequested => vec![AppCommand::ClearStrokes],

        AppIntent::ExportRequested { variant } => {
            vec![AppCommand::RequestExportDialog { variant }]
        }
        AppIntent::ExportPathSelected { variant, path } => {
            vec![AppCommand::ExportDrawings { variant, path }]
        }
        AppIntent::ImportRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::ImportGeoJsonFile { path }],
        AppIntent::FileDropped { name, contents } => vec![AppCommand::ImportGeoJsonText {
            name,
            text: contents,
        }],

        AppIntent::CameraPan { delta } => {
            // Während eines Strokes ist Drag-Panning gesperrt
            if state.map.drag_enabled() && !recording {
                vec![AppCommand::PanMap { delta }]
            } else {
                vec![]
            }
        }
        AppIntent::CameraZoom { delta, focus_px } => {
            vec![AppCommand::ZoomMap { delta, focus_px }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusMessageDismissed => vec![AppCommand::DismissStatusMessage],
    }
}
