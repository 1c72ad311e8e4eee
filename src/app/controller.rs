//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Recorder & Radierer ===
            AppCommand::BeginStroke { pos } => handlers::drawing::begin_stroke(state, pos),
            AppCommand::ExtendStroke { pos } => handlers::drawing::extend_stroke(state, pos),
            AppCommand::FinishStroke => handlers::drawing::finish_stroke(state),
            AppCommand::EraseAt { pos } => handlers::drawing::erase_at(state, pos),
            AppCommand::HideEraserCursor => handlers::drawing::hide_eraser_cursor(state),

            // === Zeichen-Steuerung ===
            AppCommand::SetDrawingMode { mode } => handlers::drawing::set_mode(state, mode),
            AppCommand::SetStrokeColor { color } => handlers::drawing::set_color(state, color),
            AppCommand::UndoLastStroke => handlers::drawing::undo(state),
            AppCommand::ClearStrokes => handlers::drawing::clear(state),

            // === Export / Import ===
            AppCommand::RequestExportDialog { variant } => {
                handlers::file_io::request_export(state, variant)
            }
            AppCommand::ExportDrawings { variant, path } => {
                handlers::file_io::export(state, variant, path)?
            }
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::ImportGeoJsonFile { path } => handlers::file_io::import_file(state, path),
            AppCommand::ImportGeoJsonText { name, text } => {
                handlers::file_io::import_text(state, name, text)
            }

            // === Karte & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanMap { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomMap { delta, focus_px } => {
                handlers::view::zoom_towards(state, delta, focus_px)
            }
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::DismissStatusMessage => handlers::dialog::dismiss_status_message(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
