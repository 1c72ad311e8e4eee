//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Zeichen-Layers (Strokes, Modus, Karte, UI).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DrawingMode, DrawingState, EraserCursor, InProgressStroke, UiState};
pub use use_cases::eraser::EraseOutcome;
pub use use_cases::export::{ExportArtifact, ExportVariant};
