//! UI-Layer mit egui.
//!
//! Menü, Toolbar, Status-Bar, Kartenfläche und Datei-Dialoge. Keyboard-Shortcuts
//! und das Zeichnen der Szene sind in eigene Dateien extrahiert.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod map_view;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use map_view::paint_scene;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
