// App module for coroptima_mobility-tui
// Handles application state and business logic

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, ExportKind, FormAction};
