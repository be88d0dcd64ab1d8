use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod actions_menu;
mod core;
mod edit_row;
mod email;
mod help;
mod lunge;
mod overview;
mod stick;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Overview => overview::handle_overview_input(app, key),
        AppScreen::EditRow => edit_row::handle_edit_row_input(app, key),
        AppScreen::Core => core::handle_core_input(app, key),
        AppScreen::Lunge => lunge::handle_lunge_input(app, key),
        AppScreen::Stick => stick::handle_stick_input(app, key),
        AppScreen::Actions => actions_menu::handle_actions_input(app, key),
        AppScreen::EmailPrompt => email::handle_email_input(app, key),
    }
}
