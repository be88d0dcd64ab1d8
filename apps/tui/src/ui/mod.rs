// UI module for coroptima_mobility-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Overview => screens::overview::render_overview(app, f),
        AppScreen::EditRow => screens::edit_row::render_edit_row(app, f),
        AppScreen::Core => screens::core::render_core(app, f),
        AppScreen::Lunge => screens::lunge::render_lunge(app, f),
        AppScreen::Stick => screens::stick::render_stick(app, f),
        AppScreen::Actions => screens::actions::render_actions(app, f),
        AppScreen::EmailPrompt => screens::email::render_email_prompt(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
