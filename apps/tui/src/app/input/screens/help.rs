use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

/// `?` opens the help overlay; any key closes it again. The toggle stays
/// out of the way while a text field is capturing keystrokes.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if app.show_help {
        app.show_help = false;
        return true;
    }

    if key == KeyCode::Char('?') && !is_capturing_text(app) {
        app.show_help = true;
        return true;
    }

    false
}

fn is_capturing_text(app: &App) -> bool {
    match app.screen {
        AppScreen::EmailPrompt => true,
        AppScreen::Overview => app.filter_editing,
        AppScreen::EditRow => app.edit_row.as_ref().is_some_and(|e| e.editing),
        AppScreen::Core => app.core_editing,
        AppScreen::Lunge => app.lunge_cursor.editing,
        AppScreen::Stick => app.stick_cursor.editing,
        AppScreen::Actions => false,
    }
}
