use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crate::domain::RowField;
use crossterm::event::KeyCode;

pub fn handle_edit_row_input(app: &mut App, key: KeyCode) {
    let Some(edit) = app.edit_row.clone() else {
        app.screen = AppScreen::Overview;
        return;
    };

    if edit.editing {
        handle_value_input(app, key);
        return;
    }

    match key {
        KeyCode::Esc => {
            app.edit_row = None;
            app.screen = AppScreen::Overview;
        }
        KeyCode::Up => {
            if let Some(edit) = &mut app.edit_row {
                edit.field_index = wrap_decrement(edit.field_index, RowField::ALL.len());
            }
        }
        KeyCode::Down => {
            if let Some(edit) = &mut app.edit_row {
                edit.field_index = wrap_increment(edit.field_index, RowField::ALL.len());
            }
        }
        KeyCode::Enter => {
            if let Some(edit) = &mut app.edit_row {
                edit.editing = true;
            }
        }
        _ => {}
    }
}

/// Keystrokes mutate the document directly, so each edit is sanitized and
/// persisted as it happens.
fn handle_value_input(app: &mut App, key: KeyCode) {
    let Some(edit) = app.edit_row.clone() else {
        return;
    };
    let field = edit.field();

    match key {
        KeyCode::Enter | KeyCode::Esc => {
            if let Some(edit) = &mut app.edit_row {
                edit.editing = false;
            }
        }
        KeyCode::Char(ch) => {
            let mut value = app.document.field(edit.test, field).to_string();
            value.push(ch);
            app.apply_field(edit.test, field, &value);
        }
        KeyCode::Backspace => {
            let mut value = app.document.field(edit.test, field).to_string();
            value.pop();
            app.apply_field(edit.test, field, &value);
        }
        _ => {}
    }
}
