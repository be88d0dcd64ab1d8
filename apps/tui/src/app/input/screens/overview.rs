use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, EditRowState};
use crossterm::event::KeyCode;

pub fn handle_overview_input(app: &mut App, key: KeyCode) {
    if app.filter_editing {
        handle_filter_input(app, key);
        return;
    }

    let visible = app.visible_tests().len();

    match key {
        KeyCode::Up => {
            app.selected_test_index = wrap_decrement(app.selected_test_index, visible);
        }
        KeyCode::Down => {
            app.selected_test_index = wrap_increment(app.selected_test_index, visible);
        }
        KeyCode::Enter => {
            if let Some(test) = app.selected_test() {
                app.edit_row = Some(EditRowState::new(test));
                app.screen = AppScreen::EditRow;
            }
        }
        KeyCode::Char('/') => {
            app.filter_editing = true;
        }
        KeyCode::Char('c') => {
            app.screen = AppScreen::Core;
        }
        KeyCode::Char('l') => {
            app.screen = AppScreen::Lunge;
        }
        KeyCode::Char('t') => {
            app.screen = AppScreen::Stick;
        }
        KeyCode::Char('a') => {
            app.action_index = 0;
            app.screen = AppScreen::Actions;
        }
        KeyCode::Esc => {
            app.filter_input.clear();
            app.selected_test_index = 0;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.filter_editing = false;
            app.filter_input.clear();
            app.selected_test_index = 0;
        }
        KeyCode::Enter => {
            app.filter_editing = false;
        }
        KeyCode::Backspace => {
            app.filter_input.pop();
            clamp_selection(app);
        }
        KeyCode::Char(ch) => {
            app.filter_input.push(ch);
            clamp_selection(app);
        }
        _ => {}
    }
}

fn clamp_selection(app: &mut App) {
    let visible = app.visible_tests().len();
    if visible == 0 {
        app.selected_test_index = 0;
    } else if app.selected_test_index >= visible {
        app.selected_test_index = visible - 1;
    }
}
