use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, BilateralCursor};
use crate::domain::StickSegment;
use crossterm::event::KeyCode;

pub fn handle_stick_input(app: &mut App, key: KeyCode) {
    if app.stick_cursor.editing {
        handle_cell_edit(app, key);
        return;
    }

    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Overview;
        }
        KeyCode::Up => {
            app.stick_cursor.index =
                wrap_decrement(app.stick_cursor.index, BilateralCursor::CELLS);
        }
        KeyCode::Down => {
            app.stick_cursor.index =
                wrap_increment(app.stick_cursor.index, BilateralCursor::CELLS);
        }
        KeyCode::Enter => {
            app.stick_cursor.editing = true;
        }
        _ => {}
    }
}

fn handle_cell_edit(app: &mut App, key: KeyCode) {
    let cursor = app.stick_cursor.clone();

    match key {
        KeyCode::Enter | KeyCode::Esc => {
            app.stick_cursor.editing = false;
        }
        KeyCode::Char(ch) => edit_cell(app, &cursor, |value| value.push(ch)),
        KeyCode::Backspace => edit_cell(app, &cursor, |value| {
            value.pop();
        }),
        _ => {}
    }
}

fn edit_cell(app: &mut App, cursor: &BilateralCursor, edit: impl FnOnce(&mut String)) {
    if cursor.is_notes() {
        app.apply_core(|core| edit(&mut core.stick.notes));
        return;
    }

    let Some(segment) = StickSegment::from_index(cursor.segment_index()) else {
        return;
    };
    let right = cursor.is_right();
    app.apply_core(|core| {
        let pair = core.stick.pair_mut(segment);
        edit(if right { &mut pair.right } else { &mut pair.left });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_lands_in_the_selected_segment() {
        let mut app = App::new();
        app.screen = AppScreen::Stick;
        // Pelvic / left
        app.stick_cursor.index = 8;
        app.stick_cursor.editing = true;

        handle_stick_input(&mut app, KeyCode::Char('d'));
        assert_eq!(app.document.core.stick.pelvic.left, "d");
        assert!(app.document.core.stick.pelvic.right.is_empty());
    }
}
