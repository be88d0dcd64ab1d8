use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, BilateralCursor};
use crate::domain::LungeSegment;
use crossterm::event::KeyCode;

pub fn handle_lunge_input(app: &mut App, key: KeyCode) {
    if app.lunge_cursor.editing {
        handle_cell_edit(app, key);
        return;
    }

    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Overview;
        }
        KeyCode::Up => {
            app.lunge_cursor.index =
                wrap_decrement(app.lunge_cursor.index, BilateralCursor::CELLS);
        }
        KeyCode::Down => {
            app.lunge_cursor.index =
                wrap_increment(app.lunge_cursor.index, BilateralCursor::CELLS);
        }
        KeyCode::Enter => {
            app.lunge_cursor.editing = true;
        }
        _ => {}
    }
}

fn handle_cell_edit(app: &mut App, key: KeyCode) {
    let cursor = app.lunge_cursor.clone();

    match key {
        KeyCode::Enter | KeyCode::Esc => {
            app.lunge_cursor.editing = false;
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
        app.apply_core(|core| edit(&mut core.lunge.notes));
        return;
    }

    let Some(segment) = LungeSegment::from_index(cursor.segment_index()) else {
        return;
    };
    let right = cursor.is_right();
    app.apply_core(|core| {
        let pair = core.lunge.pair_mut(segment);
        edit(if right { &mut pair.right } else { &mut pair.left });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_lands_in_the_selected_side() {
        let mut app = App::new();
        app.screen = AppScreen::Lunge;
        // Knee / right
        app.lunge_cursor.index = 3;
        app.lunge_cursor.editing = true;

        handle_lunge_input(&mut app, KeyCode::Char('o'));
        handle_lunge_input(&mut app, KeyCode::Char('k'));
        assert_eq!(app.document.core.lunge.knee.right, "ok");
        assert!(app.document.core.lunge.knee.left.is_empty());
    }

    #[test]
    fn last_cell_edits_the_notes() {
        let mut app = App::new();
        app.lunge_cursor.index = BilateralCursor::CELLS - 1;
        app.lunge_cursor.editing = true;

        handle_lunge_input(&mut app, KeyCode::Char('x'));
        assert_eq!(app.document.core.lunge.notes, "x");
    }
}
