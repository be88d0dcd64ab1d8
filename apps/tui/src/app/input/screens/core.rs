use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, CoreField};
use crate::domain::{Breathing, LumboPelvicLevel, NeckLevel, SequenceQuality};
use crossterm::event::KeyCode;

pub fn handle_core_input(app: &mut App, key: KeyCode) {
    let field = CoreField::from_index(app.core_field_index).unwrap_or(CoreField::Breathing);

    if app.core_editing {
        handle_field_edit(app, field, key);
        return;
    }

    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Overview;
        }
        KeyCode::Up => {
            app.core_field_index = wrap_decrement(app.core_field_index, CoreField::ALL.len());
        }
        KeyCode::Down => {
            app.core_field_index = wrap_increment(app.core_field_index, CoreField::ALL.len());
        }
        KeyCode::Enter | KeyCode::Char(' ') if field == CoreField::LumboChecked => {
            app.apply_core(|core| core.lumbo_pelvic_checked = !core.lumbo_pelvic_checked);
        }
        KeyCode::Enter => {
            app.core_editing = true;
        }
        _ => {}
    }
}

fn handle_field_edit(app: &mut App, field: CoreField, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Esc => {
            app.core_editing = false;
        }
        KeyCode::Left if field.is_choice() => cycle_choice(app, field, false),
        KeyCode::Right if field.is_choice() => cycle_choice(app, field, true),
        KeyCode::Char(ch) => match field {
            // Rep count takes digits only, mirroring the numeric input
            CoreField::LumboReps if ch.is_ascii_digit() => {
                app.apply_core(|core| core.lumbo_pelvic_reps.push(ch));
            }
            CoreField::LumboNotes => {
                app.apply_core(|core| core.lumbo_pelvic_notes.push(ch));
            }
            CoreField::NeckNotes => {
                app.apply_core(|core| core.neck_notes.push(ch));
            }
            _ => {}
        },
        KeyCode::Backspace => match field {
            CoreField::LumboReps => {
                app.apply_core(|core| {
                    core.lumbo_pelvic_reps.pop();
                });
            }
            CoreField::LumboNotes => {
                app.apply_core(|core| {
                    core.lumbo_pelvic_notes.pop();
                });
            }
            CoreField::NeckNotes => {
                app.apply_core(|core| {
                    core.neck_notes.pop();
                });
            }
            _ => {}
        },
        _ => {}
    }
}

/// Steps a radio-style selection forward or backward; an unset field starts
/// at the first (or last) option.
fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = all.len();
    if len == 0 {
        return None;
    }

    let index = current.and_then(|value| all.iter().position(|v| *v == value));
    let next = match (index, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => wrap_increment(i, len),
        (Some(i), false) => wrap_decrement(i, len),
    };
    all.get(next).copied()
}

fn cycle_choice(app: &mut App, field: CoreField, forward: bool) {
    match field {
        CoreField::Breathing => {
            let next = cycle(&Breathing::ALL, app.document.core.breathing, forward);
            app.apply_core(|core| core.breathing = next);
        }
        CoreField::Sequence => {
            let next = cycle(&SequenceQuality::ALL, app.document.core.sequence, forward);
            app.apply_core(|core| core.sequence = next);
        }
        CoreField::LumboLevel => {
            let next = cycle(
                &LumboPelvicLevel::ALL,
                app.document.core.lumbo_pelvic_level,
                forward,
            );
            app.apply_core(|core| core.lumbo_pelvic_level = next);
        }
        CoreField::NeckLevel => {
            let next = cycle(&NeckLevel::ALL, app.document.core.neck_level, forward);
            app.apply_core(|core| core.neck_level = next);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_and_starts_from_unset() {
        assert_eq!(cycle(&Breathing::ALL, None, true), Some(Breathing::Belly));
        assert_eq!(
            cycle(&Breathing::ALL, None, false),
            Some(Breathing::CanAlternate)
        );
        assert_eq!(
            cycle(&Breathing::ALL, Some(Breathing::CanAlternate), true),
            Some(Breathing::Belly)
        );
        assert_eq!(
            cycle(&Breathing::ALL, Some(Breathing::Belly), false),
            Some(Breathing::CanAlternate)
        );
    }

    #[test]
    fn checkbox_toggles_without_entering_edit_mode() {
        let mut app = App::new();
        app.screen = AppScreen::Core;
        app.core_field_index = CoreField::ALL
            .iter()
            .position(|f| *f == CoreField::LumboChecked)
            .unwrap_or(0);

        handle_core_input(&mut app, KeyCode::Enter);
        assert!(app.document.core.lumbo_pelvic_checked);
        assert!(!app.core_editing);

        handle_core_input(&mut app, KeyCode::Char(' '));
        assert!(!app.document.core.lumbo_pelvic_checked);
    }

    #[test]
    fn reps_accept_digits_only() {
        let mut app = App::new();
        app.core_field_index = CoreField::ALL
            .iter()
            .position(|f| *f == CoreField::LumboReps)
            .unwrap_or(0);
        app.core_editing = true;

        handle_core_input(&mut app, KeyCode::Char('1'));
        handle_core_input(&mut app, KeyCode::Char('x'));
        handle_core_input(&mut app, KeyCode::Char('2'));
        assert_eq!(app.document.core.lumbo_pelvic_reps, "12");
    }
}
