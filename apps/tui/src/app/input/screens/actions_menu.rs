use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, ExportKind, FormAction};
use crossterm::event::KeyCode;

pub fn handle_actions_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Overview;
        }
        KeyCode::Up => {
            app.action_index = wrap_decrement(app.action_index, FormAction::ALL.len());
        }
        KeyCode::Down => {
            app.action_index = wrap_increment(app.action_index, FormAction::ALL.len());
        }
        KeyCode::Enter => {
            let Some(action) = FormAction::from_index(app.action_index) else {
                return;
            };

            match action {
                FormAction::Reset => {
                    app.reset_document();
                    app.screen = AppScreen::Overview;
                }
                FormAction::EmailDraft => {
                    app.screen = AppScreen::EmailPrompt;
                }
                FormAction::ExportCsv => {
                    app.pending_export = Some(ExportKind::Csv);
                    app.screen = AppScreen::Overview;
                }
                FormAction::ExportPdf => {
                    app.pending_export = Some(ExportKind::Pdf);
                    app.screen = AppScreen::Overview;
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_actions_queue_work_for_the_event_loop() {
        let mut app = App::new();
        app.screen = AppScreen::Actions;
        app.action_index = 2; // Last ned CSV

        handle_actions_input(&mut app, KeyCode::Enter);
        assert_eq!(app.pending_export, Some(ExportKind::Csv));
        assert_eq!(app.screen, AppScreen::Overview);
    }

    #[test]
    fn reset_action_clears_the_document() {
        let mut app = App::new();
        app.apply_core(|core| core.lumbo_pelvic_checked = true);
        app.screen = AppScreen::Actions;
        app.action_index = 0; // Nullstill

        handle_actions_input(&mut app, KeyCode::Enter);
        assert!(!app.document.core.lumbo_pelvic_checked);
    }
}
