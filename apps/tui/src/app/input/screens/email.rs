use crate::app::state::{App, AppScreen};
use crate::export::ExportError;
use crossterm::event::KeyCode;

pub fn handle_email_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Overview;
        }
        KeyCode::Backspace => {
            app.email_input.pop();
        }
        KeyCode::Char(ch) => {
            app.email_input.push(ch);
        }
        KeyCode::Enter => {
            match app.actions.open_mail_draft(&app.email_input) {
                Ok(uri) => {
                    app.status_message = format!("E-post-kladd åpnet: {uri}");
                    app.screen = AppScreen::Overview;
                }
                Err(ExportError::MissingRecipient) => {
                    // Blocking notice; the prompt stays open
                    app.status_message = "Skriv inn e-postadresse først".to_string();
                }
                Err(e) => {
                    app.status_message = format!("E-post-kladd feilet: {e}");
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
    fn empty_recipient_blocks_the_draft() {
        let mut app = App::new();
        app.screen = AppScreen::EmailPrompt;

        handle_email_input(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "Skriv inn e-postadresse først");
        assert_eq!(app.screen, AppScreen::EmailPrompt);
    }
}
