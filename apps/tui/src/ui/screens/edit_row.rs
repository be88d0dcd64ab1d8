use crate::app::App;
use crate::domain::RowField;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_edit_row(app: &App, f: &mut Frame<'_>) {
    let Some(edit) = &app.edit_row else {
        return;
    };

    let area = f.area();
    let form_area = centered_rect(70, 60, area);
    f.render_widget(ClearWidget, form_area);

    let block = Block::default()
        .title(format!(" {} ", edit.test.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Left
            Constraint::Length(1), // Right
            Constraint::Length(1), // Bilat
            Constraint::Length(1), // ADL Normal
            Constraint::Length(1), // Spec Sport
            Constraint::Length(2), // Notater
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help text
        ])
        .split(form_area);

    let selected = edit.field();

    for (index, field) in RowField::ALL.iter().enumerate() {
        let is_selected = *field == selected;
        let is_editing = is_selected && edit.editing;

        let style = if is_editing {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let prefix = if is_editing {
            "► "
        } else if is_selected {
            "> "
        } else {
            "  "
        };

        let value = app.document.field(edit.test, *field);
        let suffix = if field.is_degrees() { "°" } else { "" };

        let line = TextLine::from(vec![
            Span::styled(format!("{prefix}{:<12}: ", field.label()), style),
            Span::styled(format!("{value}{suffix}"), style),
        ]);
        f.render_widget(Paragraph::new(line), chunks[index]);
    }

    let status = if edit.editing {
        if selected.is_degrees() {
            "Redigerer: tall, punktum, komma og minus · Enter/Esc avslutter"
        } else {
            "Redigerer: fritekst · Enter/Esc avslutter"
        }
    } else {
        "↑/↓ velg felt · Enter rediger · Esc tilbake"
    };

    let status_line = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status_line, chunks[7]);
}
