use crate::app::state::CoreField;
use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_core(app: &App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    let block = Block::default()
        .title(" 3. Core Requirement & Strength Level ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Breathing
            Constraint::Length(1), // Sequence
            Constraint::Length(1), // Lumbo level
            Constraint::Length(1), // Checkbox
            Constraint::Length(1), // Reps
            Constraint::Length(1), // Lumbo notes
            Constraint::Length(1), // Neck level
            Constraint::Length(1), // Neck notes
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let selected = CoreField::from_index(app.core_field_index).unwrap_or(CoreField::Breathing);
    let core = &app.document.core;

    for (index, field) in CoreField::ALL.iter().enumerate() {
        let is_selected = *field == selected;
        let is_editing = is_selected && app.core_editing;

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

        let value = match field {
            CoreField::Breathing => core.breathing.map_or("", |b| b.label()).to_string(),
            CoreField::Sequence => core.sequence.map_or("", |s| s.label()).to_string(),
            CoreField::LumboLevel => core
                .lumbo_pelvic_level
                .map_or("", |l| l.label())
                .to_string(),
            CoreField::LumboChecked => {
                if core.lumbo_pelvic_checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            CoreField::LumboReps => core.lumbo_pelvic_reps.clone(),
            CoreField::LumboNotes => core.lumbo_pelvic_notes.clone(),
            CoreField::NeckLevel => core.neck_level.map_or("", |l| l.label()).to_string(),
            CoreField::NeckNotes => core.neck_notes.clone(),
        };

        let line = TextLine::from(vec![
            Span::styled(format!("{prefix}{:<36}: ", field.label()), style),
            Span::styled(value, style),
        ]);
        f.render_widget(Paragraph::new(line), chunks[index]);
    }

    let status = if app.core_editing {
        if selected.is_choice() {
            "Redigerer: ←/→ bla gjennom valg · Enter/Esc avslutter"
        } else {
            "Redigerer: skriv inn verdi · Enter/Esc avslutter"
        }
    } else {
        "↑/↓ velg felt · Enter rediger (mellomrom veksler avkrysning) · Esc tilbake"
    };

    let status_line = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status_line, chunks[9]);
}
