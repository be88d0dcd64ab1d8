use crate::app::state::BilateralCursor;
use crate::store::SidePair;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Renders one of the standing sub-forms: five body segments with a left
/// and right cell each, plus a trailing notes field.
pub fn render_bilateral_form(
    f: &mut Frame<'_>,
    title: &str,
    segments: &[(&'static str, SidePair)],
    notes: &str,
    cursor: &BilateralCursor,
) {
    let area = f.area().inner(Margin::new(2, 1));

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Column header
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Notes
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let header = TextLine::from(Span::styled(
        format!("  {:<14} {:<20} {:<20}", "", "Left", "Right"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(header), chunks[0]);

    for (row, (label, pair)) in segments.iter().enumerate() {
        let left_style = cell_style(cursor, row * 2);
        let right_style = cell_style(cursor, row * 2 + 1);

        let line = TextLine::from(vec![
            Span::raw(format!("  {label:<14} ")),
            Span::styled(format!("{:<20}", pair.left), left_style),
            Span::raw(" "),
            Span::styled(format!("{:<20}", pair.right), right_style),
        ]);
        f.render_widget(Paragraph::new(line), chunks[row + 1]);
    }

    let notes_style = cell_style(cursor, BilateralCursor::CELLS - 1);
    let notes_line = TextLine::from(vec![
        Span::raw("  Notater        "),
        Span::styled(notes.to_string(), notes_style),
    ]);
    f.render_widget(Paragraph::new(notes_line), chunks[6]);

    let status = if cursor.editing {
        "Redigerer: skriv inn verdi · Enter/Esc avslutter"
    } else {
        "↑/↓ velg celle · Enter rediger · Esc tilbake"
    };
    let status_line = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status_line, chunks[8]);
}

fn cell_style(cursor: &BilateralCursor, index: usize) -> Style {
    if cursor.index != index {
        return Style::default();
    }

    if cursor.editing {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
