use crate::app::App;
use crate::domain::RowField;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_overview(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Mobility table
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title(app, f, chunks[0]);
    render_table(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
    render_shortcuts(f, chunks[3]);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let filter = if app.filter_editing {
        format!("  /{}_", app.filter_input)
    } else if app.filter_input.is_empty() {
        String::new()
    } else {
        format!("  /{}", app.filter_input)
    };

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Cor Optima ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— Mobilitet & Core",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(filter, Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(title, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let visible_tests = app.visible_tests();

    if visible_tests.is_empty() {
        let block = Block::default()
            .title(" 1. Mobilitet/Bevegelse ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let paragraph = Paragraph::new("Ingen tester matcher filteret.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(
        ["Test", "Left", "Right", "Bilat", "ADL Normal", "Spec Sport", "Notater"]
            .map(Cell::from),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = visible_tests.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows.max(1), app.selected_test_index);

    let rows = visible_tests
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows.max(1))
        .map(|(i, test)| {
            let style = if i == app.selected_test_index {
                Style::default()
                    .bg(Color::Rgb(111, 162, 135))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(test.label()),
                Cell::from(degree_cell(app.document.field(*test, RowField::Left))),
                Cell::from(degree_cell(app.document.field(*test, RowField::Right))),
                Cell::from(degree_cell(app.document.field(*test, RowField::Bilat))),
                Cell::from(app.document.field(*test, RowField::AdlNormal)),
                Cell::from(app.document.field(*test, RowField::SpecSport)),
                Cell::from(app.document.field(*test, RowField::Notater)),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Min(36),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" 1. Mobilitet/Bevegelse ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    f.render_widget(table, area);
}

/// `°` suffix for populated degree values; an empty cell stays blank.
fn degree_cell(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{value}°")
    }
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let filled = app.document.rows_with_data();
    let summary = format!(
        "{filled}/17 tester utfylt · {} gradmålinger · lagres i {}",
        app.document.degrees_recorded(),
        app.actions
            .store
            .as_ref()
            .map_or_else(|| "minne".to_string(), |s| s.path().display().to_string()),
    );

    let text = if app.status_message.is_empty() {
        summary
    } else {
        app.status_message.clone()
    };

    let status = Paragraph::new(text).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let hint = TextLine::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": rediger rad  "),
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(": filter  "),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(": core  "),
        Span::styled("l", Style::default().fg(Color::Yellow)),
        Span::raw(": lunge  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(": stick  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(": handlinger  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(": hjelp  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": avslutt"),
    ]);

    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_degree_cells_render_blank() {
        assert_eq!(degree_cell(""), "");
        assert_eq!(degree_cell("95"), "95°");
        assert_eq!(degree_cell("12.5"), "12.5°");
    }
}
