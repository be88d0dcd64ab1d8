use crate::app::state::FormAction;
use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_actions(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let menu_area = centered_rect(44, 40, area);
    f.render_widget(ClearWidget, menu_area);

    let block = Block::default()
        .title(" Handlinger ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, menu_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help text
        ])
        .split(menu_area);

    for (index, action) in FormAction::ALL.iter().enumerate() {
        let is_selected = index == app.action_index;
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let prefix = if is_selected { "> " } else { "  " };

        let line = TextLine::from(Span::styled(format!("{prefix}{}", action.label()), style));
        f.render_widget(Paragraph::new(line), chunks[index]);
    }

    let status_line = Paragraph::new("↑/↓ velg · Enter utfør · Esc tilbake")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status_line, chunks[5]);
}
