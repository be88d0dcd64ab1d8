use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_email_prompt(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let prompt_area = centered_rect(60, 30, area);
    f.render_widget(ClearWidget, prompt_area);

    let block = Block::default()
        .title(" E-post-kladd ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, prompt_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Prompt label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help text
        ])
        .split(prompt_area);

    f.render_widget(
        Paragraph::new("Mottakerens e-postadresse:"),
        chunks[0],
    );

    let input = TextLine::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{}█", app.email_input),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(input), chunks[1]);

    let status_line = Paragraph::new("Enter åpne kladd · Esc avbryt")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status_line, chunks[3]);
}
