use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/↓", "Naviger i listen eller skjemaet"),
    ("Enter", "Åpne / rediger valgt felt"),
    ("Esc", "Lukk felt eller gå tilbake"),
    ("/", "Filtrer testlisten"),
    ("c", "Core Requirement & Strength Level"),
    ("l", "Standing Lunge Test"),
    ("t", "Standing Stick Test"),
    ("a", "Handlinger (nullstill / eksport / e-post)"),
    ("?", "Vis / skjul denne hjelpen"),
    ("q", "Avslutt"),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = f.area();
    let popup_area = centered_rect(50, 60, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Hjelp ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, popup_area);

    for (index, (key, description)) in BINDINGS.iter().enumerate() {
        let y = popup_area.y + 2 + index as u16;
        if y >= popup_area.y + popup_area.height.saturating_sub(1) {
            break;
        }
        let line_area = Rect::new(
            popup_area.x + 2,
            y,
            popup_area.width.saturating_sub(4),
            1,
        );
        let line = TextLine::from(vec![
            Span::styled(
                format!("{key:<7}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*description),
        ]);
        f.render_widget(Paragraph::new(line), line_area);
    }
}
