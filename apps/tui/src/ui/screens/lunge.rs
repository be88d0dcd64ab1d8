use crate::app::App;
use crate::domain::LungeSegment;
use crate::ui::widgets::bilateral::render_bilateral_form;
use ratatui::Frame;

pub fn render_lunge(app: &App, f: &mut Frame<'_>) {
    let lunge = &app.document.core.lunge;
    let segments: Vec<_> = LungeSegment::ALL
        .iter()
        .map(|segment| (segment.label(), lunge.pair(*segment).clone()))
        .collect();

    render_bilateral_form(
        f,
        "Standing \"Lunge Test\"",
        &segments,
        &lunge.notes,
        &app.lunge_cursor,
    );
}
