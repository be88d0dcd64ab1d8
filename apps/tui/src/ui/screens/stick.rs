use crate::app::App;
use crate::domain::StickSegment;
use crate::ui::widgets::bilateral::render_bilateral_form;
use ratatui::Frame;

pub fn render_stick(app: &App, f: &mut Frame<'_>) {
    let stick = &app.document.core.stick;
    let segments: Vec<_> = StickSegment::ALL
        .iter()
        .map(|segment| (segment.label(), stick.pair(*segment).clone()))
        .collect();

    render_bilateral_form(
        f,
        "Standing \"Stick Test\"",
        &segments,
        &stick.notes,
        &app.stick_cursor,
    );
}
