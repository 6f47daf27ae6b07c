//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Rows the status bar takes at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    })
}

/// Render the key hints on the bottom row
pub fn render_status_bar(frame: &mut Frame, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    frame.render_widget(Paragraph::new(build_status_bar(hints)), status_area);
}
