//! Help panel widget
//!
//! `build_help_lines()` lists every key binding section; the panel renders
//! them in a bordered, scrollable paragraph.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// All help panel lines, section by section
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Lists", keys::LISTS_KEYS);
    push_section(&mut lines, "Merge", keys::MERGE_KEYS);
    push_section(&mut lines, "Fetch Error", keys::ERROR_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render help content showing key bindings
///
/// `scroll` is the vertical scroll offset (0 = top). Values beyond the
/// content length are clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" listmerge - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
