//! Full-screen loading and fetch error views

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::{components, theme::status_screen};

/// Headline of the fetch error screen
pub const FETCH_ERROR_HEADLINE: &str = "Failed to fetch data";

/// Render the loading screen
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let title = Line::from(" listmerge ")
        .bold()
        .fg(status_screen::LOADING)
        .centered();
    let body = vec![
        Line::from(""),
        Line::from("Loading lists...").fg(status_screen::LOADING).centered(),
    ];
    frame.render_widget(
        Paragraph::new(body).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

/// Render the fetch error screen with the failure reason and a retry hint
pub fn render_fetch_error(frame: &mut Frame, area: Rect, reason: &str) {
    let title = Line::from(" listmerge ")
        .bold()
        .fg(status_screen::ERROR)
        .centered();
    let body = vec![
        Line::from(""),
        components::build_error_line(FETCH_ERROR_HEADLINE).centered(),
        Line::from(""),
        Line::from(reason.to_string()).centered(),
        Line::from(""),
        Line::from("Press r to try again").dark_gray().centered(),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}
