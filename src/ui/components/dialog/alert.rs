//! Alert dialog rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{Dialog, centered_rect};

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 64;

impl Dialog {
    /// Width that fits the message on one line when the screen allows it
    pub(super) fn preferred_width(&self) -> u16 {
        let text = self.message.chars().count().max(self.title.chars().count() + 2);
        (text as u16).saturating_add(4).clamp(MIN_WIDTH, MAX_WIDTH)
    }

    pub(super) fn render_alert(&self, frame: &mut Frame, area: Rect) {
        let width = self.preferred_width().min(area.width.saturating_sub(4));
        let inner_width = width.saturating_sub(2).max(1) as usize;
        let message_rows = self.message.chars().count().div_ceil(inner_width).max(1) as u16;
        let height = (message_rows + 5).min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);

        frame.render_widget(Clear, dialog_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("[OK]", Style::default().fg(Color::Green))),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, dialog_area);
    }
}
