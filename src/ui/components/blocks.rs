//! Block components for UI rendering
//!
//! Common block patterns used across views.

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block whose border color marks keyboard focus
pub fn focus_block<'a>(
    title: Line<'a>,
    focused: bool,
    focused_color: Color,
    unfocused_color: Color,
) -> Block<'a> {
    let color = if focused {
        focused_color
    } else {
        unfocused_color
    };
    bordered_block(title).border_style(Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    #[test]
    fn test_bordered_block_draws_title() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        bordered_block(Line::from("Lists")).render(area, &mut buf);

        let top: String = (0..12).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(top.contains("Lists"));
    }

    #[test]
    fn test_focus_block_border_color() {
        let area = Rect::new(0, 0, 6, 3);

        let mut buf = Buffer::empty(area);
        focus_block(Line::from(""), true, Color::Cyan, Color::DarkGray).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Cyan);

        let mut buf = Buffer::empty(area);
        focus_block(Line::from(""), false, Color::Cyan, Color::DarkGray).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::DarkGray);
    }
}
