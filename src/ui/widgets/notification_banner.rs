//! Notification banner widget
//!
//! Displays transient feedback such as rejected moves or a finished refresh.

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::model::{Notification, NotificationKind};

/// Render a notification banner just above the status bar
pub fn render_notification_banner(
    frame: &mut Frame,
    notification: &Notification,
    status_bar_height: u16,
) {
    let area = frame.area();
    let y_offset = status_bar_height + 1;
    if area.height < y_offset {
        return;
    }
    let banner_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - y_offset,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let line = build_notification_line(notification);
    frame.render_widget(Paragraph::new(line), banner_area);
}

fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => (" Success: ", Color::Green),
        NotificationKind::Warning => (" Warning: ", Color::Yellow),
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(color)),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(color),
        ),
    ])
}
