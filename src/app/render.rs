//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::App;
use crate::keys;
use crate::state::Screen;
use crate::ui::widgets::{
    STATUS_BAR_HEIGHT, render_fetch_error, render_help_panel, render_loading,
    render_notification_banner, render_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = main_area(frame.area());

        if self.show_help {
            render_help_panel(frame, area, self.help_scroll);
        } else {
            match self.state.screen() {
                Screen::Loading => render_loading(frame, area),
                Screen::Error(reason) => render_fetch_error(frame, area, reason),
                Screen::Viewing => {
                    self.lists_view
                        .render(frame, area, self.state.lists(), self.state.selection());
                }
                Screen::Merging(session) => {
                    self.merge_view
                        .render(frame, area, session, self.state.lists());
                }
            }
        }

        render_status_bar(frame, keys::current_hints(self.state.screen()));

        if let Some(notification) = self.notification.as_ref().filter(|n| !n.is_expired()) {
            render_notification_banner(frame, notification, STATUS_BAR_HEIGHT);
        }

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, frame.area());
        }
    }
}

/// Screen area above the status bar
fn main_area(area: Rect) -> Rect {
    if area.height < 2 {
        return area;
    }
    Rect {
        height: area.height - STATUS_BAR_HEIGHT,
        ..area
    }
}
