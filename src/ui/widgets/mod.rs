//! Reusable UI widgets

mod help_panel;
mod notification_banner;
mod placeholder;
mod status_bar;

pub use help_panel::{build_help_lines, render_help_panel};
pub use notification_banner::render_notification_banner;
pub use placeholder::{render_fetch_error, render_loading};
pub use status_bar::{STATUS_BAR_HEIGHT, build_status_bar, render_status_bar};
