//! Alert dialog rendering

use super::helpers::{contains, draw};
use listmerge::state::SELECT_TWO_MESSAGE;
use listmerge::ui::components::Dialog;

#[test]
fn test_alert_over_background() {
    let dialog = Dialog::alert("Create New List", SELECT_TWO_MESSAGE);
    let rows = draw(80, 20, |frame| {
        frame.render_widget(
            ratatui::widgets::Paragraph::new("background ".repeat(200))
                .wrap(ratatui::widgets::Wrap { trim: false }),
            frame.area(),
        );
        dialog.render(frame, frame.area());
    });

    assert!(contains(&rows, " Create New List "));
    assert!(contains(&rows, SELECT_TWO_MESSAGE));
    assert!(contains(&rows, "[OK]"));

    // The dialog clears what is behind it
    let message_row = rows
        .iter()
        .find(|row| row.contains(SELECT_TWO_MESSAGE))
        .unwrap();
    let inside = message_row.split('│').nth(1).unwrap();
    assert!(!inside.contains("background"));
}

#[test]
fn test_alert_is_centered() {
    let dialog = Dialog::alert("Notice", "short");
    let rows = draw(60, 20, |frame| dialog.render(frame, frame.area()));

    let top = rows.iter().position(|row| row.contains(" Notice ")).unwrap();
    let bottom = rows.iter().rposition(|row| row.contains('└')).unwrap();
    assert_eq!(top, 20 - 1 - bottom);
}
