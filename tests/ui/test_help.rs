//! Help panel rendering

use super::helpers::{contains, draw};
use listmerge::ui::widgets::render_help_panel;

#[test]
fn test_help_panel_sections() {
    let rows = draw(70, 40, |frame| render_help_panel(frame, frame.area(), 0));

    assert!(rows[0].contains("listmerge - Help"));
    for section in ["Global:", "Navigation:", "Lists:", "Merge:", "Fetch Error:"] {
        assert!(contains(&rows, section), "missing section {section}");
    }
    assert!(contains(&rows, "Select / unselect list (max 2)"));
    assert!(contains(&rows, "Move item to the other list"));
}

#[test]
fn test_help_panel_scroll() {
    let rows = draw(70, 10, |frame| render_help_panel(frame, frame.area(), 2));

    assert!(!contains(&rows, "Key bindings:"));
    assert!(contains(&rows, "Global:"));
}
