//! Merge view rendering

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use ratatui::{Terminal, backend::TestBackend};

use super::helpers::{contains, draw};
use listmerge::model::{List, ListNumber, MergeSession};
use listmerge::ui::views::MergeView;

fn fixture() -> (MergeSession, Vec<List>) {
    (
        MergeSession::new(ListNumber(1), ListNumber(2)),
        vec![List::new(1, ["a", "b"]), List::new(2, ["c"])],
    )
}

#[test]
fn test_merge_view_three_panes() {
    let (session, lists) = fixture();
    let view = MergeView::new();

    let rows = draw(90, 8, |frame| {
        view.render(frame, frame.area(), &session, &lists);
    });

    assert!(rows[0].contains(" List 1 "));
    assert!(rows[0].contains(" List 2 "));
    assert!(rows[0].contains(" New List "));
    assert!(rows[1].contains("a →"));
    assert!(rows[2].contains("b →"));
    assert!(rows[1].contains("c ←"));
    assert!(rows[1].contains("(empty)"));
}

#[test]
fn test_merge_view_empty_side() {
    let session = MergeSession::new(ListNumber(1), ListNumber(2));
    let lists = vec![List::new(1, ["a"]), List::new(2, Vec::<String>::new())];

    let rows = draw(90, 6, |frame| {
        MergeView::new().render(frame, frame.area(), &session, &lists);
    });

    assert!(contains(&rows, "a →"));
    assert!(contains(&rows, "(no items)"));
}

#[test]
fn test_focused_pane_border_and_cursor() {
    let (session, lists) = fixture();
    let mut view = MergeView::new();
    view.handle_key(
        KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
        &session,
        &lists,
    );

    let mut terminal = Terminal::new(TestBackend::new(90, 6)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), &session, &lists))
        .unwrap();
    let buffer = terminal.backend().buffer();

    // Left pane starts at x=0, right pane at x=30
    assert_eq!(buffer[(0, 0)].fg, Color::DarkGray);
    assert_eq!(buffer[(30, 0)].fg, Color::Cyan);
    // Cursor row highlighted only in the focused pane
    assert_eq!(buffer[(31, 1)].bg, Color::DarkGray);
    assert_ne!(buffer[(1, 1)].bg, Color::DarkGray);
}
