//! Lists view rendering

use insta::assert_snapshot;

use super::helpers::{contains, draw, inner_rows};
use listmerge::model::{List, ListNumber, Selection};
use listmerge::ui::views::ListsView;

fn lists() -> Vec<List> {
    vec![
        List::new(1, ["a", "b"]),
        List::new(2, ["c"]),
        List::new(3, Vec::<String>::new()),
    ]
}

#[test]
fn test_lists_view_layout() {
    let view = ListsView::new();
    let mut selection = Selection::new();
    selection.toggle(ListNumber(2));

    let rows = draw(40, 10, |frame| {
        view.render(frame, frame.area(), &lists(), &selection);
    });

    assert!(rows[0].contains("List Creation (1/2 selected)"));
    assert_snapshot!(inner_rows(&rows).join("\n").trim_end(), @r"
    ▶ [ ] List 1
          a
          b
      [x] List 2
          c
      [ ] List 3
          (no items)
    ");
}

#[test]
fn test_lists_view_scrolls_to_cursor() {
    let many: Vec<List> = (1..=10).map(|n| List::new(n, ["item"])).collect();
    let mut view = ListsView::new();
    view.select_last(&many);

    let rows = draw(30, 6, |frame| {
        view.render(frame, frame.area(), &many, &Selection::new());
    });

    assert!(contains(&rows, "▶ [ ] List 10"));
    assert!(!contains(&rows, "List 1 "));
}

#[test]
fn test_lists_view_empty() {
    let rows = draw(40, 8, |frame| {
        ListsView::new().render(frame, frame.area(), &[], &Selection::new());
    });

    assert!(contains(&rows, "No lists found"));
    assert!(contains(&rows, "(0/2 selected)"));
}
