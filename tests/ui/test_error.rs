//! Loading and fetch error screens

use super::helpers::{contains, draw, inner_rows};
use listmerge::ui::widgets::{render_fetch_error, render_loading};

#[test]
fn test_loading_screen() {
    let rows = draw(40, 6, |frame| render_loading(frame, frame.area()));
    assert!(contains(&rows, "Loading lists..."));
    assert!(rows[0].contains("listmerge"));
}

#[test]
fn test_fetch_error_screen() {
    let rows = draw(60, 10, |frame| {
        render_fetch_error(frame, frame.area(), "request failed: connection refused");
    });
    let inner: Vec<String> = inner_rows(&rows)
        .iter()
        .map(|row| row.trim().to_string())
        .filter(|row| !row.is_empty())
        .collect();

    assert_eq!(
        inner,
        vec![
            "Error:  Failed to fetch data",
            "request failed: connection refused",
            "Press r to try again",
        ]
    );
}

#[test]
fn test_fetch_error_long_reason_wraps() {
    let reason = "request failed: error sending request for url (http://127.0.0.1:9/lists)";
    let rows = draw(30, 14, |frame| render_fetch_error(frame, frame.area(), reason));

    assert!(contains(&rows, "Error:"));
    assert!(contains(&rows, "127.0.0.1"));
    assert!(contains(&rows, "Press r to try again"));
}
