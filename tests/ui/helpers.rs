//! Shared drawing helpers for the rendering tests

use ratatui::{Frame, Terminal, backend::TestBackend};

/// Draw with `f` and return every row with trailing spaces removed
pub fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(f).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(width as usize)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Rows between the top and bottom border, with the side borders cut off
pub fn inner_rows(rows: &[String]) -> Vec<String> {
    rows[1..rows.len() - 1]
        .iter()
        .map(|row| {
            let chars: Vec<char> = row.chars().collect();
            let end = chars.len().saturating_sub(1);
            chars[1.min(end)..end]
                .iter()
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

pub fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
