//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and command execution
//! - `fetch`: loader polling and manual refresh
//! - `input`: Key event handling
//! - `render`: UI rendering

mod fetch;
mod input;
mod render;
mod state;

pub use state::App;
