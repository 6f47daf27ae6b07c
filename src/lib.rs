//! listmerge - pick two lists from a list service and merge their items
//!
//! A terminal UI over a read-only list service.
//!
//! This library provides:
//! - [`api`]: HTTP client and background fetch worker
//! - [`app`]: Application state and logic
//! - [`config`]: CLI flags and config file
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logging setup
//! - [`model`]: Domain models
//! - [`state`]: View state machine and reducer
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod state;
pub mod ui;
