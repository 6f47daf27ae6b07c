//! List service access layer
//!
//! Fetches the list collection over HTTP on a background worker so the UI
//! thread never blocks on the network.

mod client;
/// Payload module (public for integration testing)
pub mod payload;
mod worker;

pub use client::ListClient;
pub use payload::{ListsPayload, parse_lists};
pub use worker::FetchWorker;

use std::fmt::Debug;
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::{List, ListNumber};

/// Errors that can occur while fetching lists
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("list service returned {0}")]
    Status(StatusCode),

    #[error("invalid list payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("duplicate list number {0} in payload")]
    DuplicateList(ListNumber),

    #[error("failed to start fetch worker: {0}")]
    Worker(#[from] io::Error),

    #[error("fetch worker stopped")]
    WorkerStopped,
}

/// Source of the list collection as seen by the app
///
/// `request` starts a fetch; `poll` hands back finished results without
/// blocking. The app requests at most one fetch at a time.
pub trait ListLoader: Debug {
    /// Start one fetch
    fn request(&mut self);

    /// Take a finished fetch result, if any
    fn poll(&mut self) -> Option<Result<Vec<List>, ApiError>>;
}
