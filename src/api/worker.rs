//! Background fetch worker
//!
//! Owns a current-thread tokio runtime on its own OS thread. The UI sends
//! fetch requests over a channel and picks results up with `poll` on its
//! idle tick. Dropping the worker closes the request channel, which ends
//! the thread once any in-flight fetch returns.

use std::thread;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tracing::{debug, info};

use super::{ApiError, ListClient, ListLoader};
use crate::model::List;

type FetchResult = Result<Vec<List>, ApiError>;

/// [`ListLoader`] backed by [`ListClient`] on a worker thread
#[derive(Debug)]
pub struct FetchWorker {
    requests: Sender<()>,
    results: Receiver<FetchResult>,
    /// A request was sent and no result has been handed out yet
    pending: bool,
}

impl FetchWorker {
    /// Start the worker thread
    pub fn spawn(client: ListClient) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (request_tx, request_rx) = crossbeam_channel::unbounded::<()>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<FetchResult>();

        thread::Builder::new()
            .name("list-fetch".to_string())
            .spawn(move || {
                info!(url = %client.url(), "fetch worker started");
                while request_rx.recv().is_ok() {
                    let result = runtime.block_on(client.fetch_lists());
                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
                debug!("fetch worker exiting");
            })?;

        Ok(Self {
            requests: request_tx,
            results: result_rx,
            pending: false,
        })
    }
}

impl ListLoader for FetchWorker {
    fn request(&mut self) {
        self.pending = true;
        if self.requests.send(()).is_err() {
            debug!("fetch worker gone, request dropped");
        }
    }

    fn poll(&mut self) -> Option<FetchResult> {
        match self.results.try_recv() {
            Ok(result) => {
                self.pending = false;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) if self.pending => {
                self.pending = false;
                Some(Err(ApiError::WorkerStopped))
            }
            Err(TryRecvError::Disconnected) => None,
        }
    }
}
