//! Loader polling and manual refresh

use super::state::App;
use crate::state::Msg;

impl App {
    /// Hand a finished fetch, if any, to the reducer
    ///
    /// Called on every tick of the event loop.
    pub fn poll_loader(&mut self) {
        let Some(result) = self.loader.poll() else {
            return;
        };
        match result {
            Ok(lists) => self.dispatch(Msg::FetchSucceeded(lists)),
            Err(e) => self.dispatch(Msg::FetchFailed(e.to_string())),
        }
    }

    /// Reload the collection from the browsing screen
    ///
    /// The reducer ignores this outside the lists view.
    pub fn execute_refresh(&mut self) {
        self.dispatch(Msg::Refresh);
    }

    /// Fetch again after a failure
    pub fn execute_retry(&mut self) {
        if self.state.error().is_some() {
            self.dispatch(Msg::Reload);
        }
    }
}
