//! Application state and command execution

use tracing::debug;

use crate::api::ListLoader;
use crate::model::Notification;
use crate::state::{Command, ListsState, Msg};
use crate::ui::components::Dialog;
use crate::ui::views::{ListsView, MergeView};

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Lists, selection and current screen
    pub state: ListsState,
    /// Lists view cursor
    pub lists_view: ListsView,
    /// Merge view focus and cursors
    pub merge_view: MergeView,
    /// Transient feedback shown above the status bar
    pub notification: Option<Notification>,
    /// Blocking alert (takes all input while open)
    pub active_dialog: Option<Dialog>,
    /// Help overlay visible
    pub show_help: bool,
    /// Help overlay scroll offset
    pub help_scroll: u16,
    /// Source of list collections
    pub(crate) loader: Box<dyn ListLoader>,
}

impl App {
    /// Create the app and issue the initial fetch
    pub fn new(loader: impl ListLoader + 'static) -> Self {
        let mut app = Self {
            running: true,
            state: ListsState::new(),
            lists_view: ListsView::new(),
            merge_view: MergeView::new(),
            notification: None,
            active_dialog: None,
            show_help: false,
            help_scroll: 0,
            loader: Box::new(loader),
        };
        app.dispatch(Msg::Reload);
        app
    }

    /// Feed a message to the reducer and run the command it returns
    pub fn dispatch(&mut self, msg: Msg) {
        let was_merging = self.state.is_creating();
        let command = self.state.update(msg);
        if !was_merging && self.state.is_creating() {
            self.merge_view.reset();
        }
        if let Some(command) = command {
            self.run_command(command);
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Fetch => {
                debug!("requesting list collection");
                self.loader.request();
            }
            Command::Alert { title, message } => {
                self.active_dialog = Some(Dialog::alert(title, message));
            }
            Command::Notify(notification) => {
                self.notification = Some(notification);
            }
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
