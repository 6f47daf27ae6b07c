//! Common test utilities for integration tests.
//!
//! Provides a scripted [`ListLoader`], key event helpers, screen capture
//! for `TestBackend`, and a local list service for the real client.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use listmerge::api::{ApiError, ListLoader};
use listmerge::app::App;
use listmerge::model::List;

type FetchResult = Result<Vec<List>, ApiError>;

#[derive(Debug, Default)]
struct Script {
    requests: usize,
    outstanding: usize,
    responses: VecDeque<FetchResult>,
}

/// Loader that answers requests from a queue of canned results
///
/// Clones share the same script, so a test keeps one clone to queue
/// responses and inspect the request count after moving the other into
/// the app.
#[derive(Debug, Clone, Default)]
pub struct FakeLoader {
    script: Rc<RefCell<Script>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for the next outstanding request
    pub fn respond(&self, result: FetchResult) {
        self.script.borrow_mut().responses.push_back(result);
    }

    pub fn respond_lists(&self, lists: Vec<List>) {
        self.respond(Ok(lists));
    }

    /// Number of fetches requested so far
    pub fn requests(&self) -> usize {
        self.script.borrow().requests
    }
}

impl ListLoader for FakeLoader {
    fn request(&mut self) {
        let mut script = self.script.borrow_mut();
        script.requests += 1;
        script.outstanding += 1;
    }

    fn poll(&mut self) -> Option<FetchResult> {
        let mut script = self.script.borrow_mut();
        if script.outstanding == 0 {
            return None;
        }
        let result = script.responses.pop_front()?;
        script.outstanding -= 1;
        Some(result)
    }
}

/// Lists 1 `["a","b"]` and 2 `["c"]`
pub fn two_lists() -> Vec<List> {
    vec![List::new(1, ["a", "b"]), List::new(2, ["c"])]
}

/// App whose initial fetch already returned `lists`
pub fn loaded_app(lists: Vec<List>) -> (App, FakeLoader) {
    let loader = FakeLoader::new();
    let mut app = App::new(loader.clone());
    loader.respond_lists(lists);
    app.poll_loader();
    (app, loader)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(key(code));
}

pub fn press_chars(app: &mut App, chars: &str) {
    for c in chars.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Draw the app and return the screen as trimmed text rows
pub fn render_app(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    screen_rows(terminal.backend(), width)
}

pub fn screen_rows(backend: &TestBackend, width: u16) -> Vec<String> {
    backend
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

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

/// Serve a canned response for `GET /lists` and return the base URL
///
/// Any other method or path gets axum's default rejection.
pub async fn spawn_list_server(status: StatusCode, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route(
        "/lists",
        get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// A list service running on its own runtime, for synchronous tests
pub struct ListServer {
    pub base: String,
    _runtime: Runtime,
}

impl ListServer {
    pub fn start(status: StatusCode, body: &'static str) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let base = runtime.block_on(spawn_list_server(status, body));
        Self {
            base,
            _runtime: runtime,
        }
    }

    /// URL of the lists endpoint
    pub fn lists_url(&self) -> String {
        format!("{}/lists", self.base)
    }
}
