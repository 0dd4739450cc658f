//! In-memory capabilities for host-side tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::cancel::CancelToken;
use crate::core::clock::{Clock, Timer};
use crate::core::error::FetchError;
use crate::core::navigator::Viewport;
use crate::models::{Crumb, NavigatorView};

// ============================================================================
// Clock
// ============================================================================

/// Clock advanced by hand; `sleep` advances it and yields once.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl Timer for ManualClock {
    async fn sleep(&self, ms: u32) {
        self.advance(f64::from(ms));
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Transport
// ============================================================================

#[derive(Default)]
struct TransportInner {
    responses: RefCell<HashMap<String, Result<String, FetchError>>>,
    calls: RefCell<HashMap<String, usize>>,
    hooks: RefCell<HashMap<String, Box<dyn Fn()>>>,
}

/// URL-keyed canned responses with per-URL call counts.
///
/// Unknown URLs answer 404. Every request yields once, so concurrent tasks
/// interleave at request boundaries like they would in the browser.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<TransportInner>,
}

impl MockTransport {
    pub const API: &'static str = "https://api.test/contents";
    pub const MEDIA: &'static str = "https://media.test/main";
    pub const RAW: &'static str = "https://raw.test";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, url: &str, body: &str) {
        self.inner
            .responses
            .borrow_mut()
            .insert(url.to_string(), Ok(body.to_string()));
    }

    pub fn status(&self, url: &str, status: u16) {
        self.inner
            .responses
            .borrow_mut()
            .insert(url.to_string(), Err(FetchError::HttpError(status)));
    }

    /// Register a listing of `(name, path, type)` items. Files get a
    /// download URL under [`MockTransport::RAW`].
    pub fn listing(&self, url: &str, items: &[(&str, &str, &str)]) {
        let items: Vec<serde_json::Value> = items
            .iter()
            .map(|(name, path, kind)| {
                let download_url = (*kind == "file").then(|| format!("{}/{}", Self::RAW, path));
                serde_json::json!({
                    "name": name,
                    "path": path,
                    "type": kind,
                    "download_url": download_url,
                })
            })
            .collect();
        self.text(url, &serde_json::Value::Array(items).to_string());
    }

    /// Register a file body at its raw download URL.
    pub fn file(&self, path: &str, body: &str) {
        self.text(&format!("{}/{}", Self::RAW, path), body);
    }

    /// Run `hook` when `url` is requested, before the response is produced.
    pub fn on_request(&self, url: &str, hook: impl Fn() + 'static) {
        self.inner
            .hooks
            .borrow_mut()
            .insert(url.to_string(), Box::new(hook));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.inner.calls.borrow().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.inner.calls.borrow().values().sum()
    }
}

impl crate::core::source::Transport for MockTransport {
    async fn get_text(
        &self,
        url: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<String, FetchError> {
        *self
            .inner
            .calls
            .borrow_mut()
            .entry(url.to_string())
            .or_insert(0) += 1;

        if let Some(hook) = self.inner.hooks.borrow().get(url) {
            hook();
        }

        tokio::task::yield_now().await;

        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(FetchError::Aborted);
        }

        self.inner
            .responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::HttpError(404)))
    }
}

/// Small archive used across tests:
///
/// ```text
/// draft.md        tags: [poem, draft]
/// notes/
///   poem.md       no frontmatter
///   old/
///     x.md        tags: [prose]
/// .git/           (never listed)
/// readme.txt
/// ```
pub fn sample_repo() -> MockTransport {
    let transport = MockTransport::new();
    let api = MockTransport::API;

    transport.listing(
        api,
        &[
            ("draft.md", "draft.md", "file"),
            ("notes", "notes", "dir"),
            (".git", ".git", "dir"),
            ("readme.txt", "readme.txt", "file"),
        ],
    );
    transport.listing(
        &format!("{api}/notes"),
        &[("poem.md", "notes/poem.md", "file"), ("old", "notes/old", "dir")],
    );
    transport.listing(&format!("{api}/notes/old"), &[("x.md", "notes/old/x.md", "file")]);

    transport.file(
        "draft.md",
        "---\ntags: [poem, draft]\ncreated: 2023-01-01\n---\nHello",
    );
    transport.file("notes/poem.md", "Roses <are> red");
    transport.file("notes/old/x.md", "---\ntags: [prose]\n---\nOld");
    transport.file("readme.txt", "a & b");

    transport
}

// ============================================================================
// Viewport
// ============================================================================

#[derive(Default)]
pub struct Recorded {
    pub views: Vec<NavigatorView>,
    pub crumbs: Vec<Crumb>,
    pub search_text: String,
    pub hashes: Vec<String>,
    pub tag_hints: HashMap<String, Vec<String>>,
}

/// Viewport that records every update.
#[derive(Clone, Default)]
pub struct RecordingViewport {
    pub recorded: Rc<RefCell<Recorded>>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> NavigatorView {
        self.recorded.borrow().views.last().cloned().unwrap_or_default()
    }

    pub fn views(&self) -> Vec<NavigatorView> {
        self.recorded.borrow().views.clone()
    }

    pub fn crumb_labels(&self) -> Vec<String> {
        self.recorded
            .borrow()
            .crumbs
            .iter()
            .map(|c| c.label.clone())
            .collect()
    }

    pub fn last_hash(&self) -> Option<String> {
        self.recorded.borrow().hashes.last().cloned()
    }

    pub fn search_text(&self) -> String {
        self.recorded.borrow().search_text.clone()
    }

    pub fn tag_hint(&self, path: &str) -> Option<Vec<String>> {
        self.recorded.borrow().tag_hints.get(path).cloned()
    }
}

impl Viewport for RecordingViewport {
    fn set_view(&self, view: NavigatorView) {
        self.recorded.borrow_mut().views.push(view);
    }

    fn set_breadcrumb(&self, crumbs: Vec<Crumb>) {
        self.recorded.borrow_mut().crumbs = crumbs;
    }

    fn set_search_text(&self, text: &str) {
        self.recorded.borrow_mut().search_text = text.to_string();
    }

    fn set_tag_hint(&self, path: &str, tags: Vec<String>) {
        self.recorded
            .borrow_mut()
            .tag_hints
            .insert(path.to_string(), tags);
    }

    fn sync_location(&self, hash: &str) {
        self.recorded.borrow_mut().hashes.push(hash.to_string());
    }
}
