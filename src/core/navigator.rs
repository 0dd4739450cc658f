//! Archive navigator state machine.
//!
//! The navigator shows exactly one of: a directory listing, a file, search
//! results, or an inline error. It owns the path cache and the search-result
//! cache, drives the [`RepoClient`], and pushes every visible change through
//! an injected [`Viewport`], so it runs without a browser.
//!
//! # Epochs
//!
//! Every view-changing action (and every search keystroke) takes a new epoch.
//! Work finishing under an older epoch is discarded instead of rendered, which
//! also implements the search debounce: a pending search only runs if no newer
//! action happened during the debounce delay.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use crate::config::archive::{CACHE_TTL_MS, SEARCH_DEBOUNCE_MS, messages};
use crate::core::cache::ArchiveCache;
use crate::core::cancel::CancelToken;
use crate::core::clock::Timer;
use crate::core::frontmatter;
use crate::core::router::ArchiveSession;
use crate::core::search::{self, SearchCache, cached_file, cached_listing, normalize_term};
use crate::core::source::{RepoClient, Transport};
use crate::models::{
    ArchiveTarget, Crumb, FileView, NavigatorView, PreviousState, SearchResultTree, TreeEntry,
    breadcrumb, path_segments,
};
use crate::utils::escape_html;

/// Rendering surface of the navigator.
pub trait Viewport {
    /// Replace the visible pane.
    fn set_view(&self, view: NavigatorView);
    fn set_breadcrumb(&self, crumbs: Vec<Crumb>);
    /// Reflect a programmatic change of the search input.
    fn set_search_text(&self, text: &str);
    /// Attach tag hints to a listed file.
    fn set_tag_hint(&self, path: &str, tags: Vec<String>);
    /// Write the URL hash for the current location.
    fn sync_location(&self, hash: &str);
}

/// Markdown source to HTML.
pub type MarkdownRenderer = fn(&str) -> String;

#[derive(Default)]
struct NavState {
    current_path: Vec<String>,
    /// Raw search input, as typed.
    search_term: String,
    previous: Option<PreviousState>,
    /// Last location written to the URL hash.
    location: Option<ArchiveTarget>,
}

/// Repository navigator over a transport `T`, viewport `V`, and timer `R`.
pub struct Navigator<T, V, R> {
    client: RepoClient<T>,
    viewport: V,
    timer: R,
    markdown: Option<MarkdownRenderer>,
    cache: ArchiveCache,
    results: SearchCache,
    state: RefCell<NavState>,
    epoch: Cell<u64>,
    search: RefCell<Option<CancelToken>>,
}

impl<T: Transport, V: Viewport, R: Timer> Navigator<T, V, R> {
    pub fn new(client: RepoClient<T>, viewport: V, timer: R) -> Self {
        Self {
            client,
            viewport,
            timer,
            markdown: None,
            cache: ArchiveCache::new(CACHE_TTL_MS),
            results: SearchCache::new(),
            state: RefCell::new(NavState::default()),
            epoch: Cell::new(0),
            search: RefCell::new(None),
        }
    }

    /// Render Markdown files with `renderer` instead of as plain text.
    pub fn with_markdown(mut self, renderer: MarkdownRenderer) -> Self {
        self.markdown = Some(renderer);
        self
    }

    pub fn current_path(&self) -> String {
        self.state.borrow().current_path.join("/")
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Enter the state named by a URL target. A target whose hash equals the
    /// location this navigator last wrote is already shown and is ignored.
    ///
    /// Hashes only mark Markdown paths as files, so a folder target is first
    /// looked up in its parent listing and opened as a file when it names one.
    pub async fn open(&self, target: ArchiveTarget) {
        let shown = self.state.borrow().location.as_ref().map(ArchiveTarget::to_hash);
        if shown == Some(target.to_hash()) {
            return;
        }

        match target {
            ArchiveTarget::Root => self.navigate_to_folder("").await,
            ArchiveTarget::Folder(path) => {
                let epoch = self.begin();
                let names_file = self.names_file(&path).await;
                if !self.is_current(epoch) {
                    return;
                }
                if names_file {
                    self.open_file_path(&path).await
                } else {
                    self.navigate_to_folder(&path).await
                }
            }
            ArchiveTarget::File(path) => self.open_file_path(&path).await,
        }
    }

    /// Show the listing of `path`. Breadcrumb and hash update before the fetch.
    pub async fn navigate_to_folder(&self, path: &str) {
        let epoch = self.begin();
        self.cancel_search();

        let segments = path_segments(path);
        {
            let mut state = self.state.borrow_mut();
            state.current_path = segments.clone();
            state.search_term.clear();
        }
        self.viewport.set_search_text("");
        self.viewport.set_breadcrumb(breadcrumb(&segments, None));
        self.sync(ArchiveTarget::folder(path));

        self.show_listing(epoch).await;
    }

    /// Open a file, remembering the current listing/search for [`go_back`].
    ///
    /// [`go_back`]: Navigator::go_back
    pub async fn show_file(&self, entry: &TreeEntry) {
        if entry.is_dir() {
            return self.navigate_to_folder(entry.path()).await;
        }

        let previous = self.snapshot();
        self.enter_file(entry, previous).await;
    }

    /// Open a file by path (deep link) without rendering its folder first.
    ///
    /// The parent listing is fetched through the cache to resolve the entry;
    /// "back" then returns to that folder.
    pub async fn open_file_path(&self, path: &str) {
        self.resolve_file(path, None).await;
    }

    /// Return from a file view to the saved listing or search; root otherwise.
    pub async fn go_back(&self) {
        let previous = self.state.borrow_mut().previous.take();
        let Some(previous) = previous else {
            return self.navigate_to_folder("").await;
        };

        if previous.search_term.is_empty() {
            return self
                .navigate_to_folder(&previous.current_path.join("/"))
                .await;
        }

        self.restore_folder(previous.current_path);
        self.viewport.set_search_text(&previous.search_term);
        self.on_search_input(&previous.search_term).await;
    }

    /// Handle a change of the search input.
    ///
    /// Terms shorter than the minimum show the listing again. Otherwise the
    /// search starts after the debounce delay unless superseded meanwhile.
    pub async fn on_search_input(&self, text: &str) {
        let epoch = self.begin();
        self.cancel_search();
        self.state.borrow_mut().search_term = text.to_string();

        let Some(term) = normalize_term(text) else {
            return self.show_listing(epoch).await;
        };

        self.timer.sleep(SEARCH_DEBOUNCE_MS).await;
        if !self.is_current(epoch) {
            return;
        }

        self.run_search(&term, epoch).await;
    }

    /// Leave the file view and search for `tag`.
    pub async fn search_tag(&self, tag: &str) {
        let previous = self.state.borrow_mut().previous.take();
        let path = previous
            .map(|p| p.current_path)
            .unwrap_or_else(|| self.state.borrow().current_path.clone());

        self.restore_folder(path);
        self.viewport.set_search_text(tag);
        self.on_search_input(tag).await;
    }

    /// Drop every cached listing, file, and search result, then re-enter the
    /// current location. A refreshed file keeps its "back" target.
    pub async fn refresh(&self) {
        self.cache.invalidate_all();
        self.results.clear();

        let (location, term, previous) = {
            let state = self.state.borrow();
            (
                state.location.clone(),
                state.search_term.clone(),
                state.previous.clone(),
            )
        };

        match location {
            Some(ArchiveTarget::File(path)) => self.resolve_file(&path, previous).await,
            Some(_) if !term.is_empty() => self.on_search_input(&term).await,
            Some(target) => self.navigate_to_folder(target.path()).await,
            None => self.navigate_to_folder("").await,
        }
    }

    /// Cancel the in-flight search, if any.
    pub fn cancel_search(&self) {
        if let Some(token) = self.search.borrow_mut().take() {
            token.cancel();
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn begin(&self) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        epoch
    }

    #[inline]
    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    /// The listing or search a file view would return to.
    fn snapshot(&self) -> PreviousState {
        let state = self.state.borrow();
        PreviousState {
            current_path: state.current_path.clone(),
            search_term: state.search_term.clone(),
        }
    }

    /// Whether `path` is listed as a file in its parent folder.
    async fn names_file(&self, path: &str) -> bool {
        let parent = parent_of(path);
        match cached_listing(&self.client, &self.cache, &self.timer, parent, None).await {
            Ok(entries) => entries.iter().any(|e| !e.is_dir() && e.path() == path),
            Err(err) => {
                log::debug!("Could not classify '{}': {}", path, err);
                false
            }
        }
    }

    /// Show `entry`; "back" returns to `previous`.
    async fn enter_file(&self, entry: &TreeEntry, previous: PreviousState) {
        self.state.borrow_mut().previous = Some(previous);
        let epoch = self.begin();
        self.cancel_search();

        let parent = path_segments(parent_of(entry.path()));
        self.viewport
            .set_breadcrumb(breadcrumb(&parent, Some(entry.name())));
        self.sync(ArchiveTarget::File(entry.path().to_string()));

        match cached_file(&self.client, &self.cache, &self.timer, entry, None).await {
            Ok(content) => {
                if !self.is_current(epoch) {
                    return;
                }
                let view = self.file_view(entry, &content);
                self.viewport.set_view(NavigatorView::File(view));
            }
            Err(err) => {
                log::error!("Error fetching file content for {}: {}", entry.path(), err);
                if self.is_current(epoch) {
                    self.viewport
                        .set_view(NavigatorView::Error(messages::FILE_FAILED.to_string()));
                }
            }
        }
    }

    /// Resolve `path` through its parent listing and show it. Without a
    /// `previous` state the parent folder becomes the current location and
    /// the "back" target.
    async fn resolve_file(&self, path: &str, previous: Option<PreviousState>) {
        let epoch = self.begin();
        self.cancel_search();

        let parent = parent_of(path).to_string();
        let segments = path_segments(&parent);
        if previous.is_none() {
            {
                let mut state = self.state.borrow_mut();
                state.current_path = segments.clone();
                state.search_term.clear();
            }
            self.viewport.set_search_text("");
        }
        let name = path.rsplit('/').next().unwrap_or(path);
        self.viewport.set_breadcrumb(breadcrumb(&segments, Some(name)));
        self.sync(ArchiveTarget::File(path.to_string()));

        let listing = cached_listing(&self.client, &self.cache, &self.timer, &parent, None).await;
        if !self.is_current(epoch) {
            return;
        }

        match listing {
            Ok(entries) => match entries.iter().find(|e| !e.is_dir() && e.path() == path) {
                Some(entry) => {
                    let previous = previous.unwrap_or_else(|| self.snapshot());
                    self.enter_file(entry, previous).await
                }
                None => {
                    log::warn!("File not found: {}", path);
                    self.viewport
                        .set_view(NavigatorView::Error(format!("File not found: {}", path)));
                }
            },
            Err(err) => {
                log::error!("Error resolving {}: {}", path, err);
                self.viewport
                    .set_view(NavigatorView::Error(messages::FILE_FAILED.to_string()));
            }
        }
    }

    fn sync(&self, target: ArchiveTarget) {
        self.viewport.sync_location(&target.to_hash());
        self.state.borrow_mut().location = Some(target);
    }

    /// Make `segments` the current folder without fetching it.
    fn restore_folder(&self, segments: Vec<String>) {
        let path = segments.join("/");
        self.viewport.set_breadcrumb(breadcrumb(&segments, None));
        self.state.borrow_mut().current_path = segments;
        self.sync(ArchiveTarget::folder(&path));
    }

    async fn show_listing(&self, epoch: u64) {
        let path = self.current_path();
        self.viewport.set_view(NavigatorView::Listing {
            path: path.clone(),
            entries: None,
        });

        match cached_listing(&self.client, &self.cache, &self.timer, &path, None).await {
            Ok(entries) => {
                if !self.is_current(epoch) {
                    return;
                }
                self.viewport.set_view(NavigatorView::Listing {
                    path,
                    entries: Some(entries.clone()),
                });
                self.annotate_tags(epoch, &entries).await;
            }
            Err(err) => {
                log::error!("Error fetching contents of '{}': {}", path, err);
                if self.is_current(epoch) {
                    self.viewport
                        .set_view(NavigatorView::Error(messages::LISTING_FAILED.to_string()));
                }
            }
        }
    }

    /// Attach frontmatter tags of listed files as hints, one file at a time.
    async fn annotate_tags(&self, epoch: u64, entries: &[TreeEntry]) {
        for entry in entries.iter().filter(|e| !e.is_dir()) {
            if !self.is_current(epoch) {
                return;
            }
            match cached_file(&self.client, &self.cache, &self.timer, entry, None).await {
                Ok(content) => {
                    if let Some(fm) = frontmatter::parse(&content)
                        && !fm.tags.is_empty()
                        && self.is_current(epoch)
                    {
                        self.viewport.set_tag_hint(entry.path(), fm.tags);
                    }
                }
                Err(err) => {
                    log::warn!("Error fetching tags for {}: {}", entry.path(), err);
                }
            }
        }
    }

    async fn run_search(&self, term: &str, epoch: u64) {
        self.viewport.set_view(NavigatorView::SearchResults {
            term: term.to_string(),
            results: None,
        });

        if let Some(hit) = self.results.get(term) {
            log::debug!("Search cache hit for '{}'", term);
            return self.show_results(term, &hit);
        }

        let token = CancelToken::new();
        *self.search.borrow_mut() = Some(token.clone());

        let outcome =
            search::deep_search(&self.client, &self.cache, &self.timer, term, &token).await;

        {
            let mut active = self.search.borrow_mut();
            if active.as_ref().is_some_and(|t| t.same_as(&token)) {
                *active = None;
            }
        }

        match outcome {
            Ok(found) if !token.is_cancelled() => {
                let found: Arc<[TreeEntry]> = found.into();
                self.results.insert(term, found.clone());
                if self.is_current(epoch) {
                    self.show_results(term, &found);
                }
            }
            Ok(_) => log::debug!("Search for '{}' finished after cancellation", term),
            Err(err) if err.is_abort() => log::debug!("Search aborted: '{}'", term),
            Err(err) => {
                log::error!("Error during search for '{}': {}", term, err);
                if self.is_current(epoch) {
                    self.viewport
                        .set_view(NavigatorView::Error(messages::SEARCH_FAILED.to_string()));
                }
            }
        }
    }

    fn show_results(&self, term: &str, found: &[TreeEntry]) {
        self.viewport.set_view(NavigatorView::SearchResults {
            term: term.to_string(),
            results: Some(SearchResultTree::from_entries(found)),
        });
    }

    fn file_view(&self, entry: &TreeEntry, content: &str) -> FileView {
        let (meta, body) = frontmatter::split(content);
        let meta = meta.unwrap_or_default();

        let html = match self.markdown {
            Some(render) if entry.is_markdown() => render(body),
            _ => format!("<pre>{}</pre>", escape_html(body)),
        };

        FileView {
            entry: entry.clone(),
            tags: meta.tags,
            created: meta.created,
            modified: meta.modified,
            html,
        }
    }
}

impl<T: Transport, V: Viewport, R: Timer> ArchiveSession for Navigator<T, V, R> {
    async fn enter(&self, target: ArchiveTarget) {
        self.open(target).await;
    }

    fn leave(&self) {
        self.begin();
        self.cancel_search();
    }
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}
