//! Single-page router.
//!
//! The router owns the top-level hash: `#page` swaps the content container to
//! the page's HTML fragment, `#archives/...` additionally hands the sub-path to
//! an archive session. The session (with its caches) lives as long as the hash
//! stays on `archives`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::pages::{ARCHIVES_ROUTE, PARALLAX_ROUTE, fragment_url};
use crate::core::error::FetchError;
use crate::models::{ArchiveTarget, Route};

/// What the content container shows after a page transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageContent {
    /// Fragment HTML as fetched.
    Fragment(String),
    /// The fragment could not be fetched.
    Unavailable,
}

/// Page surface driven by the router.
#[allow(async_fn_in_trait)]
pub trait PageHost {
    async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError>;
    /// Fade the content container out; resolves when it is invisible.
    async fn fade_out(&self);
    async fn fade_in(&self);
    /// Replace the container content and mark the body with the page name.
    fn show_page(&self, page: &str, content: PageContent);
    fn set_parallax(&self, enabled: bool);
    fn set_active_menu(&self, page: &str);
}

/// Archive navigator as seen by the router.
#[allow(async_fn_in_trait)]
pub trait ArchiveSession {
    /// Show the location named by an `archives/...` sub-path.
    async fn enter(&self, target: ArchiveTarget);
    /// The archives page is being left; pending work must not render.
    fn leave(&self);
}

type SessionFactory<A> = Box<dyn Fn() -> Rc<A>>;

pub struct SpaRouter<H, A> {
    host: H,
    new_session: SessionFactory<A>,
    current: RefCell<Option<String>>,
    archive: RefCell<Option<Rc<A>>>,
    epoch: Cell<u64>,
    /// The container was faded out and not faded back in yet.
    faded: Cell<bool>,
}

impl<H: PageHost, A: ArchiveSession> SpaRouter<H, A> {
    pub fn new(host: H, new_session: impl Fn() -> Rc<A> + 'static) -> Self {
        Self {
            host,
            new_session: Box::new(new_session),
            current: RefCell::new(None),
            archive: RefCell::new(None),
            epoch: Cell::new(0),
            faded: Cell::new(false),
        }
    }

    /// Page currently shown, once the first transition has completed.
    pub fn current_page(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// Live archive session, if the archives page is shown.
    pub fn archive(&self) -> Option<Rc<A>> {
        self.archive.borrow().clone()
    }

    /// React to a (new) URL hash.
    pub async fn handle_hash(&self, hash: &str) {
        let route = Route::from_hash(hash);
        log::info!("handling route {}", route.to_hash());

        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);

        if !route.is_archives() {
            if let Some(session) = self.archive.borrow_mut().take() {
                session.leave();
            }
            self.load_page(&route.page, epoch).await;
            return;
        }

        let entering = self.current.borrow().as_deref() != Some(ARCHIVES_ROUTE);
        if entering {
            if !self.load_page(ARCHIVES_ROUTE, epoch).await {
                return;
            }
        } else if self.faded.get() {
            // A superseded transition left the archives page faded out.
            self.fade_in().await;
        }

        let session = self
            .archive
            .borrow_mut()
            .get_or_insert_with(|| (self.new_session)())
            .clone();
        session.enter(route.archive_target()).await;
    }

    /// Fade out, swap in the fragment of `page`, fade in. Returns `false`
    /// when a newer transition started meanwhile.
    async fn load_page(&self, page: &str, epoch: u64) -> bool {
        log::info!("loading page {}", page);

        self.faded.set(true);
        self.host.fade_out().await;
        if self.epoch.get() != epoch {
            return false;
        }

        let content = match self.host.fetch_fragment(fragment_url(page)).await {
            Ok(html) => PageContent::Fragment(html),
            Err(err) => {
                log::error!("Error loading page {}: {}", page, err);
                PageContent::Unavailable
            }
        };
        if self.epoch.get() != epoch {
            return false;
        }

        self.host.show_page(page, content);
        self.host.set_parallax(page == PARALLAX_ROUTE);
        self.host.set_active_menu(page);
        *self.current.borrow_mut() = Some(page.to_string());

        self.fade_in().await;
        true
    }

    async fn fade_in(&self) {
        self.faded.set(false);
        self.host.fade_in().await;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct HostLog {
        fetched: Vec<String>,
        shown: Vec<(String, PageContent)>,
        parallax: Option<bool>,
        menu: Option<String>,
        visible: Option<bool>,
    }

    #[derive(Clone, Default)]
    struct FakeHost {
        fragments: Rc<HashMap<String, String>>,
        log: Rc<RefCell<HostLog>>,
    }

    impl FakeHost {
        fn with_pages(pages: &[(&str, &str)]) -> Self {
            Self {
                fragments: Rc::new(
                    pages
                        .iter()
                        .map(|(url, html)| (url.to_string(), html.to_string()))
                        .collect(),
                ),
                log: Rc::default(),
            }
        }
    }

    impl PageHost for FakeHost {
        async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError> {
            self.log.borrow_mut().fetched.push(url.to_string());
            tokio::task::yield_now().await;
            self.fragments
                .get(url)
                .cloned()
                .ok_or(FetchError::HttpError(404))
        }

        async fn fade_out(&self) {
            self.log.borrow_mut().visible = Some(false);
            tokio::task::yield_now().await;
        }

        async fn fade_in(&self) {
            self.log.borrow_mut().visible = Some(true);
        }

        fn show_page(&self, page: &str, content: PageContent) {
            self.log.borrow_mut().shown.push((page.to_string(), content));
        }

        fn set_parallax(&self, enabled: bool) {
            self.log.borrow_mut().parallax = Some(enabled);
        }

        fn set_active_menu(&self, page: &str) {
            self.log.borrow_mut().menu = Some(page.to_string());
        }
    }

    #[derive(Default)]
    struct FakeSession {
        entered: RefCell<Vec<ArchiveTarget>>,
        left: Cell<bool>,
    }

    impl ArchiveSession for FakeSession {
        async fn enter(&self, target: ArchiveTarget) {
            self.entered.borrow_mut().push(target);
        }

        fn leave(&self) {
            self.left.set(true);
        }
    }

    fn router(host: FakeHost) -> (SpaRouter<FakeHost, FakeSession>, Rc<Cell<usize>>) {
        let created = Rc::new(Cell::new(0));
        let counter = created.clone();
        let router = SpaRouter::new(host, move || {
            counter.set(counter.get() + 1);
            Rc::new(FakeSession::default())
        });
        (router, created)
    }

    fn site() -> FakeHost {
        FakeHost::with_pages(&[
            ("_includes/pages/home.html", "<h1>home</h1>"),
            ("_includes/pages/arts.html", "<h1>arts</h1>"),
            ("_includes/pages/archives.html", "<div id=\"archives\"></div>"),
            ("_includes/pages/404.html", "<h1>404</h1>"),
        ])
    }

    #[tokio::test]
    async fn test_empty_hash_loads_home_with_parallax() {
        let (router, _) = router(site());

        router.handle_hash("").await;

        let log = router.host.log.borrow();
        assert_eq!(
            log.shown,
            vec![(
                "home".to_string(),
                PageContent::Fragment("<h1>home</h1>".to_string())
            )]
        );
        assert_eq!(log.parallax, Some(true));
        assert_eq!(log.menu.as_deref(), Some("home"));
        drop(log);
        assert_eq!(router.current_page().as_deref(), Some("home"));
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found_fragment() {
        let (router, _) = router(site());

        router.handle_hash("#nowhere").await;

        let log = router.host.log.borrow();
        assert_eq!(log.fetched, vec!["_includes/pages/404.html"]);
        assert_eq!(log.parallax, Some(false));
    }

    #[tokio::test]
    async fn test_missing_fragment_is_unavailable() {
        let (router, _) = router(FakeHost::default());

        router.handle_hash("#arts").await;

        let log = router.host.log.borrow();
        assert_eq!(
            log.shown,
            vec![("arts".to_string(), PageContent::Unavailable)]
        );
    }

    #[tokio::test]
    async fn test_archive_session_is_reused_within_archives() {
        let (router, created) = router(site());

        router.handle_hash("#archives").await;
        router.handle_hash("#archives/notes").await;
        router.handle_hash("#archives/notes/poem.md").await;

        assert_eq!(created.get(), 1);
        assert_eq!(
            router.host.log.borrow().fetched,
            vec!["_includes/pages/archives.html"]
        );
        let session = router.archive().unwrap();
        assert_eq!(
            *session.entered.borrow(),
            vec![
                ArchiveTarget::Root,
                ArchiveTarget::Folder("notes".to_string()),
                ArchiveTarget::File("notes/poem.md".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_leaving_archives_drops_session() {
        let (router, created) = router(site());

        router.handle_hash("#archives/notes").await;
        let session = router.archive().unwrap();
        router.handle_hash("#arts").await;

        assert!(session.left.get());
        assert!(router.archive().is_none());

        router.handle_hash("#archives").await;
        assert_eq!(created.get(), 2);
    }

    #[tokio::test]
    async fn test_superseded_transition_is_dropped() {
        let (router, _) = router(site());

        tokio::join!(router.handle_hash("#arts"), router.handle_hash("#home"));

        let log = router.host.log.borrow();
        let pages: Vec<_> = log.shown.iter().map(|(page, _)| page.as_str()).collect();
        assert_eq!(pages, vec!["home"]);
        drop(log);
        assert_eq!(router.current_page().as_deref(), Some("home"));
    }

    #[tokio::test]
    async fn test_return_to_archives_during_fade_restores_visibility() {
        let (router, created) = router(site());
        router.handle_hash("#archives").await;

        tokio::join!(
            router.handle_hash("#arts"),
            router.handle_hash("#archives/notes")
        );

        assert_eq!(router.current_page().as_deref(), Some("archives"));
        assert_eq!(router.host.log.borrow().visible, Some(true));
        assert_eq!(
            router.host.log.borrow().fetched,
            vec!["_includes/pages/archives.html"]
        );
        // The first session was left for `#arts`; a fresh one shows the folder.
        assert_eq!(created.get(), 2);
        let session = router.archive().unwrap();
        assert_eq!(
            *session.entered.borrow(),
            vec![ArchiveTarget::Folder("notes".to_string())]
        );
    }
}
