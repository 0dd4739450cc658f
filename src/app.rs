//! Root application module.
//!
//! Contains the main App component and the AppContext that wires the
//! browser adapters into the router and archive navigator.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::archive::{ArchiveSignals, SignalViewport};
use crate::components::router::{PageSignals, WebPageHost};
use crate::config::archive::{API_BASE_URL, LARGE_OBJECT_BASE_URL};
use crate::core::theme::{self, LocalStore};
use crate::core::{Navigator, RepoClient, SpaRouter};
use crate::models::Theme;
use crate::utils::{BrowserTimer, BrowserTransport, markdown_to_html};

/// Archive navigator as wired in the browser.
pub type WebNavigator = Navigator<BrowserTransport, SignalViewport, BrowserTimer>;

/// Page router as wired in the browser.
pub type WebRouter = SpaRouter<WebPageHost, WebNavigator>;

/// Global application context.
///
/// Provides access to:
/// - **Theme**: Dark/light preference, persisted in localStorage
/// - **Page**: Content container state driven by the router
/// - **Archive**: Navigator view state
/// - **Router**: The page router, which owns the live navigator
#[derive(Clone, Copy)]
pub struct AppContext {
    pub theme: RwSignal<Theme>,
    pub page: PageSignals,
    pub archive: ArchiveSignals,
    pub router: StoredValue<Rc<WebRouter>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let page = PageSignals::new();
        let archive = ArchiveSignals::new();

        let router = SpaRouter::new(WebPageHost::new(page), move || {
            let client = RepoClient::new(API_BASE_URL, LARGE_OBJECT_BASE_URL, BrowserTransport);
            Rc::new(
                Navigator::new(client, SignalViewport::new(archive), BrowserTimer)
                    .with_markdown(markdown_to_html),
            )
        });

        Self {
            theme: RwSignal::new(theme::load(&LocalStore)),
            page,
            archive,
            router: StoredValue::new_local(Rc::new(router)),
        }
    }

    /// The live navigator, while the archives page is shown.
    pub fn navigator(&self) -> Option<Rc<WebNavigator>> {
        self.router.with_value(|router| router.archive())
    }

    pub fn toggle_theme(&self) {
        let next = theme::toggle(&LocalStore, self.theme.get_untracked());
        self.theme.set(next);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
