//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange events
//! instead of leptos_router; every change is handed to the [`SpaRouter`].
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page and archive location derive from `#page/...`
//! - **Shell never re-renders on navigation**: menu and theme toggle stay mounted
//! - **Content container fades**: the router drives its opacity through [`WebPageHost`]
//!
//! [`SpaRouter`]: crate::core::SpaRouter

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::archive::ArchiveNavigator;
use crate::components::menu::Menu;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::pages::{ARCHIVES_ROUTE, FADE_IN_DELAY_MS, FADE_OUT_MS, UNAVAILABLE_MESSAGE};
use crate::core::error::FetchError;
use crate::core::{PageContent, PageHost};
use crate::utils::{dom, fetch_content, lazy};

stylance::import_crate_style!(css, "src/components/router.module.css");

const PARALLAX_CLASS: &str = "parallax-enabled";

// ============================================================================
// Page Host
// ============================================================================

/// Content container state.
#[derive(Clone, Copy)]
pub struct PageSignals {
    /// Page whose content is shown.
    pub current: RwSignal<Option<String>>,
    pub content: RwSignal<Option<PageContent>>,
    pub visible: RwSignal<bool>,
    /// Page highlighted in the menu.
    pub active: RwSignal<Option<String>>,
}

impl PageSignals {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            content: RwSignal::new(None),
            visible: RwSignal::new(false),
            active: RwSignal::new(None),
        }
    }
}

impl Default for PageSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// [`PageHost`] backed by [`PageSignals`] and the document body.
pub struct WebPageHost {
    signals: PageSignals,
}

impl WebPageHost {
    pub fn new(signals: PageSignals) -> Self {
        Self { signals }
    }
}

impl PageHost for WebPageHost {
    async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError> {
        fetch_content(url).await
    }

    async fn fade_out(&self) {
        self.signals.visible.set(false);
        TimeoutFuture::new(FADE_OUT_MS).await;
    }

    async fn fade_in(&self) {
        TimeoutFuture::new(FADE_IN_DELAY_MS).await;
        self.signals.visible.set(true);
    }

    fn show_page(&self, page: &str, content: PageContent) {
        self.signals.content.set(Some(content));
        self.signals.current.set(Some(page.to_string()));
        dom::set_body_attribute("data-page", page);
    }

    fn set_parallax(&self, enabled: bool) {
        dom::set_body_class(PARALLAX_CLASS, enabled);
    }

    fn set_active_menu(&self, page: &str) {
        self.signals.active.set(Some(page.to_string()));
    }
}

// ============================================================================
// Main Router
// ============================================================================

fn dispatch_current_hash(ctx: AppContext) {
    let router = ctx.router.get_value();
    let hash = dom::get_hash();
    spawn_local(async move {
        router.handle_hash(&hash).await;
    });
}

/// Main application router.
///
/// Dispatches the initial hash on mount and every later `hashchange`.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    dispatch_current_hash(ctx);

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            dispatch_current_hash(ctx);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <Menu />
        <ThemeToggle />
        <PageContainer />
    }
}

// ============================================================================
// Content Container
// ============================================================================

#[component]
fn PageContainer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page = ctx.page;

    let fragment_ref = NodeRef::<leptos::html::Div>::new();

    // Scan newly inserted fragments for lazy content once they are in the DOM
    Effect::new(move || {
        page.content.track();
        request_animation_frame(move || {
            if let Some(el) = fragment_ref.get_untracked() {
                lazy::observe(&el);
            }
        });
    });

    let on_archives = move || page.current.get().as_deref() == Some(ARCHIVES_ROUTE);

    view! {
        <main
            class=css::container
            style=move || if page.visible.get() { "opacity: 1" } else { "opacity: 0" }
        >
            {move || match page.content.get() {
                Some(PageContent::Fragment(html)) => {
                    view! { <div node_ref=fragment_ref class=css::fragment inner_html=html /> }
                        .into_any()
                }
                Some(PageContent::Unavailable) => {
                    view! { <p class=css::unavailable>{UNAVAILABLE_MESSAGE}</p> }.into_any()
                }
                None => ().into_any(),
            }}
            <Show when=on_archives>
                <ArchiveNavigator />
            </Show>
        </main>
    }
}
