//! Archive navigator UI.
//!
//! Components:
//! - [`ArchiveNavigator`] - Toolbar, breadcrumb, and the active pane
//! - [`Breadcrumb`] - Clickable location
//! - [`Listing`] - Directory contents
//! - [`SearchResults`] - Indented result tree
//! - [`FilePane`] - Rendered file with metadata
//!
//! Components only read [`ArchiveSignals`]; every user action is forwarded to
//! the live navigator through [`dispatch`].

mod breadcrumb;
mod file_view;
mod listing;
mod search_results;
mod viewport;

use std::future::Future;
use std::rc::Rc;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, WebNavigator};
use crate::components::icons as ic;
use crate::models::NavigatorView;

pub use breadcrumb::Breadcrumb;
pub use file_view::FilePane;
pub use listing::Listing;
pub use search_results::SearchResults;
pub use viewport::{ArchiveSignals, SignalViewport};

stylance::import_crate_style!(css, "src/components/archive/archive.module.css");

/// Run `action` against the live navigator, if the archives page is shown.
pub(crate) fn dispatch<F, Fut>(ctx: AppContext, action: F)
where
    F: FnOnce(Rc<WebNavigator>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    if let Some(navigator) = ctx.navigator() {
        spawn_local(action(navigator));
    }
}

#[component]
pub fn ArchiveNavigator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let archive = ctx.archive;

    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        archive.search_text.set(text.clone());
        dispatch(ctx, move |nav| async move { nav.on_search_input(&text).await });
    };

    let on_refresh =
        move |_: ev::MouseEvent| dispatch(ctx, |nav| async move { nav.refresh().await });

    let in_file = move || archive.view.with(|view| matches!(view, NavigatorView::File(_)));

    view! {
        <section class=css::navigator>
            <div class=css::toolbar>
                <Show
                    when=in_file
                    fallback=move || view! {
                        <label class=css::search>
                            <Icon icon=ic::SEARCH />
                            <input
                                type="search"
                                placeholder="Search files and tags"
                                prop:value=move || archive.search_text.get()
                                on:input=on_input
                            />
                        </label>
                    }
                >
                    <button
                        class=css::iconButton
                        on:click=move |_| dispatch(ctx, |nav| async move { nav.go_back().await })
                        title="Back"
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                </Show>
                <button class=css::iconButton on:click=on_refresh title="Refresh">
                    <Icon icon=ic::REFRESH />
                </button>
            </div>

            <Breadcrumb />

            <div class=css::pane>
                {move || match archive.view.get() {
                    NavigatorView::Listing { entries: None, .. } => {
                        view! { <p class=css::status>"Loading..."</p> }.into_any()
                    }
                    NavigatorView::Listing { entries: Some(entries), .. } => {
                        view! { <Listing entries=entries /> }.into_any()
                    }
                    NavigatorView::SearchResults { results: None, .. } => {
                        view! { <p class=css::status>"Searching..."</p> }.into_any()
                    }
                    NavigatorView::SearchResults { results: Some(tree), .. } => {
                        view! { <SearchResults tree=tree /> }.into_any()
                    }
                    NavigatorView::File(file) => view! { <FilePane file=file /> }.into_any(),
                    NavigatorView::Error(message) => {
                        view! { <p class=css::error>{message}</p> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
