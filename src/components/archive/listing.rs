//! Directory listing pane.

use std::sync::Arc;

use icondata::Icon as IconData;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::archive::dispatch;
use crate::components::icons as ic;
use crate::config::archive::LISTING_NAME_WIDTH;
use crate::models::TreeEntry;
use crate::utils::{tag_hint, truncate_name};

stylance::import_crate_style!(css, "src/components/archive/archive.module.css");

/// Get icon for file/directory based on type
pub(super) fn entry_icon(entry: &TreeEntry) -> IconData {
    if entry.is_dir() {
        ic::FOLDER
    } else if entry.is_markdown() {
        ic::FILE_TEXT
    } else {
        ic::FILE
    }
}

#[component]
pub fn Listing(entries: Arc<[TreeEntry]>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class=css::status>"This folder is empty."</p> }.into_any();
    }

    view! {
        <ul class=css::list>
            {entries
                .iter()
                .cloned()
                .map(|entry| view! { <ListingItem entry=entry /> })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn ListingItem(entry: TreeEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tag_hints = ctx.archive.tag_hints;

    let icon = entry_icon(&entry);
    let label = truncate_name(entry.name(), LISTING_NAME_WIDTH);
    let full_name = entry.name().to_string();
    let path = entry.path().to_string();

    let title = move || {
        tag_hints.with(|hints| match hints.get(&path) {
            Some(tags) => format!("{}\n{}", full_name, tag_hint(tags)),
            None => full_name.clone(),
        })
    };

    let on_click = move |_: ev::MouseEvent| {
        let entry = entry.clone();
        dispatch(ctx, |nav| async move { nav.show_file(&entry).await });
    };

    view! {
        <li>
            <button class=css::item on:click=on_click title=title>
                <span class=css::itemIcon><Icon icon=icon /></span>
                <span class=css::itemName>{label}</span>
            </button>
        </li>
    }
}
