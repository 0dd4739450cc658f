//! Search result tree pane.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::archive::dispatch;
use crate::components::archive::listing::entry_icon;
use crate::components::icons as ic;
use crate::config::archive::{RESULT_INDENT_PX, RESULT_NAME_WIDTH};
use crate::models::{ResultRow, SearchResultTree};
use crate::utils::truncate_name;

stylance::import_crate_style!(css, "src/components/archive/archive.module.css");

/// Results in path order, indented by depth.
#[component]
pub fn SearchResults(tree: SearchResultTree) -> impl IntoView {
    if tree.is_empty() {
        return view! { <p class=css::status>"No results found."</p> }.into_any();
    }

    view! {
        <ul class=css::list>
            {tree
                .rows()
                .into_iter()
                .map(|row| view! { <ResultItem row=row /> })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn ResultItem(row: ResultRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let indent = format!("padding-left: {}px", row.depth * RESULT_INDENT_PX);
    let label = truncate_name(&row.name, RESULT_NAME_WIDTH);
    let icon = row.file.as_ref().map_or(ic::FOLDER, entry_icon);

    match row.file {
        Some(entry) => {
            let on_click = move |_: ev::MouseEvent| {
                let entry = entry.clone();
                dispatch(ctx, |nav| async move { nav.show_file(&entry).await });
            };
            view! {
                <li style=indent>
                    <button class=css::item on:click=on_click title=row.name>
                        <span class=css::itemIcon><Icon icon=icon /></span>
                        <span class=css::itemName>{label}</span>
                    </button>
                </li>
            }
            .into_any()
        }
        None => view! {
            <li style=indent>
                <span class=css::folderRow title=row.name>
                    <span class=css::itemIcon><Icon icon=icon /></span>
                    <span class=css::itemName>{label}</span>
                </span>
            </li>
        }
        .into_any(),
    }
}
