//! File content pane.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::archive::dispatch;
use crate::components::icons as ic;
use crate::models::FileView;

stylance::import_crate_style!(css, "src/components/archive/archive.module.css");

#[component]
pub fn FilePane(file: FileView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tags = (!file.tags.is_empty()).then(|| {
        let links = file
            .tags
            .into_iter()
            .map(|tag| {
                let label = tag.clone();
                let on_click = move |_: ev::MouseEvent| {
                    let tag = tag.clone();
                    dispatch(ctx, |nav| async move { nav.search_tag(&tag).await });
                };
                view! {
                    <button class=css::tag on:click=on_click>{label}</button>
                }
            })
            .collect_view();
        view! {
            <div class=css::tags>
                <Icon icon=ic::TAG />
                <span>"Tags:"</span>
                {links}
            </div>
        }
    });

    let created = file
        .created
        .map(|date| view! { <span>"Created: " {date}</span> });
    let modified = file
        .modified
        .map(|date| view! { <span>"Modified: " {date}</span> });

    view! {
        <article class=css::file>
            <header class=css::fileHeader>
                <h2 class=css::fileTitle>{file.entry.name().to_string()}</h2>
                {tags}
                <div class=css::dates>{created} {modified}</div>
            </header>
            <div class=css::markdown inner_html=file.html />
        </article>
    }
}
