//! Breadcrumb trail of the navigator.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::archive::dispatch;

stylance::import_crate_style!(css, "src/components/archive/archive.module.css");

/// `Archives / a / b [/ file]`; folder segments navigate, the file does not.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let crumbs = ctx.archive.crumbs;

    view! {
        <nav class=css::breadcrumb aria-label="Location">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i > 0).then(|| view! { <span class=css::separator>"/"</span> });
                        let segment = match crumb.path {
                            Some(path) => view! {
                                <button
                                    class=css::crumb
                                    on:click=move |_| {
                                        let path = path.clone();
                                        dispatch(ctx, |nav| async move {
                                            nav.navigate_to_folder(&path).await
                                        });
                                    }
                                >
                                    {crumb.label}
                                </button>
                            }
                            .into_any(),
                            None => view! {
                                <span class=css::currentCrumb>{crumb.label}</span>
                            }
                            .into_any(),
                        };
                        view! { {separator} {segment} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
