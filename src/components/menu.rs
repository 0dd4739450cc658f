//! Page indicator menu.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::pages::MENU;

stylance::import_crate_style!(css, "src/components/menu.module.css");

/// One dot per page; the dot of the current page is `active`.
#[component]
pub fn Menu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let active = ctx.page.active;

    view! {
        <nav class=css::menu aria-label="Pages">
            {MENU
                .iter()
                .map(|&(route, label)| {
                    let is_active = move || active.get().as_deref() == Some(route);
                    view! {
                        <a
                            href=format!("#{}", route)
                            class=move || {
                                if is_active() {
                                    format!("{} active", css::dot)
                                } else {
                                    css::dot.to_string()
                                }
                            }
                            title=label
                            aria-current=move || is_active().then_some("page")
                        >
                            <span class=css::label>{label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
