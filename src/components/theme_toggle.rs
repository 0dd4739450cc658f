//! Dark-mode toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::theme::{DARK_CLASS, LIGHT_CLASS};
use crate::models::Theme;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/theme_toggle.module.css");

fn apply_theme(theme: Theme) {
    if let Some(root) = dom::document_element() {
        dom::set_class(&root, DARK_CLASS, theme.is_dark());
        dom::set_class(&root, LIGHT_CLASS, !theme.is_dark());
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = ctx.theme;

    Effect::new(move || apply_theme(theme.get()));

    view! {
        <button
            class=css::toggle
            on:click=move |_| ctx.toggle_theme()
            title=move || if theme.get().is_dark() { "Light mode" } else { "Dark mode" }
        >
            {move || {
                if theme.get().is_dark() {
                    view! { <Icon icon=ic::SUN /> }
                } else {
                    view! { <Icon icon=ic::MOON /> }
                }
            }}
        </button>
    }
}
