//! Lazy loading of inserted page content.
//!
//! Elements marked with `data-lazy-action` are loaded once at least 10% of
//! them is visible:
//!
//! | action                | source attribute        | effect                       |
//! |-----------------------|-------------------------|------------------------------|
//! | `loadImage`           | `data-src`              | sets `src`                   |
//! | `loadBackgroundImage` | `data-background-src`   | sets `background-image`      |
//! | `loadContent`         | `data-content`          | replaces inner HTML          |
//!
//! Handled elements carry `data-lazy-loaded` and are never observed again.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::lazy::{LOADED_ATTR, THRESHOLD};

const ACTION_ATTR: &str = "data-lazy-action";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyAction {
    Image,
    BackgroundImage,
    Content,
}

impl LazyAction {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "loadImage" => Some(Self::Image),
            "loadBackgroundImage" => Some(Self::BackgroundImage),
            "loadContent" => Some(Self::Content),
            _ => None,
        }
    }

    /// Attribute holding the deferred value.
    pub fn source_attr(self) -> &'static str {
        match self {
            Self::Image => "data-src",
            Self::BackgroundImage => "data-background-src",
            Self::Content => "data-content",
        }
    }

    fn apply(self, element: &Element) {
        let source_attr = self.source_attr();
        let Some(value) = element.get_attribute(source_attr) else {
            return;
        };

        match self {
            Self::Image => {
                let _ = element.set_attribute("src", &value);
            }
            Self::BackgroundImage => {
                if let Some(html) = element.dyn_ref::<HtmlElement>() {
                    let _ = html
                        .style()
                        .set_property("background-image", &format!("url({})", value));
                }
            }
            Self::Content => element.set_inner_html(&value),
        }

        let _ = element.remove_attribute(source_attr);
        let _ = element.set_attribute(LOADED_ATTR, "true");
    }
}

/// Observe every pending lazy element below `root`.
pub fn observe(root: &Element) {
    let Ok(nodes) = root.query_selector_all(&format!("[{}]", ACTION_ATTR)) else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                load(&target);
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => {
                log::warn!("IntersectionObserver unavailable, loading eagerly");
                for i in 0..nodes.length() {
                    if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        load(&element);
                    }
                }
                return;
            }
        };
    // The observer calls back for as long as the page lives.
    callback.forget();

    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok())
            && !element.has_attribute(LOADED_ATTR)
        {
            observer.observe(&element);
        }
    }
}

fn load(element: &Element) {
    if element.has_attribute(LOADED_ATTR) {
        return;
    }
    match element.get_attribute(ACTION_ATTR).as_deref().map(LazyAction::parse) {
        Some(Some(action)) => action.apply(element),
        Some(None) => log::warn!("unknown lazy action on <{}>", element.tag_name()),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(LazyAction::parse("loadImage"), Some(LazyAction::Image));
        assert_eq!(
            LazyAction::parse("loadBackgroundImage").map(LazyAction::source_attr),
            Some("data-background-src")
        );
        assert_eq!(LazyAction::parse("loadContent"), Some(LazyAction::Content));
        assert_eq!(LazyAction::parse("loadVideo"), None);
    }
}
