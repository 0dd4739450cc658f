//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Element, HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// The `<html>` element.
#[inline]
pub fn document_element() -> Option<Element> {
    document()?.document_element()
}

/// Add or remove a class on an element, ignoring DOM errors.
pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let list = element.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Set an attribute on `<body>`.
pub fn set_body_attribute(name: &str, value: &str) {
    if let Some(body) = body() {
        let _ = body.set_attribute(name, value);
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        set_class(&body, class, enabled);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix. Setting the current hash again is
/// a no-op and fires no `hashchange`.
pub fn set_hash(hash: &str) {
    if get_hash() == hash.trim_start_matches('#') {
        return;
    }
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_hash_round_trip() {
        set_hash("#archives/notes");
        assert_eq!(get_hash(), "archives/notes");
    }

    #[wasm_bindgen_test]
    fn test_body_class_toggle() {
        set_body_class("parallax-enabled", true);
        let body = body().unwrap();
        assert!(body.class_list().contains("parallax-enabled"));
        set_body_class("parallax-enabled", false);
        assert!(!body.class_list().contains("parallax-enabled"));
    }
}
