//! Signal-backed navigator viewport.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::core::Viewport;
use crate::models::{Crumb, NavigatorView};
use crate::utils::dom;

/// Navigator view state read by the archive components.
#[derive(Clone, Copy)]
pub struct ArchiveSignals {
    pub view: RwSignal<NavigatorView>,
    pub crumbs: RwSignal<Vec<Crumb>>,
    pub search_text: RwSignal<String>,
    /// Tags per listed file path.
    pub tag_hints: RwSignal<HashMap<String, Vec<String>>>,
}

impl ArchiveSignals {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(NavigatorView::default()),
            crumbs: RwSignal::new(Vec::new()),
            search_text: RwSignal::new(String::new()),
            tag_hints: RwSignal::new(HashMap::new()),
        }
    }
}

impl Default for ArchiveSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Viewport`] writing into [`ArchiveSignals`] and the URL hash.
pub struct SignalViewport {
    signals: ArchiveSignals,
}

impl SignalViewport {
    pub fn new(signals: ArchiveSignals) -> Self {
        Self { signals }
    }
}

impl Viewport for SignalViewport {
    fn set_view(&self, view: NavigatorView) {
        // A listing starting to load replaces the hints of the previous one.
        if matches!(view, NavigatorView::Listing { entries: None, .. }) {
            self.signals.tag_hints.update(HashMap::clear);
        }
        self.signals.view.set(view);
    }

    fn set_breadcrumb(&self, crumbs: Vec<Crumb>) {
        self.signals.crumbs.set(crumbs);
    }

    fn set_search_text(&self, text: &str) {
        self.signals.search_text.set(text.to_string());
    }

    fn set_tag_hint(&self, path: &str, tags: Vec<String>) {
        self.signals.tag_hints.update(|hints| {
            hints.insert(path.to_string(), tags);
        });
    }

    fn sync_location(&self, hash: &str) {
        dom::set_hash(hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_listing_clears_tag_hints() {
        let owner = Owner::new();
        owner.with(|| {
            let signals = ArchiveSignals::new();
            let viewport = SignalViewport::new(signals);

            viewport.set_tag_hint("draft.md", vec!["poem".to_string()]);
            viewport.set_view(NavigatorView::SearchResults {
                term: "poem".to_string(),
                results: None,
            });
            assert_eq!(signals.tag_hints.with_untracked(HashMap::len), 1);

            viewport.set_view(NavigatorView::Listing {
                path: "notes".to_string(),
                entries: None,
            });
            assert!(signals.tag_hints.with_untracked(HashMap::is_empty));
        });
    }
}
