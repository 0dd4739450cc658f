//! Recursive keyword search over the remote tree.
//!
//! The walk is depth-first and sequential: each listing or file fetch is
//! awaited before the next sibling is visited, so at most one request is
//! outstanding. Directories are always part of the results; files match when
//! their lower-cased name or any frontmatter tag contains the term.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::archive::{MIN_SEARCH_TERM_LEN, SEARCH_IGNORED};
use crate::core::cache::ArchiveCache;
use crate::core::cancel::CancelToken;
use crate::core::clock::Clock;
use crate::core::error::ArchiveError;
use crate::core::frontmatter;
use crate::core::source::{RepoClient, Transport};
use crate::models::TreeEntry;

/// Lower-case the input; `None` when it is too short to search.
pub fn normalize_term(input: &str) -> Option<String> {
    let term = input.trim().to_lowercase();
    (term.chars().count() >= MIN_SEARCH_TERM_LEN).then_some(term)
}

/// Whether the walk skips an entry (version-control metadata).
pub fn is_ignored(entry: &TreeEntry) -> bool {
    SEARCH_IGNORED.contains(&entry.name())
}

/// Completed result sequences keyed by lower-cased term.
#[derive(Default)]
pub struct SearchCache {
    results: RefCell<HashMap<String, Arc<[TreeEntry]>>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<Arc<[TreeEntry]>> {
        self.results.borrow().get(term).cloned()
    }

    pub fn insert(&self, term: &str, results: Arc<[TreeEntry]>) {
        self.results.borrow_mut().insert(term.to_string(), results);
    }

    pub fn contains(&self, term: &str) -> bool {
        self.results.borrow().contains_key(term)
    }

    pub fn clear(&self) {
        self.results.borrow_mut().clear();
    }
}

/// Fetch a directory listing through the path cache.
pub async fn cached_listing<T: Transport, C: Clock>(
    client: &RepoClient<T>,
    cache: &ArchiveCache,
    clock: &C,
    path: &str,
    cancel: Option<&CancelToken>,
) -> Result<Arc<[TreeEntry]>, ArchiveError> {
    cache
        .listings
        .get_or_fetch(ArchiveCache::listing_key(path), clock, move || async move {
            client.list_directory(path, cancel).await.map(Arc::from)
        })
        .await
}

/// Fetch a file body through the path cache.
pub async fn cached_file<T: Transport, C: Clock>(
    client: &RepoClient<T>,
    cache: &ArchiveCache,
    clock: &C,
    entry: &TreeEntry,
    cancel: Option<&CancelToken>,
) -> Result<Arc<str>, ArchiveError> {
    cache
        .files
        .get_or_fetch(entry.path(), clock, move || async move {
            client.read_file(entry, cancel).await.map(Arc::from)
        })
        .await
}

/// Walk the tree from the root and collect matches in pre-order.
///
/// `term` must already be normalized. Returns [`ArchiveError::Aborted`] as
/// soon as `token` is observed cancelled; partial results are dropped.
pub async fn deep_search<T: Transport, C: Clock>(
    client: &RepoClient<T>,
    cache: &ArchiveCache,
    clock: &C,
    term: &str,
    token: &CancelToken,
) -> Result<Vec<TreeEntry>, ArchiveError> {
    let mut results = Vec::new();
    let mut stack: Vec<(Arc<[TreeEntry]>, usize)> = Vec::new();

    ensure_live(token)?;
    stack.push((cached_listing(client, cache, clock, "", Some(token)).await?, 0));

    while let Some((entries, index)) = stack.last_mut() {
        let Some(entry) = entries.get(*index).cloned() else {
            stack.pop();
            continue;
        };
        *index += 1;

        ensure_live(token)?;
        if is_ignored(&entry) {
            continue;
        }

        if entry.is_dir() {
            results.push(entry.clone());
            let children = cached_listing(client, cache, clock, entry.path(), Some(token)).await?;
            ensure_live(token)?;
            stack.push((children, 0));
        } else {
            let content = cached_file(client, cache, clock, &entry, Some(token)).await?;
            ensure_live(token)?;
            if matches_term(&entry, &content, term) {
                results.push(entry);
            }
        }
    }

    Ok(results)
}

fn matches_term(entry: &TreeEntry, content: &str, term: &str) -> bool {
    entry.name().to_lowercase().contains(term)
        || frontmatter::parse(content).is_some_and(|fm| fm.has_tag_containing(term))
}

#[inline]
fn ensure_live(token: &CancelToken) -> Result<(), ArchiveError> {
    if token.is_cancelled() {
        Err(ArchiveError::Aborted)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{ManualClock, MockTransport, sample_repo};

    fn client(transport: &MockTransport) -> RepoClient<MockTransport> {
        RepoClient::new(
            MockTransport::API,
            MockTransport::MEDIA,
            transport.clone(),
        )
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("ab"), None);
        assert_eq!(normalize_term("  ab "), None);
        assert_eq!(normalize_term("PoEm"), Some("poem".to_string()));
        assert_eq!(normalize_term("äöü"), Some("äöü".to_string()));
    }

    #[tokio::test]
    async fn test_matches_names_and_tags_in_preorder() {
        let transport = sample_repo();
        let repo = client(&transport);
        let cache = ArchiveCache::new(300_000.0);
        let clock = ManualClock::new();

        let results = deep_search(&repo, &cache, &clock, "poem", &CancelToken::new())
            .await
            .unwrap();
        let paths: Vec<_> = results.iter().map(TreeEntry::path).collect();

        // draft.md is tagged "poem"; notes/ is always included; .git is skipped.
        assert_eq!(
            paths,
            vec!["draft.md", "notes", "notes/poem.md", "notes/old"]
        );
    }

    #[tokio::test]
    async fn test_search_populates_path_cache() {
        let transport = sample_repo();
        let repo = client(&transport);
        let cache = ArchiveCache::new(300_000.0);
        let clock = ManualClock::new();

        deep_search(&repo, &cache, &clock, "poem", &CancelToken::new())
            .await
            .unwrap();
        deep_search(&repo, &cache, &clock, "draft", &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(transport.calls(MockTransport::API), 1);
        assert_eq!(transport.calls(&format!("{}/notes", MockTransport::API)), 1);
    }

    #[tokio::test]
    async fn test_cancel_before_subdirectory_resolves() {
        let transport = sample_repo();
        let repo = client(&transport);
        let cache = ArchiveCache::new(300_000.0);
        let clock = ManualClock::new();
        let token = CancelToken::new();

        let hook_token = token.clone();
        transport.on_request(&format!("{}/notes", MockTransport::API), move || {
            hook_token.cancel()
        });

        let err = deep_search(&repo, &cache, &clock, "poem", &token)
            .await
            .unwrap_err();
        assert!(err.is_abort());
        // The aborted listing is never cached.
        assert!(cache.listings.get("notes", clock.now_ms()).is_none());
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_fetches_nothing() {
        let transport = sample_repo();
        let repo = client(&transport);
        let cache = ArchiveCache::new(300_000.0);
        let token = CancelToken::new();
        token.cancel();

        let err = deep_search(&repo, &cache, &ManualClock::new(), "poem", &token)
            .await
            .unwrap_err();
        assert!(err.is_abort());
        assert_eq!(transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_not_an_abort() {
        let transport = sample_repo();
        transport.status(&format!("{}/notes", MockTransport::API), 500);
        let repo = client(&transport);
        let cache = ArchiveCache::new(300_000.0);

        let err = deep_search(&repo, &cache, &ManualClock::new(), "poem", &CancelToken::new())
            .await
            .unwrap_err();
        assert!(!err.is_abort());
    }

    #[test]
    fn test_search_cache() {
        let cache = SearchCache::new();
        cache.insert("poem", Arc::from(vec![TreeEntry::directory("notes", "notes")]));
        assert!(cache.contains("poem"));
        assert_eq!(cache.get("poem").unwrap().len(), 1);
        cache.clear();
        assert!(cache.get("poem").is_none());
    }
}
