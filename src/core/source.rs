//! Remote tree client for the repository contents API.
//!
//! Directory listings come from `{api_base}/{path}`; file bodies from the
//! entry's download URL. Files stored as large-object pointers are re-fetched
//! transparently from `{large_object_base}/{path}`. No retries: the first
//! failure is returned to the caller.

use crate::config::archive::LARGE_FILE_MARKER;
use crate::core::cancel::CancelToken;
use crate::core::error::{ArchiveError, FetchError};
use crate::models::{RawEntry, TreeEntry};

/// HTTP GET capability returning the response body as text.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Fetch `url`. Non-2xx responses yield [`FetchError::HttpError`];
    /// a fired `cancel` token yields [`FetchError::Aborted`].
    async fn get_text(&self, url: &str, cancel: Option<&CancelToken>)
    -> Result<String, FetchError>;
}

/// Client for one repository on the contents API.
pub struct RepoClient<T> {
    api_base: String,
    large_object_base: String,
    transport: T,
}

impl<T: Transport> RepoClient<T> {
    pub fn new(
        api_base: impl Into<String>,
        large_object_base: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            large_object_base: large_object_base.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// URL of the listing for a directory path (`""` is the root).
    pub fn listing_url(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            self.api_base.clone()
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }

    /// URL of the real content behind a large-file pointer.
    pub fn large_object_url(&self, path: &str) -> String {
        format!("{}/{}", self.large_object_base, path.trim_start_matches('/'))
    }

    /// Fetch the entries of a directory in API order.
    pub async fn list_directory(
        &self,
        path: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<TreeEntry>, ArchiveError> {
        let url = self.listing_url(path);
        log::debug!("listing {}", url);

        let body = self.transport.get_text(&url, cancel).await?;
        let raw: Vec<RawEntry> = serde_json::from_str(&body)
            .map_err(|e| FetchError::JsonParseError(e.to_string()))?;

        Ok(raw.into_iter().filter_map(RawEntry::into_entry).collect())
    }

    /// Fetch a file body, following large-file pointers.
    pub async fn read_file(
        &self,
        entry: &TreeEntry,
        cancel: Option<&CancelToken>,
    ) -> Result<String, ArchiveError> {
        let TreeEntry::File {
            path, download_url, ..
        } = entry
        else {
            return Err(ArchiveError::NotFound(entry.path().to_string()));
        };
        let url = download_url
            .as_deref()
            .ok_or_else(|| ArchiveError::NotFound(path.clone()))?;

        let content = self.transport.get_text(url, cancel).await?;
        if !content.starts_with(LARGE_FILE_MARKER) {
            return Ok(content);
        }

        log::debug!("large-file pointer for {}, fetching media", path);
        let content = self
            .transport
            .get_text(&self.large_object_url(path), cancel)
            .await?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MockTransport;

    fn client(transport: MockTransport) -> RepoClient<MockTransport> {
        RepoClient::new("https://api.test/contents/", "https://media.test/main", transport)
    }

    #[test]
    fn test_listing_url() {
        let repo = client(MockTransport::new());
        assert_eq!(repo.listing_url(""), "https://api.test/contents");
        assert_eq!(repo.listing_url("notes"), "https://api.test/contents/notes");
        assert_eq!(
            repo.large_object_url("notes/a.md"),
            "https://media.test/main/notes/a.md"
        );
    }

    #[tokio::test]
    async fn test_list_root() {
        let transport = MockTransport::new();
        transport.listing(
            "https://api.test/contents",
            &[("draft.md", "draft.md", "file"), ("notes", "notes", "dir")],
        );
        let repo = client(transport);

        let entries = repo.list_directory("", None).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "draft.md");
        assert!(entries[1].is_dir());
    }

    #[tokio::test]
    async fn test_http_error_surfaces() {
        let transport = MockTransport::new();
        transport.status("https://api.test/contents/missing", 404);
        let repo = client(transport);

        let err = repo.list_directory("missing", None).await.unwrap_err();
        assert_eq!(err, ArchiveError::Fetch(FetchError::HttpError(404)));
        assert_eq!(repo.transport.calls("https://api.test/contents/missing"), 1);
    }

    #[tokio::test]
    async fn test_large_file_pointer_is_followed() {
        let transport = MockTransport::new();
        transport.text(
            "https://raw.test/big.md",
            "version https://git-lfs.github.com/spec/v1\noid sha256:abc\nsize 12\n",
        );
        transport.text("https://media.test/main/big.md", "real content");
        let repo = client(transport);

        let entry = TreeEntry::file("big.md", "big.md", Some("https://raw.test/big.md".into()));
        assert_eq!(repo.read_file(&entry, None).await.unwrap(), "real content");
    }

    #[tokio::test]
    async fn test_large_object_failure_surfaces() {
        let transport = MockTransport::new();
        transport.text(
            "https://raw.test/big.md",
            "version https://git-lfs.github.com/spec/v1\n",
        );
        transport.status("https://media.test/main/big.md", 503);
        let repo = client(transport);

        let entry = TreeEntry::file("big.md", "big.md", Some("https://raw.test/big.md".into()));
        assert_eq!(
            repo.read_file(&entry, None).await.unwrap_err(),
            ArchiveError::Fetch(FetchError::HttpError(503))
        );
    }

    #[tokio::test]
    async fn test_read_directory_is_not_found() {
        let repo = client(MockTransport::new());
        let err = repo
            .read_file(&TreeEntry::directory("notes", "notes"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ArchiveError::NotFound(_)));
    }
}
