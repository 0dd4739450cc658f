//! File frontmatter metadata.

use std::collections::BTreeMap;

/// Metadata block at the head of an archive file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Tags in order of appearance.
    pub tags: Vec<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    /// Every other key, trimmed verbatim.
    pub extra: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Look up any key, including the well-known ones.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "created" => self.created.as_deref(),
            "modified" => self.modified.as_deref(),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    /// Whether any tag contains `needle`, compared in lower case.
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
    }
}
