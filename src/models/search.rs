//! Search result tree for indentation-aware rendering.

use std::collections::BTreeMap;

use crate::models::TreeEntry;

/// Node of the folded search result tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultNode {
    /// A matched entry (or a directory the search descended through)
    Entry(TreeEntry),
    /// Synthetic parent of a match that was not itself part of the results
    Directory { name: String, children: Vec<String> },
}

/// Flat search results folded into a prefix tree keyed by cumulative path.
///
/// Keys iterate in lexicographic full-path order, which is also the render order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResultTree {
    nodes: BTreeMap<String, ResultNode>,
}

/// One rendered row of the result tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub path: String,
    pub name: String,
    /// Nesting level (0 = repository root)
    pub depth: usize,
    /// Openable file behind the row; directories are informational.
    pub file: Option<TreeEntry>,
}

impl SearchResultTree {
    pub fn from_entries(entries: &[TreeEntry]) -> Self {
        let mut nodes: BTreeMap<String, ResultNode> = BTreeMap::new();

        for entry in entries {
            let parts: Vec<&str> = entry.path().split('/').collect();
            let mut current_path = String::new();

            for (i, part) in parts.iter().enumerate() {
                let parent_path = current_path.clone();
                if i > 0 {
                    current_path.push('/');
                }
                current_path.push_str(part);

                if i == parts.len() - 1 {
                    nodes.insert(current_path.clone(), ResultNode::Entry(entry.clone()));
                } else {
                    nodes
                        .entry(current_path.clone())
                        .or_insert_with(|| ResultNode::Directory {
                            name: part.to_string(),
                            children: Vec::new(),
                        });
                }

                if i > 0
                    && let Some(ResultNode::Directory { children, .. }) = nodes.get_mut(&parent_path)
                    && !children.iter().any(|c| c == part)
                {
                    children.push(part.to_string());
                }
            }
        }

        Self { nodes }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, path: &str) -> Option<&ResultNode> {
        self.nodes.get(path)
    }

    /// Rows in lexicographic path order with their nesting depth.
    pub fn rows(&self) -> Vec<ResultRow> {
        self.nodes
            .iter()
            .map(|(path, node)| {
                let name = path.rsplit('/').next().unwrap_or(path).to_string();
                let file = match node {
                    ResultNode::Entry(entry) if !entry.is_dir() => Some(entry.clone()),
                    _ => None,
                };
                ResultRow {
                    depth: path.matches('/').count(),
                    path: path.clone(),
                    name,
                    file,
                }
            })
            .collect()
    }
}
