//! Frontmatter extraction.
//!
//! A frontmatter block is a leading line of exactly `---`, arbitrary lines,
//! and a closing `---` line:
//!
//! ```text
//! ---
//! tags: [poem, draft]
//! created: "2023-01-01"
//! ---
//! Body text
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Frontmatter;

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n(?s:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("frontmatter pattern is valid")
});

/// Parse the leading frontmatter block, if present.
///
/// Lines without a colon are ignored rather than failing the whole block.
pub fn parse(raw: &str) -> Option<Frontmatter> {
    let captures = BLOCK.captures(raw)?;
    let body = captures.get(1).map_or("", |m| m.as_str());

    let mut frontmatter = Frontmatter::default();
    for line in body.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            continue;
        }

        match key {
            "tags" => frontmatter.tags = parse_tags(value),
            "created" => frontmatter.created = Some(strip_quotes(value).to_string()),
            "modified" => frontmatter.modified = Some(strip_quotes(value).to_string()),
            _ => {
                frontmatter.extra.insert(key.to_string(), value.to_string());
            }
        }
    }

    Some(frontmatter)
}

/// Remove leading frontmatter; text without a block is returned unchanged.
///
/// Consecutive leading blocks are all removed, so stripping is idempotent.
pub fn strip(raw: &str) -> &str {
    let mut rest = raw;
    while let Some(found) = BLOCK.find(rest) {
        if found.end() == 0 {
            break;
        }
        rest = &rest[found.end()..];
    }
    rest
}

/// Parse and strip in one pass.
pub fn split(raw: &str) -> (Option<Frontmatter>, &str) {
    (parse(raw), strip(raw))
}

/// `[a, b]` or `a, b` into trimmed, non-empty tags in order.
fn parse_tags(value: &str) -> Vec<String> {
    value
        .replace(['[', ']'], "")
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_tags_in_order() {
        let fm = parse("---\ntags: [a, b, c]\n---\nbody").unwrap();
        assert_eq!(fm.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_bare_tags() {
        let fm = parse("---\ntags: poem ,  draft\n---\n").unwrap();
        assert_eq!(fm.tags, vec!["poem", "draft"]);
    }

    #[test]
    fn test_parse_dates_and_extra_keys() {
        let raw = "---\ncreated: \"2023-01-01\"\nmodified: '2023-02-03'\ntitle:  A: B \n---\nHello";
        let fm = parse(raw).unwrap();
        assert_eq!(fm.created.as_deref(), Some("2023-01-01"));
        assert_eq!(fm.modified.as_deref(), Some("2023-02-03"));
        assert_eq!(fm.get("title"), Some("A: B"));
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_parse_without_block() {
        assert!(parse("Hello\n---\ntags: a\n---\n").is_none());
        assert!(parse("").is_none());
        assert!(parse("---\nunterminated").is_none());
    }

    #[test]
    fn test_malformed_lines_degrade() {
        let fm = parse("---\nnot a pair\n: empty key\ntags: x\n---\n").unwrap();
        assert_eq!(fm.tags, vec!["x"]);
        assert!(fm.extra.is_empty());
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(parse("---\n---\nbody"), Some(Frontmatter::default()));
        assert_eq!(strip("---\n---\nbody"), "body");
    }

    #[test]
    fn test_strip_scenario() {
        let raw = "---\ntags: [poem, draft]\ncreated: 2023-01-01\n---\nHello";
        assert_eq!(strip(raw), "Hello");
        let (fm, body) = split(raw);
        assert_eq!(fm.unwrap().tags, vec!["poem", "draft"]);
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_strip_without_block_is_identity() {
        let raw = "Just text\n---\nwith a rule";
        assert_eq!(strip(raw), raw);
    }

    #[test]
    fn test_strip_crlf() {
        assert_eq!(strip("---\r\ntags: a\r\n---\r\nBody"), "Body");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let samples = [
            "",
            "plain",
            "---\na: b\n---\nbody",
            "---\na: b\n---\n---\nc: d\n---\nbody",
            "---\n---\n",
            "---\nunterminated\n",
            "---\na: 1\n---",
        ];
        for raw in samples {
            let once = strip(raw);
            assert_eq!(strip(once), once, "input: {:?}", raw);
        }
    }
}
