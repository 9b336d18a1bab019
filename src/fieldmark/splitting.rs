//! Frontmatter split and single-pass field block splitting
//!
//!     The splitter makes one forward pass over the document body. A line at
//!     column 0 matching `name:` opens a new block; everything up to the next
//!     such line (or end of input) belongs to the open block, first line
//!     included. Lines before the first field line are dropped. Nothing here
//!     interprets indentation or values - blocks come out raw, annotated with
//!     their absolute start line for diagnostics.
//!
//!     Frontmatter is intentionally line-flat: `key: value` pairs only, no
//!     nesting, no type coercion. Lines without a colon are ignored.

use std::collections::BTreeMap;

use super::ast::FieldBlock;
use super::patterns::{FIELD_START, FRONTMATTER};

/// Number of leading tab characters on a line.
pub fn count_leading_tabs(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b'\t').count()
}

/// Split off the frontmatter block, if any.
///
/// Returns the key/value pairs, the remaining body, and the number of lines
/// consumed (fences included) for offsetting line numbers in diagnostics.
pub fn parse_frontmatter(content: &str) -> (BTreeMap<String, String>, &str, usize) {
    let caps = match FRONTMATTER.captures(content) {
        Some(caps) => caps,
        None => return (BTreeMap::new(), content, 0),
    };

    let matched = caps.get(0).expect("regex match has a full capture");
    let body = &content[matched.end()..];
    let line_offset = content[..matched.end()].matches('\n').count();

    let mut frontmatter = BTreeMap::new();
    for line in caps[1].lines() {
        if let Some((key, value)) = line.split_once(':') {
            frontmatter.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    (frontmatter, body, line_offset)
}

/// Split a document into field blocks in a single pass.
pub fn split_into_blocks(content: &str) -> (Vec<FieldBlock>, BTreeMap<String, String>) {
    let (frontmatter, body, line_offset) = parse_frontmatter(content);

    let mut blocks = Vec::new();
    let mut current: Option<FieldBlock> = None;
    let mut current_lines: Vec<&str> = Vec::new();

    for (idx, line) in body.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(caps) = FIELD_START.captures(line) {
            if let Some(mut block) = current.take() {
                block.raw_content = current_lines.join("\n");
                blocks.push(block);
            }
            current = Some(FieldBlock {
                name: caps[1].trim().to_string(),
                raw_content: String::new(),
                start_line: idx + 1 + line_offset,
            });
            current_lines = vec![line];
        } else if current.is_some() {
            current_lines.push(line);
        }
    }

    if let Some(mut block) = current.take() {
        block.raw_content = current_lines.join("\n");
        blocks.push(block);
    }

    (blocks, frontmatter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_blocks() {
        let (blocks, frontmatter) = split_into_blocks("status: done\ntags:\n\t- a\n\t- b\n");
        assert!(frontmatter.is_empty());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "status");
        assert_eq!(blocks[0].raw_content, "status: done");
        assert_eq!(blocks[0].start_line, 1);
        assert_eq!(blocks[1].name, "tags");
        assert_eq!(blocks[1].raw_content, "tags:\n\t- a\n\t- b\n");
        assert_eq!(blocks[1].start_line, 2);
    }

    #[test]
    fn test_frontmatter_offsets_line_numbers() {
        let content = "---\ntitle: Test\nauthor: someone\n---\nstatus: done\n";
        let (blocks, frontmatter) = split_into_blocks(content);
        assert_eq!(frontmatter.get("title").map(String::as_str), Some("Test"));
        assert_eq!(frontmatter.get("author").map(String::as_str), Some("someone"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start_line, 5);
    }

    #[test]
    fn test_preamble_lines_are_dropped() {
        let (blocks, _) = split_into_blocks("Just some prose.\nMore prose.\nstatus: done\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "status");
        assert_eq!(blocks[0].start_line, 3);
    }

    #[test]
    fn test_frontmatter_without_colon_lines_ignored() {
        let (_, frontmatter) = split_into_blocks("---\nloose line\nkey: value\n---\n");
        assert_eq!(frontmatter.len(), 1);
        assert_eq!(frontmatter.get("key").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_count_leading_tabs() {
        assert_eq!(count_leading_tabs("no tabs"), 0);
        assert_eq!(count_leading_tabs("\t\t- item"), 2);
    }
}
