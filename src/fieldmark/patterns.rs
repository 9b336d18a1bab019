//! Lexical patterns for fieldmark parsing and quoting
//!
//!     All regexes are compiled once behind `Lazy` statics. They are applied
//!     per line (no multiline flags); the splitter feeds them one line at a
//!     time. Patterns come in two groups: the grammar patterns the parser
//!     matches against, and the value-shape patterns the generator consults
//!     when deciding whether a bare list value would be misread on re-parse.

use once_cell::sync::Lazy;
use regex::Regex;

/// Frontmatter block: `---` fence, flat body, `---` fence, at document start.
pub static FRONTMATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^---[ \t]*\n(.*?)\n---[ \t]*(?:\n|$)").unwrap());

/// Field start at column 0: `name:` with an optional same-line value.
pub static FIELD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9_. ]*):\s*(.*)$").unwrap());

/// List item after indentation stripping: `- value`.
pub static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+(.+)$").unwrap());

/// Named sub-field after indentation stripping: `- name: value`.
pub static SUB_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s+([a-z][a-z0-9_\s]*):\s*(.*)$").unwrap());

/// Trailing datetime suffix: comma, optional backticks, date, optional time.
pub static DATETIME_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*`?(\d{4}-\d{2}-\d{2})(?:\s+(\d{2}:\d{2}(?::\d{2})?))?`?\s*$").unwrap()
});

/// Strikethrough span: `~~text~~`.
pub static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Inline code span: `` `text` ``.
pub static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Markdown link: `[text](url)`.
pub static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Array literal: `{ el1 ; el2 ; el3 }`.
pub static ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*([^}]+)\s*\}").unwrap());

/// Raw block: `| text |`, closing pipe optional. The leading pipe must open
/// the value, otherwise pipes inside wiki links would make everything raw.
pub static RAW_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|\s*(.*?)(?:\s*\|)?\s*$").unwrap());

/// Wiki link: `[[target]]` or `[[target|display]]`.
pub static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^|\]]+)(?:\|([^\]]+))?\]\]").unwrap());

/// Bare URL with a known scheme and no embedded whitespace.
pub static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?|ftps?|wss?|file)://\S+$").unwrap());

// Value shapes that would be misread if rendered bare in list context.

/// Plain integer or decimal, optionally negative.
pub static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").unwrap());

/// Number with thousands separators: `1,234` or `1,234.56`.
pub static NUMBER_GROUPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(?:,\d{3})+(?:\.\d+)?$").unwrap());

/// ISO date: `YYYY-MM-DD`.
pub static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Time of day: `HH:MM` or `HH:MM:SS`.
pub static TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}(?::\d{2})?$").unwrap());

/// Date plus time of day.
pub static DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}(?::\d{2})?$").unwrap());

/// Scientific notation: `1.5e10`, `2.3E-5`, `-1e10`.
pub static SCIENTIFIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?[eE][+-]?\d+$").unwrap());

/// IPv4 literal.
pub static IPV4: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").unwrap());

/// IPv6 literal, full or compressed (including a bare `::`).
pub static IPV6: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[0-9A-Fa-f]{1,4}:){7}[0-9A-Fa-f]{1,4}$|^(?:[0-9A-Fa-f]{1,4}:)+:(?:[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4})*)?$|^::(?:[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4})*)?$",
    )
    .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_start_captures_name_and_value() {
        let caps = FIELD_START.captures("status: done (reviewed), 2024-01-15").unwrap();
        assert_eq!(&caps[1], "status");
        assert_eq!(&caps[2], "done (reviewed), 2024-01-15");
    }

    #[test]
    fn test_field_start_rejects_indented_lines() {
        assert!(FIELD_START.captures("\tstatus: done").is_none());
        assert!(FIELD_START.captures("Status: done").is_none());
    }

    #[test]
    fn test_datetime_suffix_with_and_without_time() {
        let caps = DATETIME_SUFFIX.captures("done, 2024-01-15").unwrap();
        assert_eq!(&caps[1], "2024-01-15");
        assert!(caps.get(2).is_none());

        let caps = DATETIME_SUFFIX.captures("done, `2024-01-15 10:30:15`").unwrap();
        assert_eq!(&caps[1], "2024-01-15");
        assert_eq!(&caps[2], "10:30:15");
    }

    #[test]
    fn test_raw_block_requires_leading_pipe() {
        assert!(RAW_BLOCK.is_match("| raw text |"));
        assert!(RAW_BLOCK.is_match("| no closing pipe"));
        assert!(!RAW_BLOCK.is_match("[[Project B|B]]"));
    }

    #[test]
    fn test_ipv6_shapes() {
        for s in ["::", "::1", "fe80::", "2001:db8::8a2e:370:7334",
                  "2001:0db8:0000:0000:0000:8a2e:0370:7334"] {
            assert!(IPV6.is_match(s), "expected IPv6 match for {s}");
        }
        assert!(!IPV6.is_match("not:an:ip"));
    }
}
