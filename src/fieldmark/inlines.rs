//! Leaf value classification
//!
//!     One line's value text becomes a typed [FieldValue] here. The pipeline
//!     is strictly ordered and each stage only consumes what it recognizes,
//!     leaving the remainder for the next stage:
//!
//!         1. trailing datetime suffix
//!         2. trailing parenthesized details (balance-aware)
//!         3. strikethrough detection
//!         4. backtick-wrap detection (before stripping removes the markers)
//!         5. markdown stripping (links, strikethrough, code spans)
//!         6. bare URL
//!         7. raw block (pipes)
//!         8. array
//!         9. wiki link
//!        10. unmarked multi-word fallback to raw
//!        11. plain
//!
//!     The ordering encodes a precedence grammar without a tokenizer: URLs
//!     and raw blocks outrank structural sigils like `{}` and `[[ ]]` because
//!     pipes and URLs can legally contain those characters. The multi-word
//!     fallback recovers free text whose author did not know the quoting
//!     rules. Classification is total - no input makes it fail.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::ast::{FieldValue, ValueKind};
use super::patterns::{
    ARRAY, CODE_SPAN, DATETIME_SUFFIX, LINK, RAW_BLOCK, STRIKETHROUGH, URL, WIKI_LINK,
};

/// Classify one raw value into a typed [FieldValue] with metadata.
pub fn classify(raw_value: &str) -> FieldValue {
    let (text, date, time, timestamp) = extract_datetime(raw_value);
    let (text, details) = extract_details(&text);
    let strikethrough = detect_strikethrough(&text);
    let backtick_wrapped = is_backtick_wrapped(&text);
    let (text, link_url) = clean_markdown(&text);

    let mut value = FieldValue {
        date,
        time,
        timestamp,
        details,
        link_url,
        ..FieldValue::default()
    };

    if URL.is_match(&text) {
        value.value = text;
        value.kind = ValueKind::RawUrl;
        value.strikethrough = strikethrough;
        return value;
    }

    if let Some(raw) = extract_raw_block(&text) {
        value.value = raw;
        value.kind = ValueKind::RawBlock;
        return value;
    }

    if let Some(elements) = extract_array(&text) {
        value.kind = ValueKind::Array(elements);
        return value;
    }

    if let Some((target, display)) = extract_wiki_link(&text) {
        value.value = display.clone();
        value.kind = ValueKind::WikiLink { target, display };
        return value;
    }

    // Unmarked multi-word text falls back to raw, unless the author signalled
    // intent with strikethrough, a link, or explicit backticks.
    let intentional = strikethrough || value.link_url.is_some() || backtick_wrapped;
    if !intentional && text.contains(' ') {
        value.value = text;
        value.kind = ValueKind::RawBlock;
        return value;
    }

    value.value = text;
    value.strikethrough = strikethrough;
    value
}

/// Strip a trailing datetime suffix and return the remaining text plus the
/// textual date/time and, when they form a valid calendar value, a parsed
/// timestamp. Calendar parsing failure is non-blocking: the textual parts are
/// kept either way.
pub(crate) fn extract_datetime(
    text: &str,
) -> (String, Option<String>, Option<String>, Option<NaiveDateTime>) {
    let caps = match DATETIME_SUFFIX.captures(text) {
        Some(caps) => caps,
        None => return (text.to_string(), None, None, None),
    };

    let matched = caps.get(0).expect("regex match has a full capture");
    let date = caps[1].to_string();
    let time = caps.get(2).map(|m| m.as_str().to_string());
    let timestamp = parse_timestamp(&date, time.as_deref());
    let rest = text[..matched.start()].trim().to_string();

    (rest, Some(date), time, timestamp)
}

/// Parse textual date/time into a timestamp; `None` on invalid calendar values.
pub(crate) fn parse_timestamp(date: &str, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    match time {
        None => Some(date.and_time(NaiveTime::MIN)),
        Some(text) => {
            let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
                .ok()?;
            Some(date.and_time(time))
        }
    }
}

/// Extract details from the last parenthesized group at the end of the text.
///
/// Scans backward counting parenthesis depth. A balanced `(` immediately
/// preceded by `]` belongs to a markdown link, not a detail group; the scan
/// resets and keeps looking for an enclosing pair. Unbalanced input yields no
/// details.
pub(crate) fn extract_details(text: &str) -> (String, Option<String>) {
    let text = text.trim_end();
    if !text.ends_with(')') {
        return (text.to_string(), None);
    }

    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut open_pos = None;
    // Parens are ASCII, so a byte scan is char-boundary safe.
    for pos in (0..bytes.len() - 1).rev() {
        match bytes[pos] {
            b')' => depth += 1,
            b'(' => {
                depth -= 1;
                if depth == 0 {
                    if pos > 0 && bytes[pos - 1] == b']' {
                        // Markdown link `](...)`; keep scanning outward.
                        depth = 1;
                    } else {
                        open_pos = Some(pos);
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    match open_pos {
        Some(pos) => {
            let details = text[pos + 1..text.len() - 1].trim().to_string();
            (text[..pos].trim().to_string(), Some(details))
        }
        None => (text.to_string(), None),
    }
}

/// Whether the text contains a `~~...~~` span.
pub(crate) fn detect_strikethrough(text: &str) -> bool {
    STRIKETHROUGH.is_match(text)
}

/// Whether the trimmed text is fully backtick-wrapped.
fn is_backtick_wrapped(text: &str) -> bool {
    let text = text.trim();
    text.len() >= 2 && text.starts_with('`') && text.ends_with('`')
}

/// Strip markdown decorations: `[text](url)` resolves to its text (the first
/// url is captured), strikethrough and code spans resolve to their inner text.
pub(crate) fn clean_markdown(text: &str) -> (String, Option<String>) {
    let link_url = LINK.captures(text).map(|caps| caps[2].to_string());
    let text = LINK.replace_all(text, "$1");
    let text = STRIKETHROUGH.replace_all(&text, "$1");
    let text = CODE_SPAN.replace_all(&text, "$1");
    (text.trim().to_string(), link_url)
}

/// Inner text of a `| ... |` raw block, closing pipe optional.
pub(crate) fn extract_raw_block(text: &str) -> Option<String> {
    RAW_BLOCK
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Elements of a `{ a ; b ; c }` array, each trimmed and stripped of one
/// surrounding backtick pair.
pub(crate) fn extract_array(text: &str) -> Option<Vec<String>> {
    let caps = ARRAY.captures(text)?;
    let elements = caps[1]
        .split(';')
        .map(|element| {
            let element = element.trim();
            element
                .strip_prefix('`')
                .and_then(|e| e.strip_suffix('`'))
                .unwrap_or(element)
                .to_string()
        })
        .collect();
    Some(elements)
}

/// Target and display text of a `[[target]]` / `[[target|display]]` link.
pub(crate) fn extract_wiki_link(text: &str) -> Option<(String, String)> {
    let caps = WIKI_LINK.captures(text)?;
    let target = caps[1].trim().to_string();
    let display = caps
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| target.clone());
    Some((target, display))
}
