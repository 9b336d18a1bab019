//! Quoting rules for generation
//!
//!     Centralized formatting policy: when the generator renders a plain
//!     value, the decision to backtick-wrap depends on where the value sits.
//!     Inline values are always wrapped. List values are wrapped only when
//!     the bare text would be misread on re-parse - because it contains one
//!     of the inline special characters, or because it has the shape of a
//!     typed literal (number, date, IP address, handle, ...) rather than a
//!     free word. The rules exist for exactly one property: a generated
//!     document re-parses to the tree it was generated from.

use super::patterns::{
    DATE, DATETIME, IPV4, IPV6, NUMBER, NUMBER_GROUPED, SCIENTIFIC, TIME,
};

/// Indentation unit for nested items.
pub const INDENT: &str = "\t";

/// Characters that force quoting in any context.
pub const SPECIAL_CHARS: [char; 6] = [' ', ',', '(', ')', ';', '|'];

/// Rendering position of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteContext {
    /// Single value on the field line: `name: value`.
    Inline,
    /// Dash-list item: `- value`.
    List,
}

/// Indentation string for a nesting level.
pub fn make_indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Whether the text contains characters that would be consumed structurally
/// on re-parse (details parens, datetime comma, array separator, raw pipe,
/// or the multi-word raw fallback).
pub fn needs_quoting(text: &str) -> bool {
    text.chars().any(|c| SPECIAL_CHARS.contains(&c))
}

/// Whether a bare list value would re-parse as a typed literal instead of
/// free plain text.
///
/// Covered shapes: pure numbers (with optional thousands separators),
/// scientific notation, dates, times, datetimes, IPv4/IPv6 literals, handles
/// (`@word`) and percent-delimited variables (`%word%`).
pub fn needs_quoting_in_list(text: &str) -> bool {
    if text.starts_with('@') && !text.contains(' ') && !text[1..].contains('@') {
        return true;
    }
    if text.len() >= 2 && text.starts_with('%') && text.ends_with('%') && !text.contains(' ') {
        return true;
    }
    NUMBER.is_match(text)
        || NUMBER_GROUPED.is_match(text)
        || DATE.is_match(text)
        || TIME.is_match(text)
        || DATETIME.is_match(text)
        || SCIENTIFIC.is_match(text)
        || IPV4.is_match(text)
        || IPV6.is_match(text)
}

/// Apply the quoting policy to a plain text value.
///
/// Values carrying date or details metadata are always wrapped, so the value
/// stays unambiguous next to its suffixes.
pub fn quote_value(text: &str, context: QuoteContext, has_metadata: bool) -> String {
    match context {
        QuoteContext::Inline => format!("`{}`", text.replace('`', "\\`")),
        QuoteContext::List => {
            if has_metadata || needs_quoting(text) || needs_quoting_in_list(text) {
                format!("`{text}`")
            } else {
                text.to_string()
            }
        }
    }
}
