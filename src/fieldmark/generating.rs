//! Markup generation
//!
//!     The exact inverse of parsing: a [Document] walks back out as canonical
//!     fieldmark text. Fields render in insertion order, separated by blank
//!     lines; inline fields as `name: value`, list fields as `name:` followed
//!     by one dash-line per value with nested items one tab deeper. Metadata
//!     renders in a fixed order on every value: value, details, datetime.
//!
//!     Quoting decisions live in [formatting](super::formatting); the
//!     datetime suffix is always backtick-wrapped regardless of context.

use super::ast::{Document, Field, FieldValue, ValueKind};
use super::formatting::{make_indent, quote_value, QuoteContext};

/// Render one value to its markup text, without indentation or list dash.
fn render_value_text(value: &FieldValue, context: QuoteContext) -> String {
    let has_metadata = value.date.is_some() || value.details.is_some();

    let mut text = match &value.kind {
        ValueKind::RawBlock => format!("| {} |", value.value),
        ValueKind::RawUrl => value.value.clone(),
        ValueKind::Array(elements) => {
            let inner: Vec<String> = elements.iter().map(|e| format!("`{e}`")).collect();
            format!("{{ {} }}", inner.join(" ; "))
        }
        ValueKind::WikiLink { target, display } => {
            if display != target {
                format!("[[{target}|{display}]]")
            } else {
                format!("[[{target}]]")
            }
        }
        ValueKind::Plain => {
            let mut quoted = quote_value(&value.value, context, has_metadata);
            if value.strikethrough {
                quoted = format!("~~{quoted}~~");
            }
            quoted
        }
    };

    if let Some(details) = &value.details {
        text.push_str(&format!(" ({details})"));
    }
    if let Some(date) = &value.date {
        match &value.time {
            Some(time) => text.push_str(&format!(", `{date} {time}`")),
            None => text.push_str(&format!(", `{date}`")),
        }
    }

    text
}

/// Render a list value line plus all of its nested items.
fn generate_value(value: &FieldValue, indent: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{}- {}",
        make_indent(indent),
        render_value_text(value, QuoteContext::List)
    )];
    for (name, sub) in &value.sub_items {
        lines.extend(generate_named_item(name, sub, indent + 1));
    }
    for sub in &value.list_sub_items {
        lines.extend(generate_value(sub, indent + 1));
    }
    lines
}

/// Render a named sub-item line plus all of its nested items.
fn generate_named_item(name: &str, value: &FieldValue, indent: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{}- {}: {}",
        make_indent(indent),
        name,
        render_value_text(value, QuoteContext::List)
    )];
    for (sub_name, sub) in &value.sub_items {
        lines.extend(generate_named_item(sub_name, sub, indent + 1));
    }
    for sub in &value.list_sub_items {
        lines.extend(generate_value(sub, indent + 1));
    }
    lines
}

/// Render one field to its markup lines.
fn generate_field(field: &Field) -> Vec<String> {
    if field.is_list {
        let mut lines = vec![format!("{}:", field.name)];
        for value in &field.values {
            lines.extend(generate_value(value, 0));
        }
        lines
    } else {
        match field.values.first() {
            Some(value) => vec![format!(
                "{}: {}",
                field.name,
                render_value_text(value, QuoteContext::Inline)
            )],
            None => Vec::new(),
        }
    }
}

/// Render a document to canonical fieldmark markup.
///
/// Total and deterministic; the output re-parses to the same tree, up to the
/// first normalization pass for values the parser reclassifies.
pub fn generate_markup(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !doc.frontmatter.is_empty() {
        lines.push("---".to_string());
        for (key, value) in &doc.frontmatter {
            lines.push(format!("{key}: {value}"));
        }
        lines.push("---".to_string());
    }

    for field in &doc.fields {
        lines.extend(generate_field(field));
        lines.push(String::new());
    }

    lines.join("\n")
}
