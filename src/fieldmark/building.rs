//! Field block interpretation and sub-item tree building
//!
//!     A raw block from the splitter becomes a [Field] here. The first line
//!     decides the shape: a same-line value with no following dash-line is an
//!     inline field; anything else is a list field, and a same-line value on
//!     a list field is reinterpreted as its first item.
//!
//!     Nesting is indentation-driven. At each level the builder scans for
//!     items exactly one tab deeper than its base; everything deeper still is
//!     collected and handed back to the same builder recursively. Depth
//!     strictly increases with each level, so the recursion is bounded by the
//!     deepest line in the block. Lines that fit no item shape are skipped
//!     with a warning and the scan continues - one bad line never takes down
//!     its siblings.

use super::ast::{Field, FieldBlock, FieldValue};
use super::inlines::classify;
use super::patterns::{FIELD_START, LIST_ITEM, SUB_FIELD};
use super::splitting::count_leading_tabs;

/// A block body line annotated with its tab depth and absolute line number.
#[derive(Debug, Clone)]
pub(crate) struct IndentedLine {
    pub depth: usize,
    /// Line content with the leading tabs stripped.
    pub text: String,
    pub line: usize,
}

/// Parse a field from a raw block.
///
/// Returns the field, or `None` for blocks with no content. Diagnostics that
/// could not be attached to a returned field (the block failed to produce any
/// value at all) come back in the second slot for document-level recording.
pub fn parse_field_block(block: &FieldBlock) -> (Option<Field>, Vec<String>) {
    let lines: Vec<&str> = block.raw_content.split('\n').collect();
    let mut errors: Vec<String> = Vec::new();

    let caps = match FIELD_START.captures(lines[0]) {
        Some(caps) => caps,
        None => return (None, errors),
    };
    let name = caps[1].trim().to_string();
    let inline_value = caps[2].trim().to_string();

    // The first non-blank continuation line decides inline vs list.
    let mut is_list_format = false;
    for line in &lines[1..] {
        let stripped = line.trim_start_matches(['\t', ' ']);
        if !stripped.is_empty() {
            is_list_format = stripped.starts_with('-');
            break;
        }
    }

    if !inline_value.is_empty() && !is_list_format {
        let field = Field {
            name,
            is_list: false,
            values: vec![classify(&inline_value)],
            parse_errors: errors,
        };
        return (Some(field), Vec::new());
    }

    let mut indexed: Vec<IndentedLine> = Vec::new();
    if !inline_value.is_empty() && is_list_format {
        // A same-line value on a list field becomes its first item.
        indexed.push(IndentedLine {
            depth: 0,
            text: format!("- {inline_value}"),
            line: block.start_line,
        });
    }
    for (offset, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        indexed.push(IndentedLine {
            depth: count_leading_tabs(line),
            text: line.trim_start_matches('\t').to_string(),
            line: block.start_line + offset,
        });
    }

    if indexed.is_empty() {
        return (None, errors);
    }

    // Tolerate uniformly indented blocks: shift the whole block so its
    // shallowest line sits at depth 0.
    let min_depth = indexed.iter().map(|l| l.depth).min().unwrap_or(0);
    if min_depth > 0 {
        for line in &mut indexed {
            line.depth -= min_depth;
        }
    }

    let mut values: Vec<FieldValue> = Vec::new();
    let mut i = 0;
    while i < indexed.len() {
        let current = &indexed[i];
        if current.depth != 0 {
            i += 1;
            continue;
        }

        let caps = match LIST_ITEM.captures(&current.text) {
            Some(caps) => caps,
            None => {
                errors.push(format!(
                    "Invalid list item format at line {}: {}",
                    current.line, current.text
                ));
                i += 1;
                continue;
            }
        };

        let mut end = i + 1;
        while end < indexed.len() && indexed[end].depth > 0 {
            end += 1;
        }

        let mut value = classify(&caps[1]);
        if end > i + 1 {
            let (sub_fields, sub_list, sub_errors) = parse_sub_items(&indexed[i + 1..end], 0);
            value.sub_items = sub_fields;
            value.list_sub_items = sub_list;
            errors.extend(sub_errors);
        }
        values.push(value);
        i = end;
    }

    if values.is_empty() {
        return (None, errors);
    }

    let field = Field {
        name,
        is_list: true,
        values,
        parse_errors: errors,
    };
    (Some(field), Vec::new())
}

/// Parse sub-items (named sub-fields and unnamed list items) at one nesting
/// level, recursing for anything deeper.
pub(crate) fn parse_sub_items(
    lines: &[IndentedLine],
    base_depth: usize,
) -> (Vec<(String, FieldValue)>, Vec<FieldValue>, Vec<String>) {
    let mut sub_fields: Vec<(String, FieldValue)> = Vec::new();
    let mut sub_list: Vec<FieldValue> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let current = &lines[i];

        // Items live exactly one tab deeper than the base. Deeper lines are
        // consumed by the nested collection below; anything else at the wrong
        // depth that is not item-shaped gets a warning.
        if current.depth != base_depth + 1 {
            if !SUB_FIELD.is_match(&current.text) && !LIST_ITEM.is_match(&current.text) {
                errors.push(format!(
                    "Skipped line {} at unexpected depth: {}",
                    current.line, current.text
                ));
            }
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < lines.len() && lines[end].depth > current.depth {
            end += 1;
        }

        if let Some(caps) = SUB_FIELD.captures(&current.text) {
            let name = caps[1].trim().to_string();
            let mut value = classify(&caps[2]);
            if end > i + 1 {
                let (nested_fields, nested_list, nested_errors) =
                    parse_sub_items(&lines[i + 1..end], current.depth);
                value.sub_items = nested_fields;
                value.list_sub_items = nested_list;
                errors.extend(nested_errors);
            }
            match sub_fields.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => sub_fields.push((name, value)),
            }
        } else if let Some(caps) = LIST_ITEM.captures(&current.text) {
            let mut value = classify(&caps[1]);
            if end > i + 1 {
                let (nested_fields, nested_list, nested_errors) =
                    parse_sub_items(&lines[i + 1..end], current.depth);
                value.sub_items = nested_fields;
                value.list_sub_items = nested_list;
                errors.extend(nested_errors);
            }
            sub_list.push(value);
        } else {
            errors.push(format!(
                "Invalid sub-item format at line {}: {}",
                current.line, current.text
            ));
            i += 1;
            continue;
        }

        i = end;
    }

    (sub_fields, sub_list, errors)
}
