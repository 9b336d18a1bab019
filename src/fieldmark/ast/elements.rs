//! AST node type definitions

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;

/// The classified payload of one value slot.
///
/// Kinds are mutually exclusive: a value is exactly one of these. Metadata
/// (datetime, details, strikethrough, link) lives on [FieldValue] and can
/// accompany any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// Regular text, single word or intentionally formatted.
    Plain,
    /// Verbatim text, delimited by pipes in markup.
    RawBlock,
    /// A bare URL with a recognized scheme.
    RawUrl,
    /// An ordered list of string elements from `{ a ; b ; c }` markup.
    Array(Vec<String>),
    /// A wiki link `[[target]]` or `[[target|display]]`.
    WikiLink { target: String, display: String },
}

/// A parsed field value with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// Text payload. Meaning depends on the kind: the display text for wiki
    /// links, the verbatim content for raw blocks, empty for arrays. When
    /// `parse_error` is set, this holds the original unprocessed text.
    pub value: String,
    pub kind: ValueKind,
    /// Textual date suffix (`YYYY-MM-DD`), kept even when it is not a valid
    /// calendar date.
    pub date: Option<String>,
    /// Textual time suffix (`HH:MM` or `HH:MM:SS`).
    pub time: Option<String>,
    /// Structured form of the datetime suffix; `None` when the textual
    /// date/time does not parse as a calendar value.
    pub timestamp: Option<NaiveDateTime>,
    /// Free text from the trailing parenthesized group.
    pub details: Option<String>,
    pub strikethrough: bool,
    /// Markdown link target extracted from the text.
    pub link_url: Option<String>,
    /// Named nested sub-fields, insertion order preserved, unique keys.
    pub sub_items: Vec<(String, FieldValue)>,
    /// Unnamed nested list items, in document order.
    pub list_sub_items: Vec<FieldValue>,
    /// Non-blocking diagnostic; presence means best-effort recovery occurred.
    pub parse_error: Option<String>,
}

impl Default for FieldValue {
    fn default() -> Self {
        Self {
            value: String::new(),
            kind: ValueKind::Plain,
            date: None,
            time: None,
            timestamp: None,
            details: None,
            strikethrough: false,
            link_url: None,
            sub_items: Vec::new(),
            list_sub_items: Vec::new(),
            parse_error: None,
        }
    }
}

impl FieldValue {
    /// A plain value holding the given text, no metadata.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            value: text.into(),
            ..Self::default()
        }
    }

    /// Combined `date time` string when a date is present.
    pub fn datetime_str(&self) -> Option<String> {
        match (&self.date, &self.time) {
            (Some(date), Some(time)) => Some(format!("{date} {time}")),
            (Some(date), None) => Some(date.clone()),
            _ => None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.parse_error.is_some()
    }

    /// Look up a named sub-item.
    pub fn sub_item(&self, name: &str) -> Option<&FieldValue> {
        self.sub_items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Insert a named sub-item, replacing an existing entry with the same
    /// name in place so insertion order stays stable.
    pub fn insert_sub_item(&mut self, name: String, value: FieldValue) {
        match self.sub_items.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.sub_items.push((name, value)),
        }
    }
}

/// A raw field block produced by the splitter, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBlock {
    pub name: String,
    /// Complete text of the block, first line included.
    pub raw_content: String,
    /// Absolute 1-indexed line number where the block starts.
    pub start_line: usize,
}

/// A parsed field: a single inline value or an ordered list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Whether the field renders as a dash-list rather than inline.
    pub is_list: bool,
    /// Exactly one entry when `is_list` is false, one or more when true.
    pub values: Vec<FieldValue>,
    pub parse_errors: Vec<String>,
}

impl Field {
    pub fn first_value(&self) -> Option<&FieldValue> {
        self.values.first()
    }

    pub fn last_value(&self) -> Option<&FieldValue> {
        self.values.last()
    }

    pub fn has_errors(&self) -> bool {
        !self.parse_errors.is_empty()
    }
}

/// A parsed fieldmark document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Flat frontmatter key/value pairs. Order is not significant.
    pub frontmatter: BTreeMap<String, String>,
    /// Fields in insertion order, unique names.
    pub fields: Vec<Field>,
    /// Document-level diagnostics, non-blocking.
    pub parse_errors: Vec<String>,
    /// Original text, retained for diagnostics only.
    pub raw_content: String,
}

impl Document {
    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the first value of a field.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).and_then(|f| f.values.first())
    }

    /// Get all values of a field; empty when the field is absent.
    pub fn values(&self, name: &str) -> &[FieldValue] {
        self.field(name).map(|f| f.values.as_slice()).unwrap_or(&[])
    }

    /// Insert a field, replacing an existing field with the same name in
    /// place so the original position is kept.
    pub fn insert_field(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }
    }

    /// Whether any diagnostics were recorded anywhere in the document.
    pub fn has_errors(&self) -> bool {
        !self.parse_errors.is_empty() || self.fields.iter().any(|f| f.has_errors())
    }
}

impl fmt::Display for Document {
    /// Renders the canonical markup representation of this document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::fieldmark::generating::generate_markup(self))
    }
}
