//! Document import from the snapshot boundary
//!
//!     Builds a [Document] back from its snapshot representation, or from
//!     JSON/YAML text carrying one. Kind tags are restored verbatim - the
//!     importer never re-classifies a value, so a snapshot round trip cannot
//!     change what kind anything is. The structured timestamp is re-derived
//!     from the textual datetime, non-blockingly, exactly as the parser does.

use std::fmt;

use super::ast::snapshot::{DocumentSnapshot, FieldSnapshot, ValueSnapshot};
use super::ast::{Document, Field, FieldValue, ValueKind};
use super::inlines::parse_timestamp;

/// Error from feeding malformed JSON/YAML to the importer.
#[derive(Debug, Clone)]
pub enum ImportError {
    InvalidJson(String),
    InvalidYaml(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::InvalidJson(msg) => write!(f, "invalid JSON document: {msg}"),
            ImportError::InvalidYaml(msg) => write!(f, "invalid YAML document: {msg}"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Restore a document from a snapshot.
pub fn import_snapshot(snapshot: &DocumentSnapshot) -> Document {
    Document {
        frontmatter: snapshot.frontmatter.clone(),
        fields: snapshot.fields.iter().map(import_field).collect(),
        parse_errors: snapshot.parse_errors.clone(),
        raw_content: String::new(),
    }
}

/// Create a document from a JSON snapshot.
pub fn from_json(json: &str) -> Result<Document, ImportError> {
    let snapshot: DocumentSnapshot =
        serde_json::from_str(json).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
    Ok(import_snapshot(&snapshot))
}

/// Create a document from a YAML snapshot.
pub fn from_yaml(yaml: &str) -> Result<Document, ImportError> {
    let snapshot: DocumentSnapshot =
        serde_yaml::from_str(yaml).map_err(|e| ImportError::InvalidYaml(e.to_string()))?;
    Ok(import_snapshot(&snapshot))
}

fn import_field(snapshot: &FieldSnapshot) -> Field {
    Field {
        name: snapshot.name.clone(),
        is_list: snapshot.is_list,
        values: snapshot.values.iter().map(import_value).collect(),
        parse_errors: snapshot.parse_errors.clone(),
    }
}

/// Restore one value, recursively. Kind tags win in the same precedence the
/// generator consults them; named sub-item entries without a name are
/// dropped, since there is no key to attach them under.
fn import_value(snapshot: &ValueSnapshot) -> FieldValue {
    let kind = if snapshot.is_raw {
        ValueKind::RawBlock
    } else if snapshot.is_array {
        ValueKind::Array(snapshot.array_values.clone())
    } else if snapshot.is_wiki_link {
        let display = snapshot.value.clone();
        let target = snapshot.wiki_link.clone().unwrap_or_else(|| display.clone());
        ValueKind::WikiLink { target, display }
    } else if snapshot.is_raw_url {
        ValueKind::RawUrl
    } else {
        ValueKind::Plain
    };

    let (date, time) = match &snapshot.datetime {
        Some(datetime) => {
            let mut parts = datetime.split_whitespace();
            let date = parts.next().map(str::to_string);
            let time = parts.next().map(str::to_string);
            (date, time)
        }
        None => (None, None),
    };
    let timestamp = date
        .as_deref()
        .and_then(|d| parse_timestamp(d, time.as_deref()));

    let mut value = FieldValue {
        value: snapshot.value.clone(),
        kind,
        date,
        time,
        timestamp,
        details: snapshot.details.clone(),
        strikethrough: snapshot.is_strikethrough,
        link_url: snapshot.link_url.clone(),
        parse_error: snapshot.parse_error.clone(),
        ..FieldValue::default()
    };

    for sub in &snapshot.sub_items {
        if let Some(name) = &sub.name {
            value.insert_sub_item(name.clone(), import_value(sub));
        }
    }
    value.list_sub_items = snapshot.list_sub_items.iter().map(import_value).collect();

    value
}
