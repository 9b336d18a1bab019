//! Document snapshot - a normalized representation of the document tree
//!
//!     This module provides a canonical, format-agnostic representation of a
//!     parsed document suitable for serialization to any output format (JSON,
//!     YAML). Serializers and importers consume snapshots rather than walking
//!     the tree themselves, so the traversal logic lives in exactly one place.
//!
//!     Kind tags are stored explicitly (`is_raw`, `is_array`, ...) so that a
//!     round trip through a snapshot never re-classifies a value. Named
//!     sub-items and fields are sequences of records carrying their own
//!     `name`, which keeps insertion order across serialization boundaries
//!     where plain maps would not.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::elements::{Document, Field, FieldValue, ValueKind};

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Snapshot of a single value slot, kind tags flattened to booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSnapshot {
    /// Present only on named sub-items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: String,
    /// Combined `date[ time]` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_raw: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_raw_url: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_array: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub array_values: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_wiki_link: bool,
    /// Wiki link target; the display text is in `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<ValueSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_sub_items: Vec<ValueSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

/// Snapshot of a field and its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub name: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub values: Vec<ValueSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse_errors: Vec<String>,
}

/// Snapshot of a complete document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub frontmatter: BTreeMap<String, String>,
    #[serde(default)]
    pub fields: Vec<FieldSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse_errors: Vec<String>,
}

/// Snapshot a single value and all of its nested sub-items.
pub fn snapshot_value(value: &FieldValue, name: Option<&str>) -> ValueSnapshot {
    let mut snap = ValueSnapshot {
        name: name.map(str::to_string),
        value: value.value.clone(),
        datetime: value.datetime_str(),
        is_strikethrough: value.strikethrough,
        link_url: value.link_url.clone(),
        details: value.details.clone(),
        parse_error: value.parse_error.clone(),
        ..ValueSnapshot::default()
    };

    match &value.kind {
        ValueKind::Plain => {}
        ValueKind::RawBlock => snap.is_raw = true,
        ValueKind::RawUrl => snap.is_raw_url = true,
        ValueKind::Array(values) => {
            snap.is_array = true;
            snap.array_values = values.clone();
        }
        ValueKind::WikiLink { target, .. } => {
            snap.is_wiki_link = true;
            snap.wiki_link = Some(target.clone());
        }
    }

    snap.sub_items = value
        .sub_items
        .iter()
        .map(|(sub_name, sub)| snapshot_value(sub, Some(sub_name)))
        .collect();
    snap.list_sub_items = value
        .list_sub_items
        .iter()
        .map(|sub| snapshot_value(sub, None))
        .collect();

    snap
}

/// Snapshot a field and its values.
pub fn snapshot_field(field: &Field) -> FieldSnapshot {
    FieldSnapshot {
        name: field.name.clone(),
        is_list: field.is_list,
        values: field.values.iter().map(|v| snapshot_value(v, None)).collect(),
        parse_errors: field.parse_errors.clone(),
    }
}

/// Snapshot a complete document. `raw_content` is not carried over.
pub fn snapshot_from_document(doc: &Document) -> DocumentSnapshot {
    DocumentSnapshot {
        frontmatter: doc.frontmatter.clone(),
        fields: doc.fields.iter().map(snapshot_field).collect(),
        parse_errors: doc.parse_errors.clone(),
    }
}

impl Document {
    /// The snapshot representation of this document.
    pub fn snapshot(&self) -> DocumentSnapshot {
        snapshot_from_document(self)
    }

    /// Export as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Export as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_are_flattened() {
        let value = FieldValue {
            kind: ValueKind::Array(vec!["a".to_string(), "b".to_string()]),
            ..FieldValue::default()
        };
        let snap = snapshot_value(&value, None);
        assert!(snap.is_array);
        assert_eq!(snap.array_values, ["a", "b"]);
        assert!(!snap.is_raw && !snap.is_wiki_link && !snap.is_raw_url);
    }

    #[test]
    fn test_wiki_target_and_display_are_split() {
        let value = FieldValue {
            value: "B".to_string(),
            kind: ValueKind::WikiLink {
                target: "Project B".to_string(),
                display: "B".to_string(),
            },
            ..FieldValue::default()
        };
        let snap = snapshot_value(&value, None);
        assert!(snap.is_wiki_link);
        assert_eq!(snap.wiki_link.as_deref(), Some("Project B"));
        assert_eq!(snap.value, "B");
    }

    #[test]
    fn test_named_sub_items_carry_their_name() {
        let mut value = FieldValue::plain("parent value");
        value.insert_sub_item("priority".to_string(), FieldValue::plain("high"));
        let snap = snapshot_value(&value, None);
        assert_eq!(snap.sub_items.len(), 1);
        assert_eq!(snap.sub_items[0].name.as_deref(), Some("priority"));
        assert_eq!(snap.sub_items[0].value, "high");
    }
}
