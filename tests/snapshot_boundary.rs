//! The snapshot boundary: JSON/YAML export and import
//!
//! Conversion through the nested-map shape must be lossless for structure and
//! must never alter kind classification.

use fieldmark::fieldmark::importing::import_snapshot;
use fieldmark::fieldmark::{from_json, from_yaml, generate_markup, parse_document};

const SAMPLE: &str = "---\ntitle: Weekly review\n---\nstatus: done (reviewed), 2024-01-15\nlinks:\n- [[Project A]]\n- [[Project B|B]]\ntasks:\n- release\n\t- owner: alice\n\t- step one\n";

#[test]
fn test_snapshot_import_restores_the_tree() {
    let doc = parse_document(SAMPLE);
    let restored = import_snapshot(&doc.snapshot());

    assert_eq!(restored.frontmatter, doc.frontmatter);
    assert_eq!(restored.fields, doc.fields);
}

#[test]
fn test_json_round_trip() {
    let doc = parse_document(SAMPLE);
    let restored = from_json(&doc.to_json().unwrap()).unwrap();

    assert_eq!(restored.fields, doc.fields);
    assert_eq!(generate_markup(&restored), generate_markup(&doc));
}

#[test]
fn test_yaml_round_trip() {
    let doc = parse_document(SAMPLE);
    let restored = from_yaml(&doc.to_yaml().unwrap()).unwrap();

    assert_eq!(restored.fields, doc.fields);
    assert_eq!(generate_markup(&restored), generate_markup(&doc));
}

#[test]
fn test_parse_errors_cross_the_boundary() {
    let doc = parse_document("tags:\n- good\nbroken line\n");
    let restored = from_json(&doc.to_json().unwrap()).unwrap();

    let field = restored.field("tags").unwrap();
    assert_eq!(field.parse_errors.len(), 1);
    assert!(field.parse_errors[0].contains("broken line"));
}

#[test]
fn test_json_shape_is_stable() {
    let doc = parse_document("ref: [[Project B|B]]\n");
    let json = doc.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let field = &value["fields"][0];
    assert_eq!(field["name"], "ref");
    assert_eq!(field["is_list"], false);
    let val = &field["values"][0];
    assert_eq!(val["value"], "B");
    assert_eq!(val["is_wiki_link"], true);
    assert_eq!(val["wiki_link"], "Project B");
    // Absent kinds and metadata are omitted, not null.
    assert!(val.get("is_raw").is_none());
    assert!(val.get("datetime").is_none());
}
