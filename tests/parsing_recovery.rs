//! Error recovery behavior
//!
//! Malformed input never aborts a parse. These tests pin down the recovery
//! contract: diagnostics land on the nearest node and everything around the
//! failure still parses.

use fieldmark::fieldmark::parse_document;

#[test]
fn test_one_malformed_list_line_is_isolated() {
    let doc = parse_document("tags:\n- good\nnot a list item\n- also good\n");

    let field = doc.field("tags").unwrap();
    let values: Vec<_> = field.values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, ["good", "also good"]);
    assert_eq!(field.parse_errors.len(), 1);
    assert!(field.parse_errors[0].contains("not a list item"));
    assert!(doc.parse_errors.is_empty());
}

#[test]
fn test_malformed_datetime_is_kept_as_text() {
    let doc = parse_document("due: soon, 2099-13-99\n");

    let value = doc.value("due").unwrap();
    assert_eq!(value.value, "soon");
    assert_eq!(value.date.as_deref(), Some("2099-13-99"));
    assert!(value.timestamp.is_none());
    assert!(value.parse_error.is_none());
    assert!(!doc.has_errors());
}

#[test]
fn test_block_without_any_valid_item_fails_alone() {
    let doc = parse_document("broken:\njunk here\nstatus: done\n");

    assert!(doc.field("broken").is_none());
    assert_eq!(doc.parse_errors.len(), 1);
    assert!(doc.parse_errors[0].contains("'broken'"));
    assert_eq!(doc.value("status").unwrap().value, "done");
}

#[test]
fn test_preamble_prose_is_dropped_silently() {
    let doc = parse_document("Some prose nobody structured.\n\nstatus: done\n");
    assert!(!doc.has_errors());
    assert_eq!(doc.fields.len(), 1);
}

#[test]
fn test_empty_field_block_is_dropped() {
    let doc = parse_document("empty:\nstatus: done\n");
    assert!(doc.field("empty").is_none());
    assert_eq!(doc.value("status").unwrap().value, "done");
    assert!(!doc.has_errors());
}

#[test]
fn test_unbalanced_parens_do_not_become_details() {
    let doc = parse_document("note: mismatch)\n");
    let value = doc.value("note").unwrap();
    assert!(value.details.is_none());
    assert_eq!(value.value, "mismatch)");
}

#[test]
fn test_bad_sub_item_does_not_halt_siblings() {
    let doc = parse_document(
        "tasks:\n- release\n\t- owner: alice\n\tnot an item either\n\t- reviewer: bob\n",
    );

    let release = &doc.values("tasks")[0];
    assert_eq!(release.sub_item("owner").unwrap().value, "alice");
    assert_eq!(release.sub_item("reviewer").unwrap().value, "bob");

    let field = doc.field("tasks").unwrap();
    assert_eq!(field.parse_errors.len(), 1);
    assert!(field.parse_errors[0].contains("not an item either"));
}

#[test]
fn test_errors_do_not_leak_across_fields() {
    let doc = parse_document("bad:\n- ok\njunk\ngood:\n- fine\n");

    assert_eq!(doc.field("bad").unwrap().parse_errors.len(), 1);
    assert!(doc.field("good").unwrap().parse_errors.is_empty());
}
