//! Generated markup output
//!
//! Snapshot checks of the generator: canonical quoting, metadata order and
//! nested item layout.

use fieldmark::fieldmark::{generate_markup, parse_document};

fn regenerate(input: &str) -> String {
    generate_markup(&parse_document(input))
}

#[test]
fn test_inline_fields_are_backtick_wrapped() {
    let output = regenerate("status: done\ncount: 42\n");
    insta::assert_snapshot!(output.trim_end(), @r"
    status: `done`

    count: `42`
    ");
}

#[test]
fn test_metadata_renders_value_details_datetime() {
    let output = regenerate("status: done (reviewed), 2024-01-15\n");
    insta::assert_snapshot!(output.trim_end(), @"status: `done` (reviewed), `2024-01-15`");
}

#[test]
fn test_list_values_quote_only_ambiguous_text() {
    let output = regenerate("tags:\n- plain\n- 1,234.56\n- 2026-02-15\n- @handle\n");
    insta::assert_snapshot!(output.trim_end(), @r"
    tags:
    - plain
    - `1,234.56`
    - `2026-02-15`
    - `@handle`
    ");
}

#[test]
fn test_kinds_render_canonically() {
    let output = regenerate(
        "homepage: https://example.com/site\nnotes: | raw text\nattendees: { alice ; bob }\nref: [[Project B|B]]\n",
    );
    insta::assert_snapshot!(output.trim_end(), @r"
    homepage: https://example.com/site

    notes: | raw text |

    attendees: { `alice` ; `bob` }

    ref: [[Project B|B]]
    ");
}

#[test]
fn test_nested_items_render_one_tab_deeper() {
    let input = "tasks:\n- release\n\t- owner: alice\n\t- checks\n\t\t- tag\n";
    let output = regenerate(input);
    assert_eq!(
        output,
        "tasks:\n- release\n\t- owner: alice\n\t- checks\n\t\t- tag\n"
    );
}

#[test]
fn test_frontmatter_block_is_emitted_first() {
    let output = regenerate("---\ntitle: Test\n---\nstatus: done\n");
    insta::assert_snapshot!(output.trim_end(), @r"
    ---
    title: Test
    ---
    status: `done`
    ");
}

#[test]
fn test_strikethrough_wraps_quoted_value() {
    let output = regenerate("old: ~~dead idea~~\n");
    insta::assert_snapshot!(output.trim_end(), @"old: ~~`dead idea`~~");
}
