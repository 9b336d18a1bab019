//! Document assembly
//!
//!     The final parsing stage: frontmatter and field blocks are attached to
//!     a [Document], with every block parsed independently. A block that
//!     cannot produce a field records its diagnostics at document level,
//!     keyed by the field name, and assembly moves on - the principle is
//!     maximum structure recovery, never abort.

use super::ast::Document;
use super::building::parse_field_block;
use super::splitting::split_into_blocks;

/// Parse a complete fieldmark document. Total: always returns a Document,
/// with diagnostics on the tree instead of failures.
pub fn parse_document(content: &str) -> Document {
    let (blocks, frontmatter) = split_into_blocks(content);

    let mut doc = Document {
        frontmatter,
        raw_content: content.to_string(),
        ..Document::default()
    };

    for block in &blocks {
        let (field, orphan_errors) = parse_field_block(block);
        if let Some(field) = field {
            doc.insert_field(field);
        }
        for error in orphan_errors {
            doc.parse_errors
                .push(format!("Error parsing field '{}': {}", block.name, error));
        }
    }

    doc
}
