//! Fieldmark core: parsing, generation and the snapshot boundary
//!
//!     The submodules follow the stages a document goes through. Text is split
//!     into frontmatter and field blocks ([splitting]), each block is shaped
//!     into an inline value or a nested list tree ([building]), every leaf is
//!     classified into a typed value ([inlines]), and the pieces are attached
//!     to a [Document](ast::Document) ([assembling]). Generation walks the
//!     same tree in inverse order ([generating]), with the quoting policy kept
//!     in one place ([formatting]).
//!
//!     Everything here is pure and synchronous: text in, owned tree out (or
//!     the reverse). Diagnostics are data on the tree, never errors — see the
//!     `parse_errors` fields on [Document](ast::Document), [Field](ast::Field)
//!     and [FieldValue](ast::FieldValue).

pub mod assembling;
pub mod ast;
pub mod building;
pub mod formatting;
pub mod generating;
pub mod importing;
pub mod inlines;
pub mod loading;
pub mod patterns;
pub mod splitting;

pub use ast::{Document, Field, FieldBlock, FieldValue, ValueKind};

/// Parse a fieldmark document from a string.
///
/// Never fails: malformed input degrades to best-effort values with
/// diagnostics recorded on the returned tree.
pub fn parse_document(content: &str) -> Document {
    assembling::parse_document(content)
}

/// Render a document back to canonical fieldmark markup.
pub fn generate_markup(doc: &Document) -> String {
    generating::generate_markup(doc)
}

/// Create a document from its JSON snapshot representation.
pub fn from_json(json: &str) -> Result<Document, importing::ImportError> {
    importing::from_json(json)
}

/// Create a document from its YAML snapshot representation.
pub fn from_yaml(yaml: &str) -> Result<Document, importing::ImportError> {
    importing::from_yaml(yaml)
}
