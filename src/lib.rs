//! # fieldmark
//!
//! A parser and generator for the fieldmark format.
//!
//! Fieldmark documents are plain text, utf-8 encoded files: an optional
//! `---`-delimited frontmatter block of flat `key: value` lines, followed by
//! named field blocks. A field is either a single inline value or a dash-list
//! of values, and list items nest to arbitrary depth through tab indentation.
//! Each leaf value is classified into one of a small set of kinds (plain text,
//! raw block, bare URL, array, wiki link) plus orthogonal metadata (datetime
//! suffix, parenthesized details, strikethrough, markdown link).
//!
//! Parsing is resilient by design: malformed input degrades to raw or plain
//! values with diagnostics attached to the nearest node, and no failure at any
//! level aborts the overall parse. The generator is the exact inverse of the
//! parser, with quoting rules chosen so that a generated document re-parses to
//! the same tree.
//!
//! The pipeline is staged the same way the source text is shaped:
//!
//! src/fieldmark
//!   ├── splitting     frontmatter split + single-pass field block split
//!   ├── building      inline/list decision + indentation-driven sub-item trees
//!   ├── inlines       leaf value classification and metadata extraction
//!   ├── assembling    blocks + frontmatter → Document, collecting diagnostics
//!   ├── formatting    quoting rules shared by the generator
//!   ├── generating    Document → canonical markup
//!   └── importing     snapshot/JSON/YAML → Document

pub mod fieldmark;
