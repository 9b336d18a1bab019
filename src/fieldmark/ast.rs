//! Document tree definitions for the fieldmark format
//!
//!     A parsed document is a tree of owned nodes: the [Document] owns its
//!     [Field]s, each field owns its [FieldValue]s, and each value owns its
//!     nested sub-items. There are no back-references and no sharing, so a
//!     document can be moved freely across threads and parsing one document
//!     is independent of parsing any other.
//!
//! Value kinds
//!
//!     Every leaf value carries exactly one [ValueKind]. The kinds are
//!     mutually exclusive by construction (a tagged union, not flags), and
//!     everything else on a value — datetime suffix, details, strikethrough,
//!     extracted link — is metadata that can accompany any kind.
//!
//! Diagnostics
//!
//!     Parse diagnostics live on the node that failed: `parse_errors` on the
//!     document and on each field, `parse_error` on individual values. An
//!     error on one node never invalidates its siblings or ancestors.

pub mod elements;
pub mod snapshot;

pub use elements::{Document, Field, FieldBlock, FieldValue, ValueKind};
pub use snapshot::{DocumentSnapshot, FieldSnapshot, ValueSnapshot};
