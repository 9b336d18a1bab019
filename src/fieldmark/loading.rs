//! Document loading utilities
//!
//!     `DocumentLoader` reads source text from a file or a string and hands
//!     it to the parser. This is the only place the crate touches the
//!     filesystem; the core stays text-in, tree-out.

use std::fs;
use std::path::Path;

use super::assembling::parse_document;
use super::ast::Document;

/// Error that can occur when loading documents.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// IO error when reading a file.
    Io(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

/// Loads fieldmark source text and parses it.
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load source text from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let source = fs::read_to_string(path)?;
        Ok(Self { source })
    }

    /// Use a string as source text.
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the loaded source. Never fails; diagnostics end up on the tree.
    pub fn parse(&self) -> Document {
        parse_document(&self.source)
    }
}
