//! Document model
//!
//! The in-memory form of one loaded container.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One radio stream: where to play from and what to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub url: String,
    pub label: String,
}

impl Entry {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// A loaded container: definition line, ordered entries, and origin
///
/// Entries have no identity beyond their position. Removing index `i`
/// shifts everything after it down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerDocument {
    /// Definition line, carried through verbatim and never interpreted
    pub definition: Option<String>,

    /// Entries in file order
    pub entries: Vec<Entry>,

    /// File the document was read from or last saved to
    pub path: Option<PathBuf>,
}

impl ContainerDocument {
    pub fn new(definition: Option<String>, entries: Vec<Entry>) -> Self {
        Self {
            definition,
            entries,
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
