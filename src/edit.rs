//! Edit definitions
//!
//! Every change a driver can make to an [`EntryStore`](crate::store::EntryStore),
//! as a value. Indices refer to positions at the time the edit is applied.

use crate::document::Entry;

/// A single change to the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Append an entry
    Insert(Entry),

    /// Remove the entry at `index`
    Delete { index: usize },

    /// Exchange two entries
    Swap { a: usize, b: usize },

    /// Replace both fields of the entry at `index`
    Update {
        index: usize,
        url: String,
        label: String,
    },

    /// Move an entry one position towards the start
    MoveUp { index: usize },

    /// Move an entry one position towards the end
    MoveDown { index: usize },
}

impl Edit {
    /// Short name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Insert(_) => "insert",
            Edit::Delete { .. } => "delete",
            Edit::Swap { .. } => "swap",
            Edit::Update { .. } => "update",
            Edit::MoveUp { .. } => "move_up",
            Edit::MoveDown { .. } => "move_down",
        }
    }
}
