//! Entry Store
//!
//! Holds the loaded document and every edit made to it.
//!
//! ## Responsibilities
//! - Load a container through the codec, replacing the current document
//! - Index-based insert/delete/swap/update on the entry list
//! - Track unsaved changes with a dirty flag
//! - Save back to the original file or to a new one

use std::path::Path;

use tracing::debug;

use crate::codec;
use crate::config::Config;
use crate::document::{ContainerDocument, Entry};
use crate::edit::Edit;
use crate::error::{Result, SiiError};

/// An ordered, position-addressed list of entries plus a dirty flag
///
/// ## Index Model
///
/// Entries are addressed purely by position `0..len`. There are no stable
/// handles: after an insert or delete, callers must look positions up
/// again rather than keep old ones.
///
/// ## Dirty Flag
///
/// - Set by every successful edit
/// - Cleared by a successful `load`, `save` or `save_as`
/// - Left alone when any of those fail
pub struct EntryStore {
    /// Codec configuration
    config: Config,

    /// Current document (definition line, entries, origin path)
    document: ContainerDocument,

    /// Unsaved changes since the last load or save
    dirty: bool,
}

impl EntryStore {
    /// Create an empty store with no file attached
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            document: ContainerDocument::default(),
            dirty: false,
        })
    }

    /// Create a store and load `path` into it
    pub fn open(path: &Path, config: Config) -> Result<Self> {
        let mut store = Self::new(config)?;
        store.load(path)?;
        Ok(store)
    }

    /// Wrap a document that was built or parsed elsewhere
    pub fn from_document(document: ContainerDocument, config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            document,
            dirty: false,
        })
    }

    // =========================================================================
    // Load / Save
    // =========================================================================

    /// Replace the current document with the contents of `path`
    ///
    /// On failure the current document and dirty flag are kept.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let document = codec::read_document(path, &self.config)?;

        self.document = document;
        self.dirty = false;
        Ok(())
    }

    /// Write the document back to the file it came from
    pub fn save(&mut self) -> Result<()> {
        let path = self.document.path.clone().ok_or(SiiError::MissingPath)?;
        self.write_to(&path)
    }

    /// Write the document to `path`, which becomes its new origin
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.document.path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        codec::write_document(&self.document, path, &self.config)?;
        self.dirty = false;
        Ok(())
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Append an entry, returning its index
    pub fn insert(&mut self, entry: Entry) -> usize {
        self.document.entries.push(entry);
        self.dirty = true;

        let index = self.document.entries.len() - 1;
        debug!(index, "Inserted entry");
        index
    }

    /// Remove and return the entry at `index`; later entries shift down
    pub fn delete_at(&mut self, index: usize) -> Result<Entry> {
        self.check_index(index)?;

        let removed = self.document.entries.remove(index);
        self.dirty = true;

        debug!(index, remaining = self.document.entries.len(), "Deleted entry");
        Ok(removed)
    }

    /// Exchange the entries at `a` and `b`
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;

        self.document.entries.swap(a, b);
        self.dirty = true;

        debug!(a, b, "Swapped entries");
        Ok(())
    }

    /// Replace the url and label of the entry at `index`
    pub fn update_at(
        &mut self,
        index: usize,
        url: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<()> {
        self.check_index(index)?;

        let entry = &mut self.document.entries[index];
        entry.url = url.into();
        entry.label = label.into();
        self.dirty = true;

        debug!(index, "Updated entry");
        Ok(())
    }

    /// Move the entry at `index` one place up, returning where it ended up
    ///
    /// The first entry stays put and nothing is marked dirty.
    pub fn move_up(&mut self, index: usize) -> Result<usize> {
        self.check_index(index)?;

        if index == 0 {
            return Ok(index);
        }
        self.swap(index - 1, index)?;
        Ok(index - 1)
    }

    /// Move the entry at `index` one place down, returning where it ended up
    ///
    /// The last entry stays put and nothing is marked dirty.
    pub fn move_down(&mut self, index: usize) -> Result<usize> {
        self.check_index(index)?;

        if index + 1 == self.len() {
            return Ok(index);
        }
        self.swap(index, index + 1)?;
        Ok(index + 1)
    }

    /// Apply an edit
    ///
    /// Returns the position the edited entry now occupies, when the edit
    /// leaves a single entry of interest behind.
    pub fn apply(&mut self, edit: Edit) -> Result<Option<usize>> {
        debug!(edit = edit.name(), "Applying edit");

        match edit {
            Edit::Insert(entry) => Ok(Some(self.insert(entry))),
            Edit::Delete { index } => {
                self.delete_at(index)?;
                Ok(None)
            }
            Edit::Swap { a, b } => {
                self.swap(a, b)?;
                Ok(None)
            }
            Edit::Update { index, url, label } => {
                self.update_at(index, url, label)?;
                Ok(Some(index))
            }
            Edit::MoveUp { index } => self.move_up(index).map(Some),
            Edit::MoveDown { index } => self.move_down(index).map(Some),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.document.entries.len();
        if index >= len {
            return Err(SiiError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.document.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.document.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.document.entries
    }

    /// The verbatim definition line, if the file had one
    pub fn definition(&self) -> Option<&str> {
        self.document.definition.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.document.path()
    }

    /// Whether there are edits not yet written to disk
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Serialize the current document without touching the disk
    pub fn to_text(&self) -> String {
        codec::serialize(&self.document, &self.config)
    }
}
