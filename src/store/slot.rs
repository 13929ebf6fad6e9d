//! The snapshot slot — a single named persistence location.
//!
//! The store reads one serialized payload from the slot on open and
//! fully rewrites it after every mutation.  `FileSlot` is the
//! production implementation; `MemorySlot` backs the unit tests.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::errors::Result;

/// A single named key-value slot holding the serialized vault snapshot.
pub trait SnapshotSlot {
    /// Read the stored payload.  `None` means the slot has never been
    /// written (distinct from an unreadable payload, which is an error).
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot with a full payload.
    fn store(&self, payload: &str) -> Result<()>;

    /// Slot name for diagnostics (e.g. the file path).
    fn name(&self) -> String;
}

/// File-backed slot: one JSON file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSlot for FileSlot {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    /// Write the payload atomically: temp file in the same directory,
    /// then rename.  Readers never see a half-written snapshot.
    fn store(&self, payload: &str) -> Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory slot used by tests.  Clones share the same payload, so a
/// test can keep a handle to peek at what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `payload`, as if a previous session wrote it.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Rc::new(RefCell::new(Some(payload.to_string()))),
        }
    }

    /// The current stored payload, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl SnapshotSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn store(&self, payload: &str) -> Result<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn name(&self) -> String {
        "memory".to_string()
    }
}
