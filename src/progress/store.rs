//! Load/save backends for [`Progress`].
//!
//! The scheduler never touches storage itself; callers load a snapshot,
//! run a session against it and save it back.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Progress;
use crate::error::Result;

pub trait ProgressStore {
    fn load(&self) -> Result<Progress>;
    fn save(&self, progress: &Progress) -> Result<()>;
}

/// In-process store, for tests and embedders with their own persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Progress>,
}

impl MemoryStore {
    pub fn new(progress: Progress) -> Self {
        Self {
            snapshot: RefCell::new(progress),
        }
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Progress> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, progress: &Progress) -> Result<()> {
        *self.snapshot.borrow_mut() = progress.clone();
        Ok(())
    }
}

/// Progress kept as a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    /// A missing file means a learner with no history yet.
    fn load(&self) -> Result<Progress> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "No progress file at {}, starting fresh",
                    self.path.display()
                );
                return Ok(Progress::new());
            }
            Err(e) => return Err(e.into()),
        };
        let progress: Progress = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Loaded {} review states from {}",
            progress.len(),
            self.path.display()
        );
        Ok(progress)
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write leaves the previous snapshot intact.
    fn save(&self, progress: &Progress) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(progress)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(
            "Saved {} review states to {}",
            progress.len(),
            self.path.display()
        );
        Ok(())
    }
}
