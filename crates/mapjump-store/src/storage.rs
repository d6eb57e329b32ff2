//! Storage backends for the slot array.

use std::fs;
use std::path::PathBuf;

use mapjump_core::{Slot, SLOT_COUNT};

use crate::error::StoreError;

/// Loads and saves the fixed-size slot array.
///
/// Implementations must return exactly [`SLOT_COUNT`] entries from `load`,
/// padding with `None` when the underlying data is shorter.
pub trait SlotStorage {
    /// Reads all slots. A missing backing store is an empty slot array, not
    /// an error.
    fn load(&self) -> Result<Vec<Option<Slot>>, StoreError>;

    /// Writes all slots, replacing previous contents.
    fn save(&mut self, slots: &[Option<Slot>]) -> Result<(), StoreError>;
}

/// Pads or truncates a loaded vector to exactly [`SLOT_COUNT`] entries.
fn fit_to_slot_count(mut slots: Vec<Option<Slot>>) -> Vec<Option<Slot>> {
    slots.truncate(SLOT_COUNT);
    slots.resize_with(SLOT_COUNT, || None);
    slots
}

/// Slot persistence in a single JSON file.
///
/// The file holds a JSON array of four nullable slot objects. Saves write
/// the whole array; there is no partial update.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl SlotStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Option<Slot>>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "slot file absent, starting empty");
            return Ok(fit_to_slot_count(Vec::new()));
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path_str(),
            source: e,
        })?;
        let slots: Vec<Option<Slot>> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Serde {
                path: self.path_str(),
                source: e,
            })?;
        Ok(fit_to_slot_count(slots))
    }

    fn save(&mut self, slots: &[Option<Slot>]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: self.path_str(),
                    source: e,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(slots).map_err(|e| StoreError::Serde {
            path: self.path_str(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io {
            path: self.path_str(),
            source: e,
        })?;
        tracing::trace!(path = %self.path.display(), "slot file saved");
        Ok(())
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Vec<Option<Slot>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Option<Slot>>, StoreError> {
        Ok(fit_to_slot_count(self.slots.clone()))
    }

    fn save(&mut self, slots: &[Option<Slot>]) -> Result<(), StoreError> {
        self.slots = slots.to_vec();
        Ok(())
    }
}
