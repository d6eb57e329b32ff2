//! Saved-coordinate slots.
//!
//! Exactly four slots exist. Slot 0 mirrors the coordinate last extracted
//! from the active tab and is overwritten on every inspection; slots 1-3 are
//! user-managed and carry label metadata. Once a user has named a slot
//! (`user_named`), background geocoding must not overwrite the label.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::format_cli;
use crate::coords::Coordinates;
use crate::error::CoreError;

/// Number of fixed slots, including the active-tab slot 0.
pub const SLOT_COUNT: usize = 4;

/// One stored coordinate plus its label metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub coords: Coordinates,
    /// User label or geocoded place name; empty when unset.
    #[serde(default)]
    pub name: String,
    /// Display color token for the label; empty when unset.
    #[serde(default)]
    pub label_color: String,
    /// True once a human has set or edited the name. Suppresses automatic
    /// name assignment from reverse geocoding.
    #[serde(default)]
    pub user_named: bool,
    pub saved_at: DateTime<Utc>,
}

impl Slot {
    #[must_use]
    pub fn new(coords: Coordinates) -> Self {
        Self {
            coords,
            name: String::new(),
            label_color: String::new(),
            user_named: false,
            saved_at: Utc::now(),
        }
    }

    /// Text shown for the slot: the label when one exists, otherwise the
    /// flag-string rendition of the coordinates.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.name.is_empty() {
            format_cli(&self.coords)
        } else {
            self.name.clone()
        }
    }
}

/// Validates a slot index.
///
/// # Errors
///
/// Returns [`CoreError::InvalidSlotIndex`] for indices outside `0..SLOT_COUNT`.
pub fn check_slot_index(index: usize) -> Result<(), CoreError> {
    if index < SLOT_COUNT {
        Ok(())
    } else {
        Err(CoreError::InvalidSlotIndex(index))
    }
}
