//! Slot operations layered over a [`SlotStorage`] backend.

use mapjump_core::{check_slot_index, Coordinates, Slot};

use crate::error::StoreError;
use crate::storage::SlotStorage;

/// Tolerance for deciding whether a geocoded name still belongs to the
/// coordinates currently in the slot.
const GEOCODE_STALENESS_EPS: f64 = 1e-6;

/// The four coordinate slots with their persistence rules.
///
/// Slot 0 tracks the active tab and is rewritten wholesale by
/// [`SlotStore::record_active`]. Slots are otherwise user-managed: saving
/// new coordinates into an occupied slot keeps its label so a named place
/// survives a position tweak, and [`SlotStore::apply_geocoded_name`] refuses
/// to label a slot whose coordinates changed while the lookup was in flight.
pub struct SlotStore<S: SlotStorage> {
    storage: S,
}

impl<S: SlotStorage> SlotStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns all four slots.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    pub fn list(&self) -> Result<Vec<Option<Slot>>, StoreError> {
        self.storage.load()
    }

    /// Returns one slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for an out-of-range index, or a backend
    /// error.
    pub fn get(&self, index: usize) -> Result<Option<Slot>, StoreError> {
        check_slot_index(index)?;
        Ok(self.storage.load()?.swap_remove(index))
    }

    /// Overwrites slot 0 with the coordinates of the active tab.
    ///
    /// Any previous label on slot 0 is discarded; the active slot is a
    /// mirror, not a saved place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read or written.
    pub fn record_active(&mut self, coords: Coordinates) -> Result<Slot, StoreError> {
        let mut slots = self.storage.load()?;
        let slot = Slot::new(coords);
        slots[0] = Some(slot.clone());
        self.storage.save(&slots)?;
        Ok(slot)
    }

    /// Saves coordinates into a slot.
    ///
    /// When the slot is occupied its name, label color, and `user_named`
    /// flag carry over to the new coordinates; only the position and
    /// timestamp change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for an out-of-range index, or a backend
    /// error.
    pub fn save_to_slot(&mut self, index: usize, coords: Coordinates) -> Result<Slot, StoreError> {
        check_slot_index(index)?;
        let mut slots = self.storage.load()?;
        let mut slot = Slot::new(coords);
        if let Some(previous) = slots[index].take() {
            slot.name = previous.name;
            slot.label_color = previous.label_color;
            slot.user_named = previous.user_named;
        }
        slots[index] = Some(slot.clone());
        self.storage.save(&slots)?;
        tracing::debug!(index, "slot saved");
        Ok(slot)
    }

    /// Sets a user-chosen name on an occupied slot and marks it
    /// `user_named`, which blocks later geocoded overwrites.
    ///
    /// Returns the updated slot, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for an out-of-range index, or a backend
    /// error.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<Option<Slot>, StoreError> {
        check_slot_index(index)?;
        let mut slots = self.storage.load()?;
        let Some(slot) = slots[index].as_mut() else {
            return Ok(None);
        };
        slot.name = name.to_owned();
        slot.user_named = true;
        let updated = slot.clone();
        self.storage.save(&slots)?;
        Ok(Some(updated))
    }

    /// Clears a slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for an out-of-range index, or a backend
    /// error.
    pub fn clear(&mut self, index: usize) -> Result<(), StoreError> {
        check_slot_index(index)?;
        let mut slots = self.storage.load()?;
        slots[index] = None;
        self.storage.save(&slots)?;
        Ok(())
    }

    /// Applies a reverse-geocoded name to a slot, unless it is stale.
    ///
    /// The name is dropped (returns `false`) when the slot was cleared, the
    /// user named it in the meantime, or its coordinates no longer match the
    /// ones the lookup was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for an out-of-range index, or a backend
    /// error.
    pub fn apply_geocoded_name(
        &mut self,
        index: usize,
        coords_at_request: &Coordinates,
        name: &str,
    ) -> Result<bool, StoreError> {
        check_slot_index(index)?;
        let mut slots = self.storage.load()?;
        let Some(slot) = slots[index].as_mut() else {
            tracing::debug!(index, "geocoded name dropped, slot cleared");
            return Ok(false);
        };
        if slot.user_named {
            tracing::debug!(index, "geocoded name dropped, slot user-named");
            return Ok(false);
        }
        if !slot.coords.approx_eq(coords_at_request, GEOCODE_STALENESS_EPS) {
            tracing::debug!(index, "geocoded name dropped, coordinates moved");
            return Ok(false);
        }
        slot.name = name.to_owned();
        self.storage.save(&slots)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
