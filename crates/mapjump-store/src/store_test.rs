use mapjump_core::{Coordinates, CoreError, SLOT_COUNT};

use crate::error::StoreError;
use crate::storage::MemoryStorage;

use super::SlotStore;

fn coords(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).unwrap().with_zoom(13.0)
}

fn store() -> SlotStore<MemoryStorage> {
    SlotStore::new(MemoryStorage::new())
}

// ---------------------------------------------------------------------------
// Basic slot operations
// ---------------------------------------------------------------------------

#[test]
fn fresh_store_lists_four_empty_slots() {
    let slots = store().list().unwrap();
    assert_eq!(slots.len(), SLOT_COUNT);
    assert!(slots.iter().all(Option::is_none));
}

#[test]
fn save_and_get_round_trip() {
    let mut store = store();
    let saved = store.save_to_slot(2, coords(48.85, 2.29)).unwrap();
    let loaded = store.get(2).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert!(store.get(1).unwrap().is_none());
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut store = store();
    let err = store.save_to_slot(4, coords(1.0, 2.0)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InvalidSlotIndex(4))
    ));
    assert!(store.get(9).is_err());
    assert!(store.clear(4).is_err());
}

#[test]
fn clear_empties_a_slot() {
    let mut store = store();
    store.save_to_slot(1, coords(10.0, 20.0)).unwrap();
    store.clear(1).unwrap();
    assert!(store.get(1).unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Active-tab slot
// ---------------------------------------------------------------------------

#[test]
fn record_active_overwrites_slot_zero() {
    let mut store = store();
    store.record_active(coords(10.0, 20.0)).unwrap();
    store.record_active(coords(30.0, 40.0)).unwrap();
    let slot = store.get(0).unwrap().unwrap();
    assert!((slot.coords.lat - 30.0).abs() < f64::EPSILON);
}

#[test]
fn record_active_discards_previous_label() {
    let mut store = store();
    store.save_to_slot(0, coords(10.0, 20.0)).unwrap();
    store.rename(0, "Old place").unwrap();
    store.record_active(coords(30.0, 40.0)).unwrap();
    let slot = store.get(0).unwrap().unwrap();
    assert!(slot.name.is_empty());
    assert!(!slot.user_named);
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[test]
fn rename_sets_user_named() {
    let mut store = store();
    store.save_to_slot(1, coords(48.85, 2.29)).unwrap();
    let slot = store.rename(1, "Paris").unwrap().unwrap();
    assert_eq!(slot.name, "Paris");
    assert!(slot.user_named);
}

#[test]
fn rename_empty_slot_is_a_no_op() {
    let mut store = store();
    assert!(store.rename(3, "Nowhere").unwrap().is_none());
}

#[test]
fn saving_over_named_slot_keeps_its_label() {
    let mut store = store();
    store.save_to_slot(2, coords(48.85, 2.29)).unwrap();
    store.rename(2, "Paris").unwrap();
    let slot = store.save_to_slot(2, coords(48.86, 2.35)).unwrap();
    assert_eq!(slot.name, "Paris");
    assert!(slot.user_named);
    assert!((slot.coords.lon - 2.35).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Geocoded name staleness
// ---------------------------------------------------------------------------

#[test]
fn geocoded_name_applies_to_unchanged_slot() {
    let mut store = store();
    let at_request = coords(48.85, 2.29);
    store.save_to_slot(1, at_request).unwrap();
    assert!(store.apply_geocoded_name(1, &at_request, "Paris").unwrap());
    assert_eq!(store.get(1).unwrap().unwrap().name, "Paris");
}

#[test]
fn geocoded_name_dropped_when_slot_cleared() {
    let mut store = store();
    let at_request = coords(48.85, 2.29);
    store.save_to_slot(1, at_request).unwrap();
    store.clear(1).unwrap();
    assert!(!store.apply_geocoded_name(1, &at_request, "Paris").unwrap());
}

#[test]
fn geocoded_name_dropped_when_user_named_meanwhile() {
    let mut store = store();
    let at_request = coords(48.85, 2.29);
    store.save_to_slot(1, at_request).unwrap();
    store.rename(1, "My spot").unwrap();
    assert!(!store.apply_geocoded_name(1, &at_request, "Paris").unwrap());
    assert_eq!(store.get(1).unwrap().unwrap().name, "My spot");
}

#[test]
fn geocoded_name_dropped_when_coordinates_moved() {
    let mut store = store();
    let at_request = coords(48.85, 2.29);
    store.save_to_slot(1, at_request).unwrap();
    store.save_to_slot(1, coords(51.5, -0.12)).unwrap();
    assert!(!store.apply_geocoded_name(1, &at_request, "Paris").unwrap());
    assert!(store.get(1).unwrap().unwrap().name.is_empty());
}

#[test]
fn geocoded_name_does_not_set_user_named() {
    let mut store = store();
    let at_request = coords(48.85, 2.29);
    store.save_to_slot(1, at_request).unwrap();
    store.apply_geocoded_name(1, &at_request, "Paris").unwrap();
    let slot = store.get(1).unwrap().unwrap();
    assert!(!slot.user_named);
    // A second lookup for the same position may still refresh the label.
    assert!(store.apply_geocoded_name(1, &at_request, "Paris, France").unwrap());
}
