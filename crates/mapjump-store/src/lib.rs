//! Persistence for the four coordinate slots.
//!
//! The slot array always has exactly [`mapjump_core::SLOT_COUNT`] entries;
//! empty positions are `None`. [`SlotStorage`] abstracts the backing medium
//! so [`SlotStore`] can run against the JSON file in production and an
//! in-memory vector in tests.

pub mod error;
pub mod storage;
mod store;

pub use error::StoreError;
pub use storage::{JsonFileStorage, MemoryStorage, SlotStorage};
pub use store::SlotStore;
