//! Reverse geocoding for saved coordinate slots.
//!
//! Looks up a human-readable place name for a lat/lon pair, trying the free
//! Nominatim service first and falling back to the Mapbox geocoding API when
//! an access token is configured. Lookups are best-effort: a slot simply
//! keeps its coordinate text when no name can be found.

pub mod client;
pub mod error;
mod retry;
pub mod short_name;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use short_name::short_name;
