//! Bidirectional translation between map-service URLs and normalized
//! coordinates.
//!
//! [`extract_from_url`] recognizes more than a dozen service-specific URL
//! encodings of a map viewport (path segments, hash fragments, query
//! parameters) and returns a normalized [`mapjump_core::Coordinates`].
//! [`update_url`] is the inverse: given a URL and a coordinate, it rewrites
//! only the coordinate-bearing part of the URL in the same service-specific
//! shape, leaving everything else untouched.
//!
//! Both sides evaluate an ordered rule catalog; hostname-specific rules come
//! before hostname-agnostic look-alikes because several services share
//! structurally ambiguous hash shapes. The first rule that matches and
//! produces a structurally and numerically valid result wins; a rule whose
//! candidate fails validation is treated as a non-match and evaluation
//! continues. Neither side ever errors — "no rule matched" is `None`.

pub mod extract;
pub mod inject;
mod params;
mod patterns;

pub use extract::extract_from_url;
pub use inject::update_url;
