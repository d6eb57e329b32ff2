//! The normalized map-view coordinate value type.
//!
//! A [`Coordinates`] always carries a zoom (zero when the source URL never
//! provided one), while bearing and pitch are kept only when the source
//! carried a non-zero value. Slot display and the CLI codec depend on that
//! asymmetry to avoid printing spurious `--bearing 0 --pitch 0` for services
//! that do not support those axes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A validated, normalized map viewport position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, within [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, within [-180, 180].
    pub lon: f64,
    /// Zoom level on the source service's scale; `0.0` when unknown.
    #[serde(default)]
    pub zoom: f64,
    /// Camera rotation in degrees. `Some` only when non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
    /// Camera tilt in degrees. `Some` only when non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

impl Coordinates {
    /// Creates a coordinate with the given lat/lon and zoom 0.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] when either value is
    /// non-finite or out of its domain range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        if !is_valid_lat_lon(lat, lon) {
            return Err(CoreError::InvalidCoordinates { lat, lon });
        }
        Ok(Self {
            lat,
            lon,
            zoom: 0.0,
            bearing: None,
            pitch: None,
        })
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the bearing; a zero or non-finite value is dropped to absent.
    #[must_use]
    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = non_zero(Some(bearing));
        self
    }

    /// Sets the pitch; a zero or non-finite value is dropped to absent.
    #[must_use]
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = non_zero(Some(pitch));
        self
    }

    /// Float-tolerant equality over every axis.
    ///
    /// Absent bearing/pitch compares equal to absent, never to a present
    /// value, regardless of `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        let opt_eq = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => (x - y).abs() <= eps,
            _ => false,
        };
        (self.lat - other.lat).abs() <= eps
            && (self.lon - other.lon).abs() <= eps
            && (self.zoom - other.zoom).abs() <= eps
            && opt_eq(self.bearing, other.bearing)
            && opt_eq(self.pitch, other.pitch)
    }
}

/// Returns `true` when both values are finite and within their domains.
#[must_use]
pub fn is_valid_lat_lon(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// An extraction candidate before validation and normalization.
///
/// Recognizers produce these with whatever axes the source format carried;
/// [`RawCoordinates::normalize`] applies the validation boundary and the
/// keep-zoom / drop-zero-bearing-pitch policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCoordinates {
    pub lat: f64,
    pub lon: f64,
    pub zoom: Option<f64>,
    pub bearing: Option<f64>,
    pub pitch: Option<f64>,
}

impl RawCoordinates {
    /// Validates and normalizes the candidate.
    ///
    /// Returns `None` when lat/lon are non-finite or out of range, so the
    /// caller can treat a spurious pattern match as a non-match and keep
    /// trying later rules. Missing zoom becomes `0.0`; zero bearing/pitch
    /// become absent.
    #[must_use]
    pub fn normalize(self) -> Option<Coordinates> {
        if !is_valid_lat_lon(self.lat, self.lon) {
            return None;
        }
        Some(Coordinates {
            lat: self.lat,
            lon: self.lon,
            zoom: self.zoom.filter(|z| z.is_finite()).unwrap_or(0.0),
            bearing: non_zero(self.bearing),
            pitch: non_zero(self.pitch),
        })
    }
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}
