//! The flag-string codec for coordinates.
//!
//! Serializes a [`Coordinates`] to the compact form
//! `--lon <v> --lat <v> --zoom <v> [--bearing <v>] [--pitch <v>]` used for
//! clipboard copy/paste and slot display text, and parses it back. Bearing
//! and pitch are emitted only when present (hence non-zero), mirroring the
//! extractor's conditional-retention policy so that the string round-trips.

use crate::coords::{Coordinates, RawCoordinates};

/// Formats a coordinate as a flag string.
///
/// Flag order is fixed: lon, lat, zoom, then bearing/pitch when present.
#[must_use]
pub fn format_cli(coords: &Coordinates) -> String {
    let mut parts = vec![
        format!("--lon {}", coords.lon),
        format!("--lat {}", coords.lat),
        format!("--zoom {}", coords.zoom),
    ];
    if let Some(bearing) = coords.bearing {
        parts.push(format!("--bearing {bearing}"));
    }
    if let Some(pitch) = coords.pitch {
        parts.push(format!("--pitch {pitch}"));
    }
    parts.join(" ")
}

/// Parses a flag string back into a coordinate.
///
/// Tokenizes on whitespace and reads `--key value` pairs in any order;
/// unrecognized keys are skipped, as is any `--key` whose value is missing
/// or not a finite number. Returns `None` unless both `lon` and `lat` were
/// found with a non-zero value.
///
/// Treating an exact `0` for lon/lat as "missing" is a long-standing quirk
/// of this format: `--lon 0 --lat 0` is rejected even though 0,0 is a real
/// coordinate. Kept for compatibility with strings written by older
/// revisions.
#[must_use]
pub fn parse_cli(text: &str) -> Option<Coordinates> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let mut lat = None;
    let mut lon = None;
    let mut zoom = None;
    let mut bearing = None;
    let mut pitch = None;

    let mut i = 0;
    while i < tokens.len() {
        let Some(key) = tokens[i].strip_prefix("--") else {
            i += 1;
            continue;
        };
        let value = tokens
            .get(i + 1)
            .filter(|v| !v.starts_with("--"))
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite());
        if let Some(value) = value {
            match key {
                "lat" => lat = Some(value),
                "lon" => lon = Some(value),
                "zoom" => zoom = Some(value),
                "bearing" => bearing = Some(value),
                "pitch" => pitch = Some(value),
                _ => {}
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    let lat = lat.filter(|v| *v != 0.0)?;
    let lon = lon.filter(|v| *v != 0.0)?;

    RawCoordinates {
        lat,
        lon,
        zoom,
        bearing,
        pitch,
    }
    .normalize()
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
