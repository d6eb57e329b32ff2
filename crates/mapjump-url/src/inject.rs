//! Coordinate substitution into an existing map-service URL.
//!
//! Each rule rewrites only the coordinate-bearing token of the URL and
//! preserves everything else (unrelated path segments, query parameters,
//! fragment suffixes). Rules run in priority order; a rule whose predicate
//! matches but whose transform cannot produce a URL falls through to the
//! next rule. No rule matching means the site's URL structure is not
//! supported and the caller must not guess.

use mapjump_core::Coordinates;
use url::Url;

use crate::extract::host_contains;
use crate::patterns::{
    CENTER_VALUE_RE, CONSOLE_MAP_VALUE_RE, MAP_VALUE_RE, POSITIONAL_HASH_RE, ROUTE_RE,
    ZOOM_SEGMENT_RE,
};

/// Rewrites `current_url` to point at `coords`, keeping the service-specific
/// URL shape. Returns `None` when no known rule family fits the URL.
#[must_use]
pub fn update_url(current_url: &str, coords: &Coordinates) -> Option<String> {
    let Ok(parsed) = Url::parse(current_url) else {
        tracing::debug!(url = current_url, "not an absolute URL, nothing to update");
        return None;
    };

    let rules: &[(&str, &dyn Fn() -> Option<String>)] = &[
        ("earth-at-path", &|| earth_at_path(current_url, &parsed, coords)),
        ("gmaps-at-path", &|| gmaps_at_path(current_url, &parsed, coords)),
        ("mapbox-hash", &|| mapbox_hash(current_url, &parsed, coords)),
        ("console-map", &|| console_map(current_url, &parsed, coords)),
        ("hash-map", &|| generic_map_value(current_url, &parsed, coords)),
        ("center-param", &|| generic_center_value(current_url, coords)),
        ("positional-hash", &|| {
            positional_hash(current_url, &parsed, coords)
        }),
        ("query-params", &|| query_params(&parsed, coords)),
    ];

    for (rule, apply) in rules {
        if let Some(updated) = apply() {
            tracing::trace!(url = current_url, rule, "url rewritten");
            return Some(updated);
        }
    }

    tracing::debug!(url = current_url, "no rewrite rule matched");
    None
}

/// Google Earth `/@lat,lon,zoom<unit>,...` comma-segment list. Only the
/// first three segments change; heading/tilt and any trailing path stay as
/// they are. The zoom keeps its original unit letter, defaulting to `a`.
fn earth_at_path(current_url: &str, parsed: &Url, coords: &Coordinates) -> Option<String> {
    if !host_contains(parsed, "earth.google.com") || !parsed.path().contains("/@") {
        return None;
    }
    let (head, tail) = current_url.split_once("/@")?;
    let mut segments: Vec<String> = tail.split(',').map(str::to_owned).collect();
    if segments.len() < 2 {
        return None;
    }
    segments[0] = coords.lat.to_string();
    segments[1] = coords.lon.to_string();
    if segments.len() >= 3 {
        let suffix = ZOOM_SEGMENT_RE
            .captures(&segments[2])
            .map(|cap| cap[2].to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "a".to_owned());
        segments[2] = format!("{}{suffix}", coords.zoom);
    }
    Some(format!("{head}/@{}", segments.join(",")))
}

/// Google Maps `/@lat,lon,zoomz` path chunk; the rest of the path (e.g. a
/// `/data=...` suffix) is preserved.
fn gmaps_at_path(current_url: &str, parsed: &Url, coords: &Coordinates) -> Option<String> {
    if !host_contains(parsed, "google.com") || !parsed.path().contains("/@") {
        return None;
    }
    let (head, tail) = current_url.split_once("/@")?;
    let rest: Vec<&str> = tail.split('/').skip(1).collect();
    let chunk = format!("{},{},{}z", coords.lat, coords.lon, coords.zoom);
    if rest.is_empty() {
        Some(format!("{head}/@{chunk}"))
    } else {
        Some(format!("{head}/@{chunk}/{}", rest.join("/")))
    }
}

/// Mapbox-hosted sites: any hash with at least three `/`-segments is
/// rebuilt as `#zoom/lat/lon` with conditional bearing/pitch.
fn mapbox_hash(current_url: &str, parsed: &Url, coords: &Coordinates) -> Option<String> {
    if !host_contains(parsed, "mapbox.com") {
        return None;
    }
    let fragment = parsed.fragment()?;
    let clean = fragment.strip_prefix('/').unwrap_or(fragment);
    rebuild_hash(current_url, clean.split('/').count(), coords)
}

/// Mapbox console directions debug: rewrite only the `map=lon,lat,zoomz`
/// token. `route=` is deliberately left alone — re-navigating must not
/// regenerate a route.
///
/// Gated on a Mapbox host or a `route=` sibling token: the comma `map=`
/// shape also appears on here.com with lat first, and those URLs must fall
/// through to "unsupported" rather than be rewritten transposed.
fn console_map(current_url: &str, parsed: &Url, coords: &Coordinates) -> Option<String> {
    if !host_contains(parsed, "mapbox.com") && !ROUTE_RE.is_match(current_url) {
        return None;
    }
    if !CONSOLE_MAP_VALUE_RE.is_match(current_url) {
        return None;
    }
    let replacement = format!("${{1}}{},{},{}z", coords.lon, coords.lat, coords.zoom);
    Some(
        CONSOLE_MAP_VALUE_RE
            .replace(current_url, replacement.as_str())
            .into_owned(),
    )
}

/// Generic hash `map=` value, rewritten to the OSM `zoom/lat/lon` order.
fn generic_map_value(current_url: &str, parsed: &Url, coords: &Coordinates) -> Option<String> {
    if !parsed.fragment().is_some_and(|f| f.contains("map=")) {
        return None;
    }
    let replacement = format!("${{1}}{}/{}/{}", coords.zoom, coords.lat, coords.lon);
    Some(
        MAP_VALUE_RE
            .replace(current_url, replacement.as_str())
            .into_owned(),
    )
}

/// Generic `center=` value, rewritten to the Mapbox `lon/lat/zoom` order.
fn generic_center_value(current_url: &str, coords: &Coordinates) -> Option<String> {
    if !current_url.contains("center=") {
        return None;
    }
    let replacement = format!("${{1}}{}/{}/{}", coords.lon, coords.lat, coords.zoom);
    Some(
        CENTER_VALUE_RE
            .replace(current_url, replacement.as_str())
            .into_owned(),
    )
}

/// Hostname-agnostic positional numeric hash `#zoom/lat/lon[...]`.
fn positional_hash(current_url: &str, parsed: &Url, coords: &Coordinates) -> Option<String> {
    let fragment = parsed.fragment()?;
    if !POSITIONAL_HASH_RE.is_match(fragment) {
        return None;
    }
    let clean = fragment.strip_prefix('/').unwrap_or(fragment);
    rebuild_hash(current_url, clean.split('/').count(), coords)
}

/// Builds `#zoom/lat/lon` with bearing appended only when the original hash
/// already carried a 4th segment or the coordinate has a non-zero bearing,
/// and pitch likewise for the 5th segment. This keeps zero bearing/pitch
/// out of URLs that never had them while still updating those that did.
fn rebuild_hash(current_url: &str, segment_count: usize, coords: &Coordinates) -> Option<String> {
    if segment_count < 3 {
        return None;
    }
    let main = current_url.split_once('#').map_or(current_url, |(m, _)| m);

    let mut append_bearing = segment_count >= 4 || coords.bearing.is_some();
    let append_pitch = segment_count >= 5 || coords.pitch.is_some();
    if append_pitch {
        // A pitch segment is positional; it needs the bearing slot filled.
        append_bearing = true;
    }

    let mut hash = format!("#{}/{}/{}", coords.zoom, coords.lat, coords.lon);
    if append_bearing {
        hash.push_str(&format!("/{}", coords.bearing.unwrap_or(0.0)));
    }
    if append_pitch {
        hash.push_str(&format!("/{}", coords.pitch.unwrap_or(0.0)));
    }
    Some(format!("{main}{hash}"))
}

/// Plain `lat`/`lon` query parameters. Stale coordinate-bearing keys
/// (including `lng`, `z`, `lvl` variants) are dropped so the rewritten URL
/// re-extracts to exactly the injected coordinate; every other parameter
/// keeps its position.
fn query_params(parsed: &Url, coords: &Coordinates) -> Option<String> {
    const COORD_KEYS: [&str; 12] = [
        "lat",
        "lon",
        "lng",
        "latitude",
        "longitude",
        "mlat",
        "mlon",
        "zoom",
        "z",
        "lvl",
        "bearing",
        "pitch",
    ];

    let has_target = parsed
        .query_pairs()
        .any(|(k, _)| matches!(k.as_ref(), "lat" | "lon" | "lng"));
    if !has_target {
        return None;
    }

    let retained: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| !COORD_KEYS.contains(&k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut updated = parsed.clone();
    {
        let mut query = updated.query_pairs_mut();
        query.clear();
        query.extend_pairs(retained);
        query.append_pair("lat", &coords.lat.to_string());
        query.append_pair("lon", &coords.lon.to_string());
        query.append_pair("zoom", &coords.zoom.to_string());
        if let Some(bearing) = coords.bearing {
            query.append_pair("bearing", &bearing.to_string());
        }
        if let Some(pitch) = coords.pitch {
            query.append_pair("pitch", &pitch.to_string());
        }
    }
    Some(updated.to_string())
}

#[cfg(test)]
#[path = "inject_test.rs"]
mod tests;
