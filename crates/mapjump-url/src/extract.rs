//! Coordinate extraction from map-service URLs.
//!
//! Recognizers run in a fixed priority order; the first one that yields a
//! candidate surviving range validation wins. Hostname-specific recognizers
//! (Here, Apple) run before the hostname-agnostic look-alikes they overlap
//! with, since e.g. `map=48.8,2.2,13` means lat-first on here.com but
//! lon-first on the Mapbox console.

use mapjump_core::{Coordinates, RawCoordinates};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::params::{param, param_any, query_and_hash_pairs, zoom_param};
use crate::patterns::{
    CONSOLE_MAP_RE, HASH_MAP_RE, MOSAIC_PATH_RE, POSITIONAL_HASH_RE, ROUTE_RE, SAT_HASH_RE,
    ZOOM_SEGMENT_RE,
};

/// Default zoom when a format carries a position but no zoom of its own.
const DEFAULT_ZOOM: f64 = 15.0;

/// Extracts a normalized coordinate from an arbitrary URL.
///
/// Returns `None` for unparsable URLs and URLs matching no known format;
/// never panics. Out-of-range or non-finite candidates are treated as
/// non-matches and evaluation falls through to later recognizers, which
/// recovers from generic patterns spuriously matching non-coordinate
/// numbers.
#[must_use]
pub fn extract_from_url(url: &str) -> Option<Coordinates> {
    let Ok(parsed) = Url::parse(url) else {
        tracing::debug!(url, "not an absolute URL, nothing to extract");
        return None;
    };

    let pairs = query_and_hash_pairs(&parsed);

    let recognizers: &[(&str, &dyn Fn() -> Option<RawCoordinates>)] = &[
        ("at-path", &|| from_at_path(&parsed)),
        ("mosaic-path", &|| from_mosaic_path(&parsed)),
        ("hash-map", &|| from_hash_map(&parsed)),
        ("positional-hash", &|| from_positional_hash(&parsed)),
        ("center-param", &|| from_center_param(&pairs)),
        ("query-params", &|| from_query_params(&pairs)),
        ("here-map", &|| from_here_map(&parsed, &pairs)),
        ("route-centroid", &|| from_route_centroid(url)),
        ("console-map", &|| from_console_map(url)),
        ("apple-ll", &|| from_apple_ll(&parsed, &pairs)),
        ("ll-param", &|| from_ll_param(&pairs)),
        ("cp-param", &|| from_cp_param(&pairs)),
        ("satellites-hash", &|| from_satellites_hash(&parsed)),
    ];

    for (rule, recognize) in recognizers {
        if let Some(coords) = recognize().and_then(RawCoordinates::normalize) {
            tracing::trace!(url, rule, "coordinates extracted");
            return Some(coords);
        }
    }

    tracing::debug!(url, "no recognizer matched");
    None
}

/// `/@<lat>,<lon>,<zoom>[suffix]` path chunk (Google Maps / Google Earth).
///
/// A unit letter after the zoom (`17z`, `500a`) is stripped. Earth URLs may
/// carry further comma segments; those ending in `h` are the heading
/// (bearing) and those ending in `t` the tilt (pitch).
fn from_at_path(url: &Url) -> Option<RawCoordinates> {
    let (_, after) = url.path().split_once("/@")?;
    let chunk = after.split('/').next()?;
    let segments: Vec<&str> = chunk.split(',').collect();
    if segments.len() < 3 {
        return None;
    }

    let lat = segments[0].parse::<f64>().ok()?;
    let lon = segments[1].parse::<f64>().ok()?;
    let zoom = ZOOM_SEGMENT_RE
        .captures(segments[2])
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    let mut bearing = None;
    let mut pitch = None;
    for segment in &segments[3..] {
        if let Some(value) = segment.strip_suffix('h') {
            bearing = value.parse::<f64>().ok();
        } else if let Some(value) = segment.strip_suffix('t') {
            pitch = value.parse::<f64>().ok();
        }
    }

    Some(RawCoordinates {
        lat,
        lon,
        zoom,
        bearing,
        pitch,
    })
}

/// Planet mosaic path: `/mosaic/<name>/center/<lon>/<lat>/<zoom>`.
fn from_mosaic_path(url: &Url) -> Option<RawCoordinates> {
    let cap = MOSAIC_PATH_RE.captures(url.path())?;
    Some(RawCoordinates {
        lon: cap[1].parse().ok()?,
        lat: cap[2].parse().ok()?,
        zoom: cap[3].parse().ok(),
        ..RawCoordinates::default()
    })
}

/// `#map=<zoom>/<lat>/<lon>` (OpenStreetMap convention), bare or nested in
/// a hash-embedded query string.
fn from_hash_map(url: &Url) -> Option<RawCoordinates> {
    let cap = HASH_MAP_RE.captures(url.fragment()?)?;
    Some(RawCoordinates {
        zoom: cap[1].parse().ok(),
        lat: cap[2].parse().ok()?,
        lon: cap[3].parse().ok()?,
        ..RawCoordinates::default()
    })
}

/// `#<zoom>/<lat>/<lon>[/<bearing>[/<pitch>]]` (Mapbox and friends).
fn from_positional_hash(url: &Url) -> Option<RawCoordinates> {
    let cap = POSITIONAL_HASH_RE.captures(url.fragment()?)?;
    Some(RawCoordinates {
        zoom: cap[1].parse().ok(),
        lat: cap[2].parse().ok()?,
        lon: cap[3].parse().ok()?,
        bearing: cap.get(4).and_then(|m| m.as_str().parse().ok()),
        pitch: cap.get(5).and_then(|m| m.as_str().parse().ok()),
    })
}

/// `center=<lon>/<lat>/<zoom>[/<bearing>[/<pitch>]]` in hash or query, with
/// `/`, `,`, or `%2F`-encoded separators. A bare two-part `lon/lat` center
/// gets the default zoom.
fn from_center_param(pairs: &[(String, String)]) -> Option<RawCoordinates> {
    let value = param(pairs, "center")?;
    let decoded = percent_decode_str(value).decode_utf8().ok()?;
    let parts: Vec<f64> = decoded
        .split(['/', ','])
        .filter_map(|p| p.trim().parse::<f64>().ok())
        .collect();

    match parts.len() {
        2 => Some(RawCoordinates {
            lon: parts[0],
            lat: parts[1],
            zoom: Some(DEFAULT_ZOOM),
            ..RawCoordinates::default()
        }),
        3.. => Some(RawCoordinates {
            lon: parts[0],
            lat: parts[1],
            zoom: Some(parts[2]),
            bearing: parts.get(3).copied(),
            pitch: parts.get(4).copied(),
        }),
        _ => None,
    }
}

/// Plain `lat`/`lon` (or `lng`, or OSM's `mlat`/`mlon` marker params), with
/// zoom from `z`/`zoom`/`lvl` defaulting to 15.
fn from_query_params(pairs: &[(String, String)]) -> Option<RawCoordinates> {
    let lat = param_any(pairs, &["lat", "latitude", "mlat"])?;
    let lon = param_any(pairs, &["lon", "lng", "longitude", "mlon"])?;
    Some(RawCoordinates {
        lat: lat.parse().ok()?,
        lon: lon.parse().ok()?,
        zoom: Some(zoom_param(pairs).unwrap_or(DEFAULT_ZOOM)),
        bearing: param(pairs, "bearing").and_then(|v| v.parse().ok()),
        pitch: param(pairs, "pitch").and_then(|v| v.parse().ok()),
    })
}

/// Here Maps: `?map=<lat>,<lon>,<zoom>[,<style>]`. Hostname-gated because
/// the comma `map=` shape collides with the lon-first Mapbox console token.
fn from_here_map(url: &Url, pairs: &[(String, String)]) -> Option<RawCoordinates> {
    if !host_contains(url, "here.com") {
        return None;
    }
    let parts: Vec<&str> = param(pairs, "map")?.split(',').collect();
    if parts.len() < 3 {
        return None;
    }
    Some(RawCoordinates {
        lat: parts[0].parse().ok()?,
        lon: parts[1].parse().ok()?,
        zoom: parts[2].parse().ok(),
        ..RawCoordinates::default()
    })
}

/// Mapbox console directions debug: `route=<lon>,<lat>;<lon>,<lat>;...`.
///
/// The centroid of all waypoints stands in for the viewport, with zoom from
/// an accompanying `map=` token or the default. Extraction-only — the
/// injector deliberately never regenerates a route.
fn from_route_centroid(url: &str) -> Option<RawCoordinates> {
    let cap = ROUTE_RE.captures(url)?;
    let decoded = percent_decode_str(&cap[1]).decode_utf8().ok()?;

    let waypoints: Vec<(f64, f64)> = decoded
        .split(';')
        .filter_map(|point| {
            let (lon, lat) = point.split_once(',')?;
            let lat = lat.split(',').next()?;
            Some((lon.trim().parse().ok()?, lat.trim().parse().ok()?))
        })
        .collect();
    if waypoints.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = waypoints.len() as f64;
    let lon = waypoints.iter().map(|(lon, _)| lon).sum::<f64>() / count;
    let lat = waypoints.iter().map(|(_, lat)| lat).sum::<f64>() / count;
    let zoom = CONSOLE_MAP_RE
        .captures(url)
        .and_then(|cap| cap[3].parse::<f64>().ok())
        .unwrap_or(DEFAULT_ZOOM);

    Some(RawCoordinates {
        lat,
        lon,
        zoom: Some(zoom),
        ..RawCoordinates::default()
    })
}

/// Mapbox console map token without a route: `map=<lon>,<lat>,<zoom>[z]`.
fn from_console_map(url: &str) -> Option<RawCoordinates> {
    let cap = CONSOLE_MAP_RE.captures(url)?;
    Some(RawCoordinates {
        lon: cap[1].parse().ok()?,
        lat: cap[2].parse().ok()?,
        zoom: cap[3].parse().ok(),
        ..RawCoordinates::default()
    })
}

/// Apple Maps: `?ll=<lat>,<lon>`. Hostname-gated because the generic `ll=`
/// convention below is lon-first.
fn from_apple_ll(url: &Url, pairs: &[(String, String)]) -> Option<RawCoordinates> {
    if !host_contains(url, "maps.apple.com") {
        return None;
    }
    let (lat, lon) = param(pairs, "ll")?.split_once(',')?;
    Some(RawCoordinates {
        lat: lat.parse().ok()?,
        lon: lon.parse().ok()?,
        zoom: Some(zoom_param(pairs).unwrap_or(DEFAULT_ZOOM)),
        ..RawCoordinates::default()
    })
}

/// Generic `ll=<lon>,<lat>` (Yandex and Bing-adjacent services; `~` also
/// seen as the separator).
fn from_ll_param(pairs: &[(String, String)]) -> Option<RawCoordinates> {
    let (lon, lat) = param(pairs, "ll")?.split_once([',', '~'])?;
    Some(RawCoordinates {
        lon: lon.parse().ok()?,
        lat: lat.parse().ok()?,
        zoom: Some(zoom_param(pairs).unwrap_or(DEFAULT_ZOOM)),
        ..RawCoordinates::default()
    })
}

/// Bing Maps: `?cp=<lat>~<lon>` with zoom in `lvl`.
fn from_cp_param(pairs: &[(String, String)]) -> Option<RawCoordinates> {
    let (lat, lon) = param(pairs, "cp")?.split_once('~')?;
    Some(RawCoordinates {
        lat: lat.parse().ok()?,
        lon: lon.parse().ok()?,
        zoom: Some(zoom_param(pairs).unwrap_or(DEFAULT_ZOOM)),
        ..RawCoordinates::default()
    })
}

/// satellites.pro hash: `#<lat>,<lon>,<zoom>`.
fn from_satellites_hash(url: &Url) -> Option<RawCoordinates> {
    let cap = SAT_HASH_RE.captures(url.fragment()?)?;
    Some(RawCoordinates {
        lat: cap[1].parse().ok()?,
        lon: cap[2].parse().ok()?,
        zoom: cap[3].parse().ok(),
        ..RawCoordinates::default()
    })
}

pub(crate) fn host_contains(url: &Url, needle: &str) -> bool {
    url.host_str().is_some_and(|host| host.contains(needle))
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
