//! Precompiled patterns shared by the extractor and the injector.

use std::sync::LazyLock;

use regex::Regex;

/// Planet mosaic path: `/mosaic/<name>/center/<lon>/<lat>/<zoom>`.
pub(crate) static MOSAIC_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/mosaic/[^/]+/center/(-?\d+\.?\d*)/(-?\d+\.?\d*)/(-?\d+\.?\d*)")
        .expect("valid mosaic path regex")
});

/// OSM-convention hash payload: `map=<zoom>/<lat>/<lon>`.
pub(crate) static HASH_MAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"map=(\d+\.?\d*)/(-?\d+\.?\d*)/(-?\d+\.?\d*)").expect("valid hash map regex")
});

/// Positional hash: `<zoom>/<lat>/<lon>[/<bearing>[/<pitch>]]`, applied to
/// the fragment with `#` already stripped.
pub(crate) static POSITIONAL_HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^/?(\d+\.?\d*)/(-?\d+\.?\d*)/(-?\d+\.?\d*)(?:/(-?\d+\.?\d*))?(?:/(-?\d+\.?\d*))?",
    )
    .expect("valid positional hash regex")
});

/// Mapbox console directions-debug map token: `map=<lon>,<lat>,<zoom>[z]`.
pub(crate) static CONSOLE_MAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&#]map=(-?\d+\.?\d*),(-?\d+\.?\d*),(\d+\.?\d*)z?")
        .expect("valid console map regex")
});

/// Mapbox console directions-debug route: `route=<lon>,<lat>;<lon>,<lat>;...`.
pub(crate) static ROUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&#]route=([^&]+)").expect("valid route regex"));

/// satellites.pro hash: `<lat>,<lon>,<zoom>` (fragment, `#` stripped).
pub(crate) static SAT_HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+\.?\d*),(-?\d+\.?\d*),(-?\d+\.?\d*)$").expect("valid satellites regex")
});

/// Numeric prefix plus unit-letter suffix of a Google Earth zoom segment,
/// e.g. `500a` or `13.75z`.
pub(crate) static ZOOM_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+\.?\d*)([a-zA-Z]*)").expect("valid zoom segment regex")
});

/// Replacement target for the console map token (keeps `route=` untouched).
pub(crate) static CONSOLE_MAP_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(map=)-?\d+\.?\d*,-?\d+\.?\d*,\d+\.?\d*z?")
        .expect("valid console map value regex")
});

/// Replacement target for a generic `map=` value up to the next `&`.
pub(crate) static MAP_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(map=)[^&]+").expect("valid map value regex"));

/// Replacement target for a generic `center=` value up to the next `&`.
pub(crate) static CENTER_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(center=)[^&]+").expect("valid center value regex"));
