//! Query-parameter access that also sees hash-embedded query strings.
//!
//! Many map SPAs keep their view state after `#` rather than `?`, either as
//! a bare `key=value&key=value` fragment or as a `#path?key=value` suffix.
//! Lookups here search the real query string first, then the fragment.

use url::form_urlencoded;
use url::Url;

/// All `key=value` pairs from the query string plus the hash fragment.
///
/// The fragment is decoded twice: once from the substring after its own `?`
/// (the `#path?center=...` shape) and once as a whole (the `#lat=..&lng=..`
/// shape). Pairs from the real query string come first, so it wins lookups.
pub(crate) fn query_and_hash_pairs(url: &Url) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if let Some(fragment) = url.fragment() {
        let embedded = fragment
            .split_once('?')
            .map_or(fragment, |(_, query)| query);
        pairs.extend(
            form_urlencoded::parse(embedded.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        );
        if embedded != fragment {
            pairs.extend(
                form_urlencoded::parse(fragment.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned())),
            );
        }
    }

    pairs
}

/// First value for `key`, if any.
pub(crate) fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// First value among `keys`, in the given preference order.
pub(crate) fn param_any<'a>(pairs: &'a [(String, String)], keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| param(pairs, key))
}

/// Zoom from the conventional parameter names, tried in order.
pub(crate) fn zoom_param(pairs: &[(String, String)]) -> Option<f64> {
    param_any(pairs, &["z", "zoom", "lvl"]).and_then(|v| v.parse::<f64>().ok())
}
