//! HTTP client for reverse-geocoding lookups.
//!
//! Wraps `reqwest` with typed response handling and per-request retry.
//! Nominatim is queried first; the Mapbox geocoding API is a fallback that
//! activates only when an access token is configured. Provider failures are
//! soft: a slot without a resolvable name keeps its coordinate text, so
//! [`GeocodeClient::reverse_geocode`] degrades to `None` rather than
//! surfacing transport errors to the popup flow.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use mapjump_core::AppConfig;

use crate::error::GeocodeError;
use crate::retry::retry_with_backoff;

const DEFAULT_MAPBOX_BASE: &str = "https://api.mapbox.com/";

/// Nominatim `/reverse` response; only the display name matters here.
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MapboxResponse {
    #[serde(default)]
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    #[serde(default)]
    place_name: Option<String>,
}

/// Client for the Nominatim and Mapbox reverse-geocoding endpoints.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_urls`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    nominatim_base: Url,
    mapbox_base: Url,
    mapbox_token: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl GeocodeClient {
    /// Creates a client pointed at the configured Nominatim endpoint and the
    /// production Mapbox API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidUrl`] if the
    /// configured Nominatim URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::with_base_urls(config, &config.nominatim_url, DEFAULT_MAPBOX_BASE)
    }

    /// Creates a client with custom provider base URLs (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidUrl`] if a base URL
    /// does not parse.
    pub fn with_base_urls(
        config: &AppConfig,
        nominatim_base: &str,
        mapbox_base: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.geocoder_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.geocoder_user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            nominatim_base: parse_base(nominatim_base)?,
            mapbox_base: parse_base(mapbox_base)?,
            mapbox_token: config.mapbox_token.clone(),
            max_retries: config.geocoder_max_retries,
            backoff_base_ms: config.geocoder_retry_backoff_ms,
        })
    }

    /// Looks up a place name for the coordinate pair.
    ///
    /// Tries Nominatim, then Mapbox when a token is configured. Transport
    /// and provider errors are logged and treated as a miss.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Option<String> {
        match self.query_nominatim(lat, lon).await {
            Ok(Some(name)) => return Some(name),
            Ok(None) => tracing::debug!(lat, lon, "nominatim returned no name"),
            Err(err) => tracing::warn!(lat, lon, error = %err, "nominatim lookup failed"),
        }

        if self.mapbox_token.is_some() {
            match self.query_mapbox(lat, lon).await {
                Ok(Some(name)) => return Some(name),
                Ok(None) => tracing::debug!(lat, lon, "mapbox returned no feature"),
                Err(err) => tracing::warn!(lat, lon, error = %err, "mapbox lookup failed"),
            }
        }

        None
    }

    async fn query_nominatim(&self, lat: f64, lon: f64) -> Result<Option<String>, GeocodeError> {
        let mut url = join_path(&self.nominatim_base, "reverse")?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lon.to_string())
            .append_pair("zoom", "18")
            .append_pair("addressdetails", "1")
            .append_pair("accept-language", "en");

        let body = self.request_json(&url).await?;
        let parsed: NominatimResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("nominatim reverse(lat={lat}, lon={lon})"),
                source: e,
            })?;

        Ok(parsed.display_name.filter(|name| !name.is_empty()))
    }

    async fn query_mapbox(&self, lat: f64, lon: f64) -> Result<Option<String>, GeocodeError> {
        let Some(token) = self.mapbox_token.as_deref() else {
            return Ok(None);
        };

        let path = format!("geocoding/v5/mapbox.places/{lon},{lat}.json");
        let mut url = join_path(&self.mapbox_base, &path)?;
        url.query_pairs_mut()
            .append_pair("access_token", token)
            .append_pair("types", "place,locality,neighborhood,address")
            .append_pair("language", "en");

        let body = self.request_json(&url).await?;
        let parsed: MapboxResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("mapbox geocoding(lat={lat}, lon={lon})"),
                source: e,
            })?;

        Ok(parsed
            .features
            .into_iter()
            .find_map(|feature| feature.place_name)
            .filter(|name| !name.is_empty()))
    }

    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GeocodeError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async {
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(GeocodeError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Ok(response.json::<serde_json::Value>().await?)
        })
        .await
    }
}

fn parse_base(raw: &str) -> Result<Url, GeocodeError> {
    // Exactly one trailing slash so joins extend the path instead of
    // replacing the last segment.
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GeocodeError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

fn join_path(base: &Url, path: &str) -> Result<Url, GeocodeError> {
    base.join(path).map_err(|e| GeocodeError::InvalidUrl {
        url: format!("{base}{path}"),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
