//! Retry with exponential back-off and jitter for geocoding lookups.

use std::future::Future;
use std::time::Duration;

use crate::error::GeocodeError;

/// Returns `true` for errors worth retrying after a back-off delay:
/// network-level failures (timeout, connection reset) and HTTP 5xx.
/// Deserialization failures and 4xx responses are not transient and are
/// returned immediately.
pub(crate) fn is_retriable(err: &GeocodeError) -> bool {
    match err {
        GeocodeError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        GeocodeError::UnexpectedStatus { status, .. } => *status >= 500,
        GeocodeError::Deserialize { .. } | GeocodeError::InvalidUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on
/// transient errors. Delay doubles per attempt from `backoff_base_ms`,
/// jittered by ±25% and capped at 30 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, GeocodeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GeocodeError>>,
{
    const MAX_DELAY_MS: u64 = 30_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "geocoder transient error — retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
