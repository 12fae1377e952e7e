//! Generic HTTP client tools
//!
//! Sends a prepared (already signed) request, logs it, and classifies transport-level
//! failures. Parsing of successful bodies and API error documents is left to the caller.
//!
//! Retries are not performed here; they belong to [`Throttle`](crate::Throttle), which
//! only repeats throttling failures.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// A raw HTTP response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    /// `Retry-After` header in seconds, when present.
    pub retry_after: Option<u64>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw response
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body, signature)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url_or_action` - URL or operation name (for logging)
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - any response that is not HTTP 429 or 502/503/504
    /// * `Err(ProviderError::RateLimited)` - HTTP 429
    /// * `Err(ProviderError::NetworkError)` / `Err(ProviderError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<RawResponse, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{provider_name}] Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }

    /// Parse an XML response document
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_xml<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] XML parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
