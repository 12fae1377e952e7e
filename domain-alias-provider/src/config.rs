//! Client configuration
//!
//! Everything the Route 53 client needs is passed in explicitly through
//! [`ClientConfig`]; nothing is read from shared host state.

use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::Result;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Route 53 allows five requests per second per account.
const DEFAULT_MIN_CALL_INTERVAL_MS: u64 = 200;
const DEFAULT_MAX_RETRIES: u32 = 5;

/// HTTP transport options.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Proxy URL applied to all requests (e.g. `http://proxy.internal:3128`).
    pub proxy: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            proxy: None,
        }
    }
}

/// Configuration for [`Route53Provider`](crate::Route53Provider) and the
/// [`Throttle`](crate::Throttle) that paces it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment region. Route 53 itself is global; this is the region written
    /// into latency-routed records.
    pub region: String,
    pub credentials: Credentials,
    pub http: HttpOptions,
    /// Named profile the credentials were loaded from, if any.
    pub profile: Option<String>,
    /// Maximum retries for throttled calls.
    pub max_retries: u32,
    /// Minimum spacing between two calls through the same client.
    pub min_call_interval: Duration,
}

impl ClientConfig {
    pub fn new(region: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            region: region.into(),
            credentials,
            http: HttpOptions::default(),
            profile: None,
            max_retries: DEFAULT_MAX_RETRIES,
            min_call_interval: Duration::from_millis(DEFAULT_MIN_CALL_INTERVAL_MS),
        }
    }

    /// Build a configuration from the environment, optionally pinning a named profile.
    ///
    /// `region` falls back to `AWS_REGION`, then `AWS_DEFAULT_REGION`, then `us-east-1`.
    pub fn load(region: Option<&str>, profile: Option<&str>) -> Result<Self> {
        let region = region
            .map(ToString::to_string)
            .or_else(|| std::env::var("AWS_REGION").ok())
            .or_else(|| std::env::var("AWS_DEFAULT_REGION").ok())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let credentials = Credentials::resolve(profile)?;
        log::debug!(
            "Loaded credentials for region {region} (profile: {})",
            profile.unwrap_or("<none>")
        );

        let mut config = Self::new(region, credentials);
        config.profile = profile.map(ToString::to_string);
        Ok(config)
    }

    #[must_use]
    pub fn with_http_options(mut self, http: HttpOptions) -> Self {
        self.http = http;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub fn with_min_call_interval(mut self, interval: Duration) -> Self {
        self.min_call_interval = interval;
        self
    }
}
