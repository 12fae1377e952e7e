//! AWS Route 53 Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 XML request/response types.
pub(crate) mod types;

use reqwest::Client;

use crate::config::{ClientConfig, HttpOptions};
use crate::credentials::Credentials;
use crate::error::Result;
use crate::providers::common::create_http_client;

/// Global Route 53 API host.
pub(crate) const ROUTE53_HOST: &str = "route53.amazonaws.com";
pub(crate) const ROUTE53_API_VERSION: &str = "2013-04-01";
pub(crate) const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
/// Route 53 is a global service; requests are always signed for us-east-1.
pub(crate) const SIGNING_REGION: &str = "us-east-1";
pub(crate) const SIGNING_SERVICE: &str = "route53";
/// `ListHostedZones` 单页最大数量
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// AWS Route 53 provider.
///
/// Authenticates with AWS Signature Version 4. Performs one HTTP request per
/// [`Route53Api`](crate::Route53Api) call; pacing and retries are the job of
/// [`Throttle`](crate::Throttle).
///
/// # Construction
///
/// ```rust,no_run
/// use domain_alias_provider::{Credentials, Route53Provider};
///
/// let provider = Route53Provider::new(Credentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
/// ))?;
/// # Ok::<(), domain_alias_provider::ProviderError>(())
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    /// Scheme + host, without trailing slash (e.g. `https://route53.amazonaws.com`).
    pub(crate) base_url: String,
    /// Host header value, also signed.
    pub(crate) host: String,
}

impl std::fmt::Debug for Route53Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route53Provider")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    credentials: Credentials,
    http: HttpOptions,
    endpoint: Option<String>,
}

impl Route53ProviderBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: HttpOptions::default(),
            endpoint: None,
        }
    }

    /// Timeouts and proxy for the underlying HTTP client.
    #[must_use]
    pub fn http_options(mut self, http: HttpOptions) -> Self {
        self.http = http;
        self
    }

    /// Send requests to a different endpoint (e.g. a local emulator).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Result<Route53Provider> {
        let base_url = self
            .endpoint
            .map_or_else(|| format!("https://{ROUTE53_HOST}"), |e| e.trim_end_matches('/').to_string());
        let host = host_of(&base_url).to_string();

        Ok(Route53Provider {
            client: create_http_client(&self.http, SIGNING_SERVICE)?,
            credentials: self.credentials,
            base_url,
            host,
        })
    }
}

impl Route53Provider {
    /// Creates a provider for the public Route 53 endpoint with default HTTP options.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Creates a provider from a full client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::builder(config.credentials.clone())
            .http_options(config.http.clone())
            .build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: Credentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }
}

/// Host part of a base URL: scheme and path are dropped.
fn host_of(base_url: &str) -> &str {
    let without_scheme = base_url
        .split_once("://")
        .map_or(base_url, |(_, rest)| rest);
    without_scheme
        .split_once('/')
        .map_or(without_scheme, |(host, _)| host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let provider = Route53Provider::new(Credentials::new("AKID", "secret")).unwrap();
        assert_eq!(provider.base_url, "https://route53.amazonaws.com");
        assert_eq!(provider.host, "route53.amazonaws.com");
    }

    #[test]
    fn custom_endpoint_keeps_port_in_host() {
        let provider = Route53Provider::builder(Credentials::new("AKID", "secret"))
            .endpoint("http://localhost:4566/")
            .build()
            .unwrap();
        assert_eq!(provider.base_url, "http://localhost:4566");
        assert_eq!(provider.host, "localhost:4566");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let provider = Route53Provider::new(
            Credentials::new("AKIAEXAMPLEKEY", "very-secret").with_session_token("session-tok"),
        )
        .unwrap();
        let out = format!("{provider:?}");
        assert!(out.contains("AKIA****"));
        assert!(out.contains("https://route53.amazonaws.com"));
        assert!(!out.contains("very-secret"));
        assert!(!out.contains("session-tok"));
        assert!(!out.contains("EXAMPLEKEY"));
    }

    #[test]
    fn host_of_strips_path() {
        assert_eq!(host_of("https://example.test/prefix"), "example.test");
        assert_eq!(host_of("example.test"), "example.test");
    }
}
