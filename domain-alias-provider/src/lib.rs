//! # domain-alias-provider
//!
//! Access layer for the parts of AWS Route 53 needed to manage alias records:
//! listing hosted zones and submitting change batches.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_alias_provider::{
//!     pagination, ClientConfig, Route53Api, Route53Provider, Throttle,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Resolve region and credentials from the environment
//!     let config = ClientConfig::load(None, None)?;
//!     let provider = Route53Provider::from_config(&config)?;
//!     let throttle = Throttle::from_config(&config);
//!
//!     // 2. List every hosted zone, following `NextMarker`
//!     let zones = pagination::fetch_all(|marker| {
//!         let provider = &provider;
//!         let throttle = &throttle;
//!         async move {
//!             throttle
//!                 .call("ListHostedZones", || provider.list_hosted_zones(marker.as_deref()))
//!                 .await
//!         }
//!     })
//!     .await?;
//!
//!     for zone in &zones {
//!         println!("{} {} (private: {})", zone.id, zone.name, zone.private_zone);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Route 53 error codes are mapped onto structured variants:
//!
//! - [`ProviderError::InvalidCredentials`] — signature or token rejected
//! - [`ProviderError::HostedZoneNotFound`] — `NoSuchHostedZone`
//! - [`ProviderError::InvalidChangeBatch`] — the batch failed validation
//! - [`ProviderError::RateLimited`] — throttled (retried by [`Throttle`])
//!
//! See [`ProviderError`] for the full list.

mod config;
mod credentials;
mod error;
mod http_client;
pub mod pagination;
mod providers;
mod throttle;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export core trait only (internal traits are not exported)
pub use traits::Route53Api;

// Re-export configuration
pub use config::{ClientConfig, DEFAULT_REGION, HttpOptions};
pub use credentials::Credentials;
pub use throttle::Throttle;

// Re-export types
pub use types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone,
    HostedZonePage, Page, RecordType, ResourceRecordSet,
};

// Re-export shared helpers
pub use providers::common::{normalize_domain_name, trim_hosted_zone_id};

// Re-export concrete provider
pub use providers::{Route53Provider, Route53ProviderBuilder};
