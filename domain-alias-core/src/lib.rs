//! Domain Alias Core Library
//!
//! Manages the Route 53 alias record of a custom domain on behalf of a
//! provisioning tool:
//! - hosted zone resolution (`ZoneResolver`): longest-suffix match, optional
//!   public/private filter, explicit zone id bypass;
//! - record reconciliation (`RecordReconciler`): UPSERT/DELETE of one CNAME
//!   alias per target zone, split-horizon, simple/latency/weighted routing.
//!
//! The Route 53 client is injected through [`ServiceContext`], so any
//! [`Route53Api`](domain_alias_provider::Route53Api) implementation can be used.
//!
//! ```rust,no_run
//! use domain_alias_core::{ChangeAction, DomainConfig, Route53Service};
//! use domain_alias_provider::ClientConfig;
//!
//! # async fn run() -> domain_alias_core::CoreResult<()> {
//! let config = ClientConfig::load(None, None)?;
//! let service = Route53Service::from_config(&config)?;
//!
//! let domain = DomainConfig::new(
//!     "api.example.com",
//!     "d-abc123.execute-api.us-east-1.amazonaws.com",
//!     "Z1UJRXOUMOOFQ8",
//! );
//! service
//!     .change_resource_record_set(ChangeAction::Upsert, &domain)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{RecordReconciler, Route53Service, ServiceContext, ZoneResolver};
pub use types::{ChangeAction, DomainConfig, RoutingOptions, RoutingPolicy};
