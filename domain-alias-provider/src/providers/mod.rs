//! Route 53 provider implementation

/// Shared utilities used by the provider implementation.
pub mod common;

mod route53;

pub use route53::{Route53Provider, Route53ProviderBuilder};
