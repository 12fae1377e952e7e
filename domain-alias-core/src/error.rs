//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use domain_alias_provider::{ChangeAction, RecordType};

// Re-export library error type
pub use domain_alias_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No hosted zone matches the domain
    #[error("Could not find hosted zone '{0}'")]
    ZoneNotFound(String),

    /// Listing hosted zones failed
    #[error("Unable to list hosted zones in Route53.\n{0}")]
    ZoneListFailure(#[source] ProviderError),

    /// Submitting a change batch failed
    #[error("Failed to {action} {record_type} Alias for '{domain}':\n{source}")]
    RecordChangeFailure {
        action: ChangeAction,
        record_type: RecordType,
        domain: String,
        source: ProviderError,
    },

    /// Provider error (client construction, configuration)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (configuration, missing zone, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ZoneNotFound(_) => true,
            Self::ZoneListFailure(e) | Self::Provider(e) => e.is_expected(),
            Self::RecordChangeFailure { source, .. } => source.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn throttled() -> ProviderError {
        ProviderError::RateLimited {
            provider: "route53".to_string(),
            retry_after: None,
            raw_message: None,
        }
    }

    #[test]
    fn zone_not_found_names_domain() {
        let err = CoreError::ZoneNotFound("api.example.com".to_string());
        assert_eq!(err.to_string(), "Could not find hosted zone 'api.example.com'");
        assert!(err.is_expected());
    }

    #[test]
    fn zone_list_failure_carries_cause() {
        let err = CoreError::ZoneListFailure(throttled());
        assert_eq!(
            err.to_string(),
            "Unable to list hosted zones in Route53.\n[route53] Rate limited"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn record_change_failure_message() {
        let err = CoreError::RecordChangeFailure {
            action: ChangeAction::Upsert,
            record_type: RecordType::Cname,
            domain: "api.example.com".to_string(),
            source: ProviderError::InvalidChangeBatch {
                provider: "route53".to_string(),
                messages: vec!["bad".to_string()],
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to UPSERT CNAME Alias for 'api.example.com':\n[route53] Invalid change batch: bad"
        );
        assert!(err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::ZoneNotFound("a.example.com".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ZoneNotFound");
        assert_eq!(json["details"], "a.example.com");
    }
}
