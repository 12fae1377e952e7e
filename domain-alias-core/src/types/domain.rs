//! Domain configuration and routing type definitions

use serde::{Deserialize, Serialize};

use domain_alias_provider::ResourceRecordSet;

/// Weight used by weighted routing when the configuration omits one.
pub const DEFAULT_WEIGHT: u32 = 200;

fn default_true() -> bool {
    true
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

/// One custom domain entry as handed over by the orchestrator.
///
/// Read-only for this crate; keys are camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    /// Record name to manage (e.g. `api.example.com`).
    pub given_domain_name: String,
    /// Explicit hosted zone; skips zone lookup entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
    /// Restrict lookup to private (`true`) or public (`false`) zones. Unset means any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_zone_private: Option<bool>,
    /// Write the record into both the public and the private zone.
    #[serde(default)]
    pub split_horizon_dns: bool,
    /// When `false`, record changes are skipped.
    #[serde(default = "default_true")]
    pub create_route53_record: bool,
    /// Endpoint the alias points at.
    pub alias_target: AliasTargetConfig,
    #[serde(default)]
    pub route53_params: Route53Params,
}

impl DomainConfig {
    /// A config with default flags and simple routing.
    pub fn new(
        given_domain_name: impl Into<String>,
        target_dns_name: impl Into<String>,
        target_hosted_zone_id: impl Into<String>,
    ) -> Self {
        Self {
            given_domain_name: given_domain_name.into(),
            hosted_zone_id: None,
            hosted_zone_private: None,
            split_horizon_dns: false,
            create_route53_record: true,
            alias_target: AliasTargetConfig {
                dns_name: target_dns_name.into(),
                hosted_zone_id: target_hosted_zone_id.into(),
            },
            route53_params: Route53Params::default(),
        }
    }
}

/// Target endpoint of the alias record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AliasTargetConfig {
    /// DNS name of the endpoint (e.g. `d-abc123.execute-api.us-east-1.amazonaws.com`).
    pub dns_name: String,
    /// The endpoint's own hosted zone id (not the zone the record is written to).
    pub hosted_zone_id: String,
}

/// Routing settings for the alias record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Route53Params {
    #[serde(default)]
    pub routing_policy: RoutingPolicy,
    /// Distinguishes records sharing a name; defaults to the domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    /// Only used by weighted routing.
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

impl Default for Route53Params {
    fn default() -> Self {
        Self {
            routing_policy: RoutingPolicy::Simple,
            set_identifier: None,
            weight: DEFAULT_WEIGHT,
            health_check_id: None,
        }
    }
}

/// Route 53 routing policy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoutingPolicy {
    #[default]
    Simple,
    Latency,
    Weighted,
}

/// Routing fields merged into the record set. Exactly one variant applies per change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingOptions {
    /// Simple routing: no extra fields.
    None,
    Latency {
        region: String,
        set_identifier: String,
        health_check_id: Option<String>,
    },
    Weighted {
        weight: u32,
        set_identifier: String,
        health_check_id: Option<String>,
    },
}

impl RoutingOptions {
    /// Derive the routing fields for `domain_name`.
    ///
    /// `region` is the client's region and only matters for latency routing.
    pub fn from_params(params: &Route53Params, domain_name: &str, region: &str) -> Self {
        let set_identifier = || {
            params
                .set_identifier
                .clone()
                .unwrap_or_else(|| domain_name.to_string())
        };

        match params.routing_policy {
            RoutingPolicy::Simple => Self::None,
            RoutingPolicy::Latency => Self::Latency {
                region: region.to_string(),
                set_identifier: set_identifier(),
                health_check_id: params.health_check_id.clone(),
            },
            RoutingPolicy::Weighted => Self::Weighted {
                weight: params.weight,
                set_identifier: set_identifier(),
                health_check_id: params.health_check_id.clone(),
            },
        }
    }

    /// Write the routing fields into `record_set`, leaving the others untouched.
    pub fn apply_to(&self, record_set: &mut ResourceRecordSet) {
        match self {
            Self::None => {}
            Self::Latency {
                region,
                set_identifier,
                health_check_id,
            } => {
                record_set.region = Some(region.clone());
                record_set.set_identifier = Some(set_identifier.clone());
                record_set.health_check_id.clone_from(health_check_id);
            }
            Self::Weighted {
                weight,
                set_identifier,
                health_check_id,
            } => {
                record_set.weight = Some(*weight);
                record_set.set_identifier = Some(set_identifier.clone());
                record_set.health_check_id.clone_from(health_check_id);
            }
        }
    }
}
