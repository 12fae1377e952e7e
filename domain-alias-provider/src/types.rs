use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Hosted Zones ============

/// A Route 53 hosted zone as returned by `ListHostedZones`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Zone id as returned by the API, including the `/hostedzone/` prefix.
    pub id: String,
    /// Zone name, dot-terminated (e.g. `"example.com."`).
    pub name: String,
    /// Whether the zone is private (associated with VPCs) or public.
    pub private_zone: bool,
    /// Caller reference supplied when the zone was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// Free-form comment attached to the zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Number of record sets in the zone, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}

impl HostedZone {
    /// Convenience constructor used by callers that only care about id, name and privacy.
    pub fn new(id: impl Into<String>, name: impl Into<String>, private_zone: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            private_zone,
            caller_reference: None,
            comment: None,
            record_count: None,
        }
    }
}

/// One page of a cursor-paginated listing.
///
/// `next_cursor` is `None` on the last page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Cursor to request the next page with.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// A page with a follow-up cursor.
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }
}

/// A page of hosted zones (`Marker` / `NextMarker` cursors).
pub type HostedZonePage = Page<HostedZone>;

// ============ Record Changes ============

/// The action applied to a resource record set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create the record set or replace it if it exists.
    Upsert,
    /// Delete the record set; fails if it does not match an existing one.
    Delete,
}

impl ChangeAction {
    /// Wire representation of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upsert => "UPSERT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record type of the managed alias record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Cname,
}

impl RecordType {
    /// Wire representation of the record type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cname => "CNAME",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target of an alias record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AliasTarget {
    /// DNS name of the target endpoint.
    pub dns_name: String,
    /// Hosted zone id the target endpoint lives in.
    pub hosted_zone_id: String,
    /// Whether Route 53 evaluates the health of the target.
    pub evaluate_target_health: bool,
}

/// A resource record set carrying an alias target, plus optional routing fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecordSet {
    /// Fully-qualified record name.
    pub name: String,
    /// Record type.
    pub record_type: RecordType,
    /// Identifier distinguishing records with the same name and type (latency/weighted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    /// Relative weight for weighted routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// AWS region for latency routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Alias target.
    pub alias_target: AliasTarget,
    /// Health check associated with the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

/// A single change inside a [`ChangeBatch`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// What to do with the record set.
    pub action: ChangeAction,
    /// The record set to change.
    pub resource_record_set: ResourceRecordSet,
}

/// An atomic set of record changes applied to one hosted zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBatch {
    /// Comment stored with the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Ordered changes.
    pub changes: Vec<Change>,
}

/// Status of a submitted change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// Not yet propagated to all authoritative servers.
    Pending,
    /// Propagated.
    Insync,
    /// Status string not recognised.
    #[serde(other)]
    Unknown,
}

/// Result of `ChangeResourceRecordSets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Change id (with the `/change/` prefix).
    pub id: String,
    /// Propagation status.
    pub status: ChangeStatus,
    /// When the change was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Comment echoed back by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
