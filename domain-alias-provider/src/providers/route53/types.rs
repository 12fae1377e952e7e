//! Route 53 XML wire types
//!
//! Element order inside each request struct follows the API's schema; Route 53
//! rejects documents whose children appear out of order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ChangeBatch, ChangeInfo, ChangeStatus, HostedZone};

use super::ROUTE53_XMLNS;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

// ============ ChangeResourceRecordSets 请求 ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResourceRecordSetsRequest<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    pub change_batch: ChangeBatchXml<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeBatchXml<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
    pub changes: ChangesXml<'a>,
}

#[derive(Debug, Serialize)]
pub struct ChangesXml<'a> {
    #[serde(rename = "Change")]
    pub change: Vec<ChangeXml<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeXml<'a> {
    pub action: &'static str,
    pub resource_record_set: ResourceRecordSetXml<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordSetXml<'a> {
    pub name: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
    pub alias_target: AliasTargetXml<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasTargetXml<'a> {
    pub hosted_zone_id: &'a str,
    #[serde(rename = "DNSName")]
    pub dns_name: &'a str,
    pub evaluate_target_health: bool,
}

impl<'a> From<&'a ChangeBatch> for ChangeBatchXml<'a> {
    fn from(batch: &'a ChangeBatch) -> Self {
        let change = batch
            .changes
            .iter()
            .map(|c| {
                let set = &c.resource_record_set;
                ChangeXml {
                    action: c.action.as_str(),
                    resource_record_set: ResourceRecordSetXml {
                        name: &set.name,
                        record_type: set.record_type.as_str(),
                        set_identifier: set.set_identifier.as_deref(),
                        weight: set.weight,
                        region: set.region.as_deref(),
                        alias_target: AliasTargetXml {
                            hosted_zone_id: &set.alias_target.hosted_zone_id,
                            dns_name: &set.alias_target.dns_name,
                            evaluate_target_health: set.alias_target.evaluate_target_health,
                        },
                        health_check_id: set.health_check_id.as_deref(),
                    },
                }
            })
            .collect();

        Self {
            comment: batch.comment.as_deref(),
            changes: ChangesXml { change },
        }
    }
}

/// Render the request body for `ChangeResourceRecordSets`.
pub fn build_change_request_xml(batch: &ChangeBatch) -> Result<String, String> {
    let request = ChangeResourceRecordSetsRequest {
        xmlns: ROUTE53_XMLNS,
        change_batch: batch.into(),
    };
    let body = quick_xml::se::to_string_with_root("ChangeResourceRecordSetsRequest", &request)
        .map_err(|e| e.to_string())?;
    Ok(format!("{XML_DECLARATION}{body}"))
}

// ============ ListHostedZones 响应 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHostedZonesResponse {
    #[serde(default)]
    pub hosted_zones: HostedZonesXml,
    #[serde(default)]
    pub is_truncated: bool,
    pub next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZonesXml {
    #[serde(rename = "HostedZone", default)]
    pub hosted_zone: Vec<HostedZoneXml>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedZoneXml {
    pub id: String,
    pub name: String,
    pub caller_reference: Option<String>,
    pub config: Option<HostedZoneConfigXml>,
    pub resource_record_set_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedZoneConfigXml {
    pub comment: Option<String>,
    #[serde(default)]
    pub private_zone: bool,
}

impl From<HostedZoneXml> for HostedZone {
    fn from(zone: HostedZoneXml) -> Self {
        let (comment, private_zone) = zone
            .config
            .map_or((None, false), |c| (c.comment, c.private_zone));
        Self {
            id: zone.id,
            name: zone.name,
            private_zone,
            caller_reference: zone.caller_reference,
            comment,
            record_count: zone.resource_record_set_count,
        }
    }
}

// ============ ChangeResourceRecordSets 响应 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResourceRecordSetsResponse {
    pub change_info: ChangeInfoXml,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfoXml {
    pub id: String,
    pub status: String,
    pub submitted_at: Option<String>,
    pub comment: Option<String>,
}

impl From<ChangeInfoXml> for ChangeInfo {
    fn from(info: ChangeInfoXml) -> Self {
        let status = match info.status.as_str() {
            "PENDING" => ChangeStatus::Pending,
            "INSYNC" => ChangeStatus::Insync,
            _ => ChangeStatus::Unknown,
        };
        // 时间格式异常时丢弃，不影响提交结果
        let submitted_at = info
            .submitted_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Self {
            id: info.id,
            status,
            submitted_at,
            comment: info.comment,
        }
    }
}

// ============ 错误响应 ============

/// Generic error document: `<ErrorResponse><Error>...</Error></ErrorResponse>`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Validation failure document returned by `ChangeResourceRecordSets`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidChangeBatchResponse {
    pub messages: MessagesXml,
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessagesXml {
    #[serde(rename = "Message", default)]
    pub message: Vec<String>,
}
