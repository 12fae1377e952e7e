//! Route 53 `Route53Api` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::trim_hosted_zone_id;
use crate::traits::{ErrorContext, ProviderErrorMapper, Route53Api};
use crate::types::{ChangeBatch, ChangeInfo, HostedZone, HostedZonePage, Page};

use super::sign::canonical_query;
use super::types::{
    ChangeResourceRecordSetsResponse, ListHostedZonesResponse, build_change_request_xml,
};
use super::{MAX_PAGE_SIZE, ROUTE53_API_VERSION, Route53Provider};

#[async_trait]
impl Route53Api for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<HostedZonePage> {
        let path = format!("/{ROUTE53_API_VERSION}/hostedzone");
        let max_items = MAX_PAGE_SIZE.to_string();

        let mut params = vec![("maxitems", max_items.as_str())];
        if let Some(marker) = marker {
            params.push(("marker", marker));
        }
        let query = canonical_query(&params);

        let response: ListHostedZonesResponse =
            self.get(&path, &query, ErrorContext::default()).await?;

        let zones: Vec<HostedZone> = response
            .hosted_zones
            .hosted_zone
            .into_iter()
            .map(HostedZone::from)
            .collect();

        // 仅当 IsTruncated 为 true 时才继续翻页
        let next_cursor = if response.is_truncated {
            response.next_marker
        } else {
            None
        };
        log::debug!(
            "[route53] Listed {} hosted zones (truncated: {})",
            zones.len(),
            next_cursor.is_some()
        );

        Ok(Page::new(zones, next_cursor))
    }

    async fn change_resource_record_sets(
        &self,
        hosted_zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeInfo> {
        let zone_id = trim_hosted_zone_id(hosted_zone_id);
        if zone_id.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "hosted_zone_id".to_string(),
                detail: "hosted zone id is empty".to_string(),
            });
        }

        let payload =
            build_change_request_xml(batch).map_err(|detail| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail,
            })?;

        let path = format!("/{ROUTE53_API_VERSION}/hostedzone/{zone_id}/rrset/");
        let ctx = ErrorContext {
            hosted_zone_id: Some(zone_id.to_string()),
            ..ErrorContext::default()
        };

        let response: ChangeResourceRecordSetsResponse = self.post(&path, payload, ctx).await?;
        let info = ChangeInfo::from(response.change_info);
        log::info!("[route53] Change {} submitted to zone {zone_id}", info.id);
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;

    #[tokio::test]
    async fn empty_zone_id_is_rejected_before_any_request() {
        let provider = Route53Provider::new(Credentials::new("AKID", "secret")).unwrap();
        let batch = ChangeBatch {
            comment: None,
            changes: Vec::new(),
        };

        let result = provider
            .change_resource_record_sets("/hostedzone/", &batch)
            .await;
        assert!(
            matches!(&result, Err(ProviderError::InvalidParameter { param, .. }) if param == "hosted_zone_id"),
            "unexpected result: {result:?}"
        );
    }
}
