//! Hosted zone 解析服务

use std::sync::Arc;

use domain_alias_provider::{
    HostedZone, Result as ProviderResult, normalize_domain_name, pagination, trim_hosted_zone_id,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::DomainConfig;

/// Finds the hosted zone a domain name belongs to.
#[derive(Clone)]
pub struct ZoneResolver {
    ctx: Arc<ServiceContext>,
}

impl ZoneResolver {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Resolve the zone for a domain configuration.
    ///
    /// An explicit `hosted_zone_id` on the config wins over any lookup.
    pub async fn resolve_for(
        &self,
        domain: &DomainConfig,
        is_private: Option<bool>,
    ) -> CoreResult<String> {
        self.resolve(
            &domain.given_domain_name,
            domain.hosted_zone_id.as_deref(),
            is_private,
        )
        .await
    }

    /// Most specific hosted zone for `domain_name`.
    ///
    /// Zones whose privacy flag differs from `is_private` (when set) are ignored.
    /// Among zones whose name (without trailing dot) is a suffix of `domain_name`,
    /// the longest wins; on equal length the first one listed is kept.
    pub async fn resolve(
        &self,
        domain_name: &str,
        explicit_zone_id: Option<&str>,
        is_private: Option<bool>,
    ) -> CoreResult<String> {
        if let Some(zone_id) = explicit_zone_id {
            log::info!("Selected specific hostedZoneId {zone_id}");
            return Ok(zone_id.to_string());
        }

        if let Some(private) = is_private {
            let kind = if private { "private" } else { "public" };
            log::info!("Filtering to only {kind} zones.");
        }

        let zones = self
            .list_all_zones()
            .await
            .map_err(CoreError::ZoneListFailure)?;
        log::debug!("Found {} hosted zones", zones.len());

        let zone = select_zone(&zones, domain_name, is_private)
            .ok_or_else(|| CoreError::ZoneNotFound(domain_name.to_string()))?;
        log::debug!("Matched hosted zone {} ({})", zone.name, zone.id);

        Ok(trim_hosted_zone_id(&zone.id).to_string())
    }

    /// 列出全部 hosted zone（跟随 `NextMarker` 翻页）
    async fn list_all_zones(&self) -> ProviderResult<Vec<HostedZone>> {
        let api = &self.ctx.api;
        let throttle = &self.ctx.throttle;

        pagination::fetch_all(move |marker: Option<String>| async move {
            throttle
                .call("ListHostedZones", || api.list_hosted_zones(marker.as_deref()))
                .await
        })
        .await
    }
}

/// Longest-suffix match, first listed wins on ties.
pub(crate) fn select_zone<'a>(
    zones: &'a [HostedZone],
    domain_name: &str,
    is_private: Option<bool>,
) -> Option<&'a HostedZone> {
    zones
        .iter()
        .filter(|zone| is_private.is_none_or(|private| zone.private_zone == private))
        .filter(|zone| domain_name.ends_with(normalize_domain_name(&zone.name)))
        .fold(None, |best: Option<&HostedZone>, zone| match best {
            Some(current)
                if normalize_domain_name(&current.name).len()
                    >= normalize_domain_name(&zone.name).len() =>
            {
                Some(current)
            }
            _ => Some(zone),
        })
}
