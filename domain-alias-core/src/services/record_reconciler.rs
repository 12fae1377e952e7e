//! Alias 记录变更服务

use std::sync::Arc;

use domain_alias_provider::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, RecordType, ResourceRecordSet,
    Result as ProviderResult,
};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, ZoneResolver};
use crate::types::{DomainConfig, RoutingOptions};

/// Record type written for every alias change.
pub const RECORD_TYPE: RecordType = RecordType::Cname;

/// Comment stored with every change batch.
pub const CHANGE_COMMENT: &str = "Record created by \"serverless-domain-manager\"";

/// Applies UPSERT/DELETE of a domain's alias record to its hosted zone(s).
pub struct RecordReconciler {
    ctx: Arc<ServiceContext>,
    resolver: ZoneResolver,
}

impl RecordReconciler {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let resolver = ZoneResolver::new(Arc::clone(&ctx));
        Self { ctx, resolver }
    }

    /// Submit one change batch per target zone.
    ///
    /// With split-horizon DNS the record goes to both the public and the private
    /// zone. Zones are submitted in that order and the first failure stops.
    pub async fn reconcile(&self, action: ChangeAction, domain: &DomainConfig) -> CoreResult<()> {
        if !domain.create_route53_record {
            let what = if action == ChangeAction::Delete {
                "removal"
            } else {
                "creation"
            };
            log::info!("Skipping {what} of Route53 record.");
            return Ok(());
        }

        let zone_ids = self.target_zone_ids(domain).await?;

        let routing = RoutingOptions::from_params(
            &domain.route53_params,
            &domain.given_domain_name,
            &self.ctx.region,
        );
        let batch = build_change_batch(action, domain, &routing);

        for zone_id in &zone_ids {
            let info = self.submit(zone_id, &batch).await.map_err(|source| {
                CoreError::RecordChangeFailure {
                    action,
                    record_type: RECORD_TYPE,
                    domain: domain.given_domain_name.clone(),
                    source,
                }
            })?;
            log::info!(
                "{action} {RECORD_TYPE} alias '{}' in zone {zone_id}: change {} ({:?})",
                domain.given_domain_name,
                info.id,
                info.status
            );
        }

        Ok(())
    }

    async fn target_zone_ids(&self, domain: &DomainConfig) -> CoreResult<Vec<String>> {
        if !domain.split_horizon_dns {
            let zone_id = self
                .resolver
                .resolve_for(domain, domain.hosted_zone_private)
                .await?;
            return Ok(vec![zone_id]);
        }

        // public 与 private 并发解析，任一失败即整体失败
        let (public, private) = futures::try_join!(
            self.resolver.resolve_for(domain, Some(false)),
            self.resolver.resolve_for(domain, Some(true))
        )?;
        Ok(vec![public, private])
    }

    async fn submit(&self, zone_id: &str, batch: &ChangeBatch) -> ProviderResult<ChangeInfo> {
        let api = &self.ctx.api;
        self.ctx
            .throttle
            .call("ChangeResourceRecordSets", || {
                api.change_resource_record_sets(zone_id, batch)
            })
            .await
    }
}

/// The single-change batch for `domain`.
pub(crate) fn build_change_batch(
    action: ChangeAction,
    domain: &DomainConfig,
    routing: &RoutingOptions,
) -> ChangeBatch {
    let mut record_set = ResourceRecordSet {
        name: domain.given_domain_name.clone(),
        record_type: RECORD_TYPE,
        set_identifier: None,
        weight: None,
        region: None,
        alias_target: AliasTarget {
            dns_name: domain.alias_target.dns_name.clone(),
            hosted_zone_id: domain.alias_target.hosted_zone_id.clone(),
            evaluate_target_health: false,
        },
        health_check_id: None,
    };
    routing.apply_to(&mut record_set);

    ChangeBatch {
        comment: Some(CHANGE_COMMENT.to_string()),
        changes: vec![Change {
            action,
            resource_record_set: record_set,
        }],
    }
}
