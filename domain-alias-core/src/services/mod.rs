//! 业务逻辑服务层

mod record_reconciler;
mod zone_resolver;

pub use record_reconciler::{CHANGE_COMMENT, RECORD_TYPE, RecordReconciler};
pub use zone_resolver::ZoneResolver;

use std::sync::Arc;

use domain_alias_provider::{ChangeAction, ClientConfig, Route53Api, Route53Provider, Throttle};

use crate::error::{CoreError, CoreResult};
use crate::types::DomainConfig;

/// 服务上下文 - 持有所有依赖
///
/// 调用方创建此上下文，可注入任意 [`Route53Api`] 实现。
pub struct ServiceContext {
    /// Route 53 客户端
    pub api: Arc<dyn Route53Api>,
    /// 调用节流与重试
    pub throttle: Throttle,
    /// 客户端所在区域（latency 路由使用）
    pub region: String,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn Route53Api>, throttle: Throttle, region: impl Into<String>) -> Self {
        Self {
            api,
            throttle,
            region: region.into(),
        }
    }

    /// 使用真实的 Route 53 客户端创建上下文
    pub fn from_config(config: &ClientConfig) -> CoreResult<Self> {
        let provider = Route53Provider::from_config(config)?;
        Ok(Self::new(
            Arc::new(provider),
            Throttle::from_config(config),
            config.region.clone(),
        ))
    }
}

/// Route 53 alias 记录服务
///
/// 编排入口：每次部署/移除，每个域名调用一次。
pub struct Route53Service {
    resolver: ZoneResolver,
    reconciler: RecordReconciler,
}

impl Route53Service {
    /// 创建服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            resolver: ZoneResolver::new(Arc::clone(&ctx)),
            reconciler: RecordReconciler::new(ctx),
        }
    }

    /// Build the service against the real Route 53 API.
    pub fn from_config(config: &ClientConfig) -> CoreResult<Self> {
        Ok(Self::new(Arc::new(ServiceContext::from_config(config)?)))
    }

    /// Apply `action` (UPSERT or DELETE) to the alias record of `domain`.
    pub async fn change_resource_record_set(
        &self,
        action: ChangeAction,
        domain: &DomainConfig,
    ) -> CoreResult<()> {
        self.reconciler
            .reconcile(action, domain)
            .await
            .inspect_err(log_failure)
    }

    /// Id of the hosted zone `domain` belongs to, without the `/hostedzone/` prefix.
    ///
    /// `is_private` restricts the lookup to private or public zones.
    pub async fn get_hosted_zone_id(
        &self,
        domain: &DomainConfig,
        is_private: Option<bool>,
    ) -> CoreResult<String> {
        self.resolver
            .resolve_for(domain, is_private)
            .await
            .inspect_err(log_failure)
    }
}

/// Log level for a failed call: expected failures are only warnings.
fn failure_level(err: &CoreError) -> log::Level {
    if err.is_expected() {
        log::Level::Warn
    } else {
        log::Level::Error
    }
}

fn log_failure(err: &CoreError) {
    log::log!(failure_level(err), "{err}");
}
