//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain_alias_provider::{
    ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, HostedZonePage, Page, ProviderError,
    Result as ProviderResult, Route53Api, Throttle,
};
use tokio::sync::{Barrier, RwLock};

use crate::services::ServiceContext;
use crate::types::DomainConfig;

// ===== MockRoute53Api =====

/// In-memory Route 53: serves fixed zone pages and records submitted batches.
///
/// Page `n > 0` is requested with marker `"page-n"`.
pub struct MockRoute53Api {
    pages: Vec<Vec<HostedZone>>,
    list_markers: RwLock<Vec<Option<String>>>,
    /// 依次返回的 list 错误（为空时正常返回）
    list_errors: RwLock<VecDeque<ProviderError>>,
    /// 按调用序号（从 0 开始）返回的 list 错误
    list_failures: RwLock<HashMap<usize, ProviderError>>,
    /// list 调用在返回前于此等待，用于验证并发
    list_barrier: Option<Arc<Barrier>>,
    change_calls: RwLock<usize>,
    /// 依次返回的 change 错误（为空时正常提交）
    change_errors: RwLock<VecDeque<ProviderError>>,
    submissions: RwLock<Vec<(String, ChangeBatch)>>,
}

impl MockRoute53Api {
    pub fn with_pages(pages: Vec<Vec<HostedZone>>) -> Self {
        Self {
            pages,
            list_markers: RwLock::new(Vec::new()),
            list_errors: RwLock::new(VecDeque::new()),
            list_failures: RwLock::new(HashMap::new()),
            list_barrier: None,
            change_calls: RwLock::new(0),
            change_errors: RwLock::new(VecDeque::new()),
            submissions: RwLock::new(Vec::new()),
        }
    }

    pub fn with_zones(zones: Vec<HostedZone>) -> Self {
        Self::with_pages(vec![zones])
    }

    /// Every list call waits until `parties` calls are in flight.
    #[must_use]
    pub fn with_list_barrier(mut self, parties: usize) -> Self {
        self.list_barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub fn throttling_error() -> ProviderError {
        ProviderError::RateLimited {
            provider: "route53".to_string(),
            retry_after: None,
            raw_message: Some("Rate exceeded".to_string()),
        }
    }

    pub async fn push_list_error(&self, err: ProviderError) {
        self.list_errors.write().await.push_back(err);
    }

    /// Fail the `index`-th list call (in arrival order) with `err`.
    pub async fn fail_list_call(&self, index: usize, err: ProviderError) {
        self.list_failures.write().await.insert(index, err);
    }

    pub async fn push_change_error(&self, err: ProviderError) {
        self.change_errors.write().await.push_back(err);
    }

    pub async fn list_call_count(&self) -> usize {
        self.list_markers.read().await.len()
    }

    pub async fn list_markers(&self) -> Vec<Option<String>> {
        self.list_markers.read().await.clone()
    }

    pub async fn change_call_count(&self) -> usize {
        *self.change_calls.read().await
    }

    /// Successful submissions as `(zone id, batch)`, in order.
    pub async fn submissions(&self) -> Vec<(String, ChangeBatch)> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl Route53Api for MockRoute53Api {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_hosted_zones(&self, marker: Option<&str>) -> ProviderResult<HostedZonePage> {
        let call = {
            let mut markers = self.list_markers.write().await;
            markers.push(marker.map(ToString::to_string));
            markers.len() - 1
        };

        if let Some(barrier) = &self.list_barrier {
            barrier.wait().await;
        }

        if let Some(err) = self.list_failures.write().await.remove(&call) {
            return Err(err);
        }
        if let Some(err) = self.list_errors.write().await.pop_front() {
            return Err(err);
        }

        let index = marker
            .and_then(|m| m.strip_prefix("page-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);
        let items = self.pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));

        Ok(Page::new(items, next))
    }

    async fn change_resource_record_sets(
        &self,
        hosted_zone_id: &str,
        batch: &ChangeBatch,
    ) -> ProviderResult<ChangeInfo> {
        let call = {
            let mut calls = self.change_calls.write().await;
            *calls += 1;
            *calls
        };

        if let Some(err) = self.change_errors.write().await.pop_front() {
            return Err(err);
        }

        self.submissions
            .write()
            .await
            .push((hosted_zone_id.to_string(), batch.clone()));

        Ok(ChangeInfo {
            id: format!("/change/C{call}"),
            status: ChangeStatus::Pending,
            submitted_at: None,
            comment: batch.comment.clone(),
        })
    }
}

// ===== 工厂方法 =====

/// Hosted zone with the `/hostedzone/` prefix the real API returns.
pub fn zone(id: &str, name: &str, private_zone: bool) -> HostedZone {
    HostedZone::new(format!("/hostedzone/{id}"), name, private_zone)
}

/// Domain config with defaults and an API Gateway style target.
pub fn test_domain(name: &str) -> DomainConfig {
    DomainConfig::new(
        name,
        "d-abc123.execute-api.us-east-1.amazonaws.com",
        "Z1UJRXOUMOOFQ8",
    )
}

/// Context in `us-east-1`, no pacing, at most 3 retries.
pub fn create_test_context(api: Arc<MockRoute53Api>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        api,
        Throttle::new(3, Duration::ZERO),
        "us-east-1",
    ))
}
