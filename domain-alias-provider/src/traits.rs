use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ChangeBatch, ChangeInfo, HostedZonePage};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（如 `Throttling`、`NoSuchHostedZone`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求涉及的 hosted zone（用于 `HostedZoneNotFound`）
    pub hosted_zone_id: Option<String>,
    /// `Retry-After` 响应头（用于 `RateLimited`）
    pub retry_after: Option<u64>,
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// The subset of the Route 53 API the alias-record workflow needs.
///
/// Implementations perform exactly one request per call. Retries, pacing and
/// cursor following are layered on top by [`Throttle`](crate::Throttle) and
/// [`pagination`](crate::pagination).
#[async_trait]
pub trait Route53Api: Send + Sync {
    /// Identifier used in logs and error messages.
    fn id(&self) -> &'static str;

    /// `ListHostedZones`: one page, starting at `marker` (or the beginning when `None`).
    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<HostedZonePage>;

    /// `ChangeResourceRecordSets`: submit `batch` to the zone `hosted_zone_id`.
    ///
    /// `hosted_zone_id` may be passed with or without the `/hostedzone/` prefix.
    async fn change_resource_record_sets(
        &self,
        hosted_zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeInfo>;
}
