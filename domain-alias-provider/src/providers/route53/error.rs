//! Route 53 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! ## 错误码分类
//!
//! - **限流**：Throttling, `ThrottlingException`, `PriorRequestNotComplete`, `RequestLimitExceeded`
//! - **认证错误**：`InvalidClientTokenId`, `SignatureDoesNotMatch`, `ExpiredToken`, `IncompleteSignature`, `MissingAuthenticationToken`
//! - **权限拒绝**：`AccessDenied`, `AccessDeniedException`
//! - **Zone 不存在**：`NoSuchHostedZone`
//! - **变更被拒绝**：`InvalidChangeBatch`
//! - **参数错误**：`InvalidInput`, `InvalidArgument`, `InvalidDomainName`, `NoSuchHealthCheck`
//! - **服务端错误**：`ServiceUnavailable`, `InternalFailure`
//!
//! 其余错误码 fallback 到 Unknown。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 限流 ============
            Some(
                "Throttling"
                | "ThrottlingException"
                | "PriorRequestNotComplete" // 同一 zone 上一次变更尚未完成
                | "RequestLimitExceeded",
            ) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: context.retry_after,
                raw_message: Some(raw.message),
            },

            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "ExpiredToken"
                | "IncompleteSignature"
                | "MissingAuthenticationToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Zone 不存在 ============
            Some("NoSuchHostedZone") => ProviderError::HostedZoneNotFound {
                provider: self.provider_name().to_string(),
                hosted_zone_id: context.hosted_zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 变更被拒绝 ============
            Some("InvalidChangeBatch") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages: vec![raw.message],
            },

            // ============ 参数无效 ============
            Some("NoSuchHealthCheck") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "health_check_id".to_string(),
                detail: raw.message,
            },
            Some("InvalidInput" | "InvalidArgument" | "InvalidDomainName") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "request".to_string(),
                    detail: raw.message,
                }
            }

            // ============ 服务端错误 ============
            Some("ServiceUnavailable" | "InternalFailure" | "InternalError") => {
                ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail: raw.message,
                }
            }

            // 其他错误
            _ => self.unknown_error(raw),
        }
    }
}
