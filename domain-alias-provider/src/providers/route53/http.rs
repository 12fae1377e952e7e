//! Route 53 HTTP 请求方法

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, RawResponse};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;
use super::types::{ErrorResponse, InvalidChangeBatchResponse};

const XML_CONTENT_TYPE: &str = "text/xml";

impl Route53Provider {
    // ==================== 辅助方法 ====================

    /// 统一处理 Route 53 响应错误
    fn handle_response_error(&self, response: &RawResponse, mut ctx: ErrorContext) -> Result<()> {
        if response.is_success() {
            return Ok(());
        }

        ctx.retry_after = ctx.retry_after.or(response.retry_after);

        // <ErrorResponse><Error><Code>...</Code></Error></ErrorResponse>
        if let Ok(error) = quick_xml::de::from_str::<ErrorResponse>(&response.body) {
            let code = error.error.code.unwrap_or_default();
            let message = error.error.message.unwrap_or_default();
            log::warn!(
                "[route53] API error {code}: {message} (RequestId: {})",
                error.request_id.as_deref().unwrap_or("-")
            );
            return Err(self.map_error(RawApiError::with_code(code, message), ctx));
        }

        // <InvalidChangeBatch><Messages><Message>...</Message></Messages></InvalidChangeBatch>
        if let Ok(invalid) = quick_xml::de::from_str::<InvalidChangeBatchResponse>(&response.body) {
            log::warn!(
                "[route53] InvalidChangeBatch: {} (RequestId: {})",
                invalid.messages.message.join("; "),
                invalid.request_id.as_deref().unwrap_or("-")
            );
            return Err(ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages: invalid.messages.message,
            });
        }

        if response.status >= 500 {
            return Err(ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: format!("HTTP {}: {}", response.status, response.body),
            });
        }

        // 回退到通用错误
        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {}: {}",
            response.status, response.body
        ))))
    }

    fn amz_date() -> String {
        Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
    }

    /// Headers that are both sent and signed.
    fn signed_headers(&self, amz_date: &str, content_type: Option<&str>) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Amz-Date".to_string(), amz_date.to_string()),
        ];
        if let Some(token) = &self.credentials.session_token {
            headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
        }
        if let Some(content_type) = content_type {
            headers.push(("Content-Type".to_string(), content_type.to_string()));
        }
        headers
    }

    // ==================== 公开 API 方法 ====================

    /// 执行 GET 请求
    ///
    /// `query` must be canonical (see `sign::canonical_query`).
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let amz_date = Self::amz_date();
        let headers = self.signed_headers(&amz_date, None);
        let authorization = self.sign("GET", path, query, &headers, "", &amz_date);

        let url = if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        };

        let mut request = self.client.get(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.header("Authorization", authorization);

        let response =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.handle_response_error(&response, ctx)?;
        HttpUtils::parse_xml(&response.body, self.provider_name())
    }

    /// 执行 POST 请求（XML body）
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: String,
        ctx: ErrorContext,
    ) -> Result<T> {
        log::debug!("Request Body: {payload}");

        let amz_date = Self::amz_date();
        let headers = self.signed_headers(&amz_date, Some(XML_CONTENT_TYPE));
        let authorization = self.sign("POST", path, "", &headers, &payload, &amz_date);
        let url = format!("{}{path}", self.base_url);

        let mut request = self.client.post(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.header("Authorization", authorization).body(payload);

        let response =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        self.handle_response_error(&response, ctx)?;
        HttpUtils::parse_xml(&response.body, self.provider_name())
    }
}
