//! Provider 公共工具函数

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;

use crate::config::HttpOptions;
use crate::error::{ProviderError, Result};

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 创建带超时与代理配置的 HTTP Client
pub fn create_http_client(options: &HttpOptions, provider: &str) -> Result<Client> {
    let mut builder = Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout);

    if let Some(proxy_url) = &options.proxy {
        let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: "proxy".to_string(),
            detail: e.to_string(),
        })?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(|e| ProviderError::NetworkError {
        provider: provider.to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 计算（SigV4 签名密钥派生与签名）
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// 去掉 hosted zone id 的 `/hostedzone/` 前缀
/// 如: "/hostedzone/Z123" -> "Z123"
pub fn trim_hosted_zone_id(id: &str) -> &str {
    id.strip_prefix("/hostedzone/").unwrap_or(id)
}
