//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use domain_alias_provider::{
    ClientConfig, HostedZone, Route53Api, Route53Provider, Throttle, normalize_domain_name,
    pagination,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文
pub struct TestContext {
    pub provider: Route53Provider,
    pub throttle: Throttle,
    /// 测试用域名（需在账号下存在对应 hosted zone）
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建（`AWS_*` 凭证 + `TEST_DOMAIN`）
    pub fn from_env() -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let config = ClientConfig::load(None, None).ok()?;
        let provider = Route53Provider::from_config(&config).ok()?;

        Some(Self {
            provider,
            throttle: Throttle::from_config(&config),
            domain,
        })
    }

    /// 列出全部 hosted zone
    pub async fn list_all_zones(&self) -> domain_alias_provider::Result<Vec<HostedZone>> {
        let provider = &self.provider;
        let throttle = &self.throttle;
        pagination::fetch_all(move |marker: Option<String>| async move {
            throttle
                .call("ListHostedZones", || provider.list_hosted_zones(marker.as_deref()))
                .await
        })
        .await
    }

    /// 查找测试域名所在的 hosted zone
    pub async fn find_test_zone(&self) -> Option<HostedZone> {
        let zones = self.list_all_zones().await.ok()?;
        zones
            .into_iter()
            .find(|z| normalize_domain_name(&z.name) == self.domain)
    }
}
