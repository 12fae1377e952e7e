//! 类型定义模块

mod domain;

pub use domain::{
    AliasTargetConfig, DEFAULT_WEIGHT, DomainConfig, Route53Params, RoutingOptions, RoutingPolicy,
};

// Re-export provider 库的公共类型
pub use domain_alias_provider::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone,
    RecordType, ResourceRecordSet,
};
