//! 领域层统一错误定义
//!
//! 事件构建失败使用 `BuildError`；事件序列化失败使用 `DomainError`；
//! 投递失败由 `eventing::DeliveryError` 表达，只记录在 `PublishResult` 中，不会从 `publish` 传播出来。
//!
use thiserror::Error;

/// 事件构建错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// 原始参数非空，但拆分后事件名为空
    #[error("missing event name")]
    MissingEventName,
}

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
