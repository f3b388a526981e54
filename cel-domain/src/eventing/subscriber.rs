//! 订阅者（Subscriber）协议
//!
//! 定义事件消费者的名称与投递接口，以及投递失败的错误类型。
//!
use crate::user_event::UserEvent;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 单个订阅者的投递错误
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// 订阅者拒绝或处理失败（原因由订阅者定义）
    #[error("delivery rejected: {reason}")]
    Rejected { reason: String },
    #[error("delivery timed out after {timeout:?}")]
    TimedOut { timeout: Duration },
    #[error("subscriber panicked: {message}")]
    Panicked { message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeliveryError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        DeliveryError::Rejected {
            reason: reason.into(),
        }
    }
}

/// 订阅者：接收已发布的用户事件
#[async_trait]
pub trait Subscriber: Send + Sync {
    /// 订阅者名称（用于投递结果与日志）
    fn subscriber_name(&self) -> &str;

    /// 接收一个事件
    async fn notify(&self, event: &UserEvent) -> Result<(), DeliveryError>;
}
