//! 日志订阅者（LogSubscriber）
//!
//! 每个事件输出一条结构化的 `tracing` 记录（target 为 `cel`），
//! 便于在没有专门存储后端时观察事件流。

use super::{DeliveryError, Subscriber};
use crate::user_event::UserEvent;
use async_trait::async_trait;

pub const LOG_TARGET: &str = "cel";

pub struct LogSubscriber {
    name: String,
}

impl Default for LogSubscriber {
    fn default() -> Self {
        Self::new("log")
    }
}

impl LogSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Subscriber for LogSubscriber {
    fn subscriber_name(&self) -> &str {
        &self.name
    }

    async fn notify(&self, event: &UserEvent) -> Result<(), DeliveryError> {
        let ctx = event.context();
        tracing::info!(
            target: LOG_TARGET,
            event_id = %event.event_id(),
            event_type = event.event_type().as_str(),
            event = event.name(),
            extra = event.extra(),
            occurred_at = %event.occurred_at(),
            channel = ctx.channel_name(),
            unique_id = ctx.unique_id(),
            linked_id = ctx.linked_id(),
            "user event"
        );
        Ok(())
    }
}
