//! 生成用户事件（CELGenUserEvent）
//!
//! 入站调用面：接收一段 `"event-name[,extra]"` 参数与调用方上下文，
//! 构建用户事件并发布。空参数静默返回；事件名缺失返回构建错误；
//! 投递失败只记录日志并随 `PublishResult` 交给调用方，不作为错误返回。
//!
use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
};
use async_trait::async_trait;
use cel_domain::eventing::{EventPublisher, PublishResult};
use cel_domain::user_event::EventBuilder;
use std::sync::Arc;

/// 生成一个用户自定义事件
#[derive(Debug, Clone)]
pub struct GenUserEvent {
    /// 原始参数：`event-name[,extra]`
    pub data: String,
}

impl GenUserEvent {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Command for GenUserEvent {
    const NAME: &'static str = "CELGenUserEvent";

    /// `None` 表示空参数，未发布任何事件
    type Output = Option<PublishResult>;
}

pub struct GenUserEventHandler {
    event_builder: EventBuilder,
    publisher: Arc<EventPublisher>,
}

impl GenUserEventHandler {
    pub fn new(publisher: Arc<EventPublisher>) -> Self {
        Self {
            event_builder: EventBuilder::default(),
            publisher,
        }
    }

    pub fn with_event_builder(mut self, event_builder: EventBuilder) -> Self {
        self.event_builder = event_builder;
        self
    }
}

#[async_trait]
impl CommandHandler<GenUserEvent> for GenUserEventHandler {
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: GenUserEvent,
    ) -> Result<Option<PublishResult>, AppError> {
        let Some(event) = self.event_builder.build(&cmd.data, ctx.channel.clone())? else {
            tracing::debug!(command = GenUserEvent::NAME, "empty argument, nothing published");
            return Ok(None);
        };

        let result = self.publisher.publish(&event).await;

        if result.is_success() {
            tracing::debug!(
                command = GenUserEvent::NAME,
                event = event.name(),
                delivered = result.len(),
                "user event published"
            );
        } else {
            tracing::warn!(
                command = GenUserEvent::NAME,
                event = event.name(),
                delivered = result.success_count(),
                failed = result.failure_count(),
                "user event published with delivery failures"
            );
        }

        Ok(Some(result))
    }
}
