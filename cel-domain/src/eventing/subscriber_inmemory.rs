//! 内存订阅者（InMemorySubscriber）
//!
//! 把收到的事件按顺序保存在内存中，典型用途：测试环境、示例与本地开发。

use super::{DeliveryError, Subscriber};
use crate::user_event::UserEvent;
use async_trait::async_trait;
use parking_lot::Mutex;

pub struct InMemorySubscriber {
    name: String,
    events: Mutex<Vec<UserEvent>>,
}

impl Default for InMemorySubscriber {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl InMemorySubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// 已收到事件的副本
    pub fn events(&self) -> Vec<UserEvent> {
        self.events.lock().clone()
    }

    /// 取走已收到的事件并清空
    pub fn drain(&self) -> Vec<UserEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

#[async_trait]
impl Subscriber for InMemorySubscriber {
    fn subscriber_name(&self) -> &str {
        &self.name
    }

    async fn notify(&self, event: &UserEvent) -> Result<(), DeliveryError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
