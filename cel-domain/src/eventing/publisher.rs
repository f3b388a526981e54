//! 事件发布器（EventPublisher）
//!
//! 把一个用户事件投递给发布开始时已注册的全部订阅者：
//! - 获取注册表快照，发布期间的注册/注销不影响本次投递；
//! - 按注册顺序调用 `notify`，失败、超时与 panic 都只记录在对应的结果槽位；
//! - 不做重试，全部订阅者尝试完毕后返回 `PublishResult`。
//!
use super::registry::{Registration, SubscriberRegistry, SubscriptionHandle};
use super::{DeliveryError, Subscriber};
use crate::user_event::UserEvent;
use bon::Builder;
use futures_util::{FutureExt, StreamExt, stream};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

/// 事件发布器
#[derive(Builder)]
pub struct EventPublisher {
    #[builder(skip)]
    registry: SubscriberRegistry,
    #[builder(default)]
    config: PublisherConfig,
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EventPublisher {
    pub fn new(config: PublisherConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// 注册订阅者，返回用于注销的句柄
    pub fn register(&self, subscriber: Arc<dyn Subscriber>) -> SubscriptionHandle {
        let handle = self.registry.register(subscriber);
        tracing::debug!(%handle, "subscriber registered");
        handle
    }

    /// 注销订阅者；重复注销或未知句柄不报错
    pub fn unregister(&self, handle: SubscriptionHandle) -> bool {
        let removed = self.registry.unregister(handle);
        if removed {
            tracing::debug!(%handle, "subscriber unregistered");
        }
        removed
    }

    /// 当前已注册的订阅者数量
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// 发布事件
    ///
    /// 结果的长度等于发布开始时的订阅者数量，顺序与注册顺序一致。
    pub async fn publish(&self, event: &UserEvent) -> PublishResult {
        let snapshot = self.registry.snapshot();
        let timeout = self.config.delivery_timeout;
        let concurrency = self.config.delivery_concurrency.max(1);

        tracing::debug!(
            event_id = %event.event_id(),
            event = event.name(),
            subscribers = snapshot.len(),
            "publishing user event"
        );

        let deliveries: Vec<_> = snapshot
            .iter()
            .map(|registration| Self::deliver(registration, event, timeout))
            .collect();

        let outcomes: Vec<DeliveryOutcome> = stream::iter(deliveries)
            .buffered(concurrency)
            .collect()
            .await;

        PublishResult {
            event_id: event.event_id(),
            outcomes,
        }
    }

    async fn deliver(
        registration: &Registration,
        event: &UserEvent,
        timeout: Option<Duration>,
    ) -> DeliveryOutcome {
        let subscriber = registration.subscriber.subscriber_name();
        let notify = AssertUnwindSafe(registration.subscriber.notify(event)).catch_unwind();

        let caught = match timeout {
            Some(limit) => match time::timeout(limit, notify).await {
                Ok(caught) => caught,
                Err(_) => Ok(Err(DeliveryError::TimedOut { timeout: limit })),
            },
            None => notify.await,
        };

        let result = caught.unwrap_or_else(|panic| {
            Err(DeliveryError::Panicked {
                message: panic_message(panic.as_ref()),
            })
        });

        match &result {
            Ok(()) => {
                tracing::debug!(handle = %registration.handle, subscriber, "user event delivered");
            }
            Err(err) => {
                tracing::warn!(
                    handle = %registration.handle,
                    subscriber,
                    event_id = %event.event_id(),
                    event = event.name(),
                    error = %err,
                    "user event delivery failed"
                );
            }
        }

        DeliveryOutcome {
            handle: registration.handle,
            subscriber: subscriber.to_string(),
            result,
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// 发布器配置
#[derive(Clone, Copy, Debug)]
pub struct PublisherConfig {
    /// 单个订阅者的投递超时，`None` 表示不限时
    pub delivery_timeout: Option<Duration>,
    /// 同一事件同时投递的订阅者数量上限；1 表示严格逐个投递
    pub delivery_concurrency: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            delivery_timeout: None,
            delivery_concurrency: 1,
        }
    }
}

/// 单个订阅者的投递结果
#[derive(Debug)]
pub struct DeliveryOutcome {
    handle: SubscriptionHandle,
    subscriber: String,
    result: Result<(), DeliveryError>,
}

impl DeliveryOutcome {
    pub fn handle(&self) -> SubscriptionHandle {
        self.handle
    }

    pub fn subscriber_name(&self) -> &str {
        &self.subscriber
    }

    pub fn result(&self) -> &Result<(), DeliveryError> {
        &self.result
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&DeliveryError> {
        self.result.as_ref().err()
    }
}

/// 一次发布的汇总结果，按注册顺序排列
#[derive(Debug)]
pub struct PublishResult {
    event_id: Uuid,
    outcomes: Vec<DeliveryOutcome>,
}

impl PublishResult {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn outcomes(&self) -> &[DeliveryOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<DeliveryOutcome> {
        self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// 所有订阅者均投递成功（没有订阅者时也视为成功）
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(DeliveryOutcome::is_success)
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DeliveryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}
