//! 事件发布子系统（eventing）
//!
//! 提供用户事件的注册/发布基础设施：
//! - `Subscriber`：事件消费者协议，逐个接收事件；
//! - `SubscriberRegistry`：写时复制的订阅者注册表，发布时获取一致快照；
//! - `EventPublisher`：按注册顺序投递事件，单个订阅者失败不影响其余订阅者，返回逐个订阅者的结果；
//! - `LogSubscriber` / `InMemorySubscriber`：内置的日志与内存订阅者。
//!
//! 该模块不绑定具体的存储或传输实现，任何后端都可以通过实现 `Subscriber` 接入。
//!
pub mod publisher;
pub mod registry;
pub mod subscriber;
pub mod subscriber_inmemory;
pub mod subscriber_log;

pub use publisher::{DeliveryOutcome, EventPublisher, PublishResult, PublisherConfig};
pub use registry::{SubscriberRegistry, SubscriptionHandle};
pub use subscriber::{DeliveryError, Subscriber};
pub use subscriber_inmemory::InMemorySubscriber;
pub use subscriber_log::LogSubscriber;
