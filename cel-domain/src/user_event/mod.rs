//! 用户自定义事件（User Event）
//!
//! 定义 CEL 用户事件的不可变模型 `UserEvent`，以及把原始参数串解析为事件的 `EventBuilder`。
//! 事件携带的上下文 `ChannelContext` 由调用方提供，本模块只负责原样透传。

mod attributes;
mod builder;
mod channel_context;
mod event;

pub use attributes::Attributes;
pub use builder::{DEFAULT_DELIMITER, EventBuilder, split_arguments};
pub use channel_context::ChannelContext;
pub use event::{CelEventType, EXTRA_KEY, UserEvent};
