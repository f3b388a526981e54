//! CEL 用户自定义事件领域层（cel-domain）
//!
//! 将一次“生成用户事件”的调用拆分为两个彼此解耦的部分：
//! - 用户事件（`user_event`）：把原始参数串解析、校验为不可变的 `UserEvent`；
//! - 事件发布（`eventing`）：维护订阅者注册表，并把事件逐一投递给订阅者，汇总每个订阅者的投递结果。
//!
//! 本 crate 不关心宿主进程的模块注册与生命周期，也不关心事件最终落到哪里
//! （CDR/CEL 存储、syslog 等），这些都通过 `Subscriber` 接口在外部对接。
//!
//! 典型用法：
//! 1. 使用 `UserEventBuilder` 将 `"name,extra"` 形式的参数构建为事件；
//! 2. 构建结果为 `None` 时表示空参数，直接结束，不发布；
//! 3. 通过 `EventPublisher::publish` 投递事件，并按需记录 `PublishResult`。
//!
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod user_event;
pub mod value_object;
