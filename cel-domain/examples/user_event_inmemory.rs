/// 用户事件发布（内存版）示例
/// 展示 原始参数 -> EventBuilder -> EventPublisher -> 多个订阅者 的流程，以及单个订阅者失败时的结果汇总
use anyhow::Result as AnyResult;
use cel_domain::eventing::{
    DeliveryError, EventPublisher, InMemorySubscriber, LogSubscriber, PublisherConfig, Subscriber,
};
use cel_domain::user_event::{ChannelContext, EventBuilder, UserEvent};
use std::{sync::Arc, time::Duration};

// ============================================================================
// 只接受特定事件名的订阅者
// ============================================================================

struct PickyBackend;

#[async_trait::async_trait]
impl Subscriber for PickyBackend {
    fn subscriber_name(&self) -> &str {
        "picky"
    }

    async fn notify(&self, event: &UserEvent) -> Result<(), DeliveryError> {
        if event.name().starts_with("BILLING_") {
            println!("💾 picky 收到: {} ({})", event.name(), event.extra());
            Ok(())
        } else {
            Err(DeliveryError::rejected(format!(
                "unsupported event {}",
                event.name()
            )))
        }
    }
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(true)
        .init();

    let publisher = EventPublisher::new(PublisherConfig {
        delivery_timeout: Some(Duration::from_secs(1)),
        ..Default::default()
    });

    let memory = Arc::new(InMemorySubscriber::default());
    publisher.register(Arc::new(LogSubscriber::default()));
    let picky = publisher.register(Arc::new(PickyBackend));
    publisher.register(memory.clone());
    println!("✅ 已注册 {} 个订阅者", publisher.len());

    let builder = EventBuilder::new();
    let ctx = ChannelContext::builder()
        .channel_name("PJSIP/alice-00000001".to_string())
        .unique_id("1700000000.1".to_string())
        .linked_id("1700000000.1".to_string())
        .build();

    for raw in [
        "BILLING_START,plan=gold, region=eu",
        "CALL_TAGGED,vip",
        "   ",
    ] {
        let Some(event) = builder.build(raw, ctx.clone())? else {
            println!("⏭️  空参数，跳过发布: {raw:?}");
            continue;
        };

        let result = publisher.publish(&event).await;
        println!(
            "📨 {}: 成功 {} / 失败 {}",
            event.name(),
            result.success_count(),
            result.failure_count()
        );
        for failed in result.failures() {
            if let Some(err) = failed.error() {
                println!("   ❌ {} -> {}", failed.subscriber_name(), err);
            }
        }
    }

    publisher.unregister(picky);
    println!("\n--- 注销 picky 后 ---");
    let event = builder
        .build("CALL_TAGGED,again", ctx)?
        .ok_or_else(|| anyhow::anyhow!("unexpected no-op"))?;
    let result = publisher.publish(&event).await;
    println!("📨 {}: 投递给 {} 个订阅者", event.name(), result.len());

    println!("\n✅ 内存订阅者共收到 {} 个事件", memory.len());
    for ev in memory.events() {
        println!("   {}", ev.blob());
    }
    Ok(())
}
