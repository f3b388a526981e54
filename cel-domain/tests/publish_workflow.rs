use anyhow::Result as AnyResult;
use cel_domain::error::BuildError;
use cel_domain::eventing::{
    DeliveryError, EventPublisher, InMemorySubscriber, PublisherConfig, Subscriber,
};
use cel_domain::user_event::{ChannelContext, EventBuilder, UserEvent};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::task::JoinSet;

struct AlwaysFails {
    attempts: AtomicUsize,
}

#[async_trait::async_trait]
impl Subscriber for AlwaysFails {
    fn subscriber_name(&self) -> &str {
        "always-fails"
    }

    async fn notify(&self, _event: &UserEvent) -> Result<(), DeliveryError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        Err(anyhow::anyhow!("backend unavailable").into())
    }
}

fn ctx(unique_id: &str) -> ChannelContext {
    ChannelContext::builder()
        .channel_name(format!("PJSIP/{unique_id}"))
        .unique_id(unique_id.to_string())
        .build()
}

#[tokio::test(flavor = "multi_thread")]
async fn build_then_publish_full_workflow() -> AnyResult<()> {
    let builder = EventBuilder::new();
    let publisher = EventPublisher::default();

    let first = Arc::new(InMemorySubscriber::new("first"));
    let failing = Arc::new(AlwaysFails {
        attempts: AtomicUsize::new(0),
    });
    let last = Arc::new(InMemorySubscriber::new("last"));
    publisher.register(first.clone());
    publisher.register(failing.clone());
    publisher.register(last.clone());

    let event = builder
        .build("QUEUE_JOIN,queue=sales, priority=5", ctx("1700000000.1"))?
        .expect("non-empty input builds an event");
    let result = publisher.publish(&event).await;

    assert_eq!(result.len(), 3);
    assert_eq!(result.success_count(), 2);
    assert!(matches!(
        result.outcomes()[1].error(),
        Some(DeliveryError::Other(_))
    ));
    // 失败不重试
    assert_eq!(failing.attempts.load(Ordering::Relaxed), 1);

    let received = last.events();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0], event);
    assert_eq!(
        received[0].blob(),
        json!({"event": "QUEUE_JOIN", "extra": {"extra": "queue=sales, priority=5"}})
    );
    assert_eq!(received[0].context().unique_id(), Some("1700000000.1"));
    assert_eq!(first.len(), 1);
    Ok(())
}

#[tokio::test]
async fn noop_and_missing_name_never_reach_subscribers() -> AnyResult<()> {
    let builder = EventBuilder::new();
    let publisher = EventPublisher::default();
    let sink = Arc::new(InMemorySubscriber::default());
    publisher.register(sink.clone());

    for raw in ["", "   "] {
        if let Some(event) = builder.build(raw, ChannelContext::default())? {
            publisher.publish(&event).await;
        }
    }
    assert_eq!(
        builder.build(",extra", ChannelContext::default()),
        Err(BuildError::MissingEventName)
    );

    assert!(sink.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_publishers_and_registrations_are_safe() -> AnyResult<()> {
    let publisher = Arc::new(EventPublisher::new(PublisherConfig {
        delivery_timeout: Some(Duration::from_secs(5)),
        delivery_concurrency: 2,
    }));
    let sink = Arc::new(InMemorySubscriber::default());
    publisher.register(sink.clone());

    let mut set = JoinSet::new();
    for i in 0..50 {
        let publisher = publisher.clone();
        set.spawn(async move {
            let event = EventBuilder::new()
                .build(&format!("LEG_{i},n={i}"), ctx(&format!("leg-{i}")))
                .unwrap()
                .unwrap();
            publisher.publish(&event).await
        });
    }
    let mut extra_handles = Vec::new();
    for _ in 0..10 {
        extra_handles.push(publisher.register(Arc::new(InMemorySubscriber::new("late"))));
    }

    while let Some(res) = set.join_next().await {
        let result = res?;
        // 快照：要么只看到初始订阅者，要么还包含若干个后注册的订阅者，但都投递成功
        assert!((1..=11).contains(&result.len()));
        assert!(result.is_success());
    }
    assert_eq!(sink.len(), 50);

    for handle in extra_handles {
        assert!(publisher.unregister(handle));
    }
    assert_eq!(publisher.len(), 1);
    Ok(())
}
