//! 订阅者注册表（SubscriberRegistry）
//!
//! 写时复制：注册/注销时复制整张表并整体替换，发布时只克隆一次 `Arc`，
//! 因此每次发布看到的都是一致的快照；一个订阅者要么完整地在快照中，要么完全不在。
//!
use super::Subscriber;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 注册句柄，用于注销订阅者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// 注册表中的一项
#[derive(Clone)]
pub(crate) struct Registration {
    pub(crate) handle: SubscriptionHandle,
    pub(crate) subscriber: Arc<dyn Subscriber>,
}

pub(crate) type Snapshot = Arc<Vec<Registration>>;

/// 订阅者注册表
///
/// 只在注册期间持有订阅者；注销后不再保留其引用。
#[derive(Default)]
pub struct SubscriberRegistry {
    entries: RwLock<Snapshot>,
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按注册顺序追加订阅者
    pub fn register(&self, subscriber: Arc<dyn Subscriber>) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));

        let mut guard = self.entries.write();
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(Registration { handle, subscriber });
        *guard = Arc::new(next);

        handle
    }

    /// 注销订阅者；未知或已注销的句柄返回 `false`
    pub fn unregister(&self, handle: SubscriptionHandle) -> bool {
        let mut guard = self.entries.write();
        if !guard.iter().any(|r| r.handle == handle) {
            return false;
        }

        let next: Vec<Registration> = guard
            .iter()
            .filter(|r| r.handle != handle)
            .cloned()
            .collect();
        *guard = Arc::new(next);

        true
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        self.entries.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventing::DeliveryError;
    use crate::user_event::UserEvent;
    use async_trait::async_trait;

    struct Noop(&'static str);

    #[async_trait]
    impl Subscriber for Noop {
        fn subscriber_name(&self) -> &str {
            self.0
        }
        async fn notify(&self, _event: &UserEvent) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    #[test]
    fn registration_order_is_preserved() {
        let registry = SubscriberRegistry::new();
        let a = registry.register(Arc::new(Noop("a")));
        let b = registry.register(Arc::new(Noop("b")));
        let c = registry.register(Arc::new(Noop("c")));

        let names: Vec<_> = registry
            .snapshot()
            .iter()
            .map(|r| r.subscriber.subscriber_name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(a < b && b < c);
    }

    #[test]
    fn unregister_is_idempotent() {
        let registry = SubscriberRegistry::new();
        let a = registry.register(Arc::new(Noop("a")));
        registry.register(Arc::new(Noop("b")));

        assert!(registry.unregister(a));
        assert_eq!(registry.len(), 1);
        assert!(!registry.unregister(a));
        assert!(!registry.unregister(SubscriptionHandle(999)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_changes() {
        let registry = SubscriberRegistry::new();
        let a = registry.register(Arc::new(Noop("a")));
        let snapshot = registry.snapshot();

        registry.register(Arc::new(Noop("b")));
        registry.unregister(a);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].handle, a);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_releases_the_subscriber() {
        let registry = SubscriberRegistry::new();
        let sub = Arc::new(Noop("a"));
        let handle = registry.register(sub.clone());
        assert_eq!(Arc::strong_count(&sub), 2);

        registry.unregister(handle);
        assert_eq!(Arc::strong_count(&sub), 1);
    }
}
