//! stdout 订阅者：每个事件一行 JSON

use async_trait::async_trait;
use cel_domain::eventing::{DeliveryError, Subscriber};
use cel_domain::user_event::UserEvent;
use std::io::Write;

pub struct JsonLinesSubscriber;

#[async_trait]
impl Subscriber for JsonLinesSubscriber {
    fn subscriber_name(&self) -> &str {
        "stdout-json"
    }

    async fn notify(&self, event: &UserEvent) -> Result<(), DeliveryError> {
        let line = event.to_json().map_err(anyhow::Error::from)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}").map_err(anyhow::Error::from)?;
        out.flush().map_err(anyhow::Error::from)?;
        Ok(())
    }
}
