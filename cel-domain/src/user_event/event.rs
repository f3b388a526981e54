use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{Attributes, ChannelContext};
use crate::error::DomainResult;
use crate::value_object::EventName;

/// 附加文本在属性表中的键
pub const EXTRA_KEY: &str = "extra";

/// CEL 事件种类；本领域只产生用户自定义事件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CelEventType {
    #[default]
    UserDefined,
}

impl CelEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CelEventType::UserDefined => "USER_DEFINED",
        }
    }
}

/// 用户自定义事件
///
/// 创建后不可变；订阅者通过共享引用读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEvent {
    /// 事件唯一标识符
    event_id: Uuid,
    /// CEL 事件种类
    event_type: CelEventType,
    /// 事件名
    name: EventName,
    /// 事件属性（构建器产出的事件仅包含 `extra`）
    attributes: Attributes,
    /// 事件发生时间
    occurred_at: DateTime<Utc>,
    /// 调用方上下文，原样透传
    context: ChannelContext,
}

impl UserEvent {
    pub fn new(name: EventName, extra: impl Into<String>, context: ChannelContext) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert(EXTRA_KEY, extra);

        Self {
            event_id: Uuid::new_v4(),
            event_type: CelEventType::UserDefined,
            name,
            attributes,
            occurred_at: Utc::now(),
            context,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> CelEventType {
        self.event_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// 附加文本；未提供时为空串
    pub fn extra(&self) -> &str {
        self.attributes.get(EXTRA_KEY).unwrap_or_default()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn context(&self) -> &ChannelContext {
        &self.context
    }

    /// 事件载荷的 CEL 形态：`{"event": <name>, "extra": {"extra": <extra>}}`
    pub fn blob(&self) -> Value {
        let extra: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();

        let mut blob = Map::new();
        blob.insert("event".to_string(), Value::String(self.name.to_string()));
        blob.insert("extra".to_string(), Value::Object(extra));
        Value::Object(blob)
    }

    /// 整个事件的单行 JSON 表示
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
