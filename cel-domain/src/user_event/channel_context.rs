use bon::Builder;
use serde::{Deserialize, Serialize};

/// 调用方上下文（发起事件的通道/会话标识）
///
/// 领域层只负责保存与透传，不读取、不修改其中任何字段。
#[derive(Builder, Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelContext {
    /// 通道名称
    channel_name: Option<String>,
    /// 通道唯一ID
    unique_id: Option<String>,
    /// 关联ID（同一通话中的多个通道共享）
    linked_id: Option<String>,
    /// 计费账号
    account_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<serde_json::Value>,
}

impl ChannelContext {
    pub fn channel_name(&self) -> Option<&str> {
        self.channel_name.as_deref()
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    pub fn linked_id(&self) -> Option<&str> {
        self.linked_id.as_deref()
    }

    pub fn account_code(&self) -> Option<&str> {
        self.account_code.as_deref()
    }

    pub fn extensions(&self) -> Option<&serde_json::Value> {
        self.extensions.as_ref()
    }
}
