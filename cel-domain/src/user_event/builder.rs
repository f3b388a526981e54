use super::{ChannelContext, UserEvent};
use crate::error::BuildError;
use crate::value_object::EventName;

/// 事件名与附加文本之间的默认分隔符
pub const DEFAULT_DELIMITER: char = ',';

/// 按第一个分隔符把原始参数拆成两段：`(event-name, extra)`
///
/// 只切一刀，其余分隔符保留在 `extra` 中；没有分隔符时 `extra` 为 `None`。
pub fn split_arguments(raw: &str, delimiter: char) -> (&str, Option<&str>) {
    match raw.split_once(delimiter) {
        Some((name, extra)) => (name, Some(extra)),
        None => (raw, None),
    }
}

/// 事件构建器：把 `"event-name[,extra]"` 解析为 `UserEvent`
///
/// 纯函数，无副作用。
#[derive(Debug, Clone, Copy)]
pub struct EventBuilder {
    delimiter: char,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// 构建事件
    ///
    /// - 原始参数为空或全是空白：返回 `Ok(None)`，调用方不应发布任何事件；
    /// - 事件名裁剪后为空：返回 `BuildError::MissingEventName`；
    /// - 未提供附加文本时，`extra` 归一化为空串。
    pub fn build(
        &self,
        raw: &str,
        context: ChannelContext,
    ) -> Result<Option<UserEvent>, BuildError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let (name, extra) = split_arguments(raw, self.delimiter);
        let name = EventName::new(name)?;

        Ok(Some(UserEvent::new(
            name,
            extra.unwrap_or_default(),
            context,
        )))
    }
}
