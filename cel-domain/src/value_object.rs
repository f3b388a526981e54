//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 事件名（事件类型标识）
///
/// 保存去除首尾空白后的文本，且保证非空。
///
/// # 示例
///
/// ```
/// use cel_domain::value_object::EventName;
///
/// let name = EventName::new("  HANGUP_REQUESTED ").unwrap();
/// assert_eq!(name.as_str(), "HANGUP_REQUESTED");
///
/// assert!(EventName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(String);

impl EventName {
    /// 从原始文本创建事件名，空白会被裁剪
    pub fn new(raw: impl AsRef<str>) -> Result<Self, BuildError> {
        let name = Self(raw.as_ref().trim().to_string());
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for EventName {
    type Error = BuildError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.trim().is_empty() {
            return Err(BuildError::MissingEventName);
        }
        Ok(())
    }
}

impl TryFrom<String> for EventName {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventName> for String {
    fn from(value: EventName) -> Self {
        value.0
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = EventName::new("\tMY_EVENT  ").unwrap();
        assert_eq!(name.as_str(), "MY_EVENT");
        assert_eq!(name.to_string(), "MY_EVENT");
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert_eq!(EventName::new(""), Err(BuildError::MissingEventName));
        assert_eq!(EventName::new(" \t "), Err(BuildError::MissingEventName));
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: EventName = serde_json::from_str("\"PARK\"").unwrap();
        assert_eq!(ok.as_str(), "PARK");

        let err = serde_json::from_str::<EventName>("\"  \"").unwrap_err();
        assert!(err.to_string().contains("missing event name"));
    }
}
