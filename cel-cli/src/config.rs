//! 命令行配置
//!
//! 优先级：命令行参数 > 环境变量 > 配置文件（TOML） > 默认值。
//!
use anyhow::Context;
use cel_domain::eventing::PublisherConfig;
use cel_domain::user_event::DEFAULT_DELIMITER;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 事件输出方式（变量文档会出现在 `--help` 中）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON line per event on stdout
    #[default]
    Json,
    /// Structured log records on stderr
    Log,
    /// Publish without any subscriber
    None,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// 事件名与附加文本之间的分隔符
    pub delimiter: char,
    /// 未设置 `RUST_LOG` 时使用的日志过滤规则
    pub log_filter: String,
    pub output: OutputFormat,
    /// 有订阅者投递失败时以非零码退出
    pub strict: bool,
    pub publisher: PublisherSection,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            log_filter: "info".to_string(),
            output: OutputFormat::default(),
            strict: false,
            publisher: PublisherSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherSection {
    pub delivery_timeout_ms: Option<u64>,
    pub delivery_concurrency: usize,
}

impl Default for PublisherSection {
    fn default() -> Self {
        let defaults = PublisherConfig::default();
        Self {
            delivery_timeout_ms: defaults.delivery_timeout.map(|d| d.as_millis() as u64),
            delivery_concurrency: defaults.delivery_concurrency,
        }
    }
}

impl CliConfig {
    /// 读取配置文件；未指定路径时使用默认值
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig {
            delivery_timeout: self.publisher.delivery_timeout_ms.map(Duration::from_millis),
            delivery_concurrency: self.publisher.delivery_concurrency.max(1),
        }
    }
}
