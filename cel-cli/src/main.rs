//! celgen：命令行生成 CEL 用户自定义事件
//!
//! 参数 `event-name[,extra]` 经 `GenUserEventHandler` 构建并发布，事件按配置输出为 JSON 行或日志。
//! 用户可见的 `--help` 文本保持英文。

mod config;
mod output;

use anyhow::Result;
use cel_application::command_handler::CommandHandler;
use cel_application::context::AppContext;
use cel_application::error::AppError;
use cel_application::{GenUserEvent, GenUserEventHandler};
use cel_domain::eventing::{EventPublisher, LogSubscriber, PublishResult};
use cel_domain::user_event::{ChannelContext, EventBuilder};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::{CliConfig, OutputFormat};
use crate::output::JsonLinesSubscriber;

const EXIT_FAILURE: u8 = 1;
const EXIT_BUILD_ERROR: u8 = 3;
const EXIT_DELIVERY_FAILED: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "celgen",
    version,
    about = "Generate a user-defined CEL event"
)]
struct Cli {
    /// Event arguments: `event-name[,extra]`. Empty input publishes nothing
    #[arg(allow_hyphen_values = true)]
    data: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "CELGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Originating channel name
    #[arg(long)]
    channel: Option<String>,

    /// Originating channel unique id
    #[arg(long)]
    unique_id: Option<String>,

    /// Linked id shared by the channels of one call
    #[arg(long)]
    linked_id: Option<String>,

    /// Account code of the originating channel
    #[arg(long)]
    account_code: Option<String>,

    /// Separator between event name and extra text
    #[arg(long)]
    delimiter: Option<char>,

    /// Per-subscriber delivery timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Maximum number of subscribers notified at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Where published events go
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Exit non-zero when any subscriber fails
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.publisher.delivery_timeout_ms = Some(timeout_ms);
        }
        if let Some(concurrency) = self.concurrency {
            config.publisher.delivery_concurrency = concurrency;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.strict |= self.strict;

        Ok(config)
    }

    fn channel_context(&self) -> ChannelContext {
        ChannelContext::builder()
            .maybe_channel_name(self.channel.clone())
            .maybe_unique_id(self.unique_id.clone())
            .maybe_linked_id(self.linked_id.clone())
            .maybe_account_code(self.account_code.clone())
            .build()
    }
}

fn setup_logging(config: &CliConfig) {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("celgen: {err:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    setup_logging(&config);

    let outcome = run(&cli, &config).await;
    ExitCode::from(exit_code(&outcome, config.strict))
}

async fn run(cli: &Cli, config: &CliConfig) -> Result<Option<PublishResult>, AppError> {
    let publisher = Arc::new(EventPublisher::new(config.publisher_config()));
    match config.output {
        OutputFormat::Json => {
            publisher.register(Arc::new(JsonLinesSubscriber));
        }
        OutputFormat::Log => {
            publisher.register(Arc::new(LogSubscriber::default()));
        }
        OutputFormat::None => {}
    }

    let handler = GenUserEventHandler::new(publisher)
        .with_event_builder(EventBuilder::new().with_delimiter(config.delimiter));
    let ctx = AppContext {
        channel: cli.channel_context(),
    };

    handler
        .handle(&ctx, GenUserEvent::new(cli.data.clone().unwrap_or_default()))
        .await
}

/// 0：成功或空参数；3：参数构建失败；4：`--strict` 下有订阅者投递失败；1：其他错误
fn exit_code(outcome: &Result<Option<PublishResult>, AppError>, strict: bool) -> u8 {
    match outcome {
        Ok(Some(result)) if strict && !result.is_success() => {
            for failed in result.failures() {
                if let Some(err) = failed.error() {
                    tracing::error!(
                        subscriber = failed.subscriber_name(),
                        error = %err,
                        "user event delivery failed"
                    );
                }
            }
            EXIT_DELIVERY_FAILED
        }
        Ok(_) => 0,
        Err(err) => {
            tracing::error!(error = %err, "user event not generated");
            if err.is_build_error() {
                EXIT_BUILD_ERROR
            } else {
                EXIT_FAILURE
            }
        }
    }
}
