//! 日志基础设施

use std::io;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化 tracing
    ///
    /// 过滤级别只取自配置文件。配置了 `log_dir` 时
    /// 额外写入按日期分割的日志文件；返回的 guard 需要保持到进程结束。
    pub fn init(config: &LoggingConfig) -> io::Result<Option<WorkerGuard>> {
        let filter = level_filter(config);

        let (file_layer, guard) = match &config.log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let appender = rolling::daily(dir, &config.file_prefix);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false) // 文件中不使用颜色
                    .with_target(false);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();

        Ok(guard)
    }
}

fn level_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::new(&config.level)
}
