//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//! 库代码只调用 `tracing` 宏，从不安装 subscriber；
//! 由可执行程序（例如 `demos/load_obj.rs`）在启动时调用 [`init_logger`]。
//!
//! # 使用示例
//!
//! ```no_run
//! use shape_meshes::core::{config::LogLevel, log};
//!
//! log::init_logger(LogLevel::Info, false, None);
//! tracing::info!(vertices = 8, "mesh ready");
//! ```

use std::path::Path;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::config::LogLevel;

/// 默认日志文件名
const DEFAULT_LOG_FILE: &str = "shape_meshes.log";

/// 初始化日志系统
///
/// 必须在程序开始时调用一次。`RUST_LOG` 环境变量存在时优先于 `level`。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否同时输出到文件（每天滚动）
/// * `log_file_path` - 日志文件路径（可选，默认为 "shape_meshes.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(true);

    let file_layer = file_output.then(|| {
        let path = Path::new(log_file_path.unwrap_or(DEFAULT_LOG_FILE));
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_LOG_FILE);

        fmt::layer()
            .with_target(true)
            .with_ansi(false) // 文件不需要 ANSI 颜色
            .with_writer(RollingFileAppender::new(Rotation::DAILY, directory, filename))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// 日志级别对应的 `EnvFilter` 指令
fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
