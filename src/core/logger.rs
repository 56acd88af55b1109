//! 日志系统初始化
//!
//! 基于 `tracing` 和 `tracing-subscriber` 实现分阶段日志控制。
//!
//! # 使用示例
//! ```ignore
//! use lexgram::core::{config, logger};
//!
//! let _ = config::init(config::Config::default());
//! logger::init_logger()?;
//! ```

use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::core::config::{self, Phase};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    #[default]
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 初始化日志系统
///
/// 根据全局配置中的日志级别设置各阶段的过滤。
pub fn init_logger() -> io::Result<()> {
    init_with_format(LogFormat::default())
}

/// 使用指定格式初始化日志系统
pub fn init_with_format(format: LogFormat) -> io::Result<()> {
    init_with_file(format, None::<&Path>)
}

/// 构建各阶段的目标过滤器
pub fn targets() -> Targets {
    let cfg = &config::config().log;
    Targets::new()
        .with_default(cfg.global)
        .with_target(Phase::Lexer.target(), cfg.level_for(Phase::Lexer))
        .with_target(Phase::Parser.target(), cfg.level_for(Phase::Parser))
        .with_target("lexgram::cli", cfg.global)
}

/// 使用文件输出初始化日志系统
///
/// # Arguments
/// * `format` - 日志格式
/// * `file` - 日志文件路径，None 表示只输出到 stderr
pub fn init_with_file<P: AsRef<Path>>(format: LogFormat, file: Option<P>) -> io::Result<()> {
    let targets = targets();
    let console = create_format_layer(format, io::stderr).with_filter(targets.clone());

    let result = match file {
        Some(path) => {
            let handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            // 文件层不带颜色
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(handle))
                .with_filter(targets);
            tracing_subscriber::registry()
                .with(console)
                .with(file_layer)
                .try_init()
        }
        None => tracing_subscriber::registry().with(console).try_init(),
    };

    result.map_err(io::Error::other)
}

/// 根据格式创建 formatter layer
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 为当前测试初始化简单日志（仅打印到控制台）
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// 检查指定阶段的日志是否启用（DEBUG 级别）
#[inline]
pub fn is_enabled(phase: Phase) -> bool {
    match phase {
        Phase::Lexer => tracing::enabled!(target: "lexgram::lexer", tracing::Level::DEBUG),
        Phase::Parser => tracing::enabled!(target: "lexgram::parser", tracing::Level::DEBUG),
    }
}

/// 创建指定阶段的 span
#[macro_export]
macro_rules! phase_span {
    ($phase:expr, $name:expr) => {
        match $phase {
            $crate::core::config::Phase::Lexer => tracing::span!(target: "lexgram::lexer", tracing::Level::DEBUG, $name),
            $crate::core::config::Phase::Parser => tracing::span!(target: "lexgram::parser", tracing::Level::DEBUG, $name),
        }
    };
    ($phase:expr, $name:expr, $($field:tt)*) => {
        match $phase {
            $crate::core::config::Phase::Lexer => tracing::span!(target: "lexgram::lexer", tracing::Level::DEBUG, $name, $($field)*),
            $crate::core::config::Phase::Parser => tracing::span!(target: "lexgram::parser", tracing::Level::DEBUG, $name, $($field)*),
        }
    };
}
