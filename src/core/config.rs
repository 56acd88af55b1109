//! 全局配置系统
//!
//! 提供线程安全的全局配置单例，目前只包含分阶段的日志级别。
//!
//! # 使用示例
//! ```
//! use lexgram::core::config::{self, Config, LogConfig};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//! };
//!
//! let _ = config::init(cfg);
//! assert!(config::is_initialized());
//! ```

use once_cell::sync::OnceCell;
use tracing::Level;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// 初始化全局配置（只能成功一次）
///
/// 已经初始化时原样返回传入的配置。
pub fn init(config: Config) -> Result<(), Config> {
    GLOBAL_CONFIG.set(config)
}

/// 获取全局配置引用
///
/// 未初始化时使用默认配置。
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get_or_init(Config::default)
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// 全局配置结构
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 日志配置
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 全局默认日志级别
    pub global: Level,
    /// Lexer 日志级别（None 表示使用 global）
    pub lexer: Option<Level>,
    /// Parser 日志级别
    pub parser: Option<Level>,
}

/// 处理阶段
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
}

impl LogConfig {
    /// 获取指定阶段的实际日志级别
    ///
    /// 如果该阶段有特定配置则返回特定级别，否则返回全局级别
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Parser => self.parser,
        };
        specific.unwrap_or(self.global)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            lexer: None,
            parser: None,
        }
    }
}

impl Phase {
    /// 获取阶段的字符串名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
        }
    }

    /// 获取阶段的日志目标名称
    pub fn target(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexgram::lexer",
            Phase::Parser => "lexgram::parser",
        }
    }
}
