//! lexgram - 可插拔的最长匹配词法分析器与文法定义解析器
//!
//! 一组互相独立的检查器（每个只识别一种 token）被并行驱动，
//! 按最长匹配切分字符流，并把重叠的完整匹配报告为歧义错误。
//! 在其上实现了 `name -> atom atom ...` 形式的文法定义语言。
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── api/       - Public API layer (input → output)
//! ├── core/      - Pure logic (no IO): lexer kit, grammar, config, logging
//! └── platform/  - Platform-specific adapters (CLI formatting)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lexgram::lexer::{Checker, CheckerSet};
//!
//! let set = CheckerSet::new()
//!     .with("ws", Checker::whitespace())
//!     .with("num", Checker::number())
//!     .with("op", Checker::symbols(["+", "+="]))
//!     .ignore("ws");
//! let tokens = lexgram::tokenize("1 += 2", set).unwrap();
//! assert_eq!(tokens.len(), 3);
//!
//! let grammar = lexgram::parse_grammar("pair -> <strlit> (colon) value\nvalue -> <numlit>").unwrap();
//! assert_eq!(grammar.len(), 2);
//! ```

// 核心层（纯逻辑，无 IO）
pub mod core;

// API 层（对外接口）
pub mod api;

// 平台适配层（CLI 格式化）
pub mod platform;

pub use crate::core::grammar;
pub use crate::core::kit::lexer;

// 重导出常用类型
pub use api::{
    checker_set_from_json, parse_grammar, tokenize, tokenize_grammar, tokenize_json, ErrorReport,
    LexgramError,
};
pub use crate::core::{
    config::config, config::init as init_config, logger::init_logger, logger::LogFormat, Config,
    LogConfig, Phase,
};
pub use grammar::{AtomKind, Grammar, GrammarAtom, GrammarDefinition, GrammarError};
pub use lexer::{Checker, CheckerSet, CheckerSetError, Coordinate, LexerError, Token, Tokenizer};

/// 初始化配置和日志系统
///
/// 适用于简单的使用场景，CLI 使用 platform 层自己的初始化。
///
/// 配置只能写入一次：已经初始化过时保留原有配置，并在日志就绪后记录一条 trace。
pub fn init_with_logger(config: Config, format: LogFormat) -> std::io::Result<()> {
    let fresh = crate::core::config::init(config).is_ok();
    crate::core::logger::init_with_format(format)?;
    if !fresh {
        tracing::trace!("Configuration already initialized, keeping the existing one");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_logger_keeps_existing_config() {
        let before = config().log.global;
        let cfg = Config {
            log: LogConfig {
                global: tracing::Level::ERROR,
                ..Default::default()
            },
        };
        // 日志可能已被其他测试初始化，只关心配置
        let _ = init_with_logger(cfg, LogFormat::Compact);
        assert_eq!(config().log.global, before);
    }

    #[test]
    fn test_reexports() {
        let tokens = tokenize_json("null").unwrap();
        assert_eq!(tokens[0].kind, "null");
        assert!(parse_grammar("a -> <t>").is_ok());
    }
}
