//! Core - 纯逻辑，无 IO
//!
//! 包含词法分析和文法定义解析的核心逻辑，
//! 只操作内存数据结构，不包含任何文件 IO 或终端输出。

pub mod config;
pub mod grammar;
pub mod kit;
pub mod logger;

// 重导出常用类型
pub use config::{Config, LogConfig, Phase};
