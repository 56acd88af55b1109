//! Platform - 平台适配层
//!
//! 所有 IO 副作用都在这里实现：
//! - CLI 格式化输出
//! - 源码上下文打印

pub mod cli;

// 重导出 CLI 功能
pub use cli::{format_tokens, print_error_with_source, print_source_context, render_source_context};
