//! 可插拔的最长匹配词法分析器
//!
//! - [`checker`]：单一类别的识别自动机
//! - [`CheckerSet`]：有序的检查器集合与忽略列表
//! - [`Tokenizer`]：驱动任意检查器集合的扫描引擎

pub mod checker;
pub mod checker_set;
pub mod error;
pub mod sets;
pub mod spec;
pub mod tokenizer;
pub mod types;

pub use checker::{Checker, Feed};
pub use checker_set::{CheckerSet, CheckerSetError};
pub use error::{LexErrorKind, LexerError};
pub use spec::{CheckerSetSpec, CheckerSpec, NamedCheckerSpec};
pub use tokenizer::Tokenizer;
pub use types::{Coordinate, Token};
