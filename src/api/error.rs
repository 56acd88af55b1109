//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

use crate::core::config::Phase;
use crate::core::grammar::{GrammarError, SemanticErrorKind, SyntaxErrorKind};
pub use crate::core::kit::lexer::{CheckerSetError, LexErrorKind, LexerError};

/// lexgram 错误类型
#[derive(Error, Debug)]
pub enum LexgramError {
    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// 文法解析或校验错误
    #[error("{0}")]
    Grammar(#[from] GrammarError),

    /// 检查器集合配置错误
    #[error("Checker set error: {0}")]
    CheckerSet(#[from] CheckerSetError),

    /// 读取输入失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexgramError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            LexgramError::Lexer(e) => Some(e.line()),
            LexgramError::Grammar(e) => Some(e.line()),
            LexgramError::CheckerSet(_) | LexgramError::Io(_) => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            LexgramError::Lexer(e) => Some(e.column()),
            LexgramError::Grammar(e) => e.column(),
            LexgramError::CheckerSet(_) | LexgramError::Io(_) => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            LexgramError::Lexer(_) | LexgramError::Grammar(GrammarError::Lexer(_)) => {
                Phase::Lexer.as_str()
            }
            LexgramError::Grammar(GrammarError::Syntax(_)) => Phase::Parser.as_str(),
            LexgramError::Grammar(GrammarError::Semantic(_)) => "validation",
            LexgramError::CheckerSet(_) => "config",
            LexgramError::Io(_) => "io",
        }
    }

    fn error_kind(&self) -> &'static str {
        match self {
            LexgramError::Lexer(e) | LexgramError::Grammar(GrammarError::Lexer(e)) => {
                match e.kind {
                    LexErrorKind::UnexpectedCharacter(_) => "UnexpectedCharacter",
                    LexErrorKind::InvalidCharacter { .. } => "InvalidCharacter",
                    LexErrorKind::NoCompleteCandidate => "NoCompleteCandidate",
                    LexErrorKind::AmbiguousToken { .. } => "AmbiguousToken",
                    LexErrorKind::Unterminated { .. } => "Unterminated",
                }
            }
            LexgramError::Grammar(GrammarError::Syntax(e)) => match e.kind {
                SyntaxErrorKind::ExpectedIdentifier { .. } => "ExpectedIdentifier",
                SyntaxErrorKind::ExpectedArrow { .. } => "ExpectedArrow",
                SyntaxErrorKind::ExpectedDefinition => "ExpectedDefinition",
                SyntaxErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
                SyntaxErrorKind::ExpectedClosing { .. } => "ExpectedClosing",
                SyntaxErrorKind::UnexpectedEndOfDefinition => "UnexpectedEndOfDefinition",
            },
            LexgramError::Grammar(GrammarError::Semantic(e)) => match e.kind {
                SemanticErrorKind::EmptyDefinition { .. } => "EmptyDefinition",
                SemanticErrorKind::ReferenceNotAlone { .. } => "ReferenceNotAlone",
                SemanticErrorKind::SelfReference { .. } => "SelfReference",
                SemanticErrorKind::UndefinedSymbol { .. } => "UndefinedSymbol",
            },
            LexgramError::CheckerSet(_) => "CheckerSetError",
            LexgramError::Io(_) => "IoError",
        }
    }

    fn bare_message(&self) -> String {
        match self {
            LexgramError::Lexer(e) | LexgramError::Grammar(GrammarError::Lexer(e)) => e.message(),
            LexgramError::Grammar(GrammarError::Syntax(e)) => e.message(),
            LexgramError::Grammar(GrammarError::Semantic(e)) => e.message(),
            other => other.to_string(),
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            error_kind: self.error_kind().to_string(),
            message: self.bare_message(),
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: lexer, parser, validation, config, io
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            (Some(line), None) => write!(f, "[{}] {} error: {}", line, self.phase, self.message),
            _ => write!(f, "{} error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式（工具集成使用）
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// 转换为简短格式（单行）
    pub fn to_short(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(col)) => format!("{}:{}: {}", line, col, self.message),
            (Some(line), None) => format!("{}: {}", line, self.message),
            _ => self.message.clone(),
        }
    }
}
