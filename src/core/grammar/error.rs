//! 文法解析错误
//!
//! - [`SyntaxError`]：逐行分组和原子状态机发现的结构错误
//! - [`SemanticError`]：全部定义收集完之后的校验错误
//! - [`GrammarError`]：解析入口的统一错误（含词法错误）

use thiserror::Error;

use crate::core::kit::lexer::LexerError;

fn write_location(
    f: &mut std::fmt::Formatter<'_>,
    line: usize,
    column: Option<usize>,
) -> std::fmt::Result {
    match column {
        Some(column) => write!(f, "[{}:{}] ", line, column),
        None => write!(f, "[{}] ", line),
    }
}

/// 语法错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// 定义必须以标识符开头
    ExpectedIdentifier { found: String },
    /// 定义名之后必须是 `->`
    ExpectedArrow { name: String, found: String },
    /// `->` 之后没有任何原子
    ExpectedDefinition,
    /// 当前状态不接受该 token
    UnexpectedToken { found: String },
    /// 缺少闭合定界符
    ExpectedClosing { expected: char, found: String },
    /// 行结束时原子尚未闭合
    UnexpectedEndOfDefinition,
}

/// 语法错误，包含位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    /// 触发错误的 token 提供列号时才有
    pub column: Option<usize>,
}

impl SyntaxError {
    pub fn at(kind: SyntaxErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column: Some(column),
        }
    }

    pub fn on_line(kind: SyntaxErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            column: None,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            SyntaxErrorKind::ExpectedIdentifier { found } => {
                format!("Expected identifier, '{}' found", found.escape_debug())
            }
            SyntaxErrorKind::ExpectedArrow { name, found } => {
                format!(
                    "Expected '->' after '{}', '{}' found",
                    name,
                    found.escape_debug()
                )
            }
            SyntaxErrorKind::ExpectedDefinition => "Expected definition after '->'".to_string(),
            SyntaxErrorKind::UnexpectedToken { found } => {
                format!("Unexpected token '{}'", found.escape_debug())
            }
            SyntaxErrorKind::ExpectedClosing { expected, found } => {
                format!("Expected '{}', '{}' found", expected, found.escape_debug())
            }
            SyntaxErrorKind::UnexpectedEndOfDefinition => {
                "Unexpected end of definition".to_string()
            }
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_location(f, self.line, self.column)?;
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SyntaxError {}

/// 语义错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// 定义体为空
    EmptyDefinition { name: String },
    /// 引用原子必须是定义中唯一的原子
    ReferenceNotAlone { name: String },
    /// 单原子定义直接引用自身
    SelfReference { name: String },
    /// 引用了不存在的定义
    UndefinedSymbol { name: String },
}

/// 语义错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub line: usize,
    pub column: Option<usize>,
}

impl SemanticError {
    pub fn on_line(kind: SemanticErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            column: None,
        }
    }

    pub fn at(kind: SemanticErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column: Some(column),
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            SemanticErrorKind::EmptyDefinition { name } => {
                format!("Definition of '{}' cannot be empty", name)
            }
            SemanticErrorKind::ReferenceNotAlone { name } => {
                format!(
                    "A reference atom must be the only member of definition '{}'",
                    name
                )
            }
            SemanticErrorKind::SelfReference { name } => {
                format!(
                    "Definition of '{}' cannot consist of a single symbol referring to itself",
                    name
                )
            }
            SemanticErrorKind::UndefinedSymbol { name } => {
                format!("Undefined symbol '{}'", name)
            }
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_location(f, self.line, self.column)?;
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SemanticError {}

/// 文法解析的统一错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl GrammarError {
    pub fn line(&self) -> usize {
        match self {
            GrammarError::Lexer(e) => e.line(),
            GrammarError::Syntax(e) => e.line,
            GrammarError::Semantic(e) => e.line,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            GrammarError::Lexer(e) => Some(e.column()),
            GrammarError::Syntax(e) => e.column,
            GrammarError::Semantic(e) => e.column,
        }
    }
}
