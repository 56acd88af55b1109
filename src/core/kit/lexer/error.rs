//! Lexer 错误类型
//!
//! 提供结构化的词法错误信息，包含错误类型、位置和出错的原始文本。

use super::types::Coordinate;

/// 词法错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// 没有任何检查器能以该字符开始一个 token
    UnexpectedCharacter(char),
    /// 唯一的候选 token 尚未完整时遇到了无法接受的字符
    InvalidCharacter { found: char, kind: String },
    /// 多个候选，但没有一个在此处构成完整 token
    NoCompleteCandidate,
    /// 多个检查器同时声明了对同一文本的完整匹配
    AmbiguousToken { kinds: Vec<String> },
    /// 输入结束时 token 仍未闭合（字符串、块注释等）
    Unterminated { kind: String },
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    /// 错误类型
    pub kind: LexErrorKind,
    /// 错误发生的位置
    pub position: Coordinate,
    /// 出错的原始文本
    pub text: String,
}

impl LexerError {
    /// 在指定位置创建错误
    pub fn at(kind: LexErrorKind, position: Coordinate, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 不带位置前缀的错误消息
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter(ch) => {
                format!("Unexpected character {:?}", ch)
            }
            LexErrorKind::InvalidCharacter { found, kind } => {
                format!(
                    "Invalid character {:?} after partial {} token {:?}",
                    found, kind, self.text
                )
            }
            LexErrorKind::NoCompleteCandidate => {
                format!("No complete token candidate for {:?}", self.text)
            }
            LexErrorKind::AmbiguousToken { kinds } => {
                format!(
                    "Ambiguous token {:?}: claimed by {}",
                    self.text,
                    kinds.join(", ")
                )
            }
            LexErrorKind::Unterminated { kind } => {
                format!("Unterminated {} token {:?}", kind, self.text)
            }
        }
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.position, self.message())
    }
}

impl std::error::Error for LexerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_error_at_position() {
        let err = LexerError::at(
            LexErrorKind::UnexpectedCharacter('@'),
            Coordinate::new(10, 5),
            "@",
        );

        assert_eq!(err.line(), 10);
        assert_eq!(err.column(), 5);
        assert!(matches!(err.kind, LexErrorKind::UnexpectedCharacter('@')));
        assert!(err.message().contains("Unexpected character"));
    }

    #[test]
    fn test_lexer_error_display() {
        let err = LexerError::at(
            LexErrorKind::Unterminated {
                kind: "strlit".to_string(),
            },
            Coordinate::new(3, 7),
            "\"abc",
        );

        let display = err.to_string();
        assert!(display.starts_with("[3:7]"));
        assert!(display.contains("Unterminated strlit"));
    }

    #[test]
    fn test_lexer_error_ambiguous_lists_kinds() {
        let err = LexerError::at(
            LexErrorKind::AmbiguousToken {
                kinds: vec!["kw".to_string(), "ident".to_string()],
            },
            Coordinate::new(1, 1),
            "if",
        );

        assert!(err.to_string().contains("kw, ident"));
    }

    #[test]
    fn test_lexer_error_invalid_character() {
        let err = LexerError::at(
            LexErrorKind::InvalidCharacter {
                found: 'x',
                kind: "grdef".to_string(),
            },
            Coordinate::new(1, 2),
            "-",
        );

        let message = err.message();
        assert!(message.contains("'x'"));
        assert!(message.contains("grdef"));
    }
}
