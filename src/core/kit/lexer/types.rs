//! 通用位置类型与 Token 定义

use serde::Serialize;

/// 源代码坐标（1-based）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub line: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 越过一个字符后的坐标（换行符会进入下一行）
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 词法单元
///
/// 由 Tokenizer 在确定一次最长匹配后一次性创建，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// 产生该 token 的检查器名称（检查器集合可插拔，因此不是封闭枚举）
    pub kind: String,
    /// 语义值（已处理转义、去掉定界符）
    pub value: String,
    /// 源码中被消费的原始文本
    pub raw: String,
    /// `raw` 首字符所在行
    pub line: usize,
    /// `raw` 首字符所在列
    pub column: usize,
}

impl Token {
    pub fn new(
        kind: impl Into<String>,
        value: impl Into<String>,
        raw: impl Into<String>,
        at: Coordinate,
    ) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            raw: raw.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// 是否由指定名称的检查器产生
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_advance() {
        let at = Coordinate::default();
        assert_eq!(at.advance('a'), Coordinate::new(1, 2));
        assert_eq!(at.advance('\r'), Coordinate::new(1, 2));
        assert_eq!(at.advance('a').advance('\n'), Coordinate::new(2, 1));
    }

    #[test]
    fn test_token_position() {
        let token = Token::new("ident", "abc", "abc", Coordinate::new(3, 7));
        assert!(token.is("ident"));
        assert!(!token.is("ws"));
        assert_eq!(token.coordinate(), Coordinate::new(3, 7));
        assert_eq!(token.coordinate().to_string(), "3:7");
    }
}
