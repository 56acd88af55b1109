//! Token 检查器
//!
//! 每个检查器是只识别一种词法类别的小型自动机，逐字符驱动：
//! - `feed` 推进一个字符，返回 [`Feed`]
//! - `reset` 回到初始状态，准备下一次 token 尝试
//!
//! 检查器之间互不感知，由 [`Tokenizer`](super::tokenizer::Tokenizer) 并行驱动并做最长匹配。
//!
//! 约定：被拒绝的字符不会写入缓冲区，因此拒绝之后 `raw()` / `value()`
//! 仍然描述上一次有效的候选。

mod comment;
mod identifier;
mod number;
mod string;
mod symbol;
mod whitespace;

pub use comment::CommentChecker;
pub use identifier::IdentifierChecker;
pub use number::NumberChecker;
pub use string::StringChecker;
pub use symbol::SymbolChecker;
pub use whitespace::{NewlineChecker, WhitespaceChecker};

/// 单次 feed 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// 字符被拒绝；在 `reset` 之前后续 feed 都会被拒绝
    Rejected,
    /// 仍然有效，但当前长度还不是完整 token
    Partial,
    /// 仍然有效，且当前长度就是一个完整 token
    Complete,
}

impl Feed {
    pub fn is_valid(self) -> bool {
        !matches!(self, Feed::Rejected)
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Feed::Complete)
    }
}

/// 检查器共用的缓冲区
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scratch {
    pub(crate) raw: String,
    pub(crate) value: String,
    pub(crate) rejected: bool,
}

impl Scratch {
    pub(crate) fn clear(&mut self) {
        self.raw.clear();
        self.value.clear();
        self.rejected = false;
    }

    /// 标记为永久无效
    pub(crate) fn reject(&mut self) -> Feed {
        self.rejected = true;
        Feed::Rejected
    }

    /// 同时写入原始文本和语义值
    pub(crate) fn push(&mut self, c: char) {
        self.raw.push(c);
        self.value.push(c);
    }
}

/// 检查器（封闭的变体集合）
#[derive(Debug, Clone, PartialEq)]
pub enum Checker {
    Whitespace(WhitespaceChecker),
    Newline(NewlineChecker),
    Symbol(SymbolChecker),
    Identifier(IdentifierChecker),
    Number(NumberChecker),
    String(StringChecker),
    Comment(CommentChecker),
}

impl Checker {
    /// 空白检查器（接受 tab、空格、CR、LF）
    pub fn whitespace() -> Self {
        Checker::Whitespace(WhitespaceChecker::new())
    }

    pub fn newline() -> Self {
        Checker::Newline(NewlineChecker::new())
    }

    /// 符号检查器，匹配给定字面量之一
    pub fn symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Checker::Symbol(SymbolChecker::new(symbols))
    }

    /// 单个符号的检查器
    pub fn symbol(symbol: &str) -> Self {
        Self::symbols([symbol])
    }

    pub fn identifier(valid_first: &str, valid: &str) -> Self {
        Checker::Identifier(IdentifierChecker::new(valid_first, valid))
    }

    pub fn number() -> Self {
        Checker::Number(NumberChecker::new())
    }

    /// 双引号字符串检查器
    pub fn string() -> Self {
        Checker::String(StringChecker::new())
    }

    pub fn comment(allow_multiline: bool) -> Self {
        Checker::Comment(CommentChecker::new(allow_multiline))
    }

    /// 推进一个字符
    pub fn feed(&mut self, c: char) -> Feed {
        match self {
            Checker::Whitespace(checker) => checker.feed(c),
            Checker::Newline(checker) => checker.feed(c),
            Checker::Symbol(checker) => checker.feed(c),
            Checker::Identifier(checker) => checker.feed(c),
            Checker::Number(checker) => checker.feed(c),
            Checker::String(checker) => checker.feed(c),
            Checker::Comment(checker) => checker.feed(c),
        }
    }

    /// 回到初始状态
    pub fn reset(&mut self) {
        match self {
            Checker::Whitespace(checker) => checker.reset(),
            Checker::Newline(checker) => checker.reset(),
            Checker::Symbol(checker) => checker.reset(),
            Checker::Identifier(checker) => checker.reset(),
            Checker::Number(checker) => checker.reset(),
            Checker::String(checker) => checker.reset(),
            Checker::Comment(checker) => checker.reset(),
        }
    }

    fn scratch(&self) -> &Scratch {
        match self {
            Checker::Whitespace(checker) => &checker.scratch,
            Checker::Newline(checker) => &checker.scratch,
            Checker::Symbol(checker) => &checker.scratch,
            Checker::Identifier(checker) => &checker.scratch,
            Checker::Number(checker) => &checker.scratch,
            Checker::String(checker) => &checker.scratch,
            Checker::Comment(checker) => &checker.scratch,
        }
    }

    /// 当前候选已消费的原始文本
    pub fn raw(&self) -> &str {
        &self.scratch().raw
    }

    /// 当前候选的语义值
    pub fn value(&self) -> &str {
        &self.scratch().value
    }

    /// 检查器类别名（用于日志）
    pub fn category(&self) -> &'static str {
        match self {
            Checker::Whitespace(_) => "whitespace",
            Checker::Newline(_) => "newline",
            Checker::Symbol(_) => "symbol",
            Checker::Identifier(_) => "identifier",
            Checker::Number(_) => "number",
            Checker::String(_) => "string",
            Checker::Comment(_) => "comment",
        }
    }
}

impl From<WhitespaceChecker> for Checker {
    fn from(checker: WhitespaceChecker) -> Self {
        Checker::Whitespace(checker)
    }
}

impl From<NewlineChecker> for Checker {
    fn from(checker: NewlineChecker) -> Self {
        Checker::Newline(checker)
    }
}

impl From<SymbolChecker> for Checker {
    fn from(checker: SymbolChecker) -> Self {
        Checker::Symbol(checker)
    }
}

impl From<IdentifierChecker> for Checker {
    fn from(checker: IdentifierChecker) -> Self {
        Checker::Identifier(checker)
    }
}

impl From<NumberChecker> for Checker {
    fn from(checker: NumberChecker) -> Self {
        Checker::Number(checker)
    }
}

impl From<StringChecker> for Checker {
    fn from(checker: StringChecker) -> Self {
        Checker::String(checker)
    }
}

impl From<CommentChecker> for Checker {
    fn from(checker: CommentChecker) -> Self {
        Checker::Comment(checker)
    }
}

/// 测试辅助：逐字符喂入，返回每一步的结果
#[cfg(test)]
pub(crate) fn feed_all(checker: &mut Checker, input: &str) -> Vec<Feed> {
    input.chars().map(|c| checker.feed(c)).collect()
}
