//! 注释检查器

use super::{Feed, Scratch};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Style {
    /// 还没读完开头的两个字符
    #[default]
    Opening,
    /// `//`，`ended` 表示已吞下结尾换行
    Line { ended: bool },
    /// `/* ... */`
    Block { closed: bool },
}

/// 注释检查器
///
/// 行注释一直延伸到第一个换行（含），读到换行才算完整。
/// 块注释只在读到 `*/` 之后才完整，需要 `allow_multiline`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentChecker {
    allow_multiline: bool,
    style: Style,
    pub(crate) scratch: Scratch,
}

impl CommentChecker {
    pub fn new(allow_multiline: bool) -> Self {
        Self {
            allow_multiline,
            ..Self::default()
        }
    }

    pub fn allows_multiline(&self) -> bool {
        self.allow_multiline
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected {
            return Feed::Rejected;
        }

        match self.style {
            Style::Opening => match (self.scratch.raw.as_str(), c) {
                ("", '/') => {
                    self.scratch.raw.push(c);
                    Feed::Partial
                }
                ("/", '/') => {
                    self.scratch.raw.push(c);
                    self.style = Style::Line { ended: false };
                    Feed::Partial
                }
                ("/", '*') if self.allow_multiline => {
                    self.scratch.raw.push(c);
                    self.style = Style::Block { closed: false };
                    Feed::Partial
                }
                _ => self.scratch.reject(),
            },
            Style::Line { ended: true } | Style::Block { closed: true } => self.scratch.reject(),
            Style::Line { ended: false } => {
                self.scratch.raw.push(c);
                if c == '\n' {
                    if self.scratch.value.ends_with('\r') {
                        self.scratch.value.pop();
                    }
                    self.style = Style::Line { ended: true };
                    return Feed::Complete;
                }
                self.scratch.value.push(c);
                Feed::Partial
            }
            Style::Block { closed: false } => {
                self.scratch.push(c);
                if c == '/' && self.scratch.value.ends_with("*/") {
                    let end = self.scratch.value.len() - 2;
                    self.scratch.value.truncate(end);
                    self.style = Style::Block { closed: true };
                    return Feed::Complete;
                }
                Feed::Partial
            }
        }
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
        self.style = Style::Opening;
    }
}
