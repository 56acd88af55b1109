//! 空白与换行检查器

use super::{Feed, Scratch};

/// 空白检查器
///
/// 每个被接受的字符本身就是一个完整 token，所以 `"  "` 会产生两个 token。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhitespaceChecker {
    exclude_tab: bool,
    exclude_space: bool,
    exclude_newline: bool,
    pub(crate) scratch: Scratch,
}

impl WhitespaceChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_tab(mut self) -> Self {
        self.exclude_tab = true;
        self
    }

    pub fn exclude_space(mut self) -> Self {
        self.exclude_space = true;
        self
    }

    /// 不接受 CR / LF（交给单独的换行检查器）
    pub fn exclude_newline(mut self) -> Self {
        self.exclude_newline = true;
        self
    }

    fn accepts(&self, c: char) -> bool {
        match c {
            '\t' => !self.exclude_tab,
            ' ' => !self.exclude_space,
            '\r' | '\n' => !self.exclude_newline,
            _ => false,
        }
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected || !self.scratch.raw.is_empty() || !self.accepts(c) {
            return self.scratch.reject();
        }
        self.scratch.push(c);
        Feed::Complete
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
    }
}

/// 换行检查器
///
/// 接受 `\n`、`\r` 或 `\r\n`，三者都各自构成一个换行 token。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewlineChecker {
    pub(crate) scratch: Scratch,
}

impl NewlineChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected {
            return Feed::Rejected;
        }
        match (self.scratch.raw.as_str(), c) {
            ("", '\n') | ("", '\r') | ("\r", '\n') => {
                self.scratch.push(c);
                Feed::Complete
            }
            _ => self.scratch.reject(),
        }
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
    }
}
