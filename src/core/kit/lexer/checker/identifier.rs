use super::{Feed, Scratch};

/// ASCII 字母
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII 字母、数字和下划线
pub const ASCII_WORD: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// 标识符检查器：首字符取自 `valid_first`，其余取自 `valid`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierChecker {
    valid_first: String,
    valid: String,
    pub(crate) scratch: Scratch,
}

impl IdentifierChecker {
    pub fn new(valid_first: &str, valid: &str) -> Self {
        Self {
            valid_first: valid_first.to_string(),
            valid: valid.to_string(),
            scratch: Scratch::default(),
        }
    }

    /// `[A-Za-z][A-Za-z0-9_]*`
    pub fn ascii() -> Self {
        Self::new(ASCII_LETTERS, ASCII_WORD)
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected {
            return Feed::Rejected;
        }
        let allowed = if self.scratch.raw.is_empty() {
            &self.valid_first
        } else {
            &self.valid
        };
        if !allowed.contains(c) {
            return self.scratch.reject();
        }
        self.scratch.push(c);
        Feed::Complete
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
    }
}
