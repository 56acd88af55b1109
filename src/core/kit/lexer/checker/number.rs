use super::{Feed, Scratch};

/// 数字字面量检查器
///
/// 可选的前导 `-`、数字、至多一个小数点、至多一个指数标记（`e`/`E`，可跟一个 `+`/`-`）。
/// 只有以数字结尾时才是完整 token。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberChecker {
    pub(crate) scratch: Scratch,
    seen_digit: bool,
    seen_point: bool,
    seen_exponent: bool,
    /// 刚读过指数标记，允许一个符号
    after_exponent: bool,
}

impl NumberChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected {
            return Feed::Rejected;
        }

        let feed = match c {
            '0'..='9' => {
                self.seen_digit = true;
                self.after_exponent = false;
                Feed::Complete
            }
            '-' if self.scratch.raw.is_empty() => Feed::Partial,
            '+' | '-' if self.after_exponent => {
                self.after_exponent = false;
                Feed::Partial
            }
            '.' if self.seen_digit && !self.seen_point && !self.seen_exponent => {
                self.seen_point = true;
                Feed::Partial
            }
            'e' | 'E' if self.seen_digit && !self.seen_exponent => {
                self.seen_exponent = true;
                self.after_exponent = true;
                Feed::Partial
            }
            _ => return self.scratch.reject(),
        };

        self.scratch.push(c);
        feed
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
        self.seen_digit = false;
        self.seen_point = false;
        self.seen_exponent = false;
        self.after_exponent = false;
    }
}
