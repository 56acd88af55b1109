//! 字符串字面量检查器

use super::{Feed, Scratch};

/// 转义子状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Escape {
    #[default]
    None,
    /// 刚读过 `\`
    Pending,
    /// `\u` 之后，已读 `digits` 个十六进制位
    Unicode { code: u32, digits: u8 },
}

/// 引号字符串检查器
///
/// 值不含引号，转义序列已解码。闭合引号必须与开引号相同。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringChecker {
    quotes: Vec<char>,
    pub(crate) scratch: Scratch,
    opening: Option<char>,
    escape: Escape,
    closed: bool,
}

impl Default for StringChecker {
    fn default() -> Self {
        Self::with_quotes(['"'])
    }
}

impl StringChecker {
    /// 只接受双引号
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quotes<I>(quotes: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            quotes: quotes.into_iter().collect(),
            scratch: Scratch::default(),
            opening: None,
            escape: Escape::None,
            closed: false,
        }
    }

    pub fn quotes(&self) -> &[char] {
        &self.quotes
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected || self.closed {
            return self.scratch.reject();
        }

        let Some(opening) = self.opening else {
            if !self.quotes.contains(&c) {
                return self.scratch.reject();
            }
            self.opening = Some(c);
            self.scratch.raw.push(c);
            return Feed::Partial;
        };

        match self.escape {
            Escape::None if c == '\\' => {
                self.escape = Escape::Pending;
            }
            Escape::None if c == opening => {
                self.closed = true;
                self.scratch.raw.push(c);
                return Feed::Complete;
            }
            Escape::None => self.scratch.value.push(c),
            Escape::Pending => {
                let decoded = match c {
                    '\\' | '/' => c,
                    'n' => '\n',
                    'r' => '\r',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    't' => '\t',
                    'u' => {
                        self.escape = Escape::Unicode { code: 0, digits: 0 };
                        self.scratch.raw.push(c);
                        return Feed::Partial;
                    }
                    _ if c == opening => c,
                    _ => return self.scratch.reject(),
                };
                self.scratch.value.push(decoded);
                self.escape = Escape::None;
            }
            Escape::Unicode { code, digits } => {
                let Some(digit) = c.to_digit(16) else {
                    return self.scratch.reject();
                };
                let code = code * 16 + digit;
                if digits + 1 == 4 {
                    // 代理项等无法表示的码点解码为 '?'
                    self.scratch.value.push(char::from_u32(code).unwrap_or('?'));
                    self.escape = Escape::None;
                } else {
                    self.escape = Escape::Unicode {
                        code,
                        digits: digits + 1,
                    };
                }
            }
        }

        self.scratch.raw.push(c);
        Feed::Partial
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
        self.opening = None;
        self.escape = Escape::None;
        self.closed = false;
    }
}
