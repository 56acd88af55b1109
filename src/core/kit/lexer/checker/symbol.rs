//! 符号检查器

use super::{Feed, Scratch};

/// 匹配一组固定字面量（如 `->`、`(`、`true`）
///
/// 共享前缀的符号族也能正确处理：缓冲区是某个更长候选的严格前缀时保持有效但不完整。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolChecker {
    symbols: Vec<String>,
    pub(crate) scratch: Scratch,
}

impl SymbolChecker {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            scratch: Scratch::default(),
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn feed(&mut self, c: char) -> Feed {
        if self.scratch.rejected {
            return Feed::Rejected;
        }

        self.scratch.raw.push(c);
        let buffer = self.scratch.raw.as_str();
        let feed = if self.symbols.iter().any(|symbol| symbol == buffer) {
            Feed::Complete
        } else if self
            .symbols
            .iter()
            .any(|symbol| symbol.len() > buffer.len() && symbol.starts_with(buffer))
        {
            Feed::Partial
        } else {
            Feed::Rejected
        };

        if feed == Feed::Rejected {
            self.scratch.raw.pop();
            return self.scratch.reject();
        }
        // 部分匹配时以当前缓冲区作为最佳候选值
        self.scratch.value.clone_from(&self.scratch.raw);
        feed
    }

    pub fn reset(&mut self) {
        self.scratch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_symbol_completes_immediately() {
        let mut checker = SymbolChecker::new(["("]);
        assert_eq!(checker.feed('('), Feed::Complete);
        assert_eq!(checker.feed('('), Feed::Rejected);
        assert_eq!(checker.scratch.value, "(");
    }

    #[test]
    fn test_two_char_symbol_needs_both() {
        let mut checker = SymbolChecker::new(["->"]);
        assert_eq!(checker.feed('-'), Feed::Partial);
        assert_eq!(checker.scratch.value, "-");
        assert_eq!(checker.feed('>'), Feed::Complete);
        assert_eq!(checker.scratch.value, "->");
    }

    #[test]
    fn test_shared_prefix_family() {
        let mut checker = SymbolChecker::new(["<", "<=", "<<="]);
        assert_eq!(checker.feed('<'), Feed::Complete);
        assert_eq!(checker.feed('<'), Feed::Partial);
        assert_eq!(checker.feed('='), Feed::Complete);
        assert_eq!(checker.scratch.raw, "<<=");
    }

    #[test]
    fn test_keyword_symbols() {
        let mut checker = SymbolChecker::new(["true", "false"]);
        for c in "fals".chars() {
            assert_eq!(checker.feed(c), Feed::Partial);
        }
        assert_eq!(checker.feed('e'), Feed::Complete);

        checker.reset();
        assert_eq!(checker.feed('t'), Feed::Partial);
        assert_eq!(checker.feed('x'), Feed::Rejected);
        assert_eq!(checker.scratch.raw, "t");
    }
}
