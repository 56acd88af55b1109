//! 最长匹配扫描引擎
//!
//! 把同一个字符流同时喂给集合中的所有检查器：
//! 只要还有检查器能继续就延长候选；一旦没有任何检查器能接受当前字符，
//! 就从上一步仍然有效的候选中选出唯一完整的那个输出，然后用当前字符重新开始。
//!
//! 输入末尾追加一个任何检查器都不接受的结束标记（`None`），保证最后一个 token
//! 也走同一条收尾路径。

use std::iter;

use tracing::{debug, instrument, trace};

use super::checker_set::CheckerSet;
use crate::core::config::Phase;
use crate::core::logger;
use super::error::{LexErrorKind, LexerError};
use super::types::{Coordinate, Token};

/// 上一个字符之后仍然有效的检查器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    index: usize,
    complete: bool,
}

/// 词法扫描器
#[derive(Debug, Clone)]
pub struct Tokenizer {
    set: CheckerSet,
}

impl Tokenizer {
    pub fn new(set: CheckerSet) -> Self {
        trace!(target: "lexgram::lexer", checkers = set.len(), "Creating tokenizer");
        Self { set }
    }

    pub fn checker_set(&self) -> &CheckerSet {
        &self.set
    }

    pub fn into_checker_set(self) -> CheckerSet {
        self.set
    }

    /// 扫描整个输入
    ///
    /// 任何错误都会终止本次扫描，不返回部分结果。
    #[instrument(target = "lexgram::lexer", skip_all, fields(len = source.len(), checkers = self.set.len()))]
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>, LexerError> {
        let result = self.scan(source);
        match &result {
            Ok(tokens) => debug!(target: "lexgram::lexer", count = tokens.len(), "Tokenize completed"),
            Err(e) => debug!(target: "lexgram::lexer", error = %e, "Tokenize failed"),
        }
        result
    }

    fn scan(&mut self, source: &str) -> Result<Vec<Token>, LexerError> {
        self.reset();

        let mut tokens = Vec::new();
        let mut previous: Vec<Candidate> = Vec::new();
        let mut cursor = Coordinate::default();
        let mut start = cursor;

        for c in source.chars().map(Some).chain(iter::once(None)) {
            let current = self.feed(c);

            if !current.is_empty() {
                if previous.is_empty() {
                    start = cursor;
                }
                previous = current;
            } else {
                match (previous.is_empty(), c) {
                    // 空输入
                    (true, None) => break,
                    (true, Some(ch)) => {
                        return Err(LexerError::at(
                            LexErrorKind::UnexpectedCharacter(ch),
                            cursor,
                            ch.to_string(),
                        ));
                    }
                    (false, _) => {}
                }

                let token = self.finalize(&previous, start, cursor, c)?;
                if self.set.is_ignored(&token.kind) {
                    trace!(target: "lexgram::lexer", kind = %token.kind, "Skipping ignored token");
                } else {
                    if logger::is_enabled(Phase::Lexer) {
                        debug!(
                            target: "lexgram::lexer",
                            kind = %token.kind,
                            raw = ?token.raw,
                            line = token.line,
                            column = token.column,
                            "Produced token"
                        );
                    }
                    tokens.push(token);
                }

                self.reset();
                start = cursor;
                previous = self.feed(c);
                if let (true, Some(ch)) = (previous.is_empty(), c) {
                    return Err(LexerError::at(
                        LexErrorKind::UnexpectedCharacter(ch),
                        cursor,
                        ch.to_string(),
                    ));
                }
            }

            if let Some(ch) = c {
                cursor = cursor.advance(ch);
            }
        }

        Ok(tokens)
    }

    fn reset(&mut self) {
        trace!(target: "lexgram::lexer", "Resetting checkers");
        self.set.reset();
    }

    /// 把字符喂给每个检查器，返回仍然有效的那些（按注册顺序）
    fn feed(&mut self, c: Option<char>) -> Vec<Candidate> {
        let Some(c) = c else {
            return Vec::new();
        };
        self.set
            .entries_mut()
            .iter_mut()
            .enumerate()
            .filter_map(|(index, (_, checker))| {
                let feed = checker.feed(c);
                feed.is_valid().then_some(Candidate {
                    index,
                    complete: feed.is_complete(),
                })
            })
            .collect()
    }

    /// 从上一步的候选中确定要输出的 token
    fn finalize(
        &self,
        previous: &[Candidate],
        start: Coordinate,
        cursor: Coordinate,
        c: Option<char>,
    ) -> Result<Token, LexerError> {
        let complete: Vec<&(String, _)> = previous
            .iter()
            .filter(|candidate| candidate.complete)
            .filter_map(|candidate| self.set.entry(candidate.index))
            .collect();

        match complete.as_slice() {
            [(name, checker)] => Ok(Token::new(
                name.as_str(),
                checker.value(),
                checker.raw(),
                start,
            )),
            [] => {
                let Some((kind, checker)) = previous
                    .first()
                    .and_then(|candidate| self.set.entry(candidate.index))
                else {
                    return Err(LexerError::at(
                        LexErrorKind::NoCompleteCandidate,
                        start,
                        String::new(),
                    ));
                };
                let text = checker.raw().to_string();
                let error = match c {
                    None => LexerError::at(
                        LexErrorKind::Unterminated { kind: kind.clone() },
                        start,
                        text,
                    ),
                    Some(found) if previous.len() == 1 => LexerError::at(
                        LexErrorKind::InvalidCharacter {
                            found,
                            kind: kind.clone(),
                        },
                        cursor,
                        text,
                    ),
                    Some(_) => LexerError::at(LexErrorKind::NoCompleteCandidate, start, text),
                };
                Err(error)
            }
            [(_, first), ..] => Err(LexerError::at(
                LexErrorKind::AmbiguousToken {
                    kinds: complete.iter().map(|(name, _)| name.clone()).collect(),
                },
                start,
                first.raw(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::lexer::checker::{Checker, WhitespaceChecker};
    use crate::core::kit::lexer::sets;

    fn kinds(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.kind.as_str()).collect()
    }

    fn values(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    /// 收集日志输出的 writer
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failure_is_left_to_caller() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut tokenizer = Tokenizer::new(CheckerSet::new().with("num", Checker::number()));
            assert!(tokenizer.tokenize("1 x").is_err());
        });
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = Tokenizer::new(sets::json());
        assert!(tokenizer.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_json_object() {
        let mut tokenizer = Tokenizer::new(sets::json());
        let tokens = tokenizer
            .tokenize(r#"{"a": [1, -2.5e3, true, null]}"#)
            .unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                "oobj", "strlit", "colon", "oarr", "numlit", "comma", "numlit", "comma", "bool",
                "comma", "null", "carr", "cobj"
            ]
        );
        assert_eq!(values(&tokens)[1], "a");
        assert_eq!(values(&tokens)[6], "-2.5e3");
    }

    #[test]
    fn test_positions_skip_whitespace() {
        let mut tokenizer = Tokenizer::new(sets::json());
        let tokens = tokenizer.tokenize("  \n\t 1,\n  2").unwrap();
        assert_eq!(values(&tokens), vec!["1", ",", "2"]);
        assert_eq!(tokens[0].coordinate(), Coordinate::new(2, 3));
        assert_eq!(tokens[1].coordinate(), Coordinate::new(2, 4));
        assert_eq!(tokens[2].coordinate(), Coordinate::new(3, 3));
    }

    #[test]
    fn test_maximal_munch() {
        let set = CheckerSet::new()
            .with("op", Checker::symbols(["-", "->"]))
            .with("num", Checker::number());
        let mut tokenizer = Tokenizer::new(set);
        let tokens = tokenizer.tokenize("->-1").unwrap();
        assert_eq!(kinds(&tokens), vec!["op", "num"]);
        assert_eq!(values(&tokens), vec!["->", "-1"]);
    }

    #[test]
    fn test_ambiguous_token() {
        let set = CheckerSet::new()
            .with("kw", Checker::symbol("if"))
            .with("ident", Checker::identifier("fi", "fi"));
        let mut tokenizer = Tokenizer::new(set);
        let err = tokenizer.tokenize("if").unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::AmbiguousToken {
                kinds: vec!["kw".to_string(), "ident".to_string()]
            }
        );
        assert_eq!(err.text, "if");
        assert_eq!(err.position, Coordinate::new(1, 1));
    }

    #[test]
    fn test_longer_match_resolves_overlap() {
        let set = CheckerSet::new()
            .with("kw", Checker::symbol("if"))
            .with("ident", Checker::identifier("fi", "fi"));
        let mut tokenizer = Tokenizer::new(set);
        let tokens = tokenizer.tokenize("iff").unwrap();
        assert_eq!(kinds(&tokens), vec!["ident"]);
    }

    #[test]
    fn test_unexpected_character() {
        let mut tokenizer = Tokenizer::new(sets::json());
        let err = tokenizer.tokenize("[1, @]").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.position, Coordinate::new(1, 5));

        let err = tokenizer.tokenize("@").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.position, Coordinate::new(1, 1));
    }

    #[test]
    fn test_invalid_character_after_partial() {
        let set = CheckerSet::new()
            .with("arrow", Checker::symbol("->"))
            .with("ws", WhitespaceChecker::new());
        let mut tokenizer = Tokenizer::new(set);
        let err = tokenizer.tokenize("- ").unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::InvalidCharacter {
                found: ' ',
                kind: "arrow".to_string()
            }
        );
        assert_eq!(err.text, "-");
        assert_eq!(err.position, Coordinate::new(1, 2));
    }

    #[test]
    fn test_no_complete_candidate() {
        let set = CheckerSet::new()
            .with("arrow", Checker::symbol("->"))
            .with("num", Checker::number())
            .with("ws", WhitespaceChecker::new());
        let mut tokenizer = Tokenizer::new(set);
        let err = tokenizer.tokenize("- ").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::NoCompleteCandidate);
        assert_eq!(err.text, "-");
    }

    #[test]
    fn test_unterminated_string() {
        let mut tokenizer = Tokenizer::new(sets::json());
        let err = tokenizer.tokenize("[\"abc").unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::Unterminated {
                kind: "strlit".to_string()
            }
        );
        assert_eq!(err.position, Coordinate::new(1, 2));
        assert_eq!(err.text, "\"abc");
    }

    #[test]
    fn test_number_with_two_points_splits() {
        // 第二个小数点让数字检查器停下，'.' 本身没有检查器能接受
        let mut tokenizer = Tokenizer::new(sets::json());
        let err = tokenizer.tokenize("12.3.4").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('.'));
        assert_eq!(err.position, Coordinate::new(1, 5));
    }

    #[test]
    fn test_tokenizer_is_reusable() {
        let mut tokenizer = Tokenizer::new(sets::json());
        let _ = tokenizer.tokenize("\"abc");
        let tokens = tokenizer.tokenize("true").unwrap();
        assert_eq!(kinds(&tokens), vec!["bool"]);
    }

    #[test]
    fn test_raw_round_trip_without_ignored() {
        let set = CheckerSet::new()
            .with("ws", WhitespaceChecker::new())
            .with("num", Checker::number())
            .with("str", Checker::string())
            .with("comment", Checker::comment(true));
        let source = "1 \"a\\tb\" /* x */ // y\n-2.5\r\n";
        let mut tokenizer = Tokenizer::new(set);
        let tokens = tokenizer.tokenize(source).unwrap();
        let raw: String = tokens.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(raw, source);
        assert_eq!(tokens[2].value, "a\tb");
    }
}
