//! 文法定义语言的检查器集合

use crate::core::kit::lexer::checker::{Checker, IdentifierChecker, WhitespaceChecker};
use crate::core::kit::lexer::CheckerSet;

pub const WS: &str = "ws";
pub const NL: &str = "nl";
pub const GRDEF: &str = "grdef";
pub const OTKN: &str = "otkn";
pub const CTKN: &str = "ctkn";
pub const OANC: &str = "oanc";
pub const CANC: &str = "canc";
pub const OFLT: &str = "oflt";
pub const CFLT: &str = "cflt";
pub const REF: &str = "ref";
pub const IDENT: &str = "ident";
pub const COMMENT: &str = "comment";

/// 文法定义语言的词法
///
/// 换行由 `nl` 单独识别（行是定义的边界），`ws` 被忽略。
pub fn checker_set() -> CheckerSet {
    CheckerSet::new()
        .with(WS, WhitespaceChecker::new().exclude_newline())
        .with(NL, Checker::newline())
        .with(GRDEF, Checker::symbol("->"))
        .with(OTKN, Checker::symbol("<"))
        .with(CTKN, Checker::symbol(">"))
        .with(OANC, Checker::symbol("("))
        .with(CANC, Checker::symbol(")"))
        .with(OFLT, Checker::symbol("{"))
        .with(CFLT, Checker::symbol("}"))
        .with(REF, Checker::symbol("*"))
        .with(IDENT, IdentifierChecker::ascii())
        .with(COMMENT, Checker::comment(false))
        .ignore(WS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::lexer::Tokenizer;

    #[test]
    fn test_anchor_tokens() {
        let mut tokenizer = Tokenizer::new(checker_set());
        let tokens = tokenizer.tokenize("(colon)").unwrap();
        let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.as_str()).collect();
        let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(kinds, vec![OANC, IDENT, CANC]);
        assert_eq!(values, vec!["(", "colon", ")"]);
    }

    #[test]
    fn test_definition_line() {
        let mut tokenizer = Tokenizer::new(checker_set());
        let tokens = tokenizer.tokenize("a -> *b // note\r\n").unwrap();
        let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(kinds, vec![IDENT, GRDEF, REF, IDENT, COMMENT]);
        assert_eq!(tokens[4].raw, "// note\r\n");
        assert_eq!(tokens[4].value, " note");
        assert_eq!(tokens[1].column, 3);
    }

    #[test]
    fn test_newline_tokens() {
        let mut tokenizer = Tokenizer::new(checker_set());
        let tokens = tokenizer.tokenize("a\r\n\nb").unwrap();
        let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(kinds, vec![IDENT, NL, NL, IDENT]);
        assert_eq!(tokens[1].raw, "\r\n");
        assert_eq!((tokens[3].line, tokens[3].column), (3, 1));
    }

    #[test]
    fn test_set_is_valid() {
        assert!(checker_set().validate().is_ok());
    }
}
