//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use lexgram::lexer::{Checker, CheckerSet, Token};

/// token 类型列表
pub fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_str()).collect()
}

/// token 语义值列表
pub fn values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

/// 按顺序拼接所有 token 的原始文本
pub fn raw_concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.raw.as_str()).collect()
}

/// 不忽略任何类型的小型词法（用于原始文本往返）
pub fn expression_set() -> CheckerSet {
    CheckerSet::new()
        .with("ws", Checker::whitespace())
        .with("arrow", Checker::symbol("->"))
        .with("paren", Checker::symbols(["(", ")"]))
        .with("num", Checker::number())
        .with("ident", Checker::identifier(
            "abcdefghijklmnopqrstuvwxyz",
            "abcdefghijklmnopqrstuvwxyz0123456789_",
        ))
        .with("str", Checker::string())
        .with("comment", Checker::comment(true))
}

/// 与 `expression_set` 相同，但忽略空白
pub fn expression_set_ignoring_ws() -> CheckerSet {
    expression_set().ignore("ws")
}

/// 计算 `prefix` 之后下一个字符的 (行, 列)
pub fn position_after(prefix: &str) -> (usize, usize) {
    prefix.chars().fold((1, 1), |(line, column), c| {
        if c == '\n' {
            (line + 1, 1)
        } else {
            (line, column + 1)
        }
    })
}
