//! API 层 - 对外接口
//!
//! 提供词法分析和文法解析的核心 API，输入 → 输出，不关心如何呈现。

use tracing::{info, instrument};

use crate::core::grammar::{self, Grammar};
use crate::core::kit::lexer::{sets, CheckerSet, CheckerSetSpec, Token, Tokenizer};

// 重导出错误和类型
pub use error::{ErrorReport, LexgramError};

mod error;

/// 词法分析
///
/// 先校验检查器集合，再用它扫描整个输入。
///
/// # Errors
/// 检查器集合配置错误时返回 `LexgramError::CheckerSet`，
/// 扫描失败时返回 `LexgramError::Lexer`
///
/// # 日志查看
/// ```bash
/// lexgram tokenize file.json -vv
/// lexgram tokenize file.json --log-lexer trace
/// ```
#[instrument(target = "lexgram::lexer", skip(source, checker_set), fields(len = source.len()))]
pub fn tokenize(source: &str, checker_set: CheckerSet) -> Result<Vec<Token>, LexgramError> {
    checker_set.validate()?;
    let mut tokenizer = Tokenizer::new(checker_set);
    let tokens = tokenizer.tokenize(source)?;
    info!(target: "lexgram::lexer", "Lexer completed: {} tokens", tokens.len());
    Ok(tokens)
}

/// 使用 JSON 风格的预定义词法扫描
pub fn tokenize_json(source: &str) -> Result<Vec<Token>, LexgramError> {
    tokenize(source, sets::json())
}

/// 使用文法定义语言的词法扫描（保留换行和注释 token）
pub fn tokenize_grammar(source: &str) -> Result<Vec<Token>, LexgramError> {
    tokenize(source, grammar::checker_set())
}

/// 从 JSON 描述构建检查器集合
pub fn checker_set_from_json(text: &str) -> Result<CheckerSet, LexgramError> {
    let spec = CheckerSetSpec::from_json(text)?;
    Ok(CheckerSet::from_spec(&spec)?)
}

/// 解析并校验文法定义
///
/// # Errors
/// 词法、语法或语义错误均返回 `LexgramError::Grammar`，不会返回部分结果
#[instrument(target = "lexgram::parser", skip(source), fields(len = source.len()))]
pub fn parse_grammar(source: &str) -> Result<Grammar, LexgramError> {
    let grammar = grammar::parse(source)?;
    info!(
        target: "lexgram::parser",
        "Parser completed: {} definitions",
        grammar.len()
    );
    Ok(grammar)
}
