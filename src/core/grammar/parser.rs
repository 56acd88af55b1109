//! 文法定义解析器
//!
//! 按行处理 token：每行是一条 `name -> atom ...` 定义，
//! 原子序列由一个小状态机解析。所有行收集完之后再统一校验。

use tracing::{debug, instrument, trace};

use super::ast::{AtomKind, Grammar, GrammarAtom, GrammarDefinition};
use super::checker_set::{self, CANC, CFLT, COMMENT, CTKN, GRDEF, IDENT, NL, OANC, OFLT, OTKN, REF};
use super::error::{GrammarError, SyntaxError, SyntaxErrorKind};
use super::validate;
use crate::core::config::Phase;
use crate::core::kit::lexer::{Token, Tokenizer};
use crate::core::logger;

/// 原子状态机的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AtomState {
    None,
    /// 读过 `*`
    Reference,
    /// 读过 `{`
    Flat0,
    /// 读过 `{ ident`
    Flat1,
    Anchor0,
    Anchor1,
    Token0,
    Token1,
}

/// 解析文法定义文本
#[instrument(target = "lexgram::parser", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Grammar, GrammarError> {
    let result = parse_inner(source);
    match &result {
        Ok(grammar) => debug!(
            target: "lexgram::parser",
            definitions = grammar.len(),
            "Grammar parsed"
        ),
        Err(e) => debug!(target: "lexgram::parser", error = %e, "Grammar rejected"),
    }
    result
}

fn parse_inner(source: &str) -> Result<Grammar, GrammarError> {
    let tokens = Tokenizer::new(checker_set::checker_set()).tokenize(source)?;
    let grammar = Grammar {
        definitions: parse_tokens(&tokens)?,
    };
    validate::validate(&grammar)?;
    Ok(grammar)
}

/// 把 token 按行分组并逐行解析为定义
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<GrammarDefinition>, SyntaxError> {
    let span = crate::phase_span!(Phase::Parser, "parse_tokens", tokens = tokens.len());
    let _guard = span.enter();

    let mut definitions = Vec::new();
    let mut line: Vec<&Token> = Vec::new();

    for token in tokens {
        if token.is(NL) {
            close_line(&mut line, &mut definitions)?;
            continue;
        }

        match line.len() {
            0 if token.is(COMMENT) => {
                trace!(target: "lexgram::parser", line = token.line, "Skipping comment line");
                continue;
            }
            0 if !token.is(IDENT) => {
                return Err(SyntaxError::at(
                    SyntaxErrorKind::ExpectedIdentifier {
                        found: token.raw.clone(),
                    },
                    token.line,
                    token.column,
                ));
            }
            1 if !token.is(GRDEF) => {
                return Err(SyntaxError::at(
                    SyntaxErrorKind::ExpectedArrow {
                        name: line[0].value.clone(),
                        found: token.raw.clone(),
                    },
                    token.line,
                    token.column,
                ));
            }
            _ => {}
        }

        line.push(token);
        // 行注释吞掉了结尾的换行，同样结束本行
        if token.is(COMMENT) && token.raw.ends_with('\n') {
            close_line(&mut line, &mut definitions)?;
        }
    }

    close_line(&mut line, &mut definitions)?;
    Ok(definitions)
}

fn close_line(
    line: &mut Vec<&Token>,
    definitions: &mut Vec<GrammarDefinition>,
) -> Result<(), SyntaxError> {
    let definition = match line.as_slice() {
        [] => return Ok(()),
        [first] | [first, _] => {
            return Err(SyntaxError::on_line(
                SyntaxErrorKind::ExpectedDefinition,
                first.line,
            ));
        }
        [name, _, body @ ..] => GrammarDefinition {
            name: name.value.clone(),
            structure: parse_atoms(body)?,
            line: name.line,
        },
    };
    if logger::is_enabled(Phase::Parser) {
        debug!(
            target: "lexgram::parser",
            definition = %definition,
            atoms = definition.structure.len(),
            "Parsed definition"
        );
    }
    definitions.push(definition);
    line.clear();
    Ok(())
}

/// 原子序列状态机
fn parse_atoms(tokens: &[&Token]) -> Result<Vec<GrammarAtom>, SyntaxError> {
    let mut atoms = Vec::new();
    let mut state = AtomState::None;

    for token in tokens {
        let unexpected = || {
            SyntaxError::at(
                SyntaxErrorKind::UnexpectedToken {
                    found: token.raw.clone(),
                },
                token.line,
                token.column,
            )
        };
        let closing = |expected: char| {
            SyntaxError::at(
                SyntaxErrorKind::ExpectedClosing {
                    expected,
                    found: token.raw.clone(),
                },
                token.line,
                token.column,
            )
        };
        let atom =
            |kind: AtomKind| GrammarAtom::new(kind, token.value.clone(), token.line, token.column);

        state = match state {
            AtomState::None => match token.kind.as_str() {
                REF => AtomState::Reference,
                OFLT => AtomState::Flat0,
                OANC => AtomState::Anchor0,
                OTKN => AtomState::Token0,
                IDENT => {
                    atoms.push(atom(AtomKind::Symbol));
                    AtomState::None
                }
                COMMENT => AtomState::None,
                _ => return Err(unexpected()),
            },
            AtomState::Reference | AtomState::Flat0 | AtomState::Anchor0 | AtomState::Token0 => {
                if !token.is(IDENT) {
                    return Err(SyntaxError::at(
                        SyntaxErrorKind::ExpectedIdentifier {
                            found: token.raw.clone(),
                        },
                        token.line,
                        token.column,
                    ));
                }
                match state {
                    AtomState::Reference => {
                        atoms.push(atom(AtomKind::SymbolRef));
                        AtomState::None
                    }
                    AtomState::Flat0 => {
                        atoms.push(atom(AtomKind::FlatSymbol));
                        AtomState::Flat1
                    }
                    AtomState::Anchor0 => {
                        atoms.push(atom(AtomKind::Anchor));
                        AtomState::Anchor1
                    }
                    _ => {
                        atoms.push(atom(AtomKind::Token));
                        AtomState::Token1
                    }
                }
            }
            AtomState::Flat1 if token.is(CFLT) => AtomState::None,
            AtomState::Anchor1 if token.is(CANC) => AtomState::None,
            AtomState::Token1 if token.is(CTKN) => AtomState::None,
            AtomState::Flat1 => return Err(closing('}')),
            AtomState::Anchor1 => return Err(closing(')')),
            AtomState::Token1 => return Err(closing('>')),
        };
    }

    if state != AtomState::None {
        let line = tokens.last().map(|t| t.line).unwrap_or_default();
        return Err(SyntaxError::on_line(
            SyntaxErrorKind::UnexpectedEndOfDefinition,
            line,
        ));
    }

    Ok(atoms)
}

impl Grammar {
    /// 解析并校验文法定义文本
    pub fn parse(source: &str) -> Result<Self, GrammarError> {
        parse(source)
    }
}
