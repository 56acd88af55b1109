//! 文法校验
//!
//! 在所有定义收集完之后运行，因此前向引用和相互引用都合法。

use std::collections::HashSet;

use tracing::trace;

use super::ast::{AtomKind, Grammar, GrammarDefinition};
use super::error::{SemanticError, SemanticErrorKind};

/// 校验整个文法，返回遇到的第一个错误
pub fn validate(grammar: &Grammar) -> Result<(), SemanticError> {
    for definition in grammar.definitions() {
        validate_definition(definition)?;
    }

    let names: HashSet<&str> = grammar
        .definitions()
        .iter()
        .map(|d| d.name.as_str())
        .collect();

    let undefined = grammar
        .definitions()
        .iter()
        .flat_map(|d| d.structure.iter())
        .find(|atom| atom.kind.is_symbolic() && !names.contains(atom.name.as_str()));
    if let Some(atom) = undefined {
        return Err(SemanticError::at(
            SemanticErrorKind::UndefinedSymbol {
                name: atom.name.clone(),
            },
            atom.line,
            atom.column,
        ));
    }

    trace!(target: "lexgram::parser", definitions = grammar.len(), "Grammar validated");
    Ok(())
}

/// 单条定义自身的约束
fn validate_definition(definition: &GrammarDefinition) -> Result<(), SemanticError> {
    let name = || definition.name.clone();

    match definition.structure.as_slice() {
        [] => Err(SemanticError::on_line(
            SemanticErrorKind::EmptyDefinition { name: name() },
            definition.line,
        )),
        [atom] if atom.kind.is_symbolic() && atom.name == definition.name => {
            Err(SemanticError::at(
                SemanticErrorKind::SelfReference { name: name() },
                atom.line,
                atom.column,
            ))
        }
        [_] => Ok(()),
        atoms => match atoms.iter().find(|a| a.kind == AtomKind::SymbolRef) {
            Some(atom) => Err(SemanticError::at(
                SemanticErrorKind::ReferenceNotAlone { name: name() },
                atom.line,
                atom.column,
            )),
            None => Ok(()),
        },
    }
}
