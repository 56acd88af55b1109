//! 文法定义语言
//!
//! ```text
//! definition   := IDENT "->" atom+ NEWLINE
//! atom         := IDENT | "*" IDENT | "{" IDENT "}" | "(" IDENT ")" | "<" IDENT ">"
//! comment      := "//" ...text... NEWLINE
//! ```

pub mod ast;
pub mod checker_set;
pub mod error;
pub mod parser;
pub mod validate;

pub use ast::{AtomKind, Grammar, GrammarAtom, GrammarDefinition};
pub use checker_set::checker_set;
pub use error::{
    GrammarError, SemanticError, SemanticErrorKind, SyntaxError, SyntaxErrorKind,
};
pub use parser::parse;
