//! 检查器集合的声明式描述
//!
//! 允许从 JSON 文件加载一个词法：
//!
//! ```json
//! {
//!   "checkers": [
//!     { "name": "ws",  "checker": { "type": "whitespace" } },
//!     { "name": "num", "checker": { "type": "number" } },
//!     { "name": "op",  "checker": { "type": "symbol", "symbols": ["+", "+="] } }
//!   ],
//!   "ignore": ["ws"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::checker::{
    Checker, CommentChecker, IdentifierChecker, NewlineChecker, NumberChecker, StringChecker,
    SymbolChecker, WhitespaceChecker,
};
use super::checker_set::{CheckerSet, CheckerSetError};

fn default_quotes() -> Vec<char> {
    vec!['"']
}

/// 单个检查器的描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckerSpec {
    Whitespace {
        #[serde(default)]
        exclude_tab: bool,
        #[serde(default)]
        exclude_space: bool,
        #[serde(default)]
        exclude_newline: bool,
    },
    Newline,
    Symbol {
        symbols: Vec<String>,
    },
    Identifier {
        first: String,
        rest: String,
    },
    Number,
    String {
        #[serde(default = "default_quotes")]
        quotes: Vec<char>,
    },
    Comment {
        #[serde(default)]
        multiline: bool,
    },
}

impl CheckerSpec {
    pub fn build(&self) -> Checker {
        match self {
            CheckerSpec::Whitespace {
                exclude_tab,
                exclude_space,
                exclude_newline,
            } => {
                let mut checker = WhitespaceChecker::new();
                if *exclude_tab {
                    checker = checker.exclude_tab();
                }
                if *exclude_space {
                    checker = checker.exclude_space();
                }
                if *exclude_newline {
                    checker = checker.exclude_newline();
                }
                checker.into()
            }
            CheckerSpec::Newline => NewlineChecker::new().into(),
            CheckerSpec::Symbol { symbols } => SymbolChecker::new(symbols.iter().cloned()).into(),
            CheckerSpec::Identifier { first, rest } => IdentifierChecker::new(first, rest).into(),
            CheckerSpec::Number => NumberChecker::new().into(),
            CheckerSpec::String { quotes } => {
                StringChecker::with_quotes(quotes.iter().copied()).into()
            }
            CheckerSpec::Comment { multiline } => CommentChecker::new(*multiline).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCheckerSpec {
    pub name: String,
    pub checker: CheckerSpec,
}

/// 整个检查器集合的描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerSetSpec {
    pub checkers: Vec<NamedCheckerSpec>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl CheckerSetSpec {
    pub fn from_json(text: &str) -> Result<Self, CheckerSetError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl CheckerSet {
    /// 从描述构建并校验
    pub fn from_spec(spec: &CheckerSetSpec) -> Result<Self, CheckerSetError> {
        let mut set = CheckerSet::new();
        for entry in &spec.checkers {
            set.add(entry.name.clone(), entry.checker.build())?;
        }
        let set = spec
            .ignore
            .iter()
            .fold(set, |set, name| set.ignore(name.clone()));
        set.validate()?;
        Ok(set)
    }
}
