//! 文法定义的 AST
//!
//! 定义之间的引用只保存名称，通过 [`Grammar::definition`] 等查找解析。

use std::fmt;

use serde::Serialize;

/// 原子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomKind {
    /// `<name>`：终结符（token 类型）
    Token,
    /// `name`：非终结符
    Symbol,
    /// `*name`：仅作别名的引用，必须是定义中唯一的原子
    SymbolRef,
    /// `{name}`：内联展开的非终结符
    FlatSymbol,
    /// `(name)`：位置锚点
    Anchor,
}

impl AtomKind {
    /// 是否引用其他定义
    pub fn is_symbolic(self) -> bool {
        matches!(
            self,
            AtomKind::Symbol | AtomKind::SymbolRef | AtomKind::FlatSymbol
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AtomKind::Token => "token",
            AtomKind::Symbol => "symbol",
            AtomKind::SymbolRef => "symbol_ref",
            AtomKind::FlatSymbol => "flat_symbol",
            AtomKind::Anchor => "anchor",
        }
    }
}

/// 定义中的一个原子
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarAtom {
    pub kind: AtomKind,
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl GrammarAtom {
    pub fn new(kind: AtomKind, name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for GrammarAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AtomKind::Token => write!(f, "<{}>", self.name),
            AtomKind::Symbol => write!(f, "{}", self.name),
            AtomKind::SymbolRef => write!(f, "*{}", self.name),
            AtomKind::FlatSymbol => write!(f, "{{{}}}", self.name),
            AtomKind::Anchor => write!(f, "({})", self.name),
        }
    }
}

/// 一条定义：`name -> atom atom ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarDefinition {
    pub name: String,
    pub structure: Vec<GrammarAtom>,
    pub line: usize,
}

impl fmt::Display for GrammarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.name)?;
        for atom in &self.structure {
            write!(f, " {}", atom)?;
        }
        Ok(())
    }
}

/// 完整文法，定义按源码顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grammar {
    pub definitions: Vec<GrammarDefinition>,
}

impl Grammar {
    pub fn definitions(&self) -> &[GrammarDefinition] {
        &self.definitions
    }

    /// 第一条同名定义
    pub fn definition(&self, name: &str) -> Option<&GrammarDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn has_definition(&self, name: &str) -> bool {
        self.definition(name).is_some()
    }

    /// 所有同名定义（备选产生式）
    pub fn definitions_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a GrammarDefinition> + 'a {
        self.definitions.iter().filter(move |d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", definition)?;
        }
        Ok(())
    }
}
