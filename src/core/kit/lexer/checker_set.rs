//! 检查器集合
//!
//! 有序的 `(名称, 检查器)` 列表加上忽略列表。顺序决定歧义报告中类型的排列。

use thiserror::Error;

use super::checker::Checker;

/// 检查器集合配置错误
#[derive(Error, Debug)]
pub enum CheckerSetError {
    #[error("Duplicate checker name '{0}'")]
    Duplicate(String),

    #[error("Ignored token type '{0}' has no checker")]
    UnknownIgnored(String),

    #[error("Symbol checker '{0}' has no usable literal")]
    EmptySymbol(String),

    #[error("Checker set is empty")]
    Empty,

    #[error("Invalid checker set description: {0}")]
    Spec(#[from] serde_json::Error),
}

/// 检查器集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckerSet {
    checkers: Vec<(String, Checker)>,
    ignored: Vec<String>,
}

impl CheckerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 构建器风格添加；同名检查器被原位替换
    pub fn with(mut self, name: impl Into<String>, checker: impl Into<Checker>) -> Self {
        let name = name.into();
        let checker = checker.into();
        match self.checkers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = checker,
            None => self.checkers.push((name, checker)),
        }
        self
    }

    /// 添加检查器，重名时报错
    pub fn add(
        &mut self,
        name: impl Into<String>,
        checker: impl Into<Checker>,
    ) -> Result<(), CheckerSetError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(CheckerSetError::Duplicate(name));
        }
        self.checkers.push((name, checker.into()));
        Ok(())
    }

    /// 把某个类型加入忽略列表（其 token 不会输出）
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.ignored.contains(&name) {
            self.ignored.push(name);
        }
        self
    }

    /// 检查配置是否自洽
    pub fn validate(&self) -> Result<(), CheckerSetError> {
        if self.checkers.is_empty() {
            return Err(CheckerSetError::Empty);
        }
        if let Some(name) = self.ignored.iter().find(|name| self.get(name).is_none()) {
            return Err(CheckerSetError::UnknownIgnored(name.clone()));
        }
        for (name, checker) in &self.checkers {
            if let Checker::Symbol(symbol) = checker {
                if symbol.symbols().is_empty() || symbol.symbols().iter().any(String::is_empty) {
                    return Err(CheckerSetError::EmptySymbol(name.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// 按注册顺序返回名称
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checkers.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Checker> {
        self.checkers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, checker)| checker)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.iter().any(|n| n == name)
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// 重置所有检查器
    pub fn reset(&mut self) {
        for (_, checker) in &mut self.checkers {
            checker.reset();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Checker)> {
        self.checkers
            .iter()
            .map(|(name, checker)| (name.as_str(), checker))
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [(String, Checker)] {
        &mut self.checkers
    }

    pub(crate) fn entry(&self, index: usize) -> Option<&(String, Checker)> {
        self.checkers.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::lexer::checker::WhitespaceChecker;

    #[test]
    fn test_builder_keeps_order() {
        let set = CheckerSet::new()
            .with("ws", WhitespaceChecker::new())
            .with("num", Checker::number())
            .with("id", Checker::identifier("ab", "ab"));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["ws", "num", "id"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_with_replaces_in_place() {
        let set = CheckerSet::new()
            .with("a", Checker::number())
            .with("b", Checker::string())
            .with("a", Checker::symbol("+"));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(matches!(set.get("a"), Some(Checker::Symbol(_))));
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut set = CheckerSet::new();
        set.add("num", Checker::number()).unwrap();
        let err = set.add("num", Checker::string()).unwrap_err();
        assert!(matches!(err, CheckerSetError::Duplicate(name) if name == "num"));
    }

    #[test]
    fn test_validate_unknown_ignored() {
        let set = CheckerSet::new().with("num", Checker::number()).ignore("ws");
        let err = set.validate().unwrap_err();
        assert!(matches!(err, CheckerSetError::UnknownIgnored(name) if name == "ws"));
    }

    #[test]
    fn test_validate_empty_symbol() {
        let set = CheckerSet::new().with("sym", Checker::symbols(Vec::<String>::new()));
        assert!(matches!(
            set.validate(),
            Err(CheckerSetError::EmptySymbol(_))
        ));

        let set = CheckerSet::new().with("sym", Checker::symbols(["+", ""]));
        assert!(matches!(
            set.validate(),
            Err(CheckerSetError::EmptySymbol(_))
        ));
    }

    #[test]
    fn test_validate_empty_set() {
        assert!(matches!(
            CheckerSet::new().validate(),
            Err(CheckerSetError::Empty)
        ));
    }

    #[test]
    fn test_ignore_is_idempotent() {
        let set = CheckerSet::new()
            .with("ws", Checker::whitespace())
            .ignore("ws")
            .ignore("ws");
        assert_eq!(set.ignored(), ["ws".to_string()]);
        assert!(set.is_ignored("ws"));
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_reset_clears_checkers() {
        let mut set = CheckerSet::new().with("num", Checker::number());
        for (_, checker) in set.entries_mut() {
            checker.feed('1');
        }
        assert_eq!(set.get("num").map(Checker::raw), Some("1"));
        set.reset();
        assert_eq!(set.get("num").map(Checker::raw), Some(""));
    }
}
