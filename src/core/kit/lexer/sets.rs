//! 预定义的检查器集合

use super::checker::{Checker, StringChecker, WhitespaceChecker};
use super::checker_set::CheckerSet;

/// JSON 风格字面量的词法
///
/// 空白（`ws`）被忽略。
pub fn json() -> CheckerSet {
    CheckerSet::new()
        .with("ws", WhitespaceChecker::new())
        .with("colon", Checker::symbol(":"))
        .with("comma", Checker::symbol(","))
        .with("oobj", Checker::symbol("{"))
        .with("cobj", Checker::symbol("}"))
        .with("oarr", Checker::symbol("["))
        .with("carr", Checker::symbol("]"))
        .with("bool", Checker::symbols(["true", "false"]))
        .with("null", Checker::symbol("null"))
        .with("strlit", StringChecker::new())
        .with("numlit", Checker::number())
        .ignore("ws")
}
