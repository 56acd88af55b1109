//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示、源码上下文和 token 表格。

use crate::api::LexgramError;
use crate::core::kit::lexer::Token;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 5;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &LexgramError, source: &str) {
    eprintln!("error: {}", e);

    if let (Some(line), Some(column)) = (e.line(), e.column()) {
        print_source_context(source, line, column);
    } else if let Some(line) = e.line() {
        print_source_context(source, line, 0);
    }
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    eprint!("{}", render_source_context(source, error_line, error_col));
}

/// 渲染源代码上下文
///
/// `error_col` 为 0 时不画列标记。行号越界时返回空串。
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号的最大宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{}|--\n", separator);
    for line_idx in start_line..=end_line {
        out.push_str(&format!(
            "{:>width$} | {}\n",
            line_idx,
            lines[line_idx - 1],
            width = width
        ));
        if line_idx == error_line && error_col > 0 {
            out.push_str(&format!(
                "{} | {}^\n",
                " ".repeat(width),
                " ".repeat(error_col - 1)
            ));
        }
    }
    out.push_str(&format!("{}|--\n", separator));
    out
}

/// 把 token 渲染为对齐的表格（每行一个 token）
pub fn format_tokens(tokens: &[Token]) -> String {
    let kind_width = tokens.iter().map(|t| t.kind.len()).max().unwrap_or(0);
    tokens
        .iter()
        .map(|t| {
            format!(
                "{:>4}:{:<4} {:<kind_width$} {:?}\n",
                t.line,
                t.column,
                t.kind,
                t.value,
                kind_width = kind_width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::lexer::Coordinate;

    #[test]
    fn test_render_context_with_caret() {
        let source = "a -> b\nb -> @\nc -> d";
        let rendered = render_source_context(source, 2, 6);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "--|--");
        assert_eq!(lines[1], "1 | a -> b");
        assert_eq!(lines[2], "2 | b -> @");
        assert_eq!(lines[3], "  |      ^");
        assert_eq!(lines[4], "3 | c -> d");
        assert_eq!(lines[5], "--|--");
    }

    #[test]
    fn test_render_context_without_column() {
        let rendered = render_source_context("a ->", 1, 0);
        assert!(!rendered.contains('^'));
        assert!(rendered.contains("1 | a ->"));
    }

    #[test]
    fn test_render_context_out_of_range() {
        assert!(render_source_context("a", 3, 1).is_empty());
        assert!(render_source_context("a", 0, 1).is_empty());
    }

    #[test]
    fn test_render_context_window() {
        let source: String = (1..=20).map(|i| format!("line{}\n", i)).collect();
        let rendered = render_source_context(&source, 10, 1);
        assert!(rendered.contains(" 5 | line5"));
        assert!(rendered.contains("15 | line15"));
        assert!(!rendered.contains("line4\n"));
        assert!(!rendered.contains("line16"));
    }

    #[test]
    fn test_format_tokens() {
        let tokens = vec![
            Token::new("oarr", "[", "[", Coordinate::new(1, 1)),
            Token::new("strlit", "a\tb", "\"a\\tb\"", Coordinate::new(1, 2)),
        ];
        let table = format_tokens(&tokens);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "   1:1    oarr   \"[\"");
        assert_eq!(lines[1], "   1:2    strlit \"a\\tb\"");
    }
}
