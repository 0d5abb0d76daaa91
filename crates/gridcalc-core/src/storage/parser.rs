//! Parser for .grd sheet files
//!
//! One cell per line, `address: text`. Blank lines and `#` comments are
//! skipped. A value in double quotes is always a literal; anything else is
//! classified by its leading `=`.

use crate::error::{CoreError, Result};
use crate::input::classify;
use gridcalc_engine::engine::{Cell, CellKind, Sheet};
use std::fs;
use std::path::Path;

/// Parse a .grd file into a Sheet
pub fn parse_grd(path: &Path) -> Result<Sheet> {
    let content = fs::read_to_string(path)?;
    parse_grd_content(&content)
}

/// Parse .grd content from a string
pub fn parse_grd_content(content: &str) -> Result<Sheet> {
    let mut sheet = Sheet::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((address, value)) = line.split_once(':') else {
            return Err(CoreError::Parse {
                line: line_num + 1,
                message: "Expected 'ADDRESS: VALUE' format".to_string(),
            });
        };

        let cell = parse_cell_value(value.trim()).map_err(|err| CoreError::Parse {
            line: line_num + 1,
            message: err.to_string(),
        })?;
        sheet.insert(address.trim(), cell);
    }

    Ok(sheet)
}

fn parse_cell_value(value: &str) -> gridcalc_engine::engine::Result<Cell> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        let text = unescape_grd_text(&value[1..value.len() - 1]);
        return Cell::new(&text, CellKind::Literal);
    }

    Cell::new(value, classify(value))
}

fn unescape_grd_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_and_formula() {
        let sheet = parse_grd_content("a1: 42\nb1: =SUM(a1)").unwrap();
        assert_eq!(sheet.get("a1"), Some(&Cell::literal("42")));
        assert_eq!(sheet.get("b1").unwrap().kind(), CellKind::Formula);
        assert_eq!(sheet.get("b1").unwrap().value(), "=SUM(a1)");
    }

    #[test]
    fn test_parse_quoted_text_is_literal() {
        let sheet = parse_grd_content(r#"a1: "=SUM(a1)""#).unwrap();
        assert_eq!(sheet.get("a1"), Some(&Cell::literal("=SUM(a1)")));
    }

    #[test]
    fn test_parse_text_escaped_quotes() {
        let sheet = parse_grd_content(r#"a1: "He said \"hi\"""#).unwrap();
        assert_eq!(sheet.get("a1"), Some(&Cell::literal("He said \"hi\"")));
    }

    #[test]
    fn test_parse_empty_value() {
        let sheet = parse_grd_content("a1:").unwrap();
        assert_eq!(sheet.get("a1"), Some(&Cell::literal("")));
    }

    #[test]
    fn test_skip_comments_and_empty_lines() {
        let content = r#"
# This is a comment
a1: 42

# Another comment

b1: 100
"#;
        assert_eq!(parse_grd_content(content).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_separator_reports_line() {
        let err = parse_grd_content("a1: 1\n\nb1 2").unwrap_err();
        match err {
            CoreError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_formula_reports_line() {
        let err = parse_grd_content("a1: 1\nb1: =FOO(a1)").unwrap_err();
        match err {
            CoreError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("Unknown operator 'FOO'"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_later_line_replaces_earlier() {
        let sheet = parse_grd_content("a1: 1\na1: 2").unwrap();
        assert_eq!(sheet.get("a1"), Some(&Cell::literal("2")));
    }
}
