//! JSON sheet import: `{"cells": {"a1": {"value": "1", "kind": "literal"}}}`.
//!
//! Cells carry an explicit kind, so no classification happens here. The
//! `"type": "primitive" | "formula"` spelling is accepted as well.

use crate::error::Result;
use gridcalc_engine::engine::Sheet;
use std::path::Path;

pub fn parse_json(path: &Path) -> Result<Sheet> {
    let content = std::fs::read_to_string(path)?;
    parse_json_content(&content)
}

pub fn parse_json_content(content: &str) -> Result<Sheet> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use gridcalc_engine::engine::{Cell, CellKind};

    #[test]
    fn test_parse_json_sheet() {
        let content = r#"{
            "cells": {
                "a1": {"value": "1", "kind": "literal"},
                "b1": {"value": "=SUM(a1)", "kind": "formula"},
                "c1": {"value": "=SUM(a1)", "kind": "literal"}
            }
        }"#;
        let sheet = parse_json_content(content).unwrap();
        assert_eq!(sheet.get("a1"), Some(&Cell::literal("1")));
        assert_eq!(sheet.get("b1").unwrap().kind(), CellKind::Formula);
        assert_eq!(sheet.get("c1"), Some(&Cell::literal("=SUM(a1)")));
    }

    #[test]
    fn test_parse_json_type_spelling() {
        let content = r#"{
            "cells": {
                "a1": {"value": "1", "type": "primitive"},
                "a2": {"value": "2", "type": "primitive"},
                "b1": {"value": "3", "type": "primitive"},
                "b2": {"value": "=SUM(a1, a2)", "type": "formula"}
            }
        }"#;
        let sheet = parse_json_content(content).unwrap();
        assert_eq!(sheet.len(), 4);
        assert_eq!(sheet.get("a2"), Some(&Cell::literal("2")));
        assert_eq!(sheet.get("b2").unwrap().kind(), CellKind::Formula);
    }

    #[test]
    fn test_parse_json_bad_formula() {
        let content = r#"{"cells": {"a1": {"value": "=SUM(a1", "kind": "formula"}}}"#;
        assert!(matches!(parse_json_content(content), Err(CoreError::Json(_))));
    }
}
