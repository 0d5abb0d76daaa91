//! Formula parsing.
//!
//! A formula has the shape `=OP(ref, ref, ...)`. Parsing only splits the text
//! into an operator and raw argument strings; the arguments are resolved to
//! cell coordinates when the dependency graph is built.

use std::fmt;

use super::error::{EngineError, Result};

/// The reduction operators a formula can apply.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Operator {
    Sum,
    Mul,
    Avg,
}

impl Operator {
    /// Look up an operator by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Operator> {
        match name {
            "SUM" => Some(Operator::Sum),
            "MUL" => Some(Operator::Mul),
            "AVG" => Some(Operator::Avg),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Sum => "SUM",
            Operator::Mul => "MUL",
            Operator::Avg => "AVG",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed formula, kept next to the text it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    source: String,
    operator: Operator,
    args: Vec<String>,
}

impl Formula {
    pub fn parse(text: &str) -> Result<Formula> {
        let (operator, args) = parse_formula(text)?;
        Ok(Formula {
            source: text.to_string(),
            operator,
            args,
        })
    }

    /// The formula text exactly as entered.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Raw argument references, trimmed, in the order written.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Split `=OP(a, b, ...)` into its operator and trimmed argument strings.
pub fn parse_formula(text: &str) -> Result<(Operator, Vec<String>)> {
    let malformed = |reason| EngineError::MalformedFormula {
        formula: text.to_string(),
        reason,
    };

    let body = text
        .trim()
        .strip_prefix('=')
        .ok_or_else(|| malformed("formula must start with '='"))?;

    let name_end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    let (name, rest) = body.split_at(name_end);
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(malformed("expected an operator name after '='"));
    }

    let inner = rest
        .strip_prefix('(')
        .ok_or_else(|| malformed("expected '(' after the operator name"))?
        .strip_suffix(')')
        .ok_or_else(|| malformed("formula must end with ')'"))?;
    if inner.contains(['(', ')']) {
        return Err(malformed("nested parentheses are not supported"));
    }

    let operator = Operator::from_name(name).ok_or_else(|| EngineError::UnknownOperator {
        operator: name.to_string(),
        formula: text.to_string(),
    })?;

    if inner.trim().is_empty() {
        return Ok((operator, Vec::new()));
    }

    let mut args = Vec::new();
    for arg in inner.split(',') {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(malformed("empty argument"));
        }
        args.push(arg.to_string());
    }

    Ok((operator, args))
}
