use super::cell::DerivedValue;
use super::format::{Rounding, format_mean};
use super::formula::Operator;

/// Failures of the arithmetic itself, before they are tied to a cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArithmeticError {
    DivisionByZero,
    Overflow,
}

/// Apply `operator` to already-computed inputs, left to right.
///
/// `SUM()` is 0 and `MUL()` is 1; `AVG()` has no defined value.
pub fn evaluate(
    operator: Operator,
    inputs: &[i64],
    rounding: Rounding,
) -> Result<DerivedValue, ArithmeticError> {
    let output = match operator {
        Operator::Sum => inputs
            .iter()
            .try_fold(0i64, |acc, &n| acc.checked_add(n))
            .ok_or(ArithmeticError::Overflow)?
            .to_string(),
        Operator::Mul => inputs
            .iter()
            .try_fold(1i64, |acc, &n| acc.checked_mul(n))
            .ok_or(ArithmeticError::Overflow)?
            .to_string(),
        Operator::Avg => {
            if inputs.is_empty() {
                return Err(ArithmeticError::DivisionByZero);
            }
            let sum = inputs
                .iter()
                .try_fold(0i128, |acc, &n| acc.checked_add(i128::from(n)))
                .ok_or(ArithmeticError::Overflow)?;
            let count = u64::try_from(inputs.len()).map_err(|_| ArithmeticError::Overflow)?;
            format_mean(sum, count, rounding)
        }
    };
    Ok(DerivedValue::new(output))
}

/// Read a dependency's display text as a number.
pub fn parse_input(output: &str) -> Option<i64> {
    output.trim().parse::<i64>().ok()
}
