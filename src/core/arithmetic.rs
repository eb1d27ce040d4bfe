use crate::core::converter::to_integer;
use crate::domain::{Operation, RomanNumeral, MAX_ROMAN, MIN_ROMAN};
use crate::utils::error::ArithmeticError;

/// Applies `op` to two integers. Division truncates.
pub fn apply(op: Operation, left: i64, right: i64) -> Result<i64, ArithmeticError> {
    match op {
        Operation::Add => Ok(left + right),
        Operation::Subtract => Ok(left - right),
        Operation::Multiply => Ok(left * right),
        Operation::Divide => {
            if right == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            Ok(left / right)
        }
    }
}

/// Narrows an arithmetic result to the representable interval.
pub fn check_range(value: i64) -> Result<u32, ArithmeticError> {
    u32::try_from(value)
        .ok()
        .filter(|v| (MIN_ROMAN..=MAX_ROMAN).contains(v))
        .ok_or_else(|| ArithmeticError::out_of_range(value))
}

/// Computes `left op right` and re-encodes the result. Has no side effects;
/// recording the result is up to the caller.
pub fn compute(
    op: Operation,
    left: &RomanNumeral,
    right: &RomanNumeral,
) -> Result<RomanNumeral, ArithmeticError> {
    let a = i64::from(to_integer(left));
    let b = i64::from(to_integer(right));

    let value = apply(op, a, b).inspect_err(|e| {
        tracing::warn!(%left, %right, operation = %op, "arithmetic failed: {}", e);
    })?;

    let result = RomanNumeral::from_value(value).inspect_err(|e| {
        tracing::warn!(%left, %right, operation = %op, "arithmetic failed: {}", e);
    })?;

    tracing::debug!("{} {} {} = {} ({})", left, op, right, result, value);
    Ok(result)
}
