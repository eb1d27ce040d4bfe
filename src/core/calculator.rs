use crate::core::arithmetic::compute;
use crate::core::history::History;
use crate::domain::{Operation, RomanNumeral};
use crate::utils::error::Result;

/// A calculator session: runs the full validate → compute → record flow
/// and owns the history of results.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: History) -> Self {
        Self { history }
    }

    /// Validates both raw operands, computes, and appends the result to the
    /// history. On any failure the history is left untouched.
    pub fn evaluate(&mut self, op: Operation, left: &str, right: &str) -> Result<RomanNumeral> {
        let left = RomanNumeral::parse(left.trim())?;
        let right = RomanNumeral::parse(right.trim())?;
        self.evaluate_numerals(op, &left, &right)
    }

    /// Same as [`Calculator::evaluate`] for operands that are already validated.
    pub fn evaluate_numerals(
        &mut self,
        op: Operation,
        left: &RomanNumeral,
        right: &RomanNumeral,
    ) -> Result<RomanNumeral> {
        let result = compute(op, left, right)?;
        self.history.append(result.clone());

        tracing::info!("{} {} {} = {}", left, op, right, result);
        Ok(result)
    }

    /// Removes the most recent result.
    pub fn undo(&mut self) -> Result<RomanNumeral> {
        Ok(self.history.remove_last()?)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }
}
