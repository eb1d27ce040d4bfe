use crate::adapters::output::Renderer;
use crate::adapters::repl::Repl;
use crate::config::{Command, TomlConfig};
use crate::core::calculator::Calculator;
use crate::core::validator;
use crate::domain::{Operation, RomanNumeral};
use crate::utils::error::{CalcError, Result};
use std::io::{BufRead, Write};

/// Runs one CLI subcommand, reading session input from `input` and writing
/// results to `output`.
///
/// Returns the exit code for outcomes that are not errors but still signal
/// failure (an invalid numeral passed to `validate`).
pub fn run_command<R: BufRead, W: Write>(
    command: Command,
    config: &TomlConfig,
    renderer: &Renderer,
    input: R,
    mut output: W,
) -> Result<i32> {
    match command {
        Command::Calc {
            left,
            operation,
            right,
        } => {
            let op: Operation = operation.parse()?;
            let left = RomanNumeral::parse(left.trim())?;
            let right = RomanNumeral::parse(right.trim())?;

            let mut calculator = Calculator::new();
            let result = calculator.evaluate_numerals(op, &left, &right)?;
            writeln!(output, "{}", renderer.calculation(op, &left, &right, &result)?)?;
        }
        Command::ToInt { numeral } => {
            let numeral = RomanNumeral::parse(numeral.trim())?;
            writeln!(output, "{}", renderer.integer_line(&numeral)?)?;
        }
        Command::ToRoman { value } => {
            let parsed: i64 = value.trim().parse().map_err(|_| CalcError::InvalidValue {
                value: value.trim().to_string(),
                reason: "is not a whole number".to_string(),
            })?;
            let numeral = RomanNumeral::from_value(parsed)?;
            writeln!(output, "{}", renderer.numeral_line(&numeral)?)?;
        }
        Command::Validate { numerals } => {
            let mut all_valid = true;
            for numeral in &numerals {
                let numeral = numeral.trim();
                let valid = validator::is_valid(numeral);
                all_valid &= valid;
                writeln!(output, "{}", renderer.validity(numeral, valid)?)?;
            }
            if !all_valid {
                return Ok(1);
            }
        }
        Command::Session => {
            let calculator = Calculator::with_history(config.initial_history()?);
            tracing::info!(
                preloaded = calculator.history().len(),
                "Starting interactive session"
            );

            let mut repl = Repl::new(
                calculator,
                renderer.clone(),
                config.session.prompt.clone(),
                input,
                output,
            );
            repl.run()?;
        }
    }

    Ok(0)
}
