use crate::adapters::output::Renderer;
use crate::core::calculator::Calculator;
use crate::domain::Operation;
use crate::utils::error::{CalcError, ErrorSeverity, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add|sub|mul|div <A> <B>   compute, e.g. `add XIV IX`
  <A> + - * / <B>           same, infix, e.g. `XIV * II`
  history                   list stored results
  undo                      remove the most recent result
  help                      show this message
  quit                      leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Evaluate {
        op: Operation,
        left: String,
        right: String,
    },
    History,
    Undo,
    Help,
    Quit,
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Ok(ReplCommand::Empty),
            [word] => match word.to_ascii_lowercase().as_str() {
                "history" | "memory" => Ok(ReplCommand::History),
                "undo" | "delete" => Ok(ReplCommand::Undo),
                "help" | "?" => Ok(ReplCommand::Help),
                "quit" | "exit" => Ok(ReplCommand::Quit),
                _ => Err(unrecognised(line)),
            },
            [first, second, third] => {
                if let Ok(op) = first.parse::<Operation>() {
                    return Ok(ReplCommand::Evaluate {
                        op,
                        left: second.to_string(),
                        right: third.to_string(),
                    });
                }
                let op = second.parse::<Operation>()?;
                Ok(ReplCommand::Evaluate {
                    op,
                    left: first.to_string(),
                    right: third.to_string(),
                })
            }
            _ => Err(unrecognised(line)),
        }
    }
}

fn unrecognised(line: &str) -> CalcError {
    CalcError::InvalidValue {
        value: line.trim().to_string(),
        reason: "is not a recognised command (type `help`)".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented calculator session over any reader/writer pair.
pub struct Repl<R, W> {
    calculator: Calculator,
    renderer: Renderer,
    prompt: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(
        calculator: Calculator,
        renderer: Renderer,
        prompt: impl Into<String>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            calculator,
            renderer,
            prompt: prompt.into(),
            input,
            output,
        }
    }

    /// Runs until `quit` or end of input. Calculation errors and undecodable
    /// lines are reported and the session continues; only failures of the
    /// underlying reader or writer end it early.
    pub fn run(&mut self) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) => {
                    let error = CalcError::InvalidValue {
                        value: String::from_utf8_lossy(&buf).trim().to_string(),
                        reason: "is not valid UTF-8 text".to_string(),
                    };
                    self.report(&error)?;
                    continue;
                }
            };

            let flow = match self.handle_line(line) {
                Ok(flow) => flow,
                Err(e @ (CalcError::IoError(_) | CalcError::SerializationError(_))) => {
                    return Err(e)
                }
                Err(e) => {
                    self.report(&e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        tracing::debug!(entries = self.calculator.history().len(), "session ended");
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match ReplCommand::parse(line)? {
            ReplCommand::Evaluate { op, left, right } => {
                let result = self.calculator.evaluate(op, &left, &right)?;
                writeln!(self.output, "{}", self.renderer.result_line(&result))?;
            }
            ReplCommand::History => {
                let listing = self.renderer.history(self.calculator.history())?;
                writeln!(self.output, "{}", listing)?;
            }
            ReplCommand::Undo => {
                let removed = self.calculator.undo()?;
                writeln!(self.output, "{}", self.renderer.removed_line(&removed))?;
            }
            ReplCommand::Help => writeln!(self.output, "{}", HELP)?,
            ReplCommand::Quit => return Ok(Flow::Quit),
            ReplCommand::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &CalcError) -> Result<()> {
        if error.severity() == ErrorSeverity::Low {
            tracing::info!("{}", error);
        } else {
            tracing::warn!(category = ?error.category(), "{}", error);
        }
        writeln!(self.output, "{}", self.renderer.error_line(error))?;
        Ok(())
    }

    pub fn into_parts(self) -> (Calculator, W) {
        (self.calculator, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix_and_infix() {
        assert_eq!(
            ReplCommand::parse("add II III").unwrap(),
            ReplCommand::Evaluate {
                op: Operation::Add,
                left: "II".to_string(),
                right: "III".to_string()
            }
        );
        assert_eq!(
            ReplCommand::parse("  MMM * II ").unwrap(),
            ReplCommand::Evaluate {
                op: Operation::Multiply,
                left: "MMM".to_string(),
                right: "II".to_string()
            }
        );
        assert_eq!(
            ReplCommand::parse("mul X X").unwrap(),
            ReplCommand::Evaluate {
                op: Operation::Multiply,
                left: "X".to_string(),
                right: "X".to_string()
            }
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ReplCommand::parse("").unwrap(), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("History").unwrap(), ReplCommand::History);
        assert_eq!(ReplCommand::parse("undo").unwrap(), ReplCommand::Undo);
        assert_eq!(ReplCommand::parse("exit\n").unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ReplCommand::parse("X % V"),
            Err(CalcError::UnknownOperation { .. })
        ));
        assert!(matches!(
            ReplCommand::parse("add X"),
            Err(CalcError::InvalidValue { .. })
        ));
    }
}
