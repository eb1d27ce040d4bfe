use crate::config::toml_config::DisplayConfig;
use crate::core::history::History;
use crate::domain::{Operation, RomanNumeral};
use crate::utils::error::{CalcError, ErrorSeverity, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct CalculationView<'a> {
    operation: &'a str,
    left: &'a RomanNumeral,
    right: &'a RomanNumeral,
    result: &'a RomanNumeral,
    value: u32,
}

#[derive(Debug, Serialize)]
struct ConversionView<'a> {
    numeral: &'a RomanNumeral,
    value: u32,
}

#[derive(Debug, Serialize)]
struct HistoryView<'a> {
    history: &'a [RomanNumeral],
}

#[derive(Debug, Serialize)]
struct ValidityView<'a> {
    input: &'a str,
    valid: bool,
}

/// Turns core results into the text a user sees.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    display: DisplayConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat, display: DisplayConfig) -> Self {
        Self { format, display }
    }

    pub fn calculation(
        &self,
        op: Operation,
        left: &RomanNumeral,
        right: &RomanNumeral,
        result: &RomanNumeral,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format!("{}{}", self.display.result_prefix, result)),
            OutputFormat::Json => Ok(serde_json::to_string(&CalculationView {
                operation: op.symbol(),
                left,
                right,
                result,
                value: result.value(),
            })?),
        }
    }

    /// Session-style line for a result whose operands are not echoed.
    pub fn result_line(&self, result: &RomanNumeral) -> String {
        match self.format {
            OutputFormat::Text => format!("{}{}", self.display.result_prefix, result),
            OutputFormat::Json => {
                serde_json::json!({ "result": result.as_str(), "value": result.value() })
                    .to_string()
            }
        }
    }

    /// Output of `to-int`: the decoded value.
    pub fn integer_line(&self, numeral: &RomanNumeral) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(numeral.value().to_string()),
            OutputFormat::Json => self.conversion_json(numeral),
        }
    }

    /// Output of `to-roman`: the encoded numeral.
    pub fn numeral_line(&self, numeral: &RomanNumeral) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(numeral.to_string()),
            OutputFormat::Json => self.conversion_json(numeral),
        }
    }

    fn conversion_json(&self, numeral: &RomanNumeral) -> Result<String> {
        Ok(serde_json::to_string(&ConversionView {
            numeral,
            value: numeral.value(),
        })?)
    }

    pub fn history(&self, history: &History) -> Result<String> {
        match self.format {
            OutputFormat::Text if history.is_empty() => {
                Ok(self.display.empty_history_message.clone())
            }
            OutputFormat::Text => Ok(format!(
                "History: {}",
                history.join(&self.display.history_separator)
            )),
            OutputFormat::Json => Ok(serde_json::to_string(&HistoryView {
                history: history.list_all(),
            })?),
        }
    }

    pub fn removed_line(&self, removed: &RomanNumeral) -> String {
        match self.format {
            OutputFormat::Text => format!("Removed last result: {}", removed),
            OutputFormat::Json => serde_json::json!({ "removed": removed.as_str() }).to_string(),
        }
    }

    /// A reported, non-fatal failure. History warnings are rendered as such.
    pub fn error_line(&self, error: &CalcError) -> String {
        let level = if error.severity() == ErrorSeverity::Low {
            "warning"
        } else {
            "error"
        };
        match self.format {
            OutputFormat::Text if level == "warning" => {
                format!("Warning: {}", error.user_friendly_message())
            }
            OutputFormat::Text => format!("Error: {}", error.user_friendly_message()),
            OutputFormat::Json => serde_json::json!({
                "level": level,
                "category": format!("{:?}", error.category()).to_ascii_lowercase(),
                "message": error.user_friendly_message(),
            })
            .to_string(),
        }
    }

    pub fn validity(&self, input: &str, valid: bool) -> Result<String> {
        match self.format {
            OutputFormat::Text if valid => Ok(format!("{}: valid", input)),
            OutputFormat::Text => Ok(format!("{}: invalid", input)),
            OutputFormat::Json => Ok(serde_json::to_string(&ValidityView { input, valid })?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{EmptyHistory, InvalidNumeral};

    fn numeral(s: &str) -> RomanNumeral {
        RomanNumeral::parse(s).unwrap()
    }

    #[test]
    fn test_text_rendering() {
        let renderer = Renderer::new(OutputFormat::Text, DisplayConfig::default());
        let line = renderer
            .calculation(Operation::Add, &numeral("II"), &numeral("III"), &numeral("V"))
            .unwrap();
        assert_eq!(line, "Result: V");

        assert_eq!(renderer.integer_line(&numeral("XIV")).unwrap(), "14");
        assert_eq!(renderer.numeral_line(&numeral("XIV")).unwrap(), "XIV");
        assert_eq!(renderer.history(&History::new()).unwrap(), "History is empty.");

        let history: History = ["V", "X"].into_iter().map(numeral).collect();
        assert_eq!(renderer.history(&history).unwrap(), "History: V, X");
    }

    #[test]
    fn test_json_rendering() {
        let renderer = Renderer::new(OutputFormat::Json, DisplayConfig::default());
        let line = renderer
            .calculation(Operation::Add, &numeral("II"), &numeral("III"), &numeral("V"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "operation": "+",
                "left": "II",
                "right": "III",
                "result": "V",
                "value": 5
            })
        );

        let history: History = ["V"].into_iter().map(numeral).collect();
        assert_eq!(renderer.history(&history).unwrap(), r#"{"history":["V"]}"#);
        assert_eq!(
            renderer.validity("VV", false).unwrap(),
            r#"{"input":"VV","valid":false}"#
        );
    }

    #[test]
    fn test_error_lines_follow_format() {
        let invalid: CalcError = InvalidNumeral::new("VV").into();
        let empty: CalcError = EmptyHistory.into();

        let text = Renderer::new(OutputFormat::Text, DisplayConfig::default());
        assert_eq!(
            text.error_line(&invalid),
            "Error: 'VV' is not a valid Roman numeral"
        );
        assert_eq!(text.error_line(&empty), "Warning: History is already empty");

        let json = Renderer::new(OutputFormat::Json, DisplayConfig::default());
        let value: serde_json::Value = serde_json::from_str(&json.error_line(&invalid)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "level": "error",
                "category": "input",
                "message": "'VV' is not a valid Roman numeral"
            })
        );
        let value: serde_json::Value = serde_json::from_str(&json.error_line(&empty)).unwrap();
        assert_eq!(value["level"], "warning");
        assert_eq!(value["category"], "history");
    }
}
