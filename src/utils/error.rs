use crate::domain::{MAX_ROMAN, MIN_ROMAN};
use thiserror::Error;

/// A string that does not match the canonical Roman numeral grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid Roman numeral: {input:?}")]
pub struct InvalidNumeral {
    pub input: String,
}

impl InvalidNumeral {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result {value} is outside the allowed range ({min}-{max})")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

impl ArithmeticError {
    pub fn out_of_range(value: i64) -> Self {
        Self::OutOfRange {
            value,
            min: MIN_ROMAN,
            max: MAX_ROMAN,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("History is already empty")]
pub struct EmptyHistory;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error(transparent)]
    InvalidNumeral(#[from] InvalidNumeral),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    EmptyHistory(#[from] EmptyHistory),

    #[error("Unknown operation: {input:?}")]
    UnknownOperation { input: String },

    #[error("Invalid value {value:?}: {reason}")]
    InvalidValue { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    History,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the CLI for an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidNumeral(_)
            | CalcError::UnknownOperation { .. }
            | CalcError::InvalidValue { .. } => ErrorCategory::Input,
            CalcError::Arithmetic(_) => ErrorCategory::Arithmetic,
            CalcError::EmptyHistory(_) => ErrorCategory::History,
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::TomlError(_) => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::History => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Arithmetic => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidNumeral(e) => {
                format!("'{}' is not a valid Roman numeral", e.input)
            }
            CalcError::Arithmetic(ArithmeticError::DivisionByZero) => {
                "Cannot divide by zero".to_string()
            }
            CalcError::Arithmetic(ArithmeticError::OutOfRange { value, min, max }) => {
                format!("Result {} is outside the allowed range ({}-{})", value, min, max)
            }
            CalcError::EmptyHistory(_) => "History is already empty".to_string(),
            CalcError::UnknownOperation { input } => format!("Unknown operation '{}'", input),
            CalcError::InvalidValue { value, reason } => format!("'{}' {}", value, reason),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CalcError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            CalcError::IoError(e) => format!("File system error: {}", e),
            CalcError::SerializationError(e) => format!("Could not serialize output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidNumeral(_) => {
                "Use uppercase I, V, X, L, C, D, M in canonical form, e.g. XIV or MMMMCMXCIX"
            }
            CalcError::Arithmetic(ArithmeticError::DivisionByZero) => {
                "Choose a non-zero divisor"
            }
            CalcError::Arithmetic(ArithmeticError::OutOfRange { .. }) => {
                "Pick operands whose result lies between I (1) and MMMMCMXCIX (4999)"
            }
            CalcError::EmptyHistory(_) => "Compute a result before removing entries",
            CalcError::UnknownOperation { .. } => {
                "Use one of add, sub, mul, div or +, -, *, /"
            }
            CalcError::InvalidValue { .. } => "Provide a whole number between 1 and 4999",
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::TomlError(_) => "Check the configuration file against the documented format",
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
