use crate::core::history::History;
use crate::domain::RomanNumeral;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is a valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub display: DisplayConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub result_prefix: String,
    pub history_separator: String,
    pub empty_history_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            result_prefix: "Result: ".to_string(),
            history_separator: ", ".to_string(),
            empty_history_message: "History is empty.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub prompt: String,
    pub preload: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "roman> ".to_string(),
            preload: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable, leaving
    /// unset variables untouched.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("session.prompt", &self.session.prompt)?;
        validation::validate_not_empty("display.history_separator", &self.display.history_separator)?;
        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validation::validate_numerals("session.preload", &self.session.preload)?;
        Ok(())
    }

    /// History seeded from `session.preload`.
    pub fn initial_history(&self) -> Result<History> {
        self.session
            .preload
            .iter()
            .map(|entry| RomanNumeral::parse(entry).map_err(CalcError::from))
            .collect()
    }

    pub fn log_level(&self) -> String {
        self.logging.level.to_ascii_lowercase()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[display]
result_prefix = "= "
history_separator = " | "
empty_history_message = "nothing yet"

[session]
prompt = "> "
preload = ["V", "X"]

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.display.result_prefix, "= ");
        assert_eq!(config.session.prompt, "> ");
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());

        let history = config.initial_history().unwrap();
        assert_eq!(history.join(&config.display.history_separator), "V | X");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.session.prompt, "roman> ");
        assert!(config.validate().is_ok());
        assert!(config.initial_history().unwrap().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_CALC_TEST_PROMPT", "calc$ ");

        let toml_content = r#"
[session]
prompt = "${ROMAN_CALC_TEST_PROMPT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.session.prompt, "calc$ ");

        std::env::remove_var("ROMAN_CALC_TEST_PROMPT");
    }

    #[test]
    fn test_config_validation() {
        let bad_preload = TomlConfig::from_toml_str("[session]\npreload = [\"IIII\"]\n").unwrap();
        assert!(bad_preload.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let empty_prompt = TomlConfig::from_toml_str("[session]\nprompt = \"\"\n").unwrap();
        assert!(empty_prompt.validate().is_err());

        let empty_separator =
            TomlConfig::from_toml_str("[display]\nhistory_separator = \"\"\n").unwrap();
        assert!(empty_separator.validate().is_err());
    }

    #[test]
    fn test_whitespace_separator_is_accepted() {
        let config = TomlConfig::from_toml_str("[display]\nhistory_separator = \" \"\n").unwrap();
        assert!(config.validate().is_ok());

        let history: History = ["V", "X"]
            .into_iter()
            .map(|s| RomanNumeral::parse(s).unwrap())
            .collect();
        assert_eq!(history.join(&config.display.history_separator), "V X");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[session\nprompt = 1").unwrap_err();
        assert!(matches!(err, CalcError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nresult_prefix = \"Answer: \"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.display.result_prefix, "Answer: ");
    }
}
