use crate::adapters::output::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Roman numeral calculator with conversion and result history")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Evaluate `<LEFT> <OPERATION> <RIGHT>`, e.g. `calc XIV + IX`
    Calc {
        left: String,
        /// add, sub, mul, div or + - * /
        #[arg(allow_hyphen_values = true)]
        operation: String,
        right: String,
    },
    /// Convert a Roman numeral to an integer
    ToInt { numeral: String },
    /// Convert an integer between 1 and 4999 to a Roman numeral
    ToRoman {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Check whether each argument is a valid Roman numeral
    Validate {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
    /// Start an interactive session with a result history
    Session,
}
