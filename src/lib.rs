pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    arithmetic::compute,
    calculator::Calculator,
    converter::{to_integer, to_roman},
    history::History,
    validator::validate,
};
pub use domain::{Operation, RomanNumeral, MAX_ROMAN, MIN_ROMAN};
pub use utils::error::{ArithmeticError, CalcError, EmptyHistory, InvalidNumeral, Result};
