use crate::core::arithmetic::check_range;
use crate::core::converter::{to_integer, to_roman};
use crate::core::validator::validate;
use crate::utils::error::{ArithmeticError, InvalidNumeral};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated Roman numeral in canonical form.
///
/// The only ways to obtain one are parsing a string that passes
/// [`validate`] or encoding an in-range integer, so every instance denotes
/// exactly one value in `MIN_ROMAN..=MAX_ROMAN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RomanNumeral(String);

impl RomanNumeral {
    pub fn parse(input: &str) -> Result<Self, InvalidNumeral> {
        validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Range-checks `value` and encodes it.
    pub fn from_value(value: i64) -> Result<Self, ArithmeticError> {
        let value = check_range(value)?;
        Ok(Self(to_roman(value)))
    }

    pub fn value(&self) -> u32 {
        to_integer(self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RomanNumeral {
    type Err = InvalidNumeral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = InvalidNumeral;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl From<RomanNumeral> for String {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
