use crate::utils::error::InvalidNumeral;
use regex::Regex;
use std::sync::LazyLock;

// Thousands, hundreds, tens, units. Caps encodable values at MMMMCMXCIX.
static ROMAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("Roman numeral pattern is a valid regex")
});

/// Checks that `input` is a well-formed Roman numeral in canonical form.
///
/// The whole string must match; the empty string matches every group of the
/// grammar but denotes no value and is rejected as well.
pub fn validate(input: &str) -> Result<(), InvalidNumeral> {
    if input.is_empty() || !ROMAN_PATTERN.is_match(input) {
        tracing::debug!(input, "rejected Roman numeral");
        return Err(InvalidNumeral::new(input));
    }
    Ok(())
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}
