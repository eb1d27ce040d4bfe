use crate::domain::{RomanNumeral, MAX_ROMAN, MIN_ROMAN};

const ENCODING_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(symbol: char) -> u32 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Decodes a validated numeral.
///
/// Scans right to left: a symbol smaller than the one after it is
/// subtracted, anything else is added.
pub fn to_integer(numeral: &RomanNumeral) -> u32 {
    let mut total: u32 = 0;
    let mut previous = 0;

    for symbol in numeral.as_str().chars().rev() {
        let current = symbol_value(symbol);
        if current < previous {
            total -= current;
        } else {
            total += current;
        }
        previous = current;
    }

    total
}

/// Greedy encoding into canonical form. `value` must already be in range.
pub fn to_roman(value: u32) -> String {
    debug_assert!((MIN_ROMAN..=MAX_ROMAN).contains(&value));

    let mut remainder = value;
    let mut result = String::new();

    for (amount, symbol) in ENCODING_TABLE {
        while remainder >= amount {
            result.push_str(symbol);
            remainder -= amount;
        }
    }

    result
}
