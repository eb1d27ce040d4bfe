// Domain layer: numeral and operation types shared by the core and the adapters.

pub mod numeral;
pub mod operation;

pub use numeral::RomanNumeral;
pub use operation::Operation;

/// Smallest value a Roman numeral can denote.
pub const MIN_ROMAN: u32 = 1;

/// Largest value the canonical grammar can encode (MMMMCMXCIX).
pub const MAX_ROMAN: u32 = 4999;
