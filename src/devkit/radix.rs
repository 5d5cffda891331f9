//! The four supported numeral bases and their alphabets.

use crate::error::DevkitError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// Display order, smallest base first.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Radix::Binary => "Binary",
            Radix::Octal => "Octal",
            Radix::Decimal => "Decimal",
            Radix::Hexadecimal => "Hexadecimal",
        }
    }

    /// Canonical literal prefix. Decimal has none.
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }

    /// Alphabet membership, case-insensitive for hexadecimal letters.
    pub fn accepts(self, c: char) -> bool {
        c.is_digit(self.value())
    }

    pub fn invalid_digits_message(self) -> &'static str {
        match self {
            Radix::Binary => "Binary can only contain 0 and 1",
            Radix::Octal => "Octal can only contain 0-7",
            Radix::Decimal => "Invalid input",
            Radix::Hexadecimal => "Hexadecimal can only contain 0-9 and A-F",
        }
    }

    /// Strips this radix's prefix (either case) when present.
    pub(crate) fn strip_prefix(self, digits: &str) -> &str {
        let prefix = self.prefix();
        if prefix.is_empty() {
            return digits;
        }
        match digits.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => &digits[prefix.len()..],
            _ => digits,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = DevkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Radix::Binary),
            "octal" | "oct" | "8" => Ok(Radix::Octal),
            "decimal" | "dec" | "10" => Ok(Radix::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(Radix::Hexadecimal),
            other => Err(DevkitError::Api(format!(
                "Unknown number system: {} (expected binary, octal, decimal or hexadecimal)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_display_order() {
        let values: Vec<u32> = Radix::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![2, 8, 10, 16]);
    }

    #[test]
    fn test_alphabets() {
        assert!(Radix::Binary.accepts('1'));
        assert!(!Radix::Binary.accepts('2'));
        assert!(Radix::Octal.accepts('7'));
        assert!(!Radix::Octal.accepts('8'));
        assert!(Radix::Decimal.accepts('9'));
        assert!(!Radix::Decimal.accepts('a'));
        assert!(Radix::Hexadecimal.accepts('f'));
        assert!(Radix::Hexadecimal.accepts('F'));
        assert!(!Radix::Hexadecimal.accepts('g'));
        assert!(!Radix::Decimal.accepts('٣'));
    }

    #[test]
    fn test_strip_prefix_is_case_insensitive() {
        assert_eq!(Radix::Hexadecimal.strip_prefix("0x1F"), "1F");
        assert_eq!(Radix::Hexadecimal.strip_prefix("0X1F"), "1F");
        assert_eq!(Radix::Binary.strip_prefix("0B101"), "101");
        assert_eq!(Radix::Octal.strip_prefix("0o17"), "17");
        assert_eq!(Radix::Decimal.strip_prefix("0x10"), "0x10");
        assert_eq!(Radix::Hexadecimal.strip_prefix("0"), "0");
        assert_eq!(Radix::Hexadecimal.strip_prefix("é1"), "é1");
    }

    #[test]
    fn test_other_radix_prefix_is_not_stripped() {
        assert_eq!(Radix::Binary.strip_prefix("0x11"), "0x11");
        assert_eq!(Radix::Octal.strip_prefix("0b11"), "0b11");
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("Binary".parse::<Radix>().unwrap(), Radix::Binary);
        assert_eq!("oct".parse::<Radix>().unwrap(), Radix::Octal);
        assert_eq!("10".parse::<Radix>().unwrap(), Radix::Decimal);
        assert_eq!("HEX".parse::<Radix>().unwrap(), Radix::Hexadecimal);
        assert!("base64".parse::<Radix>().is_err());
    }
}
