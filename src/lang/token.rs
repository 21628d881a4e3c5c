//! ## Token classification and the literal grammar
//!
//! Tokens are plain upper-cased strings. A leading `:` marks a label,
//! everything else is a mnemonic or a literal.

use super::Word;

pub const LABEL_PREFIX: char = ':';

pub fn is_label(token: &str) -> bool {
    token.starts_with(LABEL_PREFIX)
}

/// Parse a literal: `B101` binary, `0X1F` or `X1F` hex, anything else
/// decimal. A sign may follow the prefix. The whole token must be digits
/// of the selected radix.
pub fn parse_literal(token: &str) -> Option<Word> {
    let (digits, radix) = if let Some(rest) = token.strip_prefix('B') {
        (rest, 2)
    } else if let Some(rest) = token.strip_prefix("0X") {
        (rest, 16)
    } else if let Some(rest) = token.strip_prefix('X') {
        (rest, 16)
    } else {
        (token, 10)
    };
    Word::from_str_radix(digits, radix).ok()
}

/// An operand is rejected when its magnitude has any of bits 8..16 set.
/// Higher bits are not examined, so 65536 passes while 256 does not.
pub fn fits_operand(value: Word) -> bool {
    value.unsigned_abs() & 0xFF00 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(parse_literal("B101"), Some(5));
        assert_eq!(parse_literal("0X1F"), Some(31));
        assert_eq!(parse_literal("XFF"), Some(255));
        assert_eq!(parse_literal("42"), Some(42));
        assert_eq!(parse_literal("-7"), Some(-7));
        assert_eq!(parse_literal("X-A"), Some(-10));
    }

    #[test]
    fn test_trailing_noise_rejected() {
        assert_eq!(parse_literal("12AB"), None);
        assert_eq!(parse_literal("B102"), None);
        assert_eq!(parse_literal("XG"), None);
        assert_eq!(parse_literal("B"), None);
        assert_eq!(parse_literal("0X"), None);
        assert_eq!(parse_literal("DUP"), None);
    }

    #[test]
    fn test_operand_range() {
        assert!(fits_operand(255));
        assert!(fits_operand(-255));
        assert!(!fits_operand(256));
        assert!(!fits_operand(300));
        assert!(!fits_operand(-0x1FF));
        assert!(fits_operand(0x10000));
        assert!(fits_operand(-0x10005));
        assert!(!fits_operand(0x10100));
    }

    #[test]
    fn test_label() {
        assert!(is_label(":LOOP"));
        assert!(!is_label("LOOP"));
    }
}
