//! Matcher - prefix comparison against a possibly infinite expansion

use crate::expansion::BinaryExpansion;
use crate::render::bit_char;

/// Whether `target` is a prefix of the binary expansion.
///
/// The integer part must be matched in full: a target that ends inside it
/// (including the empty target) does not match. Past the integer part, the
/// target may end anywhere. The repeating unit is unrolled as far as the
/// target reaches; a finite fraction continues with zeros.
pub fn matches(expansion: &BinaryExpansion, target: &str) -> bool {
    let mut chars = target.chars();

    for &bit in expansion.integer_digits().iter().rev() {
        if chars.next() != Some(bit_char(bit)) {
            return false;
        }
    }

    match chars.next() {
        None => return true,
        Some('.') => {}
        Some(_) => return false,
    }

    for &bit in expansion.non_repeating_digits() {
        match chars.next() {
            None => return true,
            Some(c) if c != bit_char(bit) => return false,
            Some(_) => {}
        }
    }

    let unit = expansion.repeating_digits();
    if unit.is_empty() {
        return chars.all(|c| c == '0');
    }

    // Bounded by the target length
    loop {
        for &bit in unit {
            match chars.next() {
                None => return true,
                Some(c) if c != bit_char(bit) => return false,
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::convert;

    #[test]
    fn test_exact_and_partial_matches() {
        let exp = convert("2.5").unwrap();
        assert!(matches(&exp, "10.1"));
        assert!(matches(&exp, "10"));
        assert!(matches(&exp, "10."));
        assert!(matches(&exp, "10.10000"));
        assert!(!matches(&exp, "10.11"));
        assert!(!matches(&exp, "10.100001"));
    }

    #[test]
    fn test_integer_part_must_be_complete() {
        let exp = convert("10").unwrap();
        assert!(!matches(&exp, "1"));
        assert!(!matches(&exp, "101"));
        assert!(matches(&exp, "1010"));
        assert!(!matches(&exp, "10100"));
        assert!(!matches(&exp, "1011"));
    }

    #[test]
    fn test_empty_target_never_matches() {
        assert!(!matches(&convert("0").unwrap(), ""));
        assert!(!matches(&convert("0.1").unwrap(), ""));
    }

    #[test]
    fn test_separator_required() {
        let exp = convert("2.5").unwrap();
        assert!(!matches(&exp, "10,1"));
        assert!(!matches(&exp, "101"));
    }

    #[test]
    fn test_repeating_unit_unrolled() {
        let exp = convert("0.1").unwrap();
        assert!(matches(&exp, "0.0"));
        assert!(matches(&exp, "0.00011"));
        assert!(matches(&exp, "0.000110011001100110011"));
        assert!(!matches(&exp, "0.000110011001100110010"));
        assert!(!matches(&exp, "0.1"));
    }

    #[test]
    fn test_pure_repeating_fraction() {
        let exp = convert("0.2").unwrap();
        assert!(matches(&exp, "0.001100110"));
        assert!(!matches(&exp, "0.0010"));
    }

    #[test]
    fn test_integer_only_expansion_accepts_zero_fraction() {
        let exp = convert("3").unwrap();
        assert!(matches(&exp, "11.000"));
        assert!(!matches(&exp, "11.01"));
    }

    #[test]
    fn test_starts_with_delegates() {
        let exp = convert("12.3").unwrap();
        assert!(exp.starts_with("1100.01001100"));
        assert!(!exp.starts_with("1100.011"));
    }
}
