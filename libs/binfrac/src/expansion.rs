//! BinaryExpansion - exact binary form of a decimal finite fraction

use serde::{Serialize, Serializer};
use std::fmt;

/// Binary representation of a non-negative decimal fraction.
///
/// The fractional part may be periodic; in that case the last
/// `repeating_section_length` digits of `fraction_digits` repeat forever.
/// A finite fraction is conceptually followed by infinitely many zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryExpansion {
    /// Integer part, least-significant bit first (never empty)
    #[serde(serialize_with = "serialize_bits")]
    integer_digits: Vec<bool>,
    /// Fractional part, most-significant bit first
    #[serde(serialize_with = "serialize_bits")]
    fraction_digits: Vec<bool>,
    /// Length of the repeating suffix of `fraction_digits` (0 = finite)
    repeating_section_length: usize,
}

impl BinaryExpansion {
    pub(crate) fn new(
        integer_digits: Vec<bool>,
        fraction_digits: Vec<bool>,
        repeating_section_length: usize,
    ) -> Self {
        debug_assert!(!integer_digits.is_empty());
        debug_assert!(repeating_section_length <= fraction_digits.len());
        Self {
            integer_digits,
            fraction_digits,
            repeating_section_length,
        }
    }

    /// Integer bits, least-significant first
    pub fn integer_digits(&self) -> &[bool] {
        &self.integer_digits
    }

    /// Fraction bits, most-significant first
    pub fn fraction_digits(&self) -> &[bool] {
        &self.fraction_digits
    }

    pub fn repeating_section_length(&self) -> usize {
        self.repeating_section_length
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating_section_length > 0
    }

    /// Index of the first digit of the repeating unit
    /// (equals `fraction_digits().len()` when the fraction is finite)
    pub fn repeat_start(&self) -> usize {
        self.fraction_digits.len() - self.repeating_section_length
    }

    /// Fraction bits before the repeating unit
    pub fn non_repeating_digits(&self) -> &[bool] {
        &self.fraction_digits[..self.repeat_start()]
    }

    /// One copy of the repeating unit (empty for finite fractions)
    pub fn repeating_digits(&self) -> &[bool] {
        &self.fraction_digits[self.repeat_start()..]
    }

    /// Endless iterator over the conceptual fraction bits.
    ///
    /// Yields the stored digits, then either cycles the repeating unit or
    /// produces zeros forever. Callers bound it with `take`.
    pub fn fraction_bits(&self) -> FractionBits<'_> {
        FractionBits {
            expansion: self,
            position: 0,
        }
    }

    /// Prefix match against the conceptual infinite expansion.
    /// See [`crate::matcher::matches`].
    pub fn starts_with(&self, target: &str) -> bool {
        crate::matcher::matches(self, target)
    }
}

impl fmt::Display for BinaryExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

/// Iterator returned by [`BinaryExpansion::fraction_bits`]
#[derive(Debug, Clone)]
pub struct FractionBits<'a> {
    expansion: &'a BinaryExpansion,
    position: usize,
}

impl Iterator for FractionBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let digits = &self.expansion.fraction_digits;
        let repeat_len = self.expansion.repeating_section_length;

        let bit = if self.position < digits.len() {
            digits[self.position]
        } else if repeat_len == 0 {
            false
        } else {
            let offset = (self.position - digits.len()) % repeat_len;
            digits[digits.len() - repeat_len + offset]
        };

        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Digits as a `"0101"` string rather than an array of booleans
fn serialize_bits<S: Serializer>(bits: &[bool], serializer: S) -> Result<S::Ok, S::Error> {
    let text: String = bits.iter().map(|&b| crate::render::bit_char(b)).collect();
    serializer.serialize_str(&text)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn bits(text: &str) -> Vec<bool> {
        text.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_sections() {
        // 0.0(0011)
        let exp = BinaryExpansion::new(vec![false], bits("00011"), 4);
        assert!(exp.is_repeating());
        assert_eq!(exp.repeat_start(), 1);
        assert_eq!(exp.non_repeating_digits(), &bits("0")[..]);
        assert_eq!(exp.repeating_digits(), &bits("0011")[..]);
    }

    #[test]
    fn test_finite_sections() {
        let exp = BinaryExpansion::new(vec![false, true], bits("1"), 0);
        assert!(!exp.is_repeating());
        assert_eq!(exp.non_repeating_digits(), &bits("1")[..]);
        assert!(exp.repeating_digits().is_empty());
    }

    #[test]
    fn test_fraction_bits_cycles_repeating_unit() {
        let exp = BinaryExpansion::new(vec![false], bits("00011"), 4);
        let unrolled: Vec<bool> = exp.fraction_bits().take(13).collect();
        assert_eq!(unrolled, bits("0001100110011"));
    }

    #[test]
    fn test_fraction_bits_pads_finite_with_zeros() {
        let exp = BinaryExpansion::new(vec![true], bits("01"), 0);
        let unrolled: Vec<bool> = exp.fraction_bits().take(5).collect();
        assert_eq!(unrolled, bits("01000"));

        let integer_only = BinaryExpansion::new(vec![true], Vec::new(), 0);
        assert!(integer_only.fraction_bits().take(3).all(|b| !b));
    }

    #[test]
    fn test_serialize_as_bit_strings() {
        let exp = BinaryExpansion::new(vec![false, true], bits("00011"), 4);
        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["integer_digits"], "01");
        assert_eq!(json["fraction_digits"], "00011");
        assert_eq!(json["repeating_section_length"], 4);
    }
}
