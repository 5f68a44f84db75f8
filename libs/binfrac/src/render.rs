//! Renderer - `BinaryExpansion` to `"10.0(0011)"` text

use crate::expansion::BinaryExpansion;

/// Integer bits most-significant first, then `.` and the fraction bits when
/// present, with the repeating unit wrapped in parentheses.
pub fn render(expansion: &BinaryExpansion) -> String {
    let integer = expansion.integer_digits();
    let fraction = expansion.fraction_digits();
    let mut out = String::with_capacity(integer.len() + fraction.len() + 3);

    out.extend(integer.iter().rev().map(|&b| bit_char(b)));

    if !fraction.is_empty() {
        out.push('.');
        let repeat_start = expansion.repeat_start();
        for (i, &bit) in fraction.iter().enumerate() {
            if expansion.is_repeating() && i == repeat_start {
                out.push('(');
            }
            out.push(bit_char(bit));
        }
        if expansion.is_repeating() {
            out.push(')');
        }
    }

    out
}

/// Integer bits, then `.` and exactly `fraction_bits` fractional bits with
/// the repeating unit written out (no parentheses). Zero fractional bits
/// renders the integer part alone.
pub fn render_unrolled(expansion: &BinaryExpansion, fraction_bits: usize) -> String {
    let integer = expansion.integer_digits();
    let mut out = String::with_capacity(integer.len() + fraction_bits + 1);

    out.extend(integer.iter().rev().map(|&b| bit_char(b)));
    if fraction_bits > 0 {
        out.push('.');
        out.extend(expansion.fraction_bits().take(fraction_bits).map(bit_char));
    }
    out
}

/// `'1'` or `'0'`
pub fn bit_char(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}
