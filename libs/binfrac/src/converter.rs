//! Converter - decimal text to exact binary expansion
//!
//! The integer part is converted by repeated division by two. The fractional
//! part `fp / 10^d` is converted with the doubling method: each step doubles
//! the numerator, emits `fp >= 10^d` as the next bit and reduces modulo
//! `10^d`. A remainder seen before marks the start of the repeating section.
//!
//! With the fraction reduced to `a / q`, the repeating section starts after
//! as many bits as `q` has factors of two, so only the remainder at that
//! index has to be remembered to find the cycle.

use crate::error::{ConvertError, Result};
use crate::expansion::BinaryExpansion;
use tracing::{debug, trace};

/// Longest fractional part whose denominator `10^d` fits in a `u64`
pub const MAX_FRACTION_DIGITS: usize = 19;

/// Default cap on stored fraction bits.
///
/// Periods grow as `4 * 5^(d-1)` for a `d`-digit fraction, so every
/// fraction of up to 9 digits fits and longer ones may not.
pub const DEFAULT_MAX_EXPANSION_BITS: usize = 1 << 22;

/// Convert a non-negative decimal string (e.g. `"12.345"`) to binary,
/// storing at most [`DEFAULT_MAX_EXPANSION_BITS`] fraction bits.
///
/// # Errors
/// `ConvertError::InvalidInput` when either part contains anything other
/// than ASCII digits, the integer part is empty or exceeds `u64::MAX`, the
/// fractional part has more than [`MAX_FRACTION_DIGITS`] digits, or the
/// fraction bits (non-repeating prefix plus one repeating unit) would exceed
/// [`DEFAULT_MAX_EXPANSION_BITS`].
pub fn convert(decimal_text: &str) -> Result<BinaryExpansion> {
    convert_with_limit(decimal_text, DEFAULT_MAX_EXPANSION_BITS)
}

/// Like [`convert`], with an explicit cap on stored fraction bits
pub fn convert_with_limit(decimal_text: &str, max_bits: usize) -> Result<BinaryExpansion> {
    let (integer_text, fraction_text) = match decimal_text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (decimal_text, None),
    };

    let integer = parse_integer_part(decimal_text, integer_text)?;
    let integer_digits = integer_bits(integer);

    let (fraction_digits, repeating_section_length) = match fraction_text {
        Some(text) if !text.is_empty() => fraction_bits(decimal_text, text, max_bits)?,
        _ => (Vec::new(), 0),
    };

    debug!(
        input = decimal_text,
        integer_bits = integer_digits.len(),
        fraction_bits = fraction_digits.len(),
        repeating = repeating_section_length,
        "converted"
    );

    Ok(BinaryExpansion::new(
        integer_digits,
        fraction_digits,
        repeating_section_length,
    ))
}

fn parse_integer_part(input: &str, text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(ConvertError::invalid_input(input, "integer part is empty"));
    }
    if !is_ascii_digits(text) {
        return Err(ConvertError::invalid_input(
            input,
            format!("integer part '{}' is not a non-negative integer", text),
        ));
    }
    text.parse::<u64>().map_err(|_| {
        ConvertError::invalid_input(input, format!("integer part '{}' exceeds {}", text, u64::MAX))
    })
}

/// Least-significant bit first; zero yields a single `false`
fn integer_bits(mut value: u64) -> Vec<bool> {
    let mut bits = Vec::with_capacity(64);
    loop {
        bits.push(value % 2 != 0);
        value /= 2;
        if value == 0 {
            break;
        }
    }
    bits
}

/// Returns the fraction bits and the repeating section length
fn fraction_bits(input: &str, text: &str, max_bits: usize) -> Result<(Vec<bool>, usize)> {
    if !is_ascii_digits(text) {
        return Err(ConvertError::invalid_input(
            input,
            format!("fractional part '{}' is not a non-negative integer", text),
        ));
    }
    let threshold = u32::try_from(text.len())
        .ok()
        .and_then(|d| 10u64.checked_pow(d))
        .ok_or_else(|| {
            ConvertError::invalid_input(
                input,
                format!(
                    "fractional part has {} digits, at most {} are supported",
                    text.len(),
                    MAX_FRACTION_DIGITS
                ),
            )
        })?;
    let numerator = text.parse::<u64>().map_err(|_| {
        ConvertError::invalid_input(input, format!("fractional part '{}' is out of range", text))
    })?;

    let repeat_start = if numerator == 0 {
        0
    } else {
        (threshold / gcd(numerator, threshold)).trailing_zeros() as usize
    };

    // Doubled values reach 2 * 10^19, past u64::MAX
    let threshold = u128::from(threshold);
    let mut fp = u128::from(numerator);
    let mut anchor = None;
    let mut digits = Vec::new();

    loop {
        let index = digits.len();
        if index == repeat_start {
            anchor = Some(fp);
        } else if index > repeat_start && anchor == Some(fp) {
            let repeating = index - repeat_start;
            trace!(start = repeat_start, length = repeating, "repeating section detected");
            return Ok((digits, repeating));
        }
        if index >= max_bits {
            return Err(ConvertError::invalid_input(
                input,
                format!("expansion exceeds {} bits", max_bits),
            ));
        }

        fp *= 2;
        digits.push(fp >= threshold);
        fp %= threshold;
        if fp == 0 {
            return Ok((digits, 0));
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn is_ascii_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
