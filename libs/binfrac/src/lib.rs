//! binfrac - Exact decimal to binary fraction conversion
//!
//! Converts a non-negative decimal finite fraction into its exact binary
//! expansion, detecting the repeating section when the expansion is periodic,
//! and checks binary strings against the (possibly infinite) result.
//!
//! # Example
//!
//! ```rust
//! use binfrac::{convert, matches, render};
//!
//! let tenth = convert("0.1").unwrap();
//! assert_eq!(render(&tenth), "0.0(0011)");
//! assert_eq!(tenth.repeating_section_length(), 4);
//!
//! // The repeating unit is unrolled as far as the target reaches
//! assert!(matches(&tenth, "0.000110011001"));
//!
//! // Finite fractions continue with zeros
//! let two_and_a_half = convert("2.5").unwrap();
//! assert!(matches(&two_and_a_half, "10.10000"));
//! assert!(!matches(&two_and_a_half, "10.11"));
//! ```
//!
//! # Notation
//!
//! | Decimal | Binary |
//! |---------|--------|
//! | `10` | `1010` |
//! | `0.5` | `0.1` |
//! | `0.1` | `0.0(0011)` |
//! | `12.3` | `1100.0(1001)` |

pub mod converter;
pub mod error;
pub mod expansion;
pub mod matcher;
pub mod render;

pub use converter::{
    convert, convert_with_limit, DEFAULT_MAX_EXPANSION_BITS, MAX_FRACTION_DIGITS,
};
pub use error::{ConvertError, Result};
pub use expansion::{BinaryExpansion, FractionBits};
pub use matcher::matches;
pub use render::{bit_char, render, render_unrolled};
