//! Post-assembly checks on the emitted digit string.
//!
//! A failure here means the engine itself is wrong; nothing is repaired.

use std::fmt;

/// Known leading digits every correct output starts with (clipped to the
/// output length for precisions below five digits).
const KNOWN_PREFIX: &str = "3.14159";

/// Which check the output failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyFailure {
    /// The output does not begin with the known digits of π.
    Prefix { found: String },
    /// The output length does not match the requested precision.
    Length { expected: usize, actual: usize },
    /// A fractional position holds something other than an ASCII digit.
    NonDigit { position: usize },
}

impl fmt::Display for VerifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix { found } => {
                write!(f, "output begins with {found:?} instead of {KNOWN_PREFIX:?}")
            }
            Self::Length { expected, actual } => {
                write!(f, "output length {actual} does not match expected {expected}")
            }
            Self::NonDigit { position } => {
                write!(f, "non-digit character at position {position}")
            }
        }
    }
}

impl std::error::Error for VerifyFailure {}

/// Checks that `text` is a well-formed expansion with exactly `digits`
/// fractional digits: known prefix, exact length, digits-only fraction.
pub(crate) fn verify(text: &str, digits: u64) -> Result<(), VerifyFailure> {
    let expected = digits as usize + 2;
    if text.len() != expected {
        return Err(VerifyFailure::Length {
            expected,
            actual: text.len(),
        });
    }

    let prefix_len = KNOWN_PREFIX.len().min(expected);
    if !text.starts_with(&KNOWN_PREFIX[..prefix_len]) {
        return Err(VerifyFailure::Prefix {
            found: text[..prefix_len].to_string(),
        });
    }

    for (position, byte) in text.bytes().enumerate().skip(2) {
        if !byte.is_ascii_digit() {
            return Err(VerifyFailure::NonDigit { position });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn accepts_correct_expansions() {
        assert_eq!(verify("3.1415926535", 10), Ok(()));
        assert_eq!(verify("3.14159", 5), Ok(()));
    }

    #[test]
    fn accepts_expansions_shorter_than_the_known_prefix() {
        assert_eq!(verify("3.1", 1), Ok(()));
        assert_eq!(verify("3.14", 2), Ok(()));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            verify("3.14159", 10),
            Err(VerifyFailure::Length {
                expected: 12,
                actual: 7
            })
        );
    }

    #[test]
    fn rejects_wrong_leading_digits() {
        assert_eq!(
            verify("3.24159265", 8),
            Err(VerifyFailure::Prefix {
                found: "3.24159".to_string()
            })
        );
        assert_eq!(
            verify("2.1", 1),
            Err(VerifyFailure::Prefix {
                found: "2.1".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_digit_fractions() {
        assert_eq!(
            verify("3.14159x6535", 10),
            Err(VerifyFailure::NonDigit { position: 7 })
        );
    }
}
