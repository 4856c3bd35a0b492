//! Final assembly of the digit string.
//!
//! With the root tuple (P, Q, T) covering terms k ≥ 1 and S = √10005 scaled
//! by 10^d, the series sum folds into the exact integer ratio
//!
//! ```text
//! π·10^d ≈ (426880·S·Q) / (13591409·Q + T)
//! ```
//!
//! The quotient is truncated, never rounded, so the emitted digits are a
//! prefix of the true expansion. The working precision d exceeds the
//! requested precision by guard digits that absorb the truncation error of
//! the division and of S itself.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;

use crate::progress::{Phase, ProgressSink};
use crate::series::{CONSTANT_TERM, DECIMAL_FACTOR};
use crate::split::SplitTuple;

/// Guard digits carried through the square root and the final division.
/// Ten digits keep the last requested digit exact up to billions of digits.
pub(crate) const GUARD_DIGITS: u64 = 10;

/// The finished expansion: `"3."` followed by exactly the requested number
/// of decimal digits. Immutable once emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalString(String);

impl DecimalString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits after the decimal point.
    pub fn fractional_digits(&self) -> usize {
        self.0.len().saturating_sub(2)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Combines the root tuple and the scaled root into the digit string,
/// truncated to exactly `digits` fractional digits.
pub(crate) fn assemble(
    root: &SplitTuple,
    sqrt_scaled: &BigInt,
    digits: u64,
    progress: &ProgressSink<'_>,
) -> DecimalString {
    progress.report(Phase::Assemble, 0.0);
    let numerator = BigInt::from(DECIMAL_FACTOR) * sqrt_scaled * &root.q;
    progress.report(Phase::Assemble, 0.25);
    let denominator = &root.q * CONSTANT_TERM + &root.t;
    progress.report(Phase::Assemble, 0.5);
    let (scaled_pi, _) = numerator.div_rem(&denominator);
    progress.report(Phase::Assemble, 0.75);

    let text = scaled_pi.to_str_radix(10);
    tracing::debug!(scaled_digits = text.len(), "assembled integer quotient");

    // The quotient reads "3" followed by the fractional digits at working
    // precision; keep the first `digits` of them.
    let fractional_end = (digits as usize + 1).min(text.len());
    let mut out = String::with_capacity(digits as usize + 2);
    out.push_str(&text[..1]);
    out.push('.');
    out.push_str(&text[1..fractional_end]);
    progress.report(Phase::Assemble, 1.0);

    DecimalString(out)
}
