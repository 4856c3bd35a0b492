//! Chudnovsky series constants and per-term coefficients.
//!
//! The series computes 1/π and contributes a fixed number of decimal digits
//! per term. Terms are indexed from k = 1; the k = 0 term reduces to the
//! plain constant 13591409 and is folded into the final assembly rather than
//! carried through the splitting recursion.

use num_bigint::BigInt;

use crate::split::SplitTuple;

/// 640320³ / 24, the cubic growth factor of the term denominators.
pub(crate) const C3_OVER_24: u64 = 10_939_058_860_032_000;

/// Linear coefficient of the numerator polynomial 545140134·k + 13591409.
pub(crate) const LINEAR_TERM: u64 = 545_140_134;

/// Constant coefficient of the numerator polynomial; also the entire k = 0
/// contribution to the series sum.
pub(crate) const CONSTANT_TERM: u64 = 13_591_409;

/// Scalar multiplying √10005·Q in the final formula.
pub(crate) const DECIMAL_FACTOR: u64 = 426_880;

/// Radicand of the square root in the final formula.
pub(crate) const SQRT_RADICAND: u64 = 10_005;

/// Decimal digits contributed by each series term, log10(640320³/1728) to
/// the precision the term-count estimate needs.
pub(crate) const DIGITS_PER_TERM: f64 = 14.181_647_4;

/// Extra terms beyond the converged estimate. One term absorbs the rounding
/// of `DIGITS_PER_TERM`; the second keeps the series converged past the
/// guard digits carried into the final division.
const TERM_GUARD: u64 = 2;

/// Number of series terms (k ≥ 1) needed for `digits` decimal digits.
pub fn term_count(digits: u64) -> u64 {
    let converged = (digits as f64 / DIGITS_PER_TERM).ceil() as u64;
    converged + TERM_GUARD
}

/// Split tuple for the single term k, valid for k ≥ 1.
///
/// The sign alternation of the series is carried by `p`, which is negative
/// for every k ≥ 1, so products of `p` over a range alternate with the range
/// length.
pub(crate) fn leaf(k: u64) -> SplitTuple {
    debug_assert!(k >= 1, "term indices start at 1");

    // (6k)³-scale factors stay well inside i128 for every supported k.
    let k_wide = i128::from(k);
    let p_small = -((6 * k_wide - 5) * (2 * k_wide - 1) * (6 * k_wide - 1));
    let a_small = i128::from(LINEAR_TERM) * k_wide + i128::from(CONSTANT_TERM);

    let k_big = BigInt::from(k);
    let p = BigInt::from(p_small);
    let q = &k_big * &k_big * &k_big * C3_OVER_24;
    let t = &p * a_small;

    SplitTuple { p, q, t }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;
    use num_traits::Signed;

    #[test]
    fn term_count_covers_small_precisions() {
        // One term converges 14 digits; the guard terms sit on top.
        assert_eq!(term_count(1), 1 + TERM_GUARD);
        assert_eq!(term_count(10), 1 + TERM_GUARD);
        assert_eq!(term_count(14), 1 + TERM_GUARD);
        assert_eq!(term_count(15), 2 + TERM_GUARD);
    }

    #[test]
    fn term_count_scales_with_the_digit_rate() {
        assert_eq!(term_count(1_000), 71 + TERM_GUARD);
        assert_eq!(term_count(1_000_000), 70_514 + TERM_GUARD);
    }

    #[test]
    fn first_leaf_coefficients() {
        let tuple = leaf(1);
        assert_eq!(tuple.p, BigInt::from(-5));
        assert_eq!(tuple.q, BigInt::from(C3_OVER_24));
        assert_eq!(tuple.t, BigInt::from(-5i64 * 558_731_543));
    }

    #[test]
    fn second_leaf_coefficients() {
        let tuple = leaf(2);
        // p = -(7)(3)(11), q = 2³·C3_OVER_24, a = 2·545140134 + 13591409
        assert_eq!(tuple.p, BigInt::from(-231));
        assert_eq!(tuple.q, BigInt::from(8u64) * C3_OVER_24);
        assert_eq!(tuple.t, BigInt::from(-231i64) * 1_103_871_677i64);
    }

    #[test]
    fn leaves_are_negative_with_positive_denominators() {
        for k in 1..50 {
            let tuple = leaf(k);
            assert!(tuple.p.is_negative(), "p must be negative for k = {k}");
            assert!(tuple.q.is_positive(), "q must be positive for k = {k}");
            assert!(tuple.t.is_negative(), "t must be negative for k = {k}");
        }
    }
}
