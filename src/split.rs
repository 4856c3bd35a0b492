//! Binary splitting over the Chudnovsky series.
//!
//! A range [a, b) of terms is evaluated as a tuple (P, Q, T) of exact
//! integers:
//! - Q is the product of the per-term denominators q_k
//! - P is the product of the per-term factors p_k (sign included)
//! - T encodes the partial sum so that the sum over the range equals T / Q
//!
//! Two adjacent ranges merge with
//! `P = P_L·P_R, Q = Q_L·Q_R, T = T_L·Q_R + P_L·T_R`. The T rule is not
//! symmetric in L and R: the left operand must cover the lower indices.
//! The merge is associative, which is what lets the parallel scheduler
//! evaluate leaf ranges independently and combine them in any grouping.

use num_bigint::BigInt;

use crate::series::leaf;

/// Exact partial evaluation of the series over a contiguous term range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitTuple {
    pub p: BigInt,
    pub q: BigInt,
    pub t: BigInt,
}

impl SplitTuple {
    /// Combines two adjacent ranges; `left` must cover the lower indices.
    pub fn merge(left: SplitTuple, right: SplitTuple) -> SplitTuple {
        let t = &left.t * &right.q + &left.p * &right.t;
        SplitTuple {
            p: left.p * &right.p,
            q: left.q * &right.q,
            t,
        }
    }
}

/// Evaluates the tuple for the term range [first, last) by midpoint
/// recursion, bottoming out at single terms.
///
/// Requires 1 ≤ first < last. A single-term range is legal and returns the
/// leaf tuple for that term.
pub fn split(first: u64, last: u64) -> SplitTuple {
    debug_assert!(first >= 1, "term indices start at 1");
    debug_assert!(first < last, "term range must be non-empty");

    if last - first == 1 {
        return leaf(first);
    }
    let mid = first + (last - first) / 2;
    SplitTuple::merge(split(first, mid), split(mid, last))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;
    use num_traits::Signed;

    #[test]
    fn single_term_range_is_the_leaf() {
        assert_eq!(split(1, 2), leaf(1));
        assert_eq!(split(7, 8), leaf(7));
    }

    #[test]
    fn merge_is_associative() {
        let merged_left_first = SplitTuple::merge(SplitTuple::merge(leaf(1), leaf(2)), leaf(3));
        let merged_right_first = SplitTuple::merge(leaf(1), SplitTuple::merge(leaf(2), leaf(3)));
        assert_eq!(merged_left_first, merged_right_first);
        assert_eq!(merged_left_first, split(1, 4));
    }

    #[test]
    fn recursion_matches_a_left_fold_of_leaves() {
        let folded = (2..9).fold(leaf(1), |acc, k| SplitTuple::merge(acc, leaf(k)));
        assert_eq!(split(1, 9), folded);
    }

    #[test]
    fn merge_order_matters() {
        // Swapping the operands corrupts T even though P and Q commute.
        let forward = SplitTuple::merge(leaf(1), leaf(2));
        let swapped = SplitTuple::merge(leaf(2), leaf(1));
        assert_eq!(forward.p, swapped.p);
        assert_eq!(forward.q, swapped.q);
        assert_ne!(forward.t, swapped.t);
    }

    #[test]
    fn denominator_stays_positive_and_sign_alternates() {
        for terms in 1..12u64 {
            let tuple = split(1, 1 + terms);
            assert!(tuple.q.is_positive());
            // P is a product of `terms` negative leaf factors.
            assert_eq!(tuple.p.is_negative(), terms % 2 == 1);
        }
    }
}
