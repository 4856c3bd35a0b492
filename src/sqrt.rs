//! High-precision √10005.
//!
//! The final formula divides by √10005, so the root is carried as the exact
//! integer ⌊√(10005·10^(2·d))⌋, i.e. √10005 scaled by 10^d. One integer
//! square root at full precision keeps every digit exact; a floating-point
//! root anywhere in the pipeline would silently corrupt the trailing digits.

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::Pow;

use crate::series::SQRT_RADICAND;

/// ⌊√10005 · 10^`decimal_digits`⌋ as an exact integer.
pub(crate) fn sqrt_10005_scaled(decimal_digits: u64) -> BigInt {
    let scale = Pow::pow(&BigInt::from(10u8), 2 * decimal_digits);
    Roots::sqrt(&(BigInt::from(SQRT_RADICAND) * scale))
}
