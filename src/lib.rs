//! Arbitrary-precision π via the Chudnovsky series.
//!
//! The series is evaluated by binary splitting: a term range collapses to an
//! exact integer tuple (P, Q, T), adjacent tuples merge with a fixed
//! algebraic rule, and the root tuple combines with a scaled integer √10005
//! into the final digit string. Term chunks are computed on worker threads
//! and reduced in index order, so the digits are identical for every worker
//! count.
//!
//! The crate is the numeric engine only. Terminal UI, file output, and
//! argument parsing are left to callers, which observe the computation
//! through the [`ProgressFn`] callback.
//!
//! # Example
//!
//! ```
//! use chudnovsky::compute_pi;
//!
//! let pi = compute_pi(10, None, None)?;
//! assert_eq!(pi.as_str(), "3.1415926535");
//! # Ok::<(), chudnovsky::ComputeError>(())
//! ```

mod assemble;
mod error;
mod progress;
mod scheduler;
mod series;
mod split;
mod sqrt;
mod verify;

use std::num::NonZeroU32;

use crate::assemble::GUARD_DIGITS;

pub use assemble::DecimalString;
pub use error::ComputeError;
pub use progress::{Phase, ProgressFn};
pub use series::term_count;
pub use split::{split, SplitTuple};
pub use verify::VerifyFailure;

/// Largest supported precision. At the cap the computation peaks around
/// 1.5 GB (roughly 15 bytes per requested digit); anything beyond should be
/// a deliberate host decision rather than a library default.
pub const MAX_DIGITS: u64 = 100_000_000;

/// Computes π to `digits` decimal places.
///
/// `parallelism` is the number of worker threads; `None` uses the available
/// hardware threads. The digits are identical for every worker count.
/// `progress` receives `(phase, fraction)` pairs with per-phase monotonic
/// fractions; see [`Phase`] and [`ProgressFn`].
///
/// The result always holds exactly `digits` fractional digits, truncated
/// (not rounded) from the expansion, so a lower-precision result is a
/// character prefix of a higher-precision one.
pub fn compute_pi(
    digits: u64,
    parallelism: Option<NonZeroU32>,
    progress: Option<&ProgressFn>,
) -> Result<DecimalString, ComputeError> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(ComputeError::InvalidPrecision { digits });
    }

    let sink = progress::ProgressSink::new(progress);
    let terms = series::term_count(digits);
    let workers = resolve_workers(parallelism);
    tracing::debug!(digits, terms, workers, "computing pi");

    let root = scheduler::parallel_split(1, terms + 1, workers, &sink)?;

    sink.report(Phase::Sqrt, 0.0);
    let sqrt_scaled = sqrt::sqrt_10005_scaled(digits + GUARD_DIGITS);
    sink.report(Phase::Sqrt, 1.0);

    let result = assemble::assemble(&root, &sqrt_scaled, digits, &sink);
    verify::verify(result.as_str(), digits)?;
    tracing::debug!(digits, "pi computed and verified");
    Ok(result)
}

fn resolve_workers(parallelism: Option<NonZeroU32>) -> usize {
    match parallelism {
        Some(workers) => workers.get() as usize,
        None => std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1),
    }
}
