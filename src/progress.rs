//! Streaming progress reporting.
//!
//! The engine reports `(phase, fraction)` pairs through an optional caller
//! callback. Guarantees made to the caller:
//! - fractions are monotonically non-decreasing within each phase, even when
//!   reports originate from multiple worker threads
//! - each phase is reported at least at start (0.0) and completion (1.0)
//! - a panicking callback never aborts the computation

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// Pipeline phases, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Parallel binary splitting of the series terms.
    Split,
    /// Pairwise reduction of the worker tuples.
    Merge,
    /// Scaled integer square root of 10005.
    Sqrt,
    /// Final division and digit extraction.
    Assemble,
}

const PHASE_COUNT: usize = 4;

impl Phase {
    fn index(self) -> usize {
        match self {
            Self::Split => 0,
            Self::Merge => 1,
            Self::Sqrt => 2,
            Self::Assemble => 3,
        }
    }
}

/// Caller-supplied progress callback. Invoked from worker threads as well as
/// the coordinating thread, hence the `Sync` bound.
pub type ProgressFn = dyn Fn(Phase, f64) + Sync;

/// Wraps the optional callback, enforcing the per-phase monotonicity and
/// panic-isolation guarantees.
///
/// Delivery is serialized under the ledger lock so that two workers racing to
/// report cannot deliver fractions out of order.
pub(crate) struct ProgressSink<'a> {
    callback: Option<&'a ProgressFn>,
    ledger: Mutex<[f64; PHASE_COUNT]>,
    disabled: AtomicBool,
}

impl<'a> ProgressSink<'a> {
    pub(crate) fn new(callback: Option<&'a ProgressFn>) -> Self {
        Self {
            callback,
            ledger: Mutex::new([0.0; PHASE_COUNT]),
            disabled: AtomicBool::new(false),
        }
    }

    /// Records `fraction` for `phase` and delivers it to the callback.
    ///
    /// The delivered value is clamped to `[0, 1]` and never moves backwards
    /// within a phase. After the callback panics once it is disabled for the
    /// rest of the run; the panic is logged and the computation continues.
    pub(crate) fn report(&self, phase: Phase, fraction: f64) {
        let Some(callback) = self.callback else {
            return;
        };
        if self.disabled.load(Ordering::Acquire) {
            return;
        }

        let mut ledger = self.ledger.lock();
        let slot = &mut ledger[phase.index()];
        let value = fraction.clamp(0.0, 1.0).max(*slot);
        *slot = value;

        let outcome = catch_unwind(AssertUnwindSafe(|| callback(phase, value)));
        if outcome.is_err() {
            self.disabled.store(true, Ordering::Release);
            tracing::warn!(
                ?phase,
                "progress callback panicked; reporting disabled for the rest of the run"
            );
        }
    }
}
