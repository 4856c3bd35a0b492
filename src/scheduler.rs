//! Parallel decomposition of the splitting recursion.
//!
//! The term range is partitioned into contiguous chunks, one per worker.
//! Each worker runs the sequential engine over its chunk and hands the owned
//! tuple to the reducer over a channel; no state is shared between workers.
//! The reducer merges adjacent tuples pairwise, in ascending index order,
//! until a single root tuple remains.
//!
//! With one worker the partition is the whole range, so the result is the
//! identical tuple the plain recursion produces. With more workers the
//! grouping differs but merge associativity makes the root tuple equal.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crossbeam_channel::bounded;

use crate::error::ComputeError;
use crate::progress::{Phase, ProgressSink};
use crate::split::{split, SplitTuple};

/// Splits [first, last) into at most `workers` contiguous chunks with sizes
/// differing by one at most; leftover terms go to the earliest chunks.
fn partition(first: u64, last: u64, workers: usize) -> Vec<(u64, u64)> {
    let len = last - first;
    let chunk_count = (workers as u64).clamp(1, len);
    let base = len / chunk_count;
    let extra = len % chunk_count;

    let mut chunks = Vec::with_capacity(chunk_count as usize);
    let mut start = first;
    for index in 0..chunk_count {
        let size = base + u64::from(index < extra);
        chunks.push((start, start + size));
        start += size;
    }
    chunks
}

/// Evaluates the tuple for [first, last) using up to `workers` threads.
///
/// Requires 1 ≤ first < last. Reports chunk completions under
/// [`Phase::Split`] and reduction steps under [`Phase::Merge`].
pub(crate) fn parallel_split(
    first: u64,
    last: u64,
    workers: usize,
    progress: &ProgressSink<'_>,
) -> Result<SplitTuple, ComputeError> {
    debug_assert!(first >= 1, "term indices start at 1");
    debug_assert!(first < last, "term range must be non-empty");

    let chunks = partition(first, last, workers);
    let total = chunks.len();
    tracing::debug!(first, last, chunks = total, "splitting term range");

    progress.report(Phase::Split, 0.0);
    let mut slots: Vec<Option<SplitTuple>> = vec![None; total];

    if total == 1 {
        let (a, b) = chunks[0];
        slots[0] = Some(split(a, b));
        progress.report(Phase::Split, 1.0);
    } else {
        let completed = AtomicUsize::new(0);
        let (sender, receiver) = bounded(total);

        thread::scope(|scope| {
            for (index, (a, b)) in chunks.iter().copied().enumerate() {
                let sender = sender.clone();
                let completed = &completed;
                scope.spawn(move || {
                    // A panicking worker must not tear down the scope; the
                    // missing slot is detected after the join instead.
                    let outcome = catch_unwind(AssertUnwindSafe(|| split(a, b)));
                    match outcome {
                        Ok(tuple) => {
                            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                            progress.report(Phase::Split, done as f64 / total as f64);
                            let _ = sender.send((index, tuple));
                        }
                        Err(_) => {
                            tracing::error!(
                                chunk_first = a,
                                chunk_last = b,
                                "worker panicked during binary splitting"
                            );
                        }
                    }
                });
            }
        });

        drop(sender);
        for (index, tuple) in receiver {
            slots[index] = Some(tuple);
        }
    }

    let mut tuples = Vec::with_capacity(total);
    for slot in slots {
        tuples.push(slot.ok_or(ComputeError::WorkerPanicked)?);
    }

    Ok(reduce(tuples, progress))
}

/// Merges adjacent tuples pairwise until one remains. The input is in
/// ascending index order and the left operand of every merge covers the
/// lower indices.
fn reduce(mut tuples: Vec<SplitTuple>, progress: &ProgressSink<'_>) -> SplitTuple {
    let merges_total = tuples.len() - 1;
    let mut merges_done = 0usize;

    progress.report(Phase::Merge, 0.0);
    while tuples.len() > 1 {
        let mut next = Vec::with_capacity(tuples.len().div_ceil(2));
        let mut pairs = tuples.into_iter();
        while let Some(left) = pairs.next() {
            if let Some(right) = pairs.next() {
                next.push(SplitTuple::merge(left, right));
                merges_done += 1;
                progress.report(Phase::Merge, merges_done as f64 / merges_total as f64);
            } else {
                next.push(left);
            }
        }
        tuples = next;
    }
    progress.report(Phase::Merge, 1.0);

    match tuples.pop() {
        Some(root) => root,
        None => unreachable!("reduction always leaves exactly one tuple"),
    }
}
