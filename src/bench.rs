//! Wall-clock timing harness for bulk store operations.
//!
//! Mirrors the three shapes of bulk work the front-end cares about: inserting
//! many freshly sorted arrays, re-sorting a sample of stored arrays and
//! checking them against their stored sorted text, and clearing the store.

use std::time::{Duration, Instant};

use rand::seq::IndexedRandom;
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::input::{format_values, parse_values, random_values, InputError};
use crate::radix::{self, SortError};
use crate::store::{ArrayStore, StoreError};
use crate::PrettyDuration;

/// Generated arrays match the interactive defaults: short arrays of small
/// non-negative values.
const MIN_LEN: usize = 5;
const MAX_LEN: usize = 50;
const MIN_VALUE: i64 = 0;
const MAX_VALUE: i64 = 1000;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error(transparent)]
    Input(#[from] InputError),
    /// Stored sorted text disagreed with a fresh sort of the original.
    #[error("{mismatched} of {checked} records failed sorted-text verification")]
    Mismatch { mismatched: usize, checked: usize },
}

/// Outcome of one timed bulk operation.
#[derive(Debug, Clone)]
pub struct BulkTiming {
    pub operation: &'static str,
    pub count: usize,
    pub elapsed: Duration,
}

impl BulkTiming {
    /// Mean time per record, zero for an empty run.
    pub fn per_record(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.elapsed / self.count as u32
        }
    }
}

impl std::fmt::Display for BulkTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} records in {} ({} per record)",
            self.operation,
            self.count,
            PrettyDuration(self.elapsed),
            PrettyDuration(self.per_record()),
        )
    }
}

/// Generates, sorts and inserts `count` random arrays.
pub fn bulk_insert<R: Rng>(
    store: &mut ArrayStore,
    count: usize,
    rng: &mut R,
) -> Result<BulkTiming, BenchError> {
    crate::scope!("bulk_insert");
    let start = Instant::now();

    for _ in 0..count {
        let len = rng.random_range(MIN_LEN..=MAX_LEN);
        let values = random_values(len, MIN_VALUE, MAX_VALUE, rng)?;
        let sorted = radix::sort(&values)?;
        store.insert(&format_values(&values), &format_values(&sorted))?;
    }

    let timing = BulkTiming {
        operation: "insert",
        count,
        elapsed: start.elapsed(),
    };
    info!(%timing, "bulk insert finished");
    Ok(timing)
}

/// Re-sorts up to `sample` randomly chosen records and compares each against
/// its stored sorted text. Records are independent, so the verification runs
/// across threads.
pub fn verify_sorted<R: Rng>(
    store: &ArrayStore,
    sample: usize,
    rng: &mut R,
) -> Result<BulkTiming, BenchError> {
    crate::scope!("verify_sorted");
    let records = store.records();
    let chosen: Vec<_> = records.choose_multiple(rng, sample.min(records.len())).collect();

    let start = Instant::now();
    let mismatched = chosen
        .par_iter()
        .map(|record| -> Result<usize, BenchError> {
            let values = parse_values(&record.original)?;
            let sorted = radix::sort(&values)?;
            Ok(usize::from(format_values(&sorted) != record.sorted))
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    let timing = BulkTiming {
        operation: "select+sort",
        count: chosen.len(),
        elapsed: start.elapsed(),
    };

    if mismatched > 0 {
        return Err(BenchError::Mismatch {
            mismatched,
            checked: chosen.len(),
        });
    }

    info!(%timing, "verification finished");
    Ok(timing)
}

/// Deletes every record, timed.
pub fn bulk_clear(store: &mut ArrayStore) -> Result<BulkTiming, BenchError> {
    crate::scope!("bulk_clear");
    let start = Instant::now();
    let removed = store.clear()?;

    let timing = BulkTiming {
        operation: "clear",
        count: removed,
        elapsed: start.elapsed(),
    };
    info!(%timing, "bulk clear finished");
    Ok(timing)
}

/// Runs the insert / verify / clear cycle once per entry in `counts`.
pub fn run_all<R: Rng>(
    store: &mut ArrayStore,
    counts: &[usize],
    sample: usize,
    rng: &mut R,
) -> Result<Vec<BulkTiming>, BenchError> {
    let mut timings = Vec::with_capacity(counts.len() * 3);

    for &count in counts {
        timings.push(bulk_insert(store, count, rng)?);
        timings.push(verify_sorted(store, sample, rng)?);
        timings.push(bulk_clear(store)?);
    }

    Ok(timings)
}
