//! Outcome reporting for engine operations.
//!
//! The engine never logs or counts anything itself. Hosts that want
//! telemetry hand it a [`CalculationObserver`]; the engine reports each
//! operation's outcome to it after the calculation finishes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::engine::Operation;
use crate::error::{ErrorKind, ScheduleError};

pub trait CalculationObserver {
    fn on_success(&self, _operation: Operation) {}

    fn on_failure(&self, _operation: Operation, _error: &ScheduleError) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CalculationObserver for NoopObserver {}

impl<T: CalculationObserver + ?Sized> CalculationObserver for &T {
    fn on_success(&self, operation: Operation) {
        (**self).on_success(operation)
    }

    fn on_failure(&self, operation: Operation, error: &ScheduleError) {
        (**self).on_failure(operation, error)
    }
}

impl<T: CalculationObserver + ?Sized> CalculationObserver for Arc<T> {
    fn on_success(&self, operation: Operation) {
        (**self).on_success(operation)
    }

    fn on_failure(&self, operation: Operation, error: &ScheduleError) {
        (**self).on_failure(operation, error)
    }
}

const OUTCOMES: usize = 5;

/// Per-operation outcome counters.
#[derive(Debug, Default)]
pub struct CountingObserver {
    counts: [[AtomicU64; OUTCOMES]; Operation::ALL.len()],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub operation: Operation,
    pub success: u64,
    pub malformed: u64,
    pub validation: u64,
    pub calculation: u64,
    pub configuration: u64,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self, operation: Operation) -> u64 {
        self.counts[operation.index()][0].load(Ordering::Relaxed)
    }

    pub fn failures(&self, operation: Operation, kind: ErrorKind) -> u64 {
        self.counts[operation.index()][kind_slot(kind)].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> Vec<OutcomeCounts> {
        Operation::ALL
            .iter()
            .map(|&operation| OutcomeCounts {
                operation,
                success: self.successes(operation),
                malformed: self.failures(operation, ErrorKind::Malformed),
                validation: self.failures(operation, ErrorKind::Validation),
                calculation: self.failures(operation, ErrorKind::Calculation),
                configuration: self.failures(operation, ErrorKind::Configuration),
            })
            .collect()
    }
}

impl CalculationObserver for CountingObserver {
    fn on_success(&self, operation: Operation) {
        self.counts[operation.index()][0].fetch_add(1, Ordering::Relaxed);
    }

    fn on_failure(&self, operation: Operation, error: &ScheduleError) {
        self.counts[operation.index()][kind_slot(error.kind())].fetch_add(1, Ordering::Relaxed);
    }
}

fn kind_slot(kind: ErrorKind) -> usize {
    match kind {
        ErrorKind::Malformed => 1,
        ErrorKind::Validation => 2,
        ErrorKind::Calculation => 3,
        ErrorKind::Configuration => 4,
    }
}
