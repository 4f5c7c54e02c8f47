//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SnapshotRow, StatsRow};

/// Sink for per-step statistics and population snapshots.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them because observer hooks cannot fail.
pub trait OutputWriter {
    /// Write a batch of snapshot rows.
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Write one statistics row.
    fn write_stats(&mut self, row: &StatsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
