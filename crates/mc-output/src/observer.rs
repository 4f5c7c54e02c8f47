//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use mc_population::Population;
use mc_sim::{SimObserver, SimulationStatistics, StepStats, StepTransitions};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, SnapshotRow, StatsRow};

/// A [`SimObserver`] that writes statistics and snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    snapshots:  bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that records statistics and
    /// snapshots.
    pub fn new(writer: W) -> Self {
        Self { writer, snapshots: true, last_error: None }
    }

    /// Skip position snapshots; only statistics are written.
    pub fn statistics_only(mut self) -> Self {
        self.snapshots = false;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, initial: &StepStats, _population: &Population) {
        let result = self.writer.write_stats(&StatsRow::from(initial));
        self.store_err(result);
    }

    fn on_step_end(&mut self, stats: &StepStats, _transitions: &StepTransitions) {
        let result = self.writer.write_stats(&StatsRow::from(stats));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: u64, time: f64, population: &Population) {
        if !self.snapshots {
            return;
        }
        let rows = SnapshotRow::from_population(step, time, population);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _statistics: &SimulationStatistics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
