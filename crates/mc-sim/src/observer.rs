//! Simulation observer trait for progress reporting and data collection.

use mc_population::Population;

use crate::{SimulationStatistics, StepStats, StepTransitions};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and the run methods
/// built on it.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, stats: &StepStats, _t: &StepTransitions) {
///         if stats.step % self.interval == 0 {
///             println!("t = {:.1}: {}", stats.time, stats.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once, before the first step is driven, with the state at time 0.
    fn on_sim_start(&mut self, _initial: &StepStats, _population: &Population) {}

    /// Called before any processing of the step that will become `step`.
    fn on_step_start(&mut self, _step: u64, _time: f64) {}

    /// Called after the step's statistics have been recorded.
    fn on_step_end(&mut self, _stats: &StepStats, _transitions: &StepTransitions) {}

    /// Called every `config.snapshot_interval` steps (and for step 0) with
    /// read-only access to every cohort.
    ///
    /// Fires whether or not `config.record_trace` is set; that flag only
    /// controls the in-memory [`Sim::trace`][crate::Sim::trace].
    fn on_snapshot(&mut self, _step: u64, _time: f64, _population: &Population) {}

    /// Called once after the final step of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _statistics: &SimulationStatistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
