//! `mc-output`: persistence for epidemic runs.
//!
//! | Item                  | Files created                                    |
//! |-----------------------|--------------------------------------------------|
//! | [`CsvWriter`]         | `statistics.csv`, `snapshots.csv`                |
//! | [`write_summary`]     | `summary.json` (config + statistics)             |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `mc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mc_output::{CsvWriter, RunSummary, SimOutputObserver, write_summary};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! write_summary(Path::new("./output"), &RunSummary::from_sim(&sim))?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{SnapshotRow, StatsRow};
pub use summary::{RunSummary, read_summary, write_summary};
pub use writer::OutputWriter;
