//! JSON run summary.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use mc_infection::ExposureModel;
use mc_sim::{EpidemicConfig, Sim, SimSummary, SimulationStatistics};

use crate::OutputResult;

pub const SUMMARY_FILE: &str = "summary.json";

/// Everything needed to reproduce and plot a run: the configuration, the
/// step size and count actually used, headline numbers, and the full
/// statistics series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub config:     EpidemicConfig,
    pub dt:         f64,
    pub steps:      u64,
    pub summary:    SimSummary,
    pub statistics: SimulationStatistics,
}

impl RunSummary {
    pub fn from_sim<M: ExposureModel>(sim: &Sim<M>) -> Self {
        Self {
            config:     sim.config().clone(),
            dt:         sim.dt(),
            steps:      sim.total_steps(),
            summary:    sim.summary(),
            statistics: sim.statistics().clone(),
        }
    }
}

/// Write `summary` as pretty-printed JSON to `dir/summary.json`, creating
/// `dir` if needed.  Returns the file path.
pub fn write_summary(dir: &Path, summary: &RunSummary) -> OutputResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(SUMMARY_FILE);
    let mut out = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut out, summary)?;
    out.flush()?;
    info!(path = %path.display(), "run summary written");
    Ok(path)
}

/// Read a summary previously written by [`write_summary`].
pub fn read_summary(path: &Path) -> OutputResult<RunSummary> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
