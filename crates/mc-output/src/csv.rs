//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `statistics.csv`: `step,time,healthy,ill,recovered,dead`
//! - `snapshots.csv`: `step,time,cohort,x,y,vx,vy` (velocity left empty for
//!   the Dead)

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow, StatsRow};

pub const STATISTICS_FILE: &str = "statistics.csv";
pub const SNAPSHOTS_FILE: &str = "snapshots.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    statistics: Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut statistics = Writer::from_path(dir.join(STATISTICS_FILE))?;
        statistics.write_record(["step", "time", "healthy", "ill", "recovered", "dead"])?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["step", "time", "cohort", "x", "y", "vx", "vy"])?;

        Ok(Self { statistics, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let (vx, vy) = match row.velocity {
                Some(v) => (v.x.to_string(), v.y.to_string()),
                None => (String::new(), String::new()),
            };
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.time.to_string(),
                row.cohort.as_str().to_owned(),
                row.position.x.to_string(),
                row.position.y.to_string(),
                vx,
                vy,
            ])?;
        }
        Ok(())
    }

    fn write_stats(&mut self, row: &StatsRow) -> OutputResult<()> {
        self.statistics.write_record(&[
            row.step.to_string(),
            row.time.to_string(),
            row.healthy.to_string(),
            row.ill.to_string(),
            row.recovered.to_string(),
            row.dead.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.statistics.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
