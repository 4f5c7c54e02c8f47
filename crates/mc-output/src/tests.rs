//! Integration tests for mc-output.

use tempfile::TempDir;

use mc_core::{BoundaryBox, Vec2};
use mc_population::{Cohort, CohortKind, IllCohort, Outcome, Population};
use mc_sim::EpidemicConfig;

use crate::csv::{CsvWriter, SNAPSHOTS_FILE, STATISTICS_FILE};
use crate::row::{SnapshotRow, StatsRow};
use crate::writer::OutputWriter;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn stats_row(step: u64) -> StatsRow {
    StatsRow { step, time: step as f64 * 0.5, healthy: 10, ill: 2, recovered: 1, dead: 0 }
}

fn read_records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

fn small_config() -> EpidemicConfig {
    EpidemicConfig {
        n_ill:             2,
        n_healthy:         20,
        spawn:             BoundaryBox::centered_square(10.0).unwrap(),
        bounds:            BoundaryBox::centered_square(10.0).unwrap(),
        steps:             6,
        snapshot_interval: 2,
        seed:              1,
        ..EpidemicConfig::default()
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(STATISTICS_FILE).exists());
        assert!(dir.path().join(SNAPSHOTS_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(STATISTICS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(STATISTICS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "time", "healthy", "ill", "recovered", "dead"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["step", "time", "cohort", "x", "y", "vx", "vy"]);
    }

    #[test]
    fn stats_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_stats(&stats_row(0)).unwrap();
        w.write_stats(&stats_row(3)).unwrap();
        w.finish().unwrap();

        let rows = read_records(dir.path().join(STATISTICS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "3");
        assert_eq!(&rows[1][1], "1.5");
        assert_eq!(&rows[1][2], "10");
        assert_eq!(&rows[1][5], "0");
    }

    #[test]
    fn dead_rows_have_empty_velocity() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            SnapshotRow {
                step:     1,
                time:     0.5,
                cohort:   CohortKind::Ill,
                position: Vec2::new(1.0, 2.0),
                velocity: Some(Vec2::new(-3.0, 4.0)),
            },
            SnapshotRow {
                step:     1,
                time:     0.5,
                cohort:   CohortKind::Dead,
                position: Vec2::new(5.0, 6.0),
                velocity: None,
            },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = read_records(dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(&rows[0][2], "ill");
        assert_eq!(&rows[0][5], "-3");
        assert_eq!(&rows[1][2], "dead");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[1][6], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn population_flattened_in_cohort_order() {
        let mut ill = IllCohort::new();
        ill.push(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Outcome::Die, 9.0);
        let mut healthy = Cohort::new();
        healthy.push(Vec2::new(2.0, 0.0), Vec2::new(1.0, 0.0));
        healthy.push(Vec2::new(3.0, 0.0), Vec2::new(1.0, 0.0));
        let mut pop = Population::new(healthy, ill).unwrap();
        pop.dead.extend_positions([Vec2::new(7.0, 7.0)]);

        let rows = SnapshotRow::from_population(4, 2.0, &pop);
        let kinds: Vec<CohortKind> = rows.iter().map(|r| r.cohort).collect();
        assert_eq!(
            kinds,
            vec![CohortKind::Healthy, CohortKind::Healthy, CohortKind::Ill, CohortKind::Dead]
        );
        assert_eq!(rows[2].velocity, Some(Vec2::new(0.0, 1.0)));
        assert_eq!(rows[3].velocity, None);
        assert!(rows.iter().all(|r| r.step == 4 && r.time == 2.0));
    }
}

// ── Observer + summary against a real run ─────────────────────────────────────

#[cfg(test)]
mod integration_tests {
    use super::*;

    use mc_sim::SimBuilder;

    use crate::{RunSummary, SimOutputObserver, read_summary, write_summary};

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::proximity(small_config()).unwrap().build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Step 0 plus 6 steps.
        let stats = read_records(dir.path().join(STATISTICS_FILE));
        assert_eq!(stats.len(), 7);
        assert_eq!(&stats[0][0], "0");
        assert_eq!(&stats[6][0], "6");

        // Snapshots at steps 0, 2, 4, 6 with 22 individuals each.
        let snaps = read_records(dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(snaps.len(), 4 * 22);
    }

    #[test]
    fn statistics_only_skips_snapshots() {
        let mut sim = SimBuilder::proximity(small_config()).unwrap().build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap()).statistics_only();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert!(read_records(dir.path().join(SNAPSHOTS_FILE)).is_empty());
    }

    #[test]
    fn summary_round_trips_through_json() {
        let mut sim = SimBuilder::proximity(small_config()).unwrap().build().unwrap();
        sim.run(&mut mc_sim::NoopObserver).unwrap();

        let dir = tmp();
        let summary = RunSummary::from_sim(&sim);
        let path = write_summary(dir.path(), &summary).unwrap();
        assert!(path.ends_with("summary.json"));

        let back = read_summary(&path).unwrap();
        assert_eq!(back.steps, 6);
        assert_eq!(back.config.n_healthy, 20);
        assert_eq!(back.statistics.len(), 7);
        assert_eq!(back.summary.last, sim.summary().last);
    }
}
