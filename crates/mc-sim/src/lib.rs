//! `mc-sim`: step loop orchestrator for the epidemic model.
//!
//! # Step loop
//!
//! ```text
//! build:  validate config → (adapt dt) → seed RNG → draw cohorts
//!         → record statistics at t = 0
//! for step in 1..=steps:
//!   ① Clock    : now = t + dt
//!   ② Outcomes : ill with event_time < now: Die → Dead, Recover → Recovered
//!   ③ Exposure : ExposureModel picks healthy indices → Ill (outcome from now)
//!   ④ Movement : Healthy, Ill, Recovered fly and reflect; Dead stay put
//!   ⑤ Record   : statistics at now; snapshot every `snapshot_interval`
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`config`]   | `EpidemicConfig` with the default run parameters         |
//! | [`adaptive`] | `adapt_time_step`                                        |
//! | [`engine`]   | `StepEngine` (steps ② and ③)                             |
//! | [`stats`]    | `StepStats`, `StepTransitions`, `SimulationStatistics`, `PopulationSnapshot` |
//! | [`sim`]      | `Sim`, `SimSummary`                                      |
//! | [`builder`]  | `SimBuilder`                                             |
//! | [`observer`] | `SimObserver`, `NoopObserver`                            |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_sim::{EpidemicConfig, NoopObserver, SimBuilder};
//!
//! let config = EpidemicConfig { n_healthy: 1_000, seed: 7, ..EpidemicConfig::default() };
//! let mut sim = SimBuilder::proximity(config)?.build()?;
//! sim.run(&mut NoopObserver)?;
//! let last = sim.statistics().last().unwrap();
//! println!("{}", last.counts);
//! ```

pub mod adaptive;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use adaptive::adapt_time_step;
pub use builder::SimBuilder;
pub use config::EpidemicConfig;
pub use engine::StepEngine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimSummary};
pub use stats::{PopulationSnapshot, SimulationStatistics, StepStats, StepTransitions};
