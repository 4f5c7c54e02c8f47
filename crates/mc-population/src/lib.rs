//! `mc-population`: Structure-of-Arrays population storage for the epidemic model.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`cohort`]     | `Cohort`, `IllCohort`, `DeadCohort` (parallel column arrays)  |
//! | [`population`] | `Population` (four-way partition), `CohortCounts`, `CohortKind` |
//! | [`outcome`]    | `Outcome`, `OutcomeScheduler` (recover-or-die sampling)       |
//! | [`builder`]    | `PopulationBuilder`, `SpeedRange` (initial cohorts)           |
//!
//! # Identity contract
//!
//! An individual is a column index inside its current cohort.  Every step
//! compacts cohorts (order-preserving removal) and appends newcomers, so an
//! index is only meaningful until the next step: "the i-th ill individual"
//! before a step is not the i-th ill individual after it.  There are no
//! stable IDs; moving between cohorts is an array move.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod cohort;
pub mod outcome;
pub mod population;


pub use builder::{PopulationBuilder, SpeedRange};
pub use cohort::{Cohort, DeadCohort, IllCohort};
pub use outcome::{Outcome, OutcomeScheduler, ScheduledOutcome};
pub use population::{CohortCounts, CohortKind, Population};
