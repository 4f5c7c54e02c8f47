//! `mc-core`: foundational types for the `mc` stochastic simulation workspace.
//!
//! This crate is a dependency of every other `mc-*` crate.  It has no `mc-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Vec2`, `Interval`, `BoundaryBox`                     |
//! | [`time`]        | `SimClock` (continuous time advanced in `dt` steps)   |
//! | [`rng`]         | `SimRng`: the explicit, seedable random source        |
//! | [`truncnorm`]   | `TruncatedNormal`, `DurationSpec`                     |
//! | [`error`]       | `McError`, `McResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod error;
pub mod geo;
pub mod rng;
pub mod time;
pub mod truncnorm;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{McError, McResult};
pub use geo::{BoundaryBox, Interval, Vec2};
pub use rng::SimRng;
pub use time::{SimClock, validate_dt};
pub use truncnorm::{DurationSpec, TruncatedNormal};
