//! `mc-infection`: who falls ill each step.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`spec`]      | `InfectionSpec` (radius + exposure duration), `MaskProtection` |
//! | [`context`]   | `ExposureContext<'a>`, the read-only view passed to a model   |
//! | [`model`]     | `ExposureModel` trait                                         |
//! | [`proximity`] | `ProximitySampler` (R-tree distance query + exposure time)    |
//! | [`noop`]      | `NoExposure`, a model that never infects                      |
//!
//! # Design notes
//!
//! The step engine in mc-sim removes the departing ill, builds an
//! `ExposureContext` over the remaining ill and the current healthy cohort,
//! and asks its `ExposureModel` for the indices that fall ill.  Models only
//! read the population; the engine moves the returned individuals between
//! cohorts afterwards.

pub mod context;
pub mod model;
pub mod noop;
pub mod proximity;
pub mod spec;

#[cfg(test)]
mod tests;

pub use context::ExposureContext;
pub use model::ExposureModel;
pub use noop::NoExposure;
pub use proximity::{ProximitySampler, exposure_window};
pub use spec::{InfectionSpec, MaskProtection};
