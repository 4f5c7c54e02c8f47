//! `mc-lattice`: Metropolis-Hastings sampling of a 2D Ising-type spin lattice.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`grid`]       | `SpinGrid`: row-major ±1 spins                              |
//! | [`window`]     | `NeighborWindow`: odd-sized neighbour weight matrix         |
//! | [`energy`]     | `neighbor_energy`, `EnergyField`                            |
//! | [`sweep`]      | `metropolis_sweep`, `Coupling`                              |
//! | [`simulation`] | `LatticeConfig`, `LatticeSimulation`, `LatticeRun`          |
//!
//! # Sweep rule
//!
//! One sweep evaluates the energy field once and decides every cell's flip
//! against that single evaluation, then applies all flips together:
//!
//! ```text
//! E  = -j · correlate(S, W) · S - h · S      (zero padding, "same" size)
//! ΔE = -2E
//! ΔE <  0  → flip
//! ΔE >= 0  → flip with probability exp(-β ΔE)   (one uniform per cell)
//! ```
//!
//! This is a vectorised approximation of single-spin-flip Metropolis: flips
//! in the same sweep do not see each other.  Results are defined by this
//! rule, so it is kept exactly.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Energy field rows computed on Rayon's thread pool.     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `LatticeConfig`.  |

pub mod energy;
pub mod grid;
pub mod simulation;
pub mod sweep;
pub mod window;


pub use energy::{EnergyField, neighbor_energy};
pub use grid::SpinGrid;
pub use simulation::{LatticeConfig, LatticeRun, LatticeSimulation};
pub use sweep::{Coupling, metropolis_sweep};
pub use window::NeighborWindow;
