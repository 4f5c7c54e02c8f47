//! `mc-kinematics`: free flight inside a box with elastic walls.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`reflect`] | `reflect_axis` (fold one coordinate back into its interval)  |
//! | [`engine`]  | `Kinematics` (advance a position/velocity column pair)       |
//!
//! # Movement model
//!
//! Each step every moving individual travels `v·dt` in a straight line.  A
//! coordinate that ends past a wall is mirrored about it and the matching
//! velocity component changes sign, so speed is conserved and every position
//! stays inside the box.  Axes are independent.
//!
//! The Dead are stationary and are never passed to [`Kinematics::step`].

pub mod engine;
pub mod reflect;

#[cfg(test)]
mod tests;

pub use engine::Kinematics;
pub use reflect::reflect_axis;
