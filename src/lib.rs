//! # Splashdown
//!
//! Simulation of a rigid cylinder or apex-down cone falling through air and
//! entering still water, built as a [Twine](https://github.com/isentropic-dev/twine)
//! model.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] implementation and its physics.
//! - [`support`]: Supporting utilities used by models: value constraints and
//!   an adaptive Runge–Kutta integrator.
//!
//! ## Conventions
//!
//! Physical quantities are [`uom`] SI types. Positions, velocities and
//! accelerations are measured along the vertical, positive downward, with the
//! origin at the free surface: a body whose lowest point is at `z < 0` is
//! still in the air.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
