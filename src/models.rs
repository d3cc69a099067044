//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `hydro`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the physics and numerics live. The [`twine_core::Model`]
//! implementation is a thin adapter that delegates to the core API, whose
//! types are re-exported next to it.

pub mod hydro;
