//! Hydrodynamics models.
//!
//! This module contains models for bodies moving through and into water.

pub mod splashdown;
