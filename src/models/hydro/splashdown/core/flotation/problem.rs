//! Problem formulation for the flotation draft.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

use crate::models::hydro::splashdown::core::{FluidProperties, ObjectSpec};

/// Hydrostatic state of a body held at a fixed penetration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Displacement {
    pub(super) depth: Length,
    pub(super) buoyancy: Force,
}

/// Model adapter exposing the penetration depth as the sole input.
pub(super) struct DisplacementModel<'a> {
    object: &'a ObjectSpec,
    fluid: &'a FluidProperties,
}

impl<'a> DisplacementModel<'a> {
    pub(super) fn new(object: &'a ObjectSpec, fluid: &'a FluidProperties) -> Self {
        Self { object, fluid }
    }
}

impl Model for DisplacementModel<'_> {
    type Input = Length;
    type Output = Displacement;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let volume = self.object.submerged_volume(*input);
        Ok(Displacement {
            depth: *input,
            buoyancy: self.fluid.water_density() * self.fluid.gravity() * volume,
        })
    }
}

/// Residual is `buoyancy - weight`.
pub(super) struct DraftProblem {
    weight: Force,
}

impl DraftProblem {
    pub(super) fn new(weight: Force) -> Self {
        Self { weight }
    }
}

impl EquationProblem<1> for DraftProblem {
    type Input = Length;
    type Output = Displacement;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.buoyancy.get::<newton>() - self.weight.get::<newton>()])
    }
}
