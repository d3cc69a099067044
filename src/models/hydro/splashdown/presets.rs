//! Scale models of a capsule dropped during splashdown test campaigns.
//!
//! Each preset is an ordinary [`ObjectSpec`], so callers pick one explicitly
//! and may adjust it like any other object.

use uom::si::{
    f64::{Length, Mass, Ratio},
    length::meter,
    mass::kilogram,
    ratio::ratio,
};

use super::{ObjectSpec, Shape};

fn preset(name: &str, shape: Shape, mass: f64, radius: f64, height: f64, cd: f64) -> ObjectSpec {
    ObjectSpec::new_unchecked(
        shape,
        Mass::new::<kilogram>(mass),
        Length::new::<meter>(radius),
        Length::new::<meter>(height),
        Ratio::new::<ratio>(cd),
    )
    .named(name)
}

/// 1:10 scale cone.
#[must_use]
pub fn ech_10() -> ObjectSpec {
    preset("Ech 10", Shape::Cone, 0.774, 0.075, 0.055, 0.8)
}

/// 1:4 scale cone.
#[must_use]
pub fn ech_4() -> ObjectSpec {
    preset("Ech 4", Shape::Cone, 3.7, 0.185, 0.1, 0.8)
}

/// Half-scale cylinder.
#[must_use]
pub fn ech_2() -> ObjectSpec {
    preset("Ech 2", Shape::Cylinder, 10.0, 0.7, 0.25, 0.9)
}

/// Full-scale cylinder.
#[must_use]
pub fn ech_1() -> ObjectSpec {
    preset("Ech 1", Shape::Cylinder, 37.0, 0.7, 0.5, 0.9)
}

/// Full-scale capsule with a 70° cone (`0.75 tan 20°` high).
#[must_use]
pub fn bfs() -> ObjectSpec {
    preset("BFS", Shape::Cone, 50.0, 0.75, 0.26, 0.7)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    #[test]
    fn presets_are_valid() {
        for object in [ech_10(), ech_4(), ech_2(), ech_1(), bfs()] {
            let validated = ObjectSpec::new(
                object.shape(),
                object.mass(),
                object.radius(),
                object.height(),
                object.drag_coefficient(),
            )
            .unwrap()
            .named(object.name());
            assert_eq!(validated, object);
        }
    }

    #[test]
    fn reference_area_is_the_base() {
        let capsule = bfs();
        assert_eq!(capsule.name(), "BFS");
        assert_eq!(capsule.shape(), Shape::Cone);
        assert_relative_eq!(
            capsule.reference_area().get::<square_meter>(),
            PI * 0.75 * 0.75,
            max_relative = 1e-12
        );
    }
}
