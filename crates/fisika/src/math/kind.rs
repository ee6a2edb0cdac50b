//! Markers naming the physical quantity a [`Vector`] stands for.
//!
//! Arithmetic is closed inside a kind. Moving between kinds goes through the
//! physical relations below, e.g. a force divided by a mass is an acceleration.

use std::fmt::Debug;

use super::{vector::Vector, FloatNum};

pub trait Kind: Copy + Debug + Default + PartialEq + 'static {
    const NAME: &'static str;
}

macro_rules! define_kinds {
    ($($(#[$attr:meta])* $marker:ident => $name:literal),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl Kind for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

define_kinds! {
    /// plain vector without physical meaning, e.g. a contact normal
    Free => "Vector",
    Position => "Position",
    Velocity => "Velocity",
    Acceleration => "Acceleration",
    Force => "Force",
    Momentum => "Momentum",
}

impl<const N: usize> Vector<Force, N> {
    /// a = F / m
    #[inline]
    pub fn over_mass(self, mass: FloatNum) -> Vector<Acceleration, N> {
        (self * mass.recip()).retag()
    }
}

impl<const N: usize> Vector<Acceleration, N> {
    /// Δv = a * Δt
    #[inline]
    pub fn velocity_change(self, delta_time: FloatNum) -> Vector<Velocity, N> {
        (self * delta_time).retag()
    }
}

impl<const N: usize> Vector<Velocity, N> {
    /// Δp = v * Δt
    #[inline]
    pub fn displacement(self, delta_time: FloatNum) -> Vector<Position, N> {
        (self * delta_time).retag()
    }

    /// p = m * v
    #[inline]
    pub fn momentum(self, mass: FloatNum) -> Vector<Momentum, N> {
        (self * mass).retag()
    }
}

impl<const N: usize> Vector<Momentum, N> {
    /// v = p / m
    #[inline]
    pub fn over_mass(self, mass: FloatNum) -> Vector<Velocity, N> {
        (self * mass.recip()).retag()
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{Acceleration, Force, Momentum, Position, Velocity};

    #[test]
    fn test_physical_relations() {
        let a: Acceleration = Force::new(10., -4.).over_mass(2.);
        assert_eq!(a, Acceleration::new(5., -2.));

        let dv: Velocity = a.velocity_change(0.5);
        assert_eq!(dv, Velocity::new(2.5, -1.));

        let dp: Position = dv.displacement(2.);
        assert_eq!(dp, Position::new(5., -2.));

        let p: Momentum = dv.momentum(4.);
        assert_eq!(p, Momentum::new(10., -4.));
        assert_eq!(p.over_mass(4.), dv);
    }

    #[test]
    fn test_kind_round_trip_through_free() {
        let v = Velocity::new(1., 2.);
        let free = v.untagged();
        assert_eq!(free.to_string(), "Vector [1, 2]");
        let back: Velocity = free.tagged();
        assert_eq!(back, v);
    }
}
