//! A small 2D rigid body physics kernel.
//!
//! Bodies are circles or axis aligned rects moved by forces, drag and accelerations with
//! a semi-implicit Euler integrator. Contacts are resolved pairwise with restitution.
//! The y axis grows downward, gravity is usually `(0, 9.81)`.

pub mod body;
pub mod collision;
pub mod errors;
pub mod integrator;
pub mod math;
pub mod meta;
pub mod scene;
pub mod shape;

pub mod prelude {
    pub use super::body::{Aabb, Body, BodyBuilder, ID};
    pub use super::errors::{Error, Result};
    pub use super::math::{
        kind::Kind, vector::Vector, Acceleration, FloatNum, Force, Momentum, Position, Velocity,
    };
    pub use super::meta::force::{
        AccelerationEntry, AccelerationGroup, ForceEntry, ForceGroup,
    };
    pub use super::scene::{
        config::{Bounds, WorldConfig, WorldConfigBuilder},
        BodyState, World,
    };
    pub use super::shape::{Circle, Geometry, Rect, Shape};
}
