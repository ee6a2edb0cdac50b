//! Pairwise collision detection and response.
//!
//! Every pair of bodies is tested once per step in insertion order, there is no broad
//! phase. Two circles collide along the line joining their centers, any pair involving
//! a rect is treated with axis aligned bounding boxes.

pub mod bounds;
pub mod response;

use tracing::trace;

use crate::{
    body::{store::pair_mut, Body},
    math::{axis::AxisDirection, vector::Vector, FloatNum},
    shape::{Geometry, Shape},
};

pub use response::{one_dimensional_collision, resolve_impulse};

/// Contact between two bodies.
///
/// `normal` is a unit vector pointing from the first body to the second one,
/// `depth` is how far the bodies overlap along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    normal: Vector,
    depth: FloatNum,
    axis: Option<AxisDirection>,
}

impl Contact {
    pub fn new(normal: Vector, depth: FloatNum) -> Self {
        Self {
            normal,
            depth,
            axis: None,
        }
    }

    fn along_axis(axis: AxisDirection, sign: FloatNum, depth: FloatNum) -> Self {
        let normal: Vector = axis.into();
        Self {
            normal: normal * sign,
            depth,
            axis: Some(axis),
        }
    }

    #[inline]
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    #[inline]
    pub fn depth(&self) -> FloatNum {
        self.depth
    }

    /// axis of a box contact, `None` for two circles
    #[inline]
    pub fn axis(&self) -> Option<AxisDirection> {
        self.axis
    }

    // same contact seen from the other body
    fn flip(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

/// Find the contact between `a` and `b`, `None` when they do not overlap.
pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    match (a.shape(), b.shape()) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => {
            let delta = (*b.position() - *a.position()).untagged();
            let distance = delta.magnitude();
            let radius_sum = circle_a.radius() + circle_b.radius();
            if distance >= radius_sum {
                return None;
            }

            // concentric circles have no direction to part along, push them apart on x
            let normal = if distance == 0. {
                AxisDirection::X.into()
            } else {
                delta.normalize()
            };
            Some(Contact::new(normal, radius_sum - distance))
        }
        _ => {
            let (overlap_x, overlap_y) = a.aabb().overlap(&b.aabb())?;

            let (axis, depth) = if overlap_x < overlap_y {
                (AxisDirection::X, overlap_x)
            } else {
                (AxisDirection::Y, overlap_y)
            };

            let index = axis.index();
            let sign = if b.position().elements()[index] >= a.position().elements()[index] {
                1.
            } else {
                -1.
            };

            Some(Contact::along_axis(axis, sign, depth))
        }
    }
}

// `ground` is a fixed rect right below `body`
fn is_resting_on(body: &Body, ground: &Body, contact: &Contact) -> bool {
    !body.is_fixed()
        && ground.is_fixed()
        && ground.shape().as_rect().is_some()
        && contact.axis() == Some(AxisDirection::Y)
        && body.position().y() < ground.position().y()
}

fn rest_on(body: &mut Body, ground: &Body) {
    let top = ground.aabb().top;
    let half_height = body.shape().half_extent().y();

    let position = body.position().with_y(top - half_height);
    let velocity = body.velocity().with_y(body.velocity().y().min(0.));

    body.set_position(position).set_velocity(velocity);
    body.mark_grounded();
}

/// Resolve a detected contact between `a` and `b`.
///
/// A movable body lying on top of a fixed rect is put back onto its surface and loses
/// its downward velocity, it does not bounce. Any other contact separates the bodies
/// and exchanges momentum along the normal.
pub fn resolve(a: &mut Body, b: &mut Body, contact: &Contact, restitution: FloatNum) {
    a.record_contact();
    b.record_contact();

    if is_resting_on(a, b, contact) {
        rest_on(a, b);
        return;
    }

    if is_resting_on(b, a, &contact.flip()) {
        rest_on(b, a);
        return;
    }

    response::separate(a, b, contact);
    resolve_impulse(a, b, contact.normal(), restitution);
}

/// Test and resolve every pair of `bodies`, returns the number of contacts.
///
/// Contact bookkeeping of every body is reset first. Pairs of fixed bodies are skipped,
/// pairs are resolved one after the other so later pairs see the result of earlier ones.
pub fn resolve_collisions(bodies: &mut [Body], restitution: FloatNum) -> usize {
    bodies.iter_mut().for_each(Body::reset_contacts);

    let mut contact_count = 0;

    for j in 1..bodies.len() {
        for i in 0..j {
            let (a, b) = pair_mut(bodies, i, j);
            if a.is_fixed() && b.is_fixed() {
                continue;
            }
            if let Some(contact) = detect(a, b) {
                trace!(a = a.id(), b = b.id(), depth = contact.depth(), "contact");
                resolve(a, b, &contact, restitution);
                contact_count += 1;
            }
        }
    }

    contact_count
}
