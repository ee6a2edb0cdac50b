use crate::{
    body::Body,
    math::{kind, vector::Vector, FloatNum, Position},
};

use super::Contact;

/// Velocity of body 1 along the normal after an elastic one dimensional collision.
///
/// ```text
/// v1' = (v1 * (m1 - m2) + 2 * m2 * v2) / (m1 + m2)
/// ```
///
/// `m2` may be infinite, the body then bounces off as from a wall, `v1' = 2 * v2 - v1`.
pub fn one_dimensional_collision(
    v1: FloatNum,
    v2: FloatNum,
    m1: FloatNum,
    m2: FloatNum,
) -> FloatNum {
    if m2.is_infinite() {
        return 2. * v2 - v1;
    }
    (v1 * (m1 - m2) + 2. * m2 * v2) / (m1 + m2)
}

// move the bodies apart along the normal, a fixed body does not move
pub(crate) fn separate(a: &mut Body, b: &mut Body, contact: &Contact) {
    let correction: Position = (*contact.normal() * contact.depth()).tagged();

    match (a.is_fixed(), b.is_fixed()) {
        (true, true) => {}
        (true, false) => {
            let position = *b.position() + correction;
            b.set_position(position);
        }
        (false, true) => {
            let position = *a.position() - correction;
            a.set_position(position);
        }
        (false, false) => {
            let half = correction * 0.5;
            let position_a = *a.position() - half;
            let position_b = *b.position() + half;
            a.set_position(position_a);
            b.set_position(position_b);
        }
    }
}

/// Exchange momentum between `a` and `b` along the unit `normal` pointing from `a` to `b`.
///
/// The normal components follow [`one_dimensional_collision`] scaled by `restitution`,
/// the tangential components are left as they are. A fixed body is at rest and keeps
/// its velocity.
pub fn resolve_impulse(a: &mut Body, b: &mut Body, normal: &Vector, restitution: FloatNum) {
    let tangent = normal.perpendicular();

    let normal_speed = |body: &Body| {
        if body.is_fixed() {
            0.
        } else {
            body.velocity().dot(normal)
        }
    };

    let (v1n, v1t) = (normal_speed(a), a.velocity().dot(&tangent));
    let (v2n, v2t) = (normal_speed(b), b.velocity().dot(&tangent));

    let (m1, m2) = (a.mass(), b.mass());

    if !a.is_fixed() {
        let v1n = restitution * one_dimensional_collision(v1n, v2n, m1, m2);
        a.set_velocity((*normal * v1n + tangent * v1t).tagged::<kind::Velocity>());
    }

    if !b.is_fixed() {
        let v2n = restitution * one_dimensional_collision(v2n, v1n, m2, m1);
        b.set_velocity((*normal * v2n + tangent * v2t).tagged::<kind::Velocity>());
    }
}
