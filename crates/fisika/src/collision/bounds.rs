use crate::{
    body::Body,
    math::{num::limit_at_range, FloatNum},
    scene::config::Bounds,
    shape::Geometry,
};

/// Keep a movable body inside `[0, width] × [0, height]`.
///
/// When the body touches or crosses an edge while moving towards it, the velocity
/// component perpendicular to that edge is reversed and scaled by `restitution`. The
/// body is then put back inside by its half extent. Both axes are handled independently. Returns whether an edge
/// was hit.
pub fn keep_inside(body: &mut Body, bounds: &Bounds, restitution: FloatNum) -> bool {
    if body.is_fixed() {
        return false;
    }

    let half = body.shape().half_extent();
    let aabb = body.aabb();
    let mut position = *body.position();
    let mut velocity = *body.velocity();
    let mut is_hit = false;

    let (hit_left, hit_right) = (aabb.left <= 0., aabb.right >= bounds.width());
    if hit_left || hit_right {
        if (hit_left && velocity.x() < 0.) || (hit_right && velocity.x() > 0.) {
            velocity = velocity.with_x(-velocity.x() * restitution);
        }
        position = position.with_x(limit_at_range(
            position.x(),
            half.x()..=(bounds.width() - half.x()),
        ));
        is_hit = true;
    }

    let (hit_top, hit_bottom) = (aabb.top <= 0., aabb.bottom >= bounds.height());
    if hit_top || hit_bottom {
        if (hit_top && velocity.y() < 0.) || (hit_bottom && velocity.y() > 0.) {
            velocity = velocity.with_y(-velocity.y() * restitution);
        }
        position = position.with_y(limit_at_range(
            position.y(),
            half.y()..=(bounds.height() - half.y()),
        ));
        is_hit = true;
    }

    if is_hit {
        body.set_position(position).set_velocity(velocity);
        body.record_contact();
    }

    is_hit
}
