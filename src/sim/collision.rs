//! Contact tests between perimeter actors
//!
//! Both actor classes are circles for contact purposes; the simulation only
//! reports overlap, downstream damage/scoring lives outside the core.

use glam::Vec2;

/// Do two circles overlap (touching counts)?
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= reach * reach
}
