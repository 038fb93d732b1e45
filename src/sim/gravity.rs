//! Corner-smoothed gravity direction
//!
//! Away from corners, gravity is the occupied edge's pull direction. Within
//! `blend_distance` of the corner (measured along the travel axis) it is a
//! normalized lerp toward the next edge's pull, so "down" swings smoothly
//! through 90 degrees instead of snapping. The caller is responsible for
//! rotating any accumulated velocity when the returned direction changes
//! (see [`crate::rotate_like`]); skipping that step makes velocity decompose
//! against a stale axis and visibly snap at corners.

use glam::Vec2;

use super::boundary::{Boundary, Edge};
use crate::inverse_lerp;

/// Blended gravity direction for a perimeter position.
///
/// Pure function of `(edge, pos, boundary, blend_distance)`. Always returns
/// a unit vector. `blend_distance <= 0` disables blending entirely rather
/// than dividing by zero, and a degenerate lerp result falls back to the
/// current edge's pull.
pub fn blended_gravity_dir(edge: Edge, pos: Vec2, b: &Boundary, blend_distance: f32) -> Vec2 {
    let current = edge.gravity();
    if blend_distance <= 0.0 {
        return current;
    }

    let end = edge.travel_end(b);
    let coord = edge.travel_coord(pos);
    if coord <= end - blend_distance {
        return current;
    }

    let t = inverse_lerp(end - blend_distance, end, coord);
    let blended = current.lerp(edge.next().gravity(), t);
    if blended.length_squared() < 1e-8 {
        // Adjacent edge pulls are perpendicular, so this cannot happen on the
        // fixed cycle; guard anyway for degenerate inputs.
        current
    } else {
        blended.normalize()
    }
}
