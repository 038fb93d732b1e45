//! Rim Runner - a rectangular arena rim-running game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (edge locomotion, gravity reorientation,
//!   jumps, orbiter pool, collision events)
//!
//! The crate is headless: rendering, input polling, and viewport-to-world
//! conversion are external collaborators. The embedder supplies boundary
//! scalars and per-tick input, and drains [`sim::GameEvent`]s.

pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth corner blending)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Runner defaults
    pub const RUNNER_SPEED: f32 = 3.0;
    pub const RUNNER_JUMP_POWER: f32 = 6.0;
    pub const RUNNER_GRAVITY_POWER: f32 = 20.0;
    pub const RUNNER_MAX_JUMP_COUNT: u32 = 2;
    /// Tangential distance before a corner over which gravity is blended
    pub const CORNER_BLEND_DISTANCE: f32 = 0.2;
    /// Arc-strategy jump apex height (matches the impulse apex v²/2g)
    pub const ARC_JUMP_HEIGHT: f32 = 0.9;
    /// Arc-strategy total up-then-down duration in seconds
    pub const ARC_JUMP_DURATION: f32 = 0.8;

    /// Orbiter defaults
    pub const ORBITER_MIN_SPEED: f32 = 2.0;
    pub const ORBITER_MAX_SPEED: f32 = 4.0;
    pub const EDGES_PER_LAP: u32 = 4;
    pub const ORBITER_MAX_LAPS: u32 = 2;

    /// Pool defaults
    pub const POOL_SIZE: usize = 20;
    pub const MIN_SPAWN_INTERVAL: f32 = 1.0;
    pub const MAX_SPAWN_INTERVAL: f32 = 5.0;

    /// Collision radii (runner vs orbiter overlap events)
    pub const RUNNER_RADIUS: f32 = 0.35;
    pub const ORBITER_RADIUS: f32 = 0.25;

    /// Tolerance for grounded / clamp-axis equality checks
    pub const GROUND_EPSILON: f32 = 1e-4;

    /// Demo arena half-extents (the real embedder derives these from the
    /// viewport)
    pub const DEMO_HALF_WIDTH: f32 = 8.0;
    pub const DEMO_HALF_HEIGHT: f32 = 4.5;
}

/// Inverse lerp: where `v` sits between `a` and `b`, clamped to [0, 1].
///
/// A degenerate range (`a == b`) maps to 0 rather than dividing by zero.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let span = b - a;
    if span.abs() < f32::EPSILON {
        return 0.0;
    }
    ((v - a) / span).clamp(0.0, 1.0)
}

/// Rotate `v` by the rotation that maps unit vector `from` onto unit vector
/// `to`, preserving `v`'s length and its orientation relative to the frame.
#[inline]
pub fn rotate_like(v: Vec2, from: Vec2, to: Vec2) -> Vec2 {
    let cos = from.dot(to);
    let sin = from.perp_dot(to);
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_lerp_basic() {
        assert!((inverse_lerp(0.0, 10.0, 5.0) - 0.5).abs() < 1e-6);
        assert!((inverse_lerp(0.0, 10.0, -5.0) - 0.0).abs() < 1e-6);
        assert!((inverse_lerp(0.0, 10.0, 15.0) - 1.0).abs() < 1e-6);
        // Descending range
        assert!((inverse_lerp(10.0, 0.0, 2.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_lerp_degenerate_range() {
        assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
        assert_eq!(inverse_lerp(3.0, 3.0, 100.0), 0.0);
    }

    #[test]
    fn test_rotate_like_quarter_turn() {
        // Frame rotates down -> right; a velocity pointing up (out of the
        // floor) must end up pointing left (out of the right wall).
        let v = Vec2::new(0.0, 1.0);
        let rotated = rotate_like(v, Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0));
        assert!((rotated - Vec2::new(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotate_like_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        let from = Vec2::new(0.0, -1.0);
        let to = Vec2::new(1.0, 0.0)
            .lerp(Vec2::new(0.0, -1.0), 0.3)
            .normalize();
        let rotated = rotate_like(v, from, to);
        assert!((rotated.length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_like_identity() {
        let v = Vec2::new(1.5, 2.5);
        let d = Vec2::new(0.0, -1.0);
        assert!((rotate_like(v, d, d) - v).length() < 1e-6);
    }
}
