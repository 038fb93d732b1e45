//! The runner: the player actor walking the arena rim
//!
//! The runner slides along its current edge at constant speed while gravity
//! pulls it onto the edge surface. Near corners the gravity direction blends
//! toward the next edge and any accumulated velocity is rotated with it, so
//! jump arcs bend around corners instead of snapping.
//!
//! Two jump strategies share the edge state machine:
//! - `Impulse`: a velocity kick against gravity, consumed by gravity over
//!   time; multi-jump via a counter that resets on landing.
//! - `Arc`: a fixed-duration up-then-down offset curve on top of the
//!   edge-clamped base position; re-triggering stacks the target height up to
//!   a ceiling and restarts the timer.

use glam::Vec2;

use super::boundary::{Boundary, Edge};
use super::config::{JumpStyle, RunnerTuning};
use super::gravity::blended_gravity_dir;
use super::state::GameEvent;
use crate::consts::GROUND_EPSILON;
use crate::rotate_like;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Arc-strategy state: an explicit two-phase easing timer.
#[derive(Debug, Clone, Default)]
struct ArcJump {
    /// Current height above the edge surface
    offset: f32,
    /// Offset at the moment the (re)trigger fired
    start_offset: f32,
    /// Apex the rising phase eases toward
    target_offset: f32,
    elapsed: f32,
    airborne: bool,
    jumps_used: u32,
}

/// The player actor. Single persistent instance, (re)initialized at scene
/// start; no pool lifecycle.
#[derive(Debug, Clone)]
pub struct Runner {
    pub pos: Vec2,
    pub edge: Edge,
    /// Accumulated gravity/jump velocity; zero while grounded
    pub velocity: Vec2,
    /// Current blended gravity direction, always unit length
    pub gravity_dir: Vec2,
    pub grounded: bool,
    pub jump_count: u32,
    /// Set on jump, cleared on landing; suppresses grounded re-tests while
    /// still rising
    jumping: bool,
    /// Arc-strategy base position, pinned to the edge surface
    base: Vec2,
    arc: ArcJump,
    tuning: RunnerTuning,
}

impl Runner {
    pub fn new(b: &Boundary, tuning: RunnerTuning) -> Self {
        let start = b.bottom_center();
        Self {
            pos: start,
            edge: Edge::Bottom,
            velocity: Vec2::ZERO,
            gravity_dir: Edge::Bottom.gravity(),
            grounded: true,
            jump_count: 0,
            jumping: false,
            base: start,
            arc: ArcJump::default(),
            tuning,
        }
    }

    /// Reset to the scene-start state: mid-bottom-edge, grounded, all
    /// counters cleared.
    pub fn reset(&mut self, b: &Boundary) {
        let start = b.bottom_center();
        self.pos = start;
        self.base = start;
        self.edge = Edge::Bottom;
        self.velocity = Vec2::ZERO;
        self.gravity_dir = Edge::Bottom.gravity();
        self.grounded = true;
        self.jump_count = 0;
        self.jumping = false;
        self.arc = ArcJump::default();
    }

    /// Advance one tick. `jump_requested` is the edge-triggered input signal
    /// for this tick.
    pub fn tick(
        &mut self,
        jump_requested: bool,
        b: &Boundary,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        match self.tuning.jump_style {
            JumpStyle::Impulse => self.tick_impulse(jump_requested, b, dt, events),
            JumpStyle::Arc => self.tick_arc(jump_requested, b, dt, events),
        }
    }

    // --- impulse strategy ---

    fn tick_impulse(
        &mut self,
        jump_requested: bool,
        b: &Boundary,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        if jump_requested {
            self.try_impulse_jump(events);
        }
        self.apply_gravity(b, dt);

        self.pos += self.edge.tangent() * self.tuning.speed * dt;
        self.pos += self.velocity * dt;

        self.check_corner(b, events);
        self.resolve_grounded(b, events);
    }

    /// Jump triggers past the multi-jump limit are silently ignored.
    fn try_impulse_jump(&mut self, events: &mut Vec<GameEvent>) {
        if self.jump_count >= self.tuning.max_jump_count {
            return;
        }
        self.grounded = false;
        self.jumping = true;

        // Replace the gravity-aligned component with the fresh kick,
        // preserving tangential drift
        self.shed_fall_velocity();
        self.velocity += -self.gravity_dir * self.tuning.jump_power;

        self.jump_count += 1;
        events.push(GameEvent::RunnerJumped {
            jump_count: self.jump_count,
        });
    }

    /// Re-blend the gravity direction and rotate accumulated velocity into
    /// the new frame, then accelerate if airborne.
    fn apply_gravity(&mut self, b: &Boundary, dt: f32) {
        let new_dir = blended_gravity_dir(self.edge, self.pos, b, self.tuning.corner_blend_distance);
        if new_dir != self.gravity_dir {
            self.velocity = rotate_like(self.velocity, self.gravity_dir, new_dir);
            self.gravity_dir = new_dir;
        }

        if self.grounded {
            return;
        }
        self.velocity += self.gravity_dir * self.tuning.gravity_power * dt;
    }

    fn check_corner(&mut self, b: &Boundary, events: &mut Vec<GameEvent>) {
        if self.edge.crossed(self.pos, b) {
            let next = self.edge.next();
            self.edge = next;
            self.pos = next.clamped(self.pos, b, 0.0);
            if self.grounded {
                self.shed_fall_velocity();
            }
            events.push(GameEvent::RunnerEdgeChanged { edge: next });
        }
    }

    fn resolve_grounded(&mut self, b: &Boundary, events: &mut Vec<GameEvent>) {
        // Still rising: the launch tick starts exactly on the surface, so
        // skip the re-test until gravity wins
        if self.jumping && self.velocity.dot(self.gravity_dir) < 0.0 {
            return;
        }

        let was_airborne = !self.grounded;
        self.grounded = self.edge.height_above(self.pos, b) <= GROUND_EPSILON;
        if !self.grounded {
            return;
        }

        // Zero the gravity-aligned component, keep orthogonal drift, and
        // snap the clamp axis exactly to the bound
        self.shed_fall_velocity();
        self.pos = self.edge.clamped(self.pos, b, 0.0);

        self.jump_count = 0;
        self.jumping = false;
        if was_airborne {
            events.push(GameEvent::RunnerLanded);
        }
    }

    /// Remove the component of velocity parallel to the gravity direction.
    fn shed_fall_velocity(&mut self) {
        let fall = self.gravity_dir * self.velocity.dot(self.gravity_dir);
        self.velocity -= fall;
    }

    // --- arc strategy ---

    fn tick_arc(
        &mut self,
        jump_requested: bool,
        b: &Boundary,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        if jump_requested {
            self.try_arc_jump(events);
        }

        // The base rides the edge surface regardless of the jump offset
        self.base += self.edge.tangent() * self.tuning.speed * dt;
        self.base = self.edge.clamped(self.base, b, 0.0);

        if self.edge.crossed(self.base, b) {
            let next = self.edge.next();
            self.edge = next;
            self.base = next.clamped(self.base, b, 0.0);
            events.push(GameEvent::RunnerEdgeChanged { edge: next });
        }

        self.gravity_dir =
            blended_gravity_dir(self.edge, self.base, b, self.tuning.corner_blend_distance);

        self.advance_arc(dt, events);

        self.pos = self.base - self.gravity_dir * self.arc.offset;
        self.grounded = !self.arc.airborne;
        self.jump_count = self.arc.jumps_used;
    }

    fn try_arc_jump(&mut self, events: &mut Vec<GameEvent>) {
        if self.arc.jumps_used >= self.tuning.max_jump_count {
            return;
        }
        let ceiling = self.tuning.arc_jump_height * self.tuning.max_jump_count as f32;
        self.arc.target_offset = (self.arc.offset + self.tuning.arc_jump_height).min(ceiling);
        self.arc.start_offset = self.arc.offset;
        self.arc.elapsed = 0.0;
        self.arc.airborne = true;
        self.arc.jumps_used += 1;
        self.grounded = false;

        events.push(GameEvent::RunnerJumped {
            jump_count: self.arc.jumps_used,
        });
    }

    /// Two-phase linear easing: current offset up to the target over half the
    /// duration, back down to zero over the rest. Completion is the only
    /// point where the jump counter resets.
    fn advance_arc(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.arc.airborne {
            return;
        }
        self.arc.elapsed += dt;
        let half = self.tuning.arc_jump_duration * 0.5;

        if self.arc.elapsed < half {
            let t = self.arc.elapsed / half;
            self.arc.offset = lerp(self.arc.start_offset, self.arc.target_offset, t);
        } else if self.arc.elapsed < self.tuning.arc_jump_duration {
            let t = (self.arc.elapsed - half) / half;
            self.arc.offset = lerp(self.arc.target_offset, 0.0, t);
        } else {
            self.arc.offset = 0.0;
            self.arc.airborne = false;
            self.arc.jumps_used = 0;
            events.push(GameEvent::RunnerLanded);
        }
    }

    /// Arc-strategy height above the edge surface (0 while grounded).
    pub fn arc_offset(&self) -> f32 {
        self.arc.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn arena() -> Boundary {
        Boundary::new(-5.0, 5.0, -3.0, 3.0).unwrap()
    }

    fn runner(b: &Boundary) -> Runner {
        Runner::new(b, RunnerTuning::default())
    }

    fn arc_runner(b: &Boundary) -> Runner {
        let tuning = RunnerTuning {
            jump_style: JumpStyle::Arc,
            ..RunnerTuning::default()
        };
        Runner::new(b, tuning)
    }

    #[test]
    fn runner_left_edge_two_second_tick_crosses_one_corner() {
        let b = arena();
        let mut r = runner(&b);
        // Mid-Left-edge, traveling the player cycle (Left's tangent is -Y)
        r.pos = Vec2::new(-5.0, 0.0);
        r.base = r.pos;
        r.edge = Edge::Left;
        r.gravity_dir = Edge::Left.gravity();

        let mut events = Vec::new();
        r.tick(false, &b, 2.0, &mut events);

        // 2s at speed 3 overshoots the corner; the clamp pins the new edge's
        // axis, landing exactly on the bottom-left corner
        assert_eq!(r.edge, Edge::Bottom);
        assert_eq!(r.pos, Vec2::new(-5.0, -3.0));
        let changes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::RunnerEdgeChanged { .. }))
            .collect();
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn grounded_full_lap_visits_edges_in_clockwise_order() {
        let b = arena();
        let mut r = runner(&b);
        let mut events = Vec::new();
        let mut visited = vec![];

        // Perimeter is 2*(10+6)=32 units; at speed 3 a lap takes ~10.7s
        for _ in 0..(12.0 / SIM_DT) as u32 {
            r.tick(false, &b, SIM_DT, &mut events);
            assert!((r.gravity_dir.length() - 1.0).abs() < 1e-4);
            // Grounded clamp invariant
            assert!(r.edge.height_above(r.pos, &b).abs() <= 1e-3);
        }
        for e in &events {
            if let GameEvent::RunnerEdgeChanged { edge } = e {
                visited.push(*edge);
            }
        }
        assert!(visited.len() >= 4);
        assert_eq!(
            &visited[..4],
            &[Edge::Right, Edge::Top, Edge::Left, Edge::Bottom]
        );
    }

    #[test]
    fn impulse_jump_applies_at_most_max_count() {
        let b = arena();
        let mut r = runner(&b);
        let mut events = Vec::new();

        // Trigger on three consecutive ticks with no landing in between
        for _ in 0..3 {
            r.tick(true, &b, SIM_DT, &mut events);
        }

        let jumps = events
            .iter()
            .filter(|e| matches!(e, GameEvent::RunnerJumped { .. }))
            .count();
        assert_eq!(jumps, RunnerTuning::default().max_jump_count as usize);
    }

    #[test]
    fn impulse_jump_lands_snapped_with_fall_velocity_zeroed() {
        let b = arena();
        let mut r = runner(&b);
        let mut events = Vec::new();

        r.tick(true, &b, SIM_DT, &mut events);
        assert!(!r.grounded);

        // jump_power 6 / gravity 20: airborne for ~0.6s
        for _ in 0..(1.0 / SIM_DT) as u32 {
            r.tick(false, &b, SIM_DT, &mut events);
        }

        assert!(r.grounded);
        assert!(events.iter().any(|e| matches!(e, GameEvent::RunnerLanded)));
        assert_eq!(r.jump_count, 0);
        assert_eq!(r.pos.y, b.min_y);
        assert!(r.velocity.dot(r.gravity_dir).abs() < 1e-4);
    }

    #[test]
    fn airborne_velocity_rotates_with_gravity_through_corner() {
        let b = arena();
        let mut r = runner(&b);
        // Airborne just before the bottom-right corner, moving straight up
        r.pos = Vec2::new(4.85, -2.9);
        r.grounded = false;
        r.jumping = true;
        r.velocity = Vec2::new(0.0, 6.0);

        let speed_before = r.velocity.length();
        let mut events = Vec::new();
        r.tick(false, &b, SIM_DT, &mut events);

        // Gravity rotated toward +X, so "up" acquired a -X component; the
        // rotation itself preserves speed (gravity then adds its dt kick)
        assert!(r.velocity.x < 0.0);
        let gravity_kick = RunnerTuning::default().gravity_power * SIM_DT;
        assert!((r.velocity.length() - speed_before).abs() <= gravity_kick + 1e-4);
        assert!(r.velocity.dot(r.gravity_dir) < 0.0);
    }

    #[test]
    fn reset_clears_all_state() {
        let b = arena();
        let mut r = runner(&b);
        let mut events = Vec::new();
        r.tick(true, &b, SIM_DT, &mut events);
        r.tick(false, &b, SIM_DT, &mut events);
        assert!(!r.grounded);

        r.reset(&b);
        assert_eq!(r.pos, b.bottom_center());
        assert_eq!(r.edge, Edge::Bottom);
        assert_eq!(r.velocity, Vec2::ZERO);
        assert!(r.grounded);
        assert_eq!(r.jump_count, 0);
    }

    #[test]
    fn arc_jump_completes_back_to_zero_offset() {
        let b = arena();
        let mut r = arc_runner(&b);
        let mut events = Vec::new();

        r.tick(true, &b, SIM_DT, &mut events);
        assert!(!r.grounded);
        assert!(r.arc_offset() >= 0.0);

        // Run past the full duration
        let ticks = (RunnerTuning::default().arc_jump_duration / SIM_DT) as u32 + 2;
        for _ in 0..ticks {
            r.tick(false, &b, SIM_DT, &mut events);
        }

        assert_eq!(r.arc_offset(), 0.0);
        assert!(r.grounded);
        assert_eq!(r.jump_count, 0);
        assert!(events.iter().any(|e| matches!(e, GameEvent::RunnerLanded)));
        // Back on the surface exactly
        assert_eq!(r.pos.y, b.min_y);
    }

    #[test]
    fn arc_retrigger_stacks_target_up_to_ceiling() {
        let b = arena();
        let tuning = RunnerTuning {
            jump_style: JumpStyle::Arc,
            ..RunnerTuning::default()
        };
        let height = tuning.arc_jump_height;
        let ceiling = height * tuning.max_jump_count as f32;
        let mut r = Runner::new(&b, tuning);
        let mut events = Vec::new();

        r.tick(true, &b, SIM_DT, &mut events);
        // Ride up near the apex, then retrigger
        for _ in 0..30 {
            r.tick(false, &b, SIM_DT, &mut events);
        }
        let mid_offset = r.arc_offset();
        assert!(mid_offset > 0.0);
        r.tick(true, &b, SIM_DT, &mut events);

        assert!(r.arc.target_offset <= ceiling + 1e-6);
        assert!(r.arc.target_offset >= mid_offset);

        // A third trigger while both jumps are spent is ignored
        let jumps_before = events
            .iter()
            .filter(|e| matches!(e, GameEvent::RunnerJumped { .. }))
            .count();
        r.tick(true, &b, SIM_DT, &mut events);
        let jumps_after = events
            .iter()
            .filter(|e| matches!(e, GameEvent::RunnerJumped { .. }))
            .count();
        assert_eq!(jumps_before, jumps_after);
        assert_eq!(jumps_before, 2);
    }

    #[test]
    fn arc_position_is_base_plus_offset_against_gravity() {
        let b = arena();
        let mut r = arc_runner(&b);
        let mut events = Vec::new();

        r.tick(true, &b, SIM_DT, &mut events);
        for _ in 0..10 {
            r.tick(false, &b, SIM_DT, &mut events);
        }
        // On Bottom away from corners gravity is -Y, so height above the
        // surface equals the arc offset
        assert_eq!(r.edge, Edge::Bottom);
        assert!((r.pos.y - (b.min_y + r.arc_offset())).abs() < 1e-5);
    }
}
