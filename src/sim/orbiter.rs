//! Pooled orbiting actor (the fireball)
//!
//! Orbiters run the edge cycle in reverse (Left -> Top -> Right -> Bottom) at
//! a per-spawn randomized speed, offset from the boundary by a per-spawn
//! orbit height so concurrent orbiters occupy distinct radii. After a
//! configured number of edge changes they deactivate back into the pool;
//! that counter is the sole deactivation trigger.

use glam::Vec2;

use super::boundary::{Boundary, Edge};
use super::config::{HeightClamp, OrbiterTuning};
use super::state::GameEvent;

/// Tolerance for classifying which edge a spawn position sits on
const SPAWN_EDGE_TOL: f32 = 0.05;

/// One pool slot. Constructed once, inactive; `init` reactivates it with
/// fresh parameters. An inactive orbiter holds stale state and is never
/// ticked.
#[derive(Debug, Clone)]
pub struct Orbiter {
    pub id: u32,
    pub pos: Vec2,
    pub edge: Edge,
    /// Tangential speed, fixed per spawn
    pub speed: f32,
    /// Orbit-height inset from the boundary surface
    pub height: f32,
    /// Monotone corner-crossing counter for the current activation
    pub edge_changes: u32,
    pub active: bool,
}

impl Orbiter {
    /// Pre-built inactive slot.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            edge: Edge::Left,
            speed: 0.0,
            height: 0.0,
            edge_changes: 0,
            active: false,
        }
    }

    /// (Re)activate with fresh parameters. Every counter and derived field is
    /// reset here; nothing may survive from a previous activation.
    pub fn init(&mut self, spawn: Vec2, speed: f32, height: f32, b: &Boundary) {
        self.speed = speed;
        self.height = height;
        self.edge_changes = 0;
        self.edge = Edge::detect(spawn, b, SPAWN_EDGE_TOL);
        self.pos = self.edge.clamped(spawn, b, height);
        self.active = true;
    }

    pub fn tick(
        &mut self,
        b: &Boundary,
        dt: f32,
        tuning: &OrbiterTuning,
        events: &mut Vec<GameEvent>,
    ) {
        if !self.active {
            return;
        }

        self.pos += self.edge.reverse_tangent() * self.speed * dt;
        if tuning.height_clamp == HeightClamp::EveryTick {
            self.pos = self.edge.clamped(self.pos, b, self.height);
        }

        self.check_corner(b, tuning, events);
    }

    fn check_corner(&mut self, b: &Boundary, tuning: &OrbiterTuning, events: &mut Vec<GameEvent>) {
        if !self.edge.crossed_reverse(self.pos, b) {
            return;
        }

        self.edge_changes += 1;
        if self.edge_changes >= tuning.edge_change_limit() {
            self.active = false;
            events.push(GameEvent::OrbiterExpired { id: self.id });
            return;
        }

        self.edge = self.edge.next_reverse();
        self.pos = self.edge.clamped(self.pos, b, self.height);
    }
}
