//! Fixed timestep simulation tick
//!
//! Advances the whole simulation deterministically. Within one tick the
//! runner updates first, then the pool; each actor's edge detection runs
//! inside its own update, immediately after the movement that could have
//! crossed a corner, so nothing ever acts on stale clamp state and no actor
//! observes another mid-update.

use super::collision::circles_overlap;
use super::state::{GameEvent, SimState};
use crate::consts::{ORBITER_RADIUS, RUNNER_RADIUS};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested this tick (edge-triggered by the input collaborator)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the simulation by one fixed timestep.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if input.pause {
        state.paused = !state.paused;
    }
    if state.paused {
        return;
    }

    state.time_ticks += 1;

    let SimState {
        rng,
        boundary,
        runner,
        pool,
        events,
        touching,
        ..
    } = state;

    runner.tick(input.jump, boundary, dt, events);
    pool.tick(boundary, dt, rng, events);

    // Overlap notifications, edge-triggered per contact: an orbiter that
    // stays in contact emits once, and emits again on a fresh contact
    let mut still_touching = Vec::new();
    for orbiter in pool.active() {
        if circles_overlap(runner.pos, RUNNER_RADIUS, orbiter.pos, ORBITER_RADIUS) {
            if !touching.contains(&orbiter.id) {
                events.push(GameEvent::Collision {
                    orbiter_id: orbiter.id,
                });
            }
            still_touching.push(orbiter.id);
        }
    }
    *touching = still_touching;
}
