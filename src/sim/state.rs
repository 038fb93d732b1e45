//! Aggregate simulation state and outbound events

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boundary::{Boundary, Edge};
use super::config::{ConfigError, SimConfig};
use super::pool::OrbiterPool;
use super::runner::Runner;

/// Outbound notifications, accumulated during a tick and drained by the
/// embedder. Downstream reactions (damage, scoring, animation triggers) are
/// external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The runner crossed a corner onto a new edge
    RunnerEdgeChanged { edge: Edge },
    RunnerJumped { jump_count: u32 },
    RunnerLanded,
    OrbiterSpawned { id: u32, speed: f32, height: f32 },
    /// Lap limit reached; the slot returned to the pool
    OrbiterExpired { id: u32 },
    /// The runner overlapped an active orbiter (edge-triggered per contact)
    Collision { orbiter_id: u32 },
}

/// Complete simulation state. Deterministic: construction takes a seed, and
/// identical seeds plus identical input scripts replay identically.
///
/// Nothing here persists across process runs (the game has no saves), so the
/// state itself is not serializable; only config and events are.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The one RNG; every random draw in the simulation goes through it
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paused: bool,
    pub boundary: Boundary,
    pub runner: Runner,
    pub pool: OrbiterPool,
    /// Events accumulated since the last drain
    pub events: Vec<GameEvent>,
    /// Orbiter ids currently in contact with the runner, so each contact
    /// emits exactly one collision event
    pub(crate) touching: Vec<u32>,
}

impl SimState {
    /// Build a fresh simulation. The configuration is validated here -
    /// activation fails loudly rather than running on degenerate numbers.
    pub fn new(seed: u64, boundary: Boundary, config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let runner = Runner::new(&boundary, config.runner.clone());
        let pool = OrbiterPool::new(config.pool.clone(), config.orbiter.clone(), &mut rng);

        Ok(Self {
            seed,
            rng,
            time_ticks: 0,
            paused: false,
            boundary,
            runner,
            pool,
            events: Vec::new(),
            touching: Vec::new(),
        })
    }

    /// Take all events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
