//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single-threaded, frame-stepped actor updates
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod config;
pub mod gravity;
pub mod orbiter;
pub mod pool;
pub mod runner;
pub mod state;
pub mod tick;

pub use boundary::{Boundary, BoundaryError, Edge};
pub use collision::circles_overlap;
pub use config::{
    ConfigError, HeightClamp, JumpStyle, OrbiterTuning, PoolTuning, RunnerTuning, SimConfig,
};
pub use gravity::blended_gravity_dir;
pub use orbiter::Orbiter;
pub use pool::OrbiterPool;
pub use runner::Runner;
pub use state::{GameEvent, SimState};
pub use tick::{TickInput, tick};
