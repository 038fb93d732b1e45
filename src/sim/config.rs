//! Simulation tuning
//!
//! Serde-deserializable so embedders can load tuning from JSON. Defaults
//! mirror the crate constants. Validation is fail-fast: a bad value is an
//! activation-time error, never a silently-defaulted zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Which jump strategy the runner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JumpStyle {
    /// Velocity kick against gravity, consumed by gravity over time
    #[default]
    Impulse,
    /// Fixed-duration up-then-down offset curve on top of the clamped base
    Arc,
}

/// When an orbiter's height inset is re-pinned to its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeightClamp {
    /// Re-pin the orbit-height axis every tick while moving
    #[default]
    EveryTick,
    /// Re-pin only when entering a new edge
    OnEdgeChange,
}

/// Runner (player actor) tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerTuning {
    /// Constant tangential speed along the current edge
    pub speed: f32,
    /// Impulse-strategy jump kick, units/s
    pub jump_power: f32,
    /// Free-fall acceleration toward the edge, units/s²
    pub gravity_power: f32,
    /// Jumps allowed before landing (multi-jump)
    pub max_jump_count: u32,
    /// Tangential distance before a corner over which gravity blends
    pub corner_blend_distance: f32,
    pub jump_style: JumpStyle,
    /// Arc-strategy apex height per jump
    pub arc_jump_height: f32,
    /// Arc-strategy total up-then-down duration, seconds
    pub arc_jump_duration: f32,
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            speed: consts::RUNNER_SPEED,
            jump_power: consts::RUNNER_JUMP_POWER,
            gravity_power: consts::RUNNER_GRAVITY_POWER,
            max_jump_count: consts::RUNNER_MAX_JUMP_COUNT,
            corner_blend_distance: consts::CORNER_BLEND_DISTANCE,
            jump_style: JumpStyle::Impulse,
            arc_jump_height: consts::ARC_JUMP_HEIGHT,
            arc_jump_duration: consts::ARC_JUMP_DURATION,
        }
    }
}

/// Orbiter (pooled actor) tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbiterTuning {
    /// Per-spawn speed drawn uniformly from [min_speed, max_speed]
    pub min_speed: f32,
    pub max_speed: f32,
    /// Edge changes per full lap of the perimeter
    pub edges_per_lap: u32,
    /// Laps before the orbiter deactivates back into the pool
    pub max_laps: u32,
    pub height_clamp: HeightClamp,
}

impl Default for OrbiterTuning {
    fn default() -> Self {
        Self {
            min_speed: consts::ORBITER_MIN_SPEED,
            max_speed: consts::ORBITER_MAX_SPEED,
            edges_per_lap: consts::EDGES_PER_LAP,
            max_laps: consts::ORBITER_MAX_LAPS,
            height_clamp: HeightClamp::EveryTick,
        }
    }
}

impl OrbiterTuning {
    /// Edge changes after which an orbiter deactivates.
    #[inline]
    pub fn edge_change_limit(&self) -> u32 {
        self.edges_per_lap * self.max_laps
    }
}

/// Spawner/pool tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolTuning {
    /// Pre-allocated orbiter slots
    pub size: usize,
    /// Delay between spawn attempts, drawn uniformly from this range.
    /// Equal endpoints give a fixed cadence.
    pub min_spawn_interval: f32,
    pub max_spawn_interval: f32,
    /// Orbit-height insets assigned round-robin-free (uniformly) at spawn so
    /// concurrent orbiters occupy distinct radii
    pub height_levels: Vec<f32>,
}

impl Default for PoolTuning {
    fn default() -> Self {
        Self {
            size: consts::POOL_SIZE,
            min_spawn_interval: consts::MIN_SPAWN_INTERVAL,
            max_spawn_interval: consts::MAX_SPAWN_INTERVAL,
            height_levels: vec![0.0, 0.2, 0.4],
        }
    }
}

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    pub runner: RunnerTuning,
    pub orbiter: OrbiterTuning,
    pub pool: PoolTuning,
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("runner speed must be positive (got {0})")]
    RunnerSpeed(f32),
    #[error("jump power must be positive (got {0})")]
    JumpPower(f32),
    #[error("gravity power must be positive (got {0})")]
    GravityPower(f32),
    #[error("arc jump height must be positive (got {0})")]
    ArcJumpHeight(f32),
    #[error("arc jump duration must be positive (got {0})")]
    ArcJumpDuration(f32),
    #[error("orbiter speed range must satisfy 0 < min <= max (got {min}..{max})")]
    OrbiterSpeedRange { min: f32, max: f32 },
    #[error("edges per lap must be at least 1")]
    EdgesPerLap,
    #[error("max laps must be at least 1")]
    MaxLaps,
    #[error("pool size must be at least 1")]
    PoolSize,
    #[error("spawn interval range must satisfy 0 < min <= max (got {min}..{max})")]
    SpawnInterval { min: f32, max: f32 },
    #[error("height levels must be non-empty, finite, and non-negative")]
    HeightLevels,
}

impl SimConfig {
    /// Check every tunable before the simulation is allowed to start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.runner;
        if !(r.speed > 0.0) {
            return Err(ConfigError::RunnerSpeed(r.speed));
        }
        if !(r.jump_power > 0.0) {
            return Err(ConfigError::JumpPower(r.jump_power));
        }
        if !(r.gravity_power > 0.0) {
            return Err(ConfigError::GravityPower(r.gravity_power));
        }
        if !(r.arc_jump_height > 0.0) {
            return Err(ConfigError::ArcJumpHeight(r.arc_jump_height));
        }
        if !(r.arc_jump_duration > 0.0) {
            return Err(ConfigError::ArcJumpDuration(r.arc_jump_duration));
        }

        let o = &self.orbiter;
        if !(o.min_speed > 0.0 && o.min_speed <= o.max_speed) {
            return Err(ConfigError::OrbiterSpeedRange {
                min: o.min_speed,
                max: o.max_speed,
            });
        }
        if o.edges_per_lap == 0 {
            return Err(ConfigError::EdgesPerLap);
        }
        if o.max_laps == 0 {
            return Err(ConfigError::MaxLaps);
        }

        let p = &self.pool;
        if p.size == 0 {
            return Err(ConfigError::PoolSize);
        }
        if !(p.min_spawn_interval > 0.0 && p.min_spawn_interval <= p.max_spawn_interval) {
            return Err(ConfigError::SpawnInterval {
                min: p.min_spawn_interval,
                max: p.max_spawn_interval,
            });
        }
        if p.height_levels.is_empty()
            || p.height_levels.iter().any(|h| !h.is_finite() || *h < 0.0)
        {
            return Err(ConfigError::HeightLevels);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_runner_values() {
        let mut cfg = SimConfig::default();
        cfg.runner.speed = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::RunnerSpeed(0.0)));

        let mut cfg = SimConfig::default();
        cfg.runner.gravity_power = -20.0;
        assert_eq!(cfg.validate(), Err(ConfigError::GravityPower(-20.0)));

        let mut cfg = SimConfig::default();
        cfg.runner.speed = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let mut cfg = SimConfig::default();
        cfg.orbiter.min_speed = 5.0;
        cfg.orbiter.max_speed = 2.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OrbiterSpeedRange { .. })
        ));

        let mut cfg = SimConfig::default();
        cfg.pool.min_spawn_interval = 4.0;
        cfg.pool.max_spawn_interval = 1.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::SpawnInterval { .. })));
    }

    #[test]
    fn test_rejects_zero_pool_and_laps() {
        let mut cfg = SimConfig::default();
        cfg.pool.size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::PoolSize));

        let mut cfg = SimConfig::default();
        cfg.orbiter.max_laps = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::MaxLaps));

        let mut cfg = SimConfig::default();
        cfg.orbiter.edges_per_lap = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EdgesPerLap));
    }

    #[test]
    fn test_rejects_bad_height_levels() {
        let mut cfg = SimConfig::default();
        cfg.pool.height_levels.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::HeightLevels));

        let mut cfg = SimConfig::default();
        cfg.pool.height_levels = vec![0.2, -0.1];
        assert_eq!(cfg.validate(), Err(ConfigError::HeightLevels));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let cfg = SimConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.validate(), Ok(()));
        assert_eq!(back.orbiter.edge_change_limit(), cfg.orbiter.edge_change_limit());
    }

    #[test]
    fn test_fixed_interval_is_allowed() {
        let mut cfg = SimConfig::default();
        cfg.pool.min_spawn_interval = 5.0;
        cfg.pool.max_spawn_interval = 5.0;
        assert_eq!(cfg.validate(), Ok(()));
    }
}
