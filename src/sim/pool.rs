//! Fixed-capacity orbiter pool and spawn scheduling
//!
//! All orbiters are pre-built at construction and recycled. The spawner is an
//! explicit countdown timer advanced by `tick(dt)`; "waiting" just means not
//! yet past the target duration. Acquisition is a linear scan for the first
//! inactive slot; saturation skips the spawn and the timer re-arms as usual.

use rand::Rng;
use rand_pcg::Pcg32;

use super::boundary::Boundary;
use super::config::{OrbiterTuning, PoolTuning};
use super::orbiter::Orbiter;
use super::state::GameEvent;

#[derive(Debug, Clone)]
struct SpawnTimer {
    elapsed: f32,
    target: f32,
}

/// Pool plus its single spawner. The linear-scan acquire assumes exactly one
/// spawner per pool; all updates happen on the one simulation thread.
#[derive(Debug, Clone)]
pub struct OrbiterPool {
    slots: Vec<Orbiter>,
    timer: SpawnTimer,
    tuning: PoolTuning,
    orbiter_tuning: OrbiterTuning,
}

impl OrbiterPool {
    pub fn new(tuning: PoolTuning, orbiter_tuning: OrbiterTuning, rng: &mut Pcg32) -> Self {
        let slots = (0..tuning.size).map(|i| Orbiter::new(i as u32)).collect();
        let timer = SpawnTimer {
            elapsed: 0.0,
            target: draw_interval(&tuning, rng),
        };
        Self {
            slots,
            timer,
            tuning,
            orbiter_tuning,
        }
    }

    /// Advance the spawn timer and every active orbiter.
    pub fn tick(
        &mut self,
        b: &Boundary,
        dt: f32,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) {
        self.timer.elapsed += dt;
        while self.timer.elapsed >= self.timer.target {
            self.timer.elapsed -= self.timer.target;
            self.try_spawn(b, rng, events);
            self.timer.target = draw_interval(&self.tuning, rng);
        }

        for orbiter in &mut self.slots {
            orbiter.tick(b, dt, &self.orbiter_tuning, events);
        }
    }

    /// Spawn one orbiter at the left-edge spawn point with freshly
    /// randomized speed and orbit height. A saturated pool drops the attempt.
    fn try_spawn(&mut self, b: &Boundary, rng: &mut Pcg32, events: &mut Vec<GameEvent>) {
        let Some(slot) = self.slots.iter_mut().find(|o| !o.active) else {
            log::debug!("orbiter pool saturated ({} slots), spawn skipped", self.tuning.size);
            return;
        };

        let o = &self.orbiter_tuning;
        let speed = if o.max_speed > o.min_speed {
            rng.random_range(o.min_speed..o.max_speed)
        } else {
            o.min_speed
        };
        let levels = &self.tuning.height_levels;
        let height = levels[rng.random_range(0..levels.len())];

        slot.init(b.left_center(), speed, height, b);
        log::debug!(
            "spawned orbiter {} (speed {:.2}, height {:.2})",
            slot.id,
            speed,
            height
        );
        events.push(GameEvent::OrbiterSpawned {
            id: slot.id,
            speed,
            height,
        });
    }

    pub fn active(&self) -> impl Iterator<Item = &Orbiter> {
        self.slots.iter().filter(|o| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Orbiter] {
        &mut self.slots
    }
}

/// Uniform draw from the configured interval range; equal endpoints give a
/// fixed cadence.
fn draw_interval(tuning: &PoolTuning, rng: &mut Pcg32) -> f32 {
    if tuning.max_spawn_interval > tuning.min_spawn_interval {
        rng.random_range(tuning.min_spawn_interval..tuning.max_spawn_interval)
    } else {
        tuning.min_spawn_interval
    }
}
