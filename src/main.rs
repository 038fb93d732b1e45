//! Rim Runner entry point
//!
//! Headless demo driver: builds a boundary and the default config, runs the
//! deterministic simulation for a few seconds of game time with a scripted
//! jump cadence, and prints drained events as JSON lines.

use rim_runner::consts::{DEMO_HALF_HEIGHT, DEMO_HALF_WIDTH, SIM_DT};
use rim_runner::sim::{Boundary, SimConfig, SimState, TickInput, tick};

/// Simulated seconds the demo runs for
const DEMO_SECONDS: f32 = 30.0;
/// Scripted jump cadence in seconds
const JUMP_PERIOD: f32 = 2.5;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let boundary = match Boundary::new(
        -DEMO_HALF_WIDTH,
        DEMO_HALF_WIDTH,
        -DEMO_HALF_HEIGHT,
        DEMO_HALF_HEIGHT,
    ) {
        Ok(b) => b,
        Err(err) => {
            log::error!("demo boundary rejected: {err}");
            std::process::exit(1);
        }
    };

    let config = SimConfig::default();
    let mut state = match SimState::new(seed, boundary, &config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "rim-runner demo: seed {seed}, {}x{} arena, pool of {}",
        boundary.width(),
        boundary.height(),
        state.pool.capacity()
    );

    let total_ticks = (DEMO_SECONDS / SIM_DT) as u64;
    let jump_every = (JUMP_PERIOD / SIM_DT) as u64;

    for i in 0..total_ticks {
        let input = TickInput {
            jump: i > 0 && i % jump_every == 0,
            pause: false,
        };
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match serde_json::to_string(&event) {
                Ok(json) => println!("{json}"),
                Err(err) => log::warn!("unserializable event: {err}"),
            }
        }
    }

    log::info!(
        "done: {} ticks simulated, {} orbiters still active",
        state.time_ticks,
        state.pool.active_count()
    );
}
