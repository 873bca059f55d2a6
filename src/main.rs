//! Arena Dash entry point
//!
//! Native builds run a headless demo: a seeded random layout, one round on
//! autopilot, stepped at the nominal tick cadence, with each frame recorded
//! into an instance batch exactly as a rendering backend would receive it.
//!
//! Usage: `arena-dash [tuning.json] [seed]`

use std::path::PathBuf;

use arena_dash::consts::TICK_MS;
use arena_dash::input::{InputEvent, Key};
use arena_dash::renderer::InstanceBatch;
use arena_dash::sim::{GamePhase, ScatterCounts, scatter};
use arena_dash::{Game, Tuning};

/// Upper bound on simulated frames (the round countdown ends it well before)
const MAX_FRAMES: u64 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Arena Dash (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning_path = args.next().map(PathBuf::from);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());

    let mut game = Game::new(tuning);
    let placed = scatter(game.world_mut(), seed, ScatterCounts::default());
    log::info!("Layout seed {}: {} objects", seed, placed);

    game.set_autopilot(true);
    game.handle(InputEvent::KeyDown(Key::Restart));

    let mut batch = InstanceBatch::default();
    let mut now_ms = 0;
    let mut frames = 0;
    while game.world().phase == GamePhase::Play && frames < MAX_FRAMES {
        game.frame(now_ms);
        batch.clear();
        game.render(&mut batch);
        now_ms += TICK_MS;
        frames += 1;
    }

    let world = game.world();
    log::info!(
        "Finished after {} frames ({:.1}s): {:?}, score {}, lives {}, {} instances in last frame",
        frames,
        world.time,
        world.phase,
        world.player.score,
        world.player.lives,
        batch.instances().len()
    );
    println!(
        "{:?} - score {} - lives {} - {}s left",
        world.phase, world.player.score, world.player.lives, world.time_left
    );
}
