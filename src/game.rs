//! Game controller
//!
//! Owns the [`World`] and everything between it and the platform: held keys,
//! the clock poll that turns wall time into tick deltas, and event logging.

use glam::Vec2;

use crate::consts::{H, MAX_FRAME_DT};
use crate::input::{HeldKeys, InputEvent, Key, MouseButton};
use crate::renderer::{Canvas, draw_world};
use crate::sim::{self, GameEvent, GamePhase, Intent, TickInput, World};
use crate::squared_distance;
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game {
    world: World,
    keys: HeldKeys,
    /// Clock reading from the previous frame (None before the first frame)
    last_ms: Option<u64>,
    /// Steer automatically instead of reading held keys
    autopilot: bool,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            world: World::new(tuning),
            keys: HeldKeys::default(),
            last_ms: None,
            autopilot: false,
        }
    }

    /// Read-only view for rendering and HUD
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for setup (layouts, scripted scenarios)
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Apply one device event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Restart) => sim::start_round(&mut self.world),
            InputEvent::KeyDown(key) => {
                self.keys.set(key, true);
            }
            InputEvent::KeyUp(key) => {
                self.keys.set(key, false);
            }
            InputEvent::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                // Window y grows downward; world y grows upward
                let pos = Vec2::new(x, H - y);
                if let Err(e) = sim::click(&mut self.world, pos) {
                    log::debug!("Click at ({x:.0}, {y:.0}) ignored: {e}");
                }
            }
            InputEvent::Click { .. } => {}
        }
    }

    /// Intent the next tick will use
    pub fn intent(&self) -> Intent {
        if self.autopilot {
            autopilot(&self.world)
        } else {
            self.keys.intent()
        }
    }

    /// Poll the clock and run one tick; returns the delta-time used
    ///
    /// `now_ms` is a monotonically increasing millisecond reading. The first
    /// call only primes the clock and ticks with a zero delta.
    pub fn frame(&mut self, now_ms: u64) -> f32 {
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let mut dt = now_ms.saturating_sub(last) as f32 / 1000.0;
        if dt > MAX_FRAME_DT {
            log::warn!("Frame stall of {:.3}s clamped to {:.3}s", dt, MAX_FRAME_DT);
            dt = MAX_FRAME_DT;
        }

        let input = TickInput {
            intent: self.intent(),
        };
        sim::tick(&mut self.world, &input, dt);

        for event in self.world.drain_events() {
            log_event(&event);
        }
        dt
    }

    /// Draw the current world into `canvas`
    pub fn render(&self, canvas: &mut impl Canvas) {
        draw_world(&self.world, canvas);
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PhaseChanged { to: GamePhase::Win, .. } => log::info!("Target captured!"),
        GameEvent::Lost { reason } => log::info!("Round lost: {:?}", reason),
        GameEvent::Collected { score } => log::debug!("Collected, score {}", score),
        GameEvent::Blocked { damaged: true, lives } => log::debug!("Damaged, {} lives", lives),
        _ => log::trace!("{:?}", event),
    }
}

/// Demo steering: grab the nearest collectible, then chase the target
///
/// No pathing around obstacles.
pub fn autopilot(world: &World) -> Intent {
    const DEAD_ZONE: f32 = 4.0;

    let pos = world.player.pos;
    let goal = world
        .collectibles
        .iter()
        .min_by(|a, b| {
            squared_distance(pos, a.pos)
                .partial_cmp(&squared_distance(pos, b.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| c.pos)
        .unwrap_or_else(|| world.target.position());

    let d = goal - pos;
    Intent {
        up: d.y > DEAD_ZONE,
        down: d.y < -DEAD_ZONE,
        left: d.x < -DEAD_ZONE,
        right: d.x > DEAD_ZONE,
    }
}
