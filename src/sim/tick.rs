//! Per-frame simulation tick
//!
//! Advances the clock, sweeps the target, and while a round is being played
//! runs the countdown, movement, pickups and win/lose checks.

use glam::Vec2;

use super::collision::{circle_overlaps_circle, circle_overlaps_square, clamp_to_arena};
use super::state::{
    GameEvent, GamePhase, LoseReason, ObjectKind, PlacedObject, Player, PowerUpKind, Target, World,
};
use crate::tuning::Tuning;
use crate::heading_degrees;

/// Directional intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intent {
    /// Velocity for this intent; opposite directions cancel
    pub fn velocity(self, speed: f32) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y += speed;
        }
        if self.down {
            v.y -= speed;
        }
        if self.left {
            v.x -= speed;
        }
        if self.right {
            v.x += speed;
        }
        v
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub intent: Intent,
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    world.time += dt;

    // Target animates in every phase so it is visible while editing
    world
        .target
        .motion
        .advance(world.tuning.target_speed, dt);

    if world.phase == GamePhase::Play {
        simulate(world, input.intent, dt);
    }
}

/// One step of round gameplay; callers only invoke this while playing
pub fn simulate(world: &mut World, intent: Intent, dt: f32) {
    let now = world.time;

    // Countdown
    let elapsed = (now - world.round_start).max(0.0).floor() as u32;
    world.time_left = world.tuning.round_time_secs.saturating_sub(elapsed);
    if world.time_left == 0 {
        lose(world, LoseReason::TimeUp);
        return;
    }

    // Power-up expiry (speed is checked implicitly below)
    if now > world.player.shield_until {
        world.player.shielded = false;
    }

    // Intent -> velocity
    let speed = if world.player.boosted(now) {
        world.tuning.boost_speed
    } else {
        world.tuning.player_speed
    };
    let vel = intent.velocity(speed);
    if vel != Vec2::ZERO {
        world.player.angle_deg = heading_degrees(vel);
    }

    // A hit that costs the last life still lets this tick's pickups and
    // capture resolve from the final position; a capture wins outright
    let out_of_lives = try_move(world, vel * dt);
    collect_pickups(world);

    if circle_overlaps_circle(
        world.player.pos,
        world.player.radius,
        world.target.position(),
        world.target.radius,
    ) {
        world.set_phase(GamePhase::Win);
    } else if out_of_lives {
        lose(world, LoseReason::OutOfLives);
    }
}

/// Move the ship, or hold it in place if the move would clip an obstacle
///
/// Returns true once the ship has no lives left.
fn try_move(world: &mut World, delta: Vec2) -> bool {
    let player = &world.player;
    let candidate = clamp_to_arena(player.pos + delta, player.radius);

    let blocked = world
        .obstacles
        .iter()
        .any(|o| circle_overlaps_square(candidate, player.radius, o.pos, o.radius));

    if !blocked {
        world.player.pos = candidate;
        return false;
    }

    let now = world.time;
    let damaged = !world.player.shielded && now >= world.player.next_hit_at;
    if damaged {
        world.player.lives = world.player.lives.saturating_sub(1);
        world.player.next_hit_at = now + world.tuning.hit_cooldown;
        log::debug!("Hit obstacle, {} lives left", world.player.lives);
    }
    world.push_event(GameEvent::Blocked {
        damaged,
        lives: world.player.lives,
    });

    world.player.lives == 0
}

/// Consume collectibles and power-ups the ship is touching
fn collect_pickups(world: &mut World) {
    let now = world.time;
    let (pos, radius) = (world.player.pos, world.player.radius);
    let touching = |o: &PlacedObject| circle_overlaps_circle(pos, radius, o.pos, o.radius);

    let before = world.collectibles.len();
    world.collectibles.retain(|c| !touching(c));
    let picked = (before - world.collectibles.len()) as u64;
    for _ in 0..picked {
        world.player.score += world.tuning.collectible_bonus;
        world.push_event(GameEvent::Collected {
            score: world.player.score,
        });
    }

    let mut taken = Vec::new();
    world.powerups.retain(|p| {
        let hit = touching(p);
        if hit {
            taken.push(p.kind);
        }
        !hit
    });
    for kind in taken {
        if let ObjectKind::PowerUp(kind) = kind {
            apply_powerup(&mut world.player, kind, now, &world.tuning);
            world.push_event(GameEvent::PoweredUp { kind });
        }
    }
}

fn apply_powerup(player: &mut Player, kind: PowerUpKind, now: f32, tuning: &Tuning) {
    match kind {
        PowerUpKind::Speed => {
            player.speed_until = now + tuning.powerup_duration;
        }
        PowerUpKind::Shield => {
            player.shielded = true;
            player.shield_until = now + tuning.shield_duration;
        }
    }
    log::debug!("Power-up {:?}", kind);
}

fn lose(world: &mut World, reason: LoseReason) {
    if world.phase == GamePhase::Play {
        world.push_event(GameEvent::Lost { reason });
        world.set_phase(GamePhase::Lose);
    }
}

/// Begin (or restart) a round from any phase
///
/// Resets the ship, the target and the countdown. Placed objects stay where
/// they are.
pub fn start_round(world: &mut World) {
    world.player = Player::new(world.tuning.max_lives);
    world.target = Target::default();
    world.round_start = world.time;
    world.time_left = world.tuning.round_time_secs;
    world.push_event(GameEvent::RoundStarted);
    world.set_phase(GamePhase::Play);
    log::info!(
        "Round started: {} obstacles, {} collectibles, {} power-ups",
        world.obstacles.len(),
        world.collectibles.len(),
        world.powerups.len()
    );
}
