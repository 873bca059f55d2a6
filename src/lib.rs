//! Arena Dash - A 2D arena dash arcade game
//!
//! Core modules:
//! - `sim`: Simulation (movement, collisions, pickups, phase machine)
//! - `input`: Device events and held-key tracking
//! - `game`: Controller that owns the world and drives ticks
//! - `renderer`: Draw-list surface for a rendering backend
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Window and arena layout constants
pub mod consts {
    /// Window dimensions (world units = pixels, y up)
    pub const W: f32 = 1000.0;
    pub const H: f32 = 700.0;
    /// HUD band along the top edge
    pub const TOP_H: f32 = 90.0;
    /// Palette band along the bottom edge
    pub const BOT_H: f32 = 120.0;

    /// Arena spans the full width between the two bands
    pub const GAME_Y0: f32 = BOT_H;
    pub const GAME_Y1: f32 = H - TOP_H;

    /// Player ship collision radius
    pub const PLAYER_RADIUS: f32 = 14.0;
    /// Target collision radius
    pub const TARGET_RADIUS: f32 = 16.0;
    /// Obstacles are squares of this half-width
    pub const OBSTACLE_RADIUS: f32 = 18.0;
    pub const COLLECTIBLE_RADIUS: f32 = 14.0;
    pub const POWERUP_RADIUS: f32 = 14.0;

    /// Nominal tick cadence (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Largest delta-time fed into a single tick
    pub const MAX_FRAME_DT: f32 = 0.25;
}

/// Saturating clamp
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Squared distance between two points (no sqrt on hot paths)
#[inline]
pub fn squared_distance(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

/// Heading of a direction vector in degrees, counter-clockwise from +x
#[inline]
pub fn heading_degrees(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}
