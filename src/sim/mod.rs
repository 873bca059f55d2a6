//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time only advances through `tick`
//! - Seeded RNG only (editor scatter)
//! - Stable iteration order (insertion order per collection)

pub mod bezier;
pub mod collision;
pub mod editor;
pub mod state;
pub mod tick;

pub use bezier::{BezierPath, PingPong, cubic_bezier};
pub use collision::{
    circle_overlaps_circle, circle_overlaps_square, clamp_to_arena, point_inside_arena,
};
pub use editor::{PlacementError, ScatterCounts, click, scatter, try_place};
pub use state::{
    GameEvent, GamePhase, LoseReason, ObjectKind, PlaceMode, PlacedObject, Player, PowerUpKind,
    Target, World,
};
pub use tick::{Intent, TickInput, simulate, start_round, tick};
