//! Edit-phase object placement
//!
//! A new object must keep `radius + place_min_dist` clearance from every
//! existing object, the ship and the target's current position. Only the
//! candidate's radius is used; the other entity's size is ignored.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::collision::point_inside_arena;
use super::state::{GameEvent, GamePhase, ObjectKind, PlaceMode, PlacedObject, PowerUpKind, World};
use crate::consts::{BOT_H, GAME_Y0, GAME_Y1, W};
use crate::squared_distance;

/// Reasons a placement request is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("objects can only be placed while editing")]
    WrongPhase,
    #[error("position is outside the arena")]
    OutsideArena,
    #[error("too close to an existing entity")]
    Overlapping,
}

/// Palette icons along the bottom band: (centre x, mode)
pub const PALETTE: [(f32, PlaceMode); 4] = [
    (80.0, PlaceMode::Obstacle),
    (240.0, PlaceMode::Collectible),
    (400.0, PlaceMode::SpeedPowerUp),
    (560.0, PlaceMode::ShieldPowerUp),
];
/// Palette icons sit at the vertical centre of the bottom band
pub const PALETTE_Y: f32 = BOT_H * 0.5;
/// Click radius around each palette icon
pub const PALETTE_HIT_RADIUS: f32 = 35.0;

/// Whether a candidate at `pos` with `radius` is too close to anything
pub fn overlaps_any(world: &World, pos: Vec2, radius: f32) -> bool {
    let min_dist = radius + world.tuning.place_min_dist;
    let r2 = min_dist * min_dist;

    world.placed().any(|o| squared_distance(pos, o.pos) < r2)
        || squared_distance(pos, world.player.pos) < r2
        || squared_distance(pos, world.target.position()) < r2
}

/// Insert an object of `kind` at `pos` if it has clearance
///
/// Returns the index of the new object within its collection.
pub fn try_place(world: &mut World, kind: ObjectKind, pos: Vec2) -> Result<usize, PlacementError> {
    let candidate = PlacedObject::new(kind, pos);
    if overlaps_any(world, candidate.pos, candidate.radius) {
        log::debug!("Rejected {:?} at ({:.0}, {:.0})", kind, pos.x, pos.y);
        return Err(PlacementError::Overlapping);
    }

    let collection = world.collection_mut(kind);
    collection.push(candidate);
    let index = collection.len() - 1;
    world.push_event(GameEvent::Placed { kind, pos });
    Ok(index)
}

/// Palette entry under `pos`, or `PlaceMode::None` when between icons
pub fn palette_hit(pos: Vec2) -> PlaceMode {
    let hit_r2 = PALETTE_HIT_RADIUS * PALETTE_HIT_RADIUS;
    PALETTE
        .iter()
        .find(|(x, _)| squared_distance(pos, Vec2::new(*x, PALETTE_Y)) < hit_r2)
        .map(|&(_, mode)| mode)
        .unwrap_or(PlaceMode::None)
}

/// Route a left click in world coordinates
///
/// The bottom band selects a palette entry in any phase. Inside the arena the
/// selected kind is placed, but only during the edit phase.
pub fn click(world: &mut World, pos: Vec2) -> Result<Option<usize>, PlacementError> {
    if pos.y <= BOT_H {
        world.place_mode = palette_hit(pos);
        log::debug!("Palette: {}", world.place_mode.label());
        return Ok(None);
    }

    if world.phase != GamePhase::Edit {
        return Err(PlacementError::WrongPhase);
    }
    if !point_inside_arena(pos) {
        return Err(PlacementError::OutsideArena);
    }

    match world.place_mode.kind() {
        Some(kind) => try_place(world, kind, pos).map(Some),
        None => Ok(None),
    }
}

/// How many of each object a random layout should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterCounts {
    pub obstacles: usize,
    pub collectibles: usize,
    pub speed_powerups: usize,
    pub shield_powerups: usize,
}

impl Default for ScatterCounts {
    fn default() -> Self {
        Self {
            obstacles: 8,
            collectibles: 6,
            speed_powerups: 1,
            shield_powerups: 1,
        }
    }
}

/// Attempts per object before giving up on a crowded arena
const SCATTER_ATTEMPTS: usize = 64;

/// Fill the arena with a seeded random layout
///
/// Goes through the same clearance rules as manual placement. Returns the
/// number of objects actually placed.
pub fn scatter(world: &mut World, seed: u64, counts: ScatterCounts) -> usize {
    let mut rng = Pcg32::seed_from_u64(seed);
    let plan = [
        (ObjectKind::Obstacle, counts.obstacles),
        (ObjectKind::Collectible, counts.collectibles),
        (ObjectKind::PowerUp(PowerUpKind::Speed), counts.speed_powerups),
        (ObjectKind::PowerUp(PowerUpKind::Shield), counts.shield_powerups),
    ];

    let mut placed = 0;
    for (kind, count) in plan {
        let margin = kind.radius();
        for _ in 0..count {
            for _ in 0..SCATTER_ATTEMPTS {
                let pos = Vec2::new(
                    rng.random_range(margin..W - margin),
                    rng.random_range(GAME_Y0 + margin..GAME_Y1 - margin),
                );
                if try_place(world, kind, pos).is_ok() {
                    placed += 1;
                    break;
                }
            }
        }
    }

    log::info!("Scattered {} objects (seed {})", placed, seed);
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_in_open_space() {
        let mut world = World::default();
        let idx = try_place(&mut world, ObjectKind::Obstacle, Vec2::new(300.0, 350.0)).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.obstacles[0].radius, 18.0);
    }

    #[test]
    fn test_rejects_near_existing_object() {
        let mut world = World::default();
        try_place(&mut world, ObjectKind::Collectible, Vec2::new(300.0, 350.0)).unwrap();
        // Collectible radius 14 + clearance 26 = 40
        let err = try_place(&mut world, ObjectKind::Collectible, Vec2::new(339.0, 350.0));
        assert_eq!(err, Err(PlacementError::Overlapping));
        assert!(try_place(&mut world, ObjectKind::Collectible, Vec2::new(340.0, 350.0)).is_ok());
        assert_eq!(world.collectibles.len(), 2);
    }

    #[test]
    fn test_clearance_uses_candidate_radius_only() {
        let mut world = World::default();
        try_place(&mut world, ObjectKind::Obstacle, Vec2::new(300.0, 350.0)).unwrap();
        // A power-up needs 14 + 26 = 40 regardless of the obstacle's 18
        assert!(
            try_place(&mut world, ObjectKind::PowerUp(PowerUpKind::Speed), Vec2::new(340.0, 350.0))
                .is_ok()
        );
        // But an obstacle candidate needs 18 + 26 = 44
        assert_eq!(
            try_place(&mut world, ObjectKind::Obstacle, Vec2::new(300.0, 393.0)),
            Err(PlacementError::Overlapping)
        );
    }

    #[test]
    fn test_rejects_on_player_and_target() {
        let mut world = World::default();
        let player = world.player.pos;
        let target = world.target.position();
        assert_eq!(
            try_place(&mut world, ObjectKind::Collectible, player + Vec2::new(10.0, 10.0)),
            Err(PlacementError::Overlapping)
        );
        assert_eq!(
            try_place(&mut world, ObjectKind::Collectible, target + Vec2::new(0.0, -20.0)),
            Err(PlacementError::Overlapping)
        );
        assert!(world.placed().next().is_none());
    }

    #[test]
    fn test_palette_selection() {
        let mut world = World::default();
        click(&mut world, Vec2::new(240.0, 60.0)).unwrap();
        assert_eq!(world.place_mode, PlaceMode::Collectible);
        click(&mut world, Vec2::new(560.0, 40.0)).unwrap();
        assert_eq!(world.place_mode, PlaceMode::ShieldPowerUp);
        click(&mut world, Vec2::new(900.0, 60.0)).unwrap();
        assert_eq!(world.place_mode, PlaceMode::None);
    }

    #[test]
    fn test_click_places_selected_kind() {
        let mut world = World::default();
        click(&mut world, Vec2::new(400.0, 60.0)).unwrap();
        let placed = click(&mut world, Vec2::new(700.0, 300.0)).unwrap();
        assert_eq!(placed, Some(0));
        assert_eq!(world.powerups[0].kind, ObjectKind::PowerUp(PowerUpKind::Speed));
    }

    #[test]
    fn test_click_with_no_mode_places_nothing() {
        let mut world = World::default();
        assert_eq!(click(&mut world, Vec2::new(700.0, 300.0)), Ok(None));
        assert!(world.placed().next().is_none());
    }

    #[test]
    fn test_click_outside_edit_phase() {
        let mut world = World::default();
        world.place_mode = PlaceMode::Obstacle;
        world.phase = GamePhase::Play;
        assert_eq!(
            click(&mut world, Vec2::new(700.0, 300.0)),
            Err(PlacementError::WrongPhase)
        );
        // Palette still responds while playing
        click(&mut world, Vec2::new(240.0, 60.0)).unwrap();
        assert_eq!(world.place_mode, PlaceMode::Collectible);
        assert!(world.obstacles.is_empty());
    }

    #[test]
    fn test_click_in_top_band_is_ignored() {
        let mut world = World::default();
        world.place_mode = PlaceMode::Obstacle;
        assert_eq!(
            click(&mut world, Vec2::new(500.0, GAME_Y1 + 10.0)),
            Err(PlacementError::OutsideArena)
        );
        assert!(world.obstacles.is_empty());
    }

    #[test]
    fn test_scatter_is_deterministic_and_clear() {
        let mut a = World::default();
        let mut b = World::default();
        let placed_a = scatter(&mut a, 42, ScatterCounts::default());
        let placed_b = scatter(&mut b, 42, ScatterCounts::default());
        assert_eq!(placed_a, placed_b);
        assert_eq!(a.obstacles, b.obstacles);
        assert!(placed_a > 0);

        for o in a.placed() {
            assert!(point_inside_arena(o.pos));
            assert!(squared_distance(o.pos, a.player.pos) >= (o.radius + 26.0).powi(2));
        }
    }
}
