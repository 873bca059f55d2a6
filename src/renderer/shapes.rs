//! Frame description: what to draw, where
//!
//! `draw_world` walks a read-only [`World`] and emits shapes back to front:
//! arena, HUD bands, placed objects, target, ship, then the end-screen overlay.

use glam::Vec2;

use super::instance::colors;
use crate::consts::*;
use crate::sim::editor::{PALETTE, PALETTE_Y};
use crate::sim::{GamePhase, ObjectKind, PlaceMode, PowerUpKind, World};

/// Primitive shapes a backend must know how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ShapeKind {
    /// Axis-aligned rectangle; `size` holds half extents
    Panel = 0,
    Ship = 1,
    ShieldRing = 2,
    Obstacle = 3,
    Collectible = 4,
    SpeedPowerUp = 5,
    ShieldPowerUp = 6,
    Target = 7,
    Heart = 8,
    /// Dot on the target's path preview
    PathDot = 9,
}

/// Placement of a shape: centre, rotation and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub angle_deg: f32,
    /// Radius for round shapes, half extents for panels
    pub size: Vec2,
}

impl Pose {
    pub fn at(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            angle_deg: 0.0,
            size: Vec2::splat(radius),
        }
    }

    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Self {
            pos: (min + max) * 0.5,
            angle_deg: 0.0,
            size: (max - min) * 0.5,
        }
    }
}

/// Drawing sink implemented by rendering backends
pub trait Canvas {
    fn shape(&mut self, kind: ShapeKind, pose: Pose, color: [f32; 4]);
    fn text(&mut self, pos: Vec2, text: &str, color: [f32; 4]);
}

/// Vertical bob applied to pickups so they read as collectable
fn bob(time: f32) -> f32 {
    (time * 2.2).sin() * 4.0
}

fn object_shape(kind: ObjectKind) -> ShapeKind {
    match kind {
        ObjectKind::Obstacle => ShapeKind::Obstacle,
        ObjectKind::Collectible => ShapeKind::Collectible,
        ObjectKind::PowerUp(PowerUpKind::Speed) => ShapeKind::SpeedPowerUp,
        ObjectKind::PowerUp(PowerUpKind::Shield) => ShapeKind::ShieldPowerUp,
    }
}

fn object_color(kind: ObjectKind) -> [f32; 4] {
    match kind {
        ObjectKind::Obstacle => colors::OBSTACLE,
        ObjectKind::Collectible => colors::COLLECTIBLE,
        ObjectKind::PowerUp(PowerUpKind::Speed) => colors::SPEED_POWERUP,
        ObjectKind::PowerUp(PowerUpKind::Shield) => colors::SHIELD_POWERUP,
    }
}

/// Describe the full frame for `world`
pub fn draw_world(world: &World, canvas: &mut impl Canvas) {
    draw_arena(world, canvas);
    draw_hud(world, canvas);
    draw_palette(world, canvas);

    let bob = bob(world.time);
    for o in &world.obstacles {
        canvas.shape(ShapeKind::Obstacle, Pose::at(o.pos, o.radius), colors::OBSTACLE);
    }
    for c in &world.collectibles {
        let pos = c.pos + Vec2::new(0.0, bob * 0.25);
        canvas.shape(ShapeKind::Collectible, Pose::at(pos, c.radius), colors::COLLECTIBLE);
    }
    for p in &world.powerups {
        let pos = p.pos + Vec2::new(0.0, bob * 0.35);
        canvas.shape(object_shape(p.kind), Pose::at(pos, p.radius), object_color(p.kind));
    }

    if world.phase == GamePhase::Edit {
        for point in world.target.path.sample(24) {
            canvas.shape(ShapeKind::PathDot, Pose::at(point, 2.0), colors::PATH);
        }
    }
    canvas.shape(
        ShapeKind::Target,
        Pose::at(world.target.position(), world.target.radius),
        colors::TARGET,
    );

    let player = &world.player;
    canvas.shape(
        ShapeKind::Ship,
        Pose {
            pos: player.pos,
            angle_deg: player.angle_deg,
            size: Vec2::splat(player.radius),
        },
        colors::SHIP,
    );
    if player.shielded {
        canvas.shape(
            ShapeKind::ShieldRing,
            Pose::at(player.pos, player.radius + 7.0),
            colors::SHIELD_RING,
        );
    }

    draw_end_screen(world, canvas);
}

fn draw_arena(world: &World, canvas: &mut impl Canvas) {
    canvas.shape(
        ShapeKind::Panel,
        Pose::rect(Vec2::new(0.0, GAME_Y0), Vec2::new(W, GAME_Y1)),
        colors::ARENA,
    );

    // Scrolling stripes
    let shift = (world.time * 12.0) % 40.0;
    let mut x = -40.0 + shift;
    while x < W {
        canvas.shape(
            ShapeKind::Panel,
            Pose::rect(Vec2::new(x, GAME_Y0), Vec2::new(x + 8.0, GAME_Y1)),
            colors::ARENA_STRIPE,
        );
        x += 40.0;
    }

    canvas.shape(
        ShapeKind::Panel,
        Pose::rect(Vec2::new(0.0, H - TOP_H), Vec2::new(W, H)),
        colors::PANEL,
    );
    canvas.shape(
        ShapeKind::Panel,
        Pose::rect(Vec2::ZERO, Vec2::new(W, BOT_H)),
        colors::PANEL,
    );
}

fn draw_hud(world: &World, canvas: &mut impl Canvas) {
    for i in 0..world.tuning.max_lives {
        let pos = Vec2::new(20.0 + f32::from(i) * 30.0, H - 45.0);
        let color = if i < world.player.lives {
            colors::HEART
        } else {
            colors::HEART_EMPTY
        };
        canvas.shape(ShapeKind::Heart, Pose::at(pos, 12.0), color);
    }

    canvas.text(
        Vec2::new(W / 2.0 - 40.0, H - 30.0),
        &format!("Score: {}", world.player.score),
        colors::TEXT,
    );
    canvas.text(
        Vec2::new(W - 130.0, H - 30.0),
        &format!("Time: {}", world.time_left),
        colors::TEXT,
    );
}

fn draw_palette(world: &World, canvas: &mut impl Canvas) {
    for (x, mode) in PALETTE {
        let Some(kind) = mode.kind() else { continue };
        let radius = if kind == ObjectKind::Obstacle { 18.0 } else { 16.0 };
        let pos = Vec2::new(x, PALETTE_Y);
        canvas.shape(object_shape(kind), Pose::at(pos, radius), object_color(kind));
        canvas.text(Vec2::new(x - 25.0, 18.0), palette_label(mode), colors::TEXT);
    }

    canvas.text(Vec2::new(W - 220.0, 18.0), world.place_mode.label(), colors::TEXT);
    canvas.text(Vec2::new(W - 120.0, 38.0), "Press R to start", colors::TEXT);
}

fn palette_label(mode: PlaceMode) -> &'static str {
    match mode {
        PlaceMode::None => "",
        PlaceMode::Obstacle => "Obstacle",
        PlaceMode::Collectible => "Collectible",
        PlaceMode::SpeedPowerUp => "Speed PU",
        PlaceMode::ShieldPowerUp => "Shield PU",
    }
}

fn draw_end_screen(world: &World, canvas: &mut impl Canvas) {
    let (banner, color) = match world.phase {
        GamePhase::Win => ("YOU WIN!", colors::WIN),
        GamePhase::Lose => ("YOU LOSE", colors::LOSE),
        _ => return,
    };

    canvas.shape(
        ShapeKind::Panel,
        Pose::rect(Vec2::new(0.0, GAME_Y0), Vec2::new(W, GAME_Y1)),
        colors::OVERLAY,
    );
    let mid_y = (GAME_Y0 + GAME_Y1) / 2.0;
    canvas.text(Vec2::new(W / 2.0 - 40.0, mid_y + 10.0), banner, color);
    canvas.text(
        Vec2::new(W / 2.0 - 60.0, mid_y - 10.0),
        &format!("Final Score: {}", world.player.score),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::InstanceBatch;
    use crate::sim::{PlacedObject, start_round};

    fn count(batch: &InstanceBatch, kind: ShapeKind) -> usize {
        batch.instances().iter().filter(|i| i.kind == kind as u32).count()
    }

    #[test]
    fn test_draws_every_object_once() {
        let mut world = World::default();
        world
            .obstacles
            .push(PlacedObject::new(ObjectKind::Obstacle, Vec2::new(300.0, 300.0)));
        world
            .collectibles
            .push(PlacedObject::new(ObjectKind::Collectible, Vec2::new(400.0, 300.0)));
        world.powerups.push(PlacedObject::new(
            ObjectKind::PowerUp(PowerUpKind::Shield),
            Vec2::new(500.0, 300.0),
        ));

        let mut batch = InstanceBatch::default();
        draw_world(&world, &mut batch);

        // One of each in the arena plus one icon in the palette
        assert_eq!(count(&batch, ShapeKind::Obstacle), 2);
        assert_eq!(count(&batch, ShapeKind::Collectible), 2);
        assert_eq!(count(&batch, ShapeKind::ShieldPowerUp), 2);
        assert_eq!(count(&batch, ShapeKind::SpeedPowerUp), 1);
        assert_eq!(count(&batch, ShapeKind::Target), 1);
        assert_eq!(count(&batch, ShapeKind::Ship), 1);
        assert_eq!(count(&batch, ShapeKind::ShieldRing), 0);
        assert_eq!(count(&batch, ShapeKind::Heart), 5);
    }

    #[test]
    fn test_target_drawn_at_curve_position() {
        let mut world = World::default();
        world.target.motion.t = 0.5;
        let mut batch = InstanceBatch::default();
        draw_world(&world, &mut batch);

        let target = batch
            .instances()
            .iter()
            .find(|i| i.kind == ShapeKind::Target as u32)
            .unwrap();
        let expected = world.target.position();
        assert_eq!(target.pos, [expected.x, expected.y]);
    }

    #[test]
    fn test_hud_text_and_end_screen() {
        let mut world = World::default();
        start_round(&mut world);
        world.player.score = 15;
        world.player.shielded = true;
        world.phase = GamePhase::Lose;

        let mut batch = InstanceBatch::default();
        draw_world(&world, &mut batch);

        let texts: Vec<&str> = batch.texts().iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"Score: 15"));
        assert!(texts.contains(&"Time: 60"));
        assert!(texts.contains(&"YOU LOSE"));
        assert!(texts.contains(&"Final Score: 15"));
        assert_eq!(count(&batch, ShapeKind::ShieldRing), 1);
        // No path preview outside the editor
        assert_eq!(count(&batch, ShapeKind::PathDot), 0);
    }

    #[test]
    fn test_dim_hearts_for_lost_lives() {
        let mut world = World::default();
        world.player.lives = 2;
        let mut batch = InstanceBatch::default();
        draw_world(&world, &mut batch);

        let full = batch
            .instances()
            .iter()
            .filter(|i| i.kind == ShapeKind::Heart as u32 && i.color == colors::HEART)
            .count();
        assert_eq!(full, 2);
    }
}
