//! Game state and core simulation types
//!
//! The whole session lives in one [`World`]. The controller owns it and lends
//! it to each subsystem; rendering only ever reads it.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::bezier::{BezierPath, PingPong};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Placing objects before a round
    Edit,
    /// Round in progress
    Play,
    /// Target captured
    Win,
    /// Countdown expired or out of lives
    Lose,
}

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoseReason {
    TimeUp,
    OutOfLives,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    Shield,
}

/// What a placed object is (and so which collection it lives in)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Obstacle,
    Collectible,
    PowerUp(PowerUpKind),
}

impl ObjectKind {
    /// Collision/placement radius for this kind
    pub fn radius(self) -> f32 {
        match self {
            ObjectKind::Obstacle => OBSTACLE_RADIUS,
            ObjectKind::Collectible => COLLECTIBLE_RADIUS,
            ObjectKind::PowerUp(_) => POWERUP_RADIUS,
        }
    }
}

/// An obstacle, collectible or power-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: ObjectKind,
}

impl PlacedObject {
    pub fn new(kind: ObjectKind, pos: Vec2) -> Self {
        Self {
            pos,
            radius: kind.radius(),
            kind,
        }
    }
}

/// Palette selection for the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaceMode {
    #[default]
    None,
    Obstacle,
    Collectible,
    SpeedPowerUp,
    ShieldPowerUp,
}

impl PlaceMode {
    /// Object kind placed by this mode (None places nothing)
    pub fn kind(self) -> Option<ObjectKind> {
        match self {
            PlaceMode::None => None,
            PlaceMode::Obstacle => Some(ObjectKind::Obstacle),
            PlaceMode::Collectible => Some(ObjectKind::Collectible),
            PlaceMode::SpeedPowerUp => Some(ObjectKind::PowerUp(PowerUpKind::Speed)),
            PlaceMode::ShieldPowerUp => Some(ObjectKind::PowerUp(PowerUpKind::Shield)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaceMode::None => "Place: None",
            PlaceMode::Obstacle => "Place: Obstacle",
            PlaceMode::Collectible => "Place: Collectible",
            PlaceMode::SpeedPowerUp => "Place: Speed PU",
            PlaceMode::ShieldPowerUp => "Place: Shield PU",
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing (degrees, counter-clockwise from +x)
    pub angle_deg: f32,
    pub radius: f32,
    pub lives: u8,
    pub score: u64,
    /// Cleared by the tick once `shield_until` has passed
    pub shielded: bool,
    /// Absolute expiry times (seconds of world time)
    pub shield_until: f32,
    pub speed_until: f32,
    /// Earliest time the next obstacle hit may cost a life
    pub next_hit_at: f32,
}

impl Player {
    pub const START_POS: Vec2 = Vec2::new(W * 0.5, GAME_Y0 + 40.0);
    pub const START_ANGLE: f32 = 90.0;

    pub fn new(max_lives: u8) -> Self {
        Self {
            pos: Self::START_POS,
            angle_deg: Self::START_ANGLE,
            radius: PLAYER_RADIUS,
            lives: max_lives,
            score: 0,
            shielded: false,
            shield_until: 0.0,
            speed_until: 0.0,
            next_hit_at: 0.0,
        }
    }

    /// Whether the speed boost is active at `now`
    pub fn boosted(&self, now: f32) -> bool {
        now < self.speed_until
    }
}

/// The moving goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub radius: f32,
    pub path: BezierPath,
    pub motion: PingPong,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            radius: TARGET_RADIUS,
            path: Self::round_path(),
            motion: PingPong::default(),
        }
    }
}

impl Target {
    /// Horizontal sweep across the top of the arena
    pub fn round_path() -> BezierPath {
        let y_top = (H - TOP_H - 60.0) as i32;
        BezierPath::new(
            IVec2::new(100, y_top),
            IVec2::new(300, y_top + 80),
            IVec2::new(700, y_top - 80),
            IVec2::new(900, y_top),
        )
    }

    /// Current position, derived from the curve
    pub fn position(&self) -> Vec2 {
        self.path.point_at(self.motion.t)
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    RoundStarted,
    Placed { kind: ObjectKind, pos: Vec2 },
    Collected { score: u64 },
    PoweredUp { kind: PowerUpKind },
    /// Ship ran into an obstacle; `damaged` is false inside i-frames or under shield
    Blocked { damaged: bool, lives: u8 },
    Lost { reason: LoseReason },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub place_mode: PlaceMode,
    /// Seconds since the session started
    pub time: f32,
    /// World time when the current round began
    pub round_start: f32,
    /// Whole seconds remaining in the round
    pub time_left: u32,
    pub player: Player,
    pub target: Target,
    pub obstacles: Vec<PlacedObject>,
    pub collectibles: Vec<PlacedObject>,
    /// Speed and shield power-ups share one collection
    pub powerups: Vec<PlacedObject>,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl World {
    /// Fresh session in the edit phase
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Edit,
            place_mode: PlaceMode::None,
            time: 0.0,
            round_start: 0.0,
            time_left: tuning.round_time_secs,
            player: Player::new(tuning.max_lives),
            target: Target::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            powerups: Vec::new(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Collection that holds objects of `kind`
    pub fn collection(&self, kind: ObjectKind) -> &[PlacedObject] {
        match kind {
            ObjectKind::Obstacle => &self.obstacles,
            ObjectKind::Collectible => &self.collectibles,
            ObjectKind::PowerUp(_) => &self.powerups,
        }
    }

    pub fn collection_mut(&mut self, kind: ObjectKind) -> &mut Vec<PlacedObject> {
        match kind {
            ObjectKind::Obstacle => &mut self.obstacles,
            ObjectKind::Collectible => &mut self.collectibles,
            ObjectKind::PowerUp(_) => &mut self.powerups,
        }
    }

    /// Every placed object, obstacles first
    pub fn placed(&self) -> impl Iterator<Item = &PlacedObject> {
        self.obstacles
            .iter()
            .chain(self.collectibles.iter())
            .chain(self.powerups.iter())
    }

    /// Switch phase, recording the transition
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events pending since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_in_edit() {
        let world = World::default();
        assert_eq!(world.phase, GamePhase::Edit);
        assert_eq!(world.player.lives, 5);
        assert_eq!(world.time_left, 60);
        assert_eq!(world.player.pos, Vec2::new(500.0, 160.0));
        assert!(world.placed().next().is_none());
    }

    #[test]
    fn test_target_starts_at_curve_start() {
        let world = World::default();
        assert_eq!(world.target.position(), Vec2::new(100.0, 550.0));
    }

    #[test]
    fn test_kind_routes_to_collection() {
        let mut world = World::default();
        world
            .collection_mut(ObjectKind::PowerUp(PowerUpKind::Shield))
            .push(PlacedObject::new(
                ObjectKind::PowerUp(PowerUpKind::Shield),
                Vec2::new(300.0, 300.0),
            ));
        assert_eq!(world.powerups.len(), 1);
        assert_eq!(world.collection(ObjectKind::PowerUp(PowerUpKind::Speed)).len(), 1);
        assert!(world.collection(ObjectKind::Obstacle).is_empty());
        assert_eq!(world.powerups[0].radius, POWERUP_RADIUS);
    }

    #[test]
    fn test_set_phase_records_transition_once() {
        let mut world = World::default();
        world.set_phase(GamePhase::Play);
        world.set_phase(GamePhase::Play);
        assert_eq!(
            world.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Edit,
                to: GamePhase::Play
            }]
        );
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_place_mode_kinds() {
        assert_eq!(PlaceMode::None.kind(), None);
        assert_eq!(PlaceMode::Obstacle.kind(), Some(ObjectKind::Obstacle));
        assert_eq!(
            PlaceMode::ShieldPowerUp.kind(),
            Some(ObjectKind::PowerUp(PowerUpKind::Shield))
        );
    }
}
