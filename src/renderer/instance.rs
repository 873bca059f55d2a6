//! Instance data for a shape-batching backend

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::shapes::{Canvas, Pose, ShapeKind};

/// One shape, laid out for direct upload as a per-instance vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub angle_deg: f32,
    /// `ShapeKind` discriminant
    pub kind: u32,
    pub color: [f32; 4],
}

impl ShapeInstance {
    pub fn new(kind: ShapeKind, pose: Pose, color: [f32; 4]) -> Self {
        Self {
            pos: pose.pos.to_array(),
            size: pose.size.to_array(),
            angle_deg: pose.angle_deg,
            kind: kind as u32,
            color,
        }
    }
}

/// A positioned string for the text pass
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
}

/// Canvas that records a frame for later upload
#[derive(Debug, Default)]
pub struct InstanceBatch {
    instances: Vec<ShapeInstance>,
    texts: Vec<TextRun>,
}

impl InstanceBatch {
    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    /// Raw instance bytes in draw order
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Reset for the next frame, keeping allocations
    pub fn clear(&mut self) {
        self.instances.clear();
        self.texts.clear();
    }
}

impl Canvas for InstanceBatch {
    fn shape(&mut self, kind: ShapeKind, pose: Pose, color: [f32; 4]) {
        self.instances.push(ShapeInstance::new(kind, pose, color));
    }

    fn text(&mut self, pos: Vec2, text: &str, color: [f32; 4]) {
        self.texts.push(TextRun {
            pos,
            text: text.to_owned(),
            color,
        });
    }
}

/// Colors for game elements
pub mod colors {
    pub const ARENA: [f32; 4] = [0.95, 0.98, 1.0, 1.0];
    pub const ARENA_STRIPE: [f32; 4] = [0.9, 0.95, 1.0, 1.0];
    pub const PANEL: [f32; 4] = [0.15, 0.15, 0.2, 1.0];
    pub const HEART: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HEART_EMPTY: [f32; 4] = [0.35, 0.15, 0.15, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP: [f32; 4] = [0.18, 0.65, 0.95, 1.0];
    pub const SHIELD_RING: [f32; 4] = [0.8, 0.8, 1.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.6, 0.2, 0.2, 1.0];
    pub const COLLECTIBLE: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const SPEED_POWERUP: [f32; 4] = [0.2, 1.0, 0.4, 1.0];
    pub const SHIELD_POWERUP: [f32; 4] = [0.7, 0.7, 1.0, 1.0];
    pub const TARGET: [f32; 4] = [1.0, 0.3, 0.3, 1.0];
    pub const PATH: [f32; 4] = [1.0, 0.3, 0.3, 0.35];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WIN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const LOSE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
