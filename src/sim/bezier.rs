//! Cubic Bezier paths and ping-pong progress
//!
//! The target sweeps back and forth along a fixed cubic curve. Its position
//! is always derived from the curve and the current progress `t`, so the
//! hitbox and the drawn sprite can never disagree.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Evaluate a cubic Bezier at `t`
///
/// `B(t) = (1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3`
///
/// Values of `t` outside `[0, 1]` extrapolate along the polynomial.
#[inline]
pub fn cubic_bezier(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

/// A cubic curve with integer control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BezierPath {
    pub points: [IVec2; 4],
}

impl BezierPath {
    pub const fn new(p0: IVec2, p1: IVec2, p2: IVec2, p3: IVec2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Position on the curve at progress `t`
    pub fn point_at(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.points;
        cubic_bezier(t, p0.as_vec2(), p1.as_vec2(), p2.as_vec2(), p3.as_vec2())
    }

    /// Evenly spaced points from `t = 0` to `t = 1` (for drawing)
    pub fn sample(&self, num_points: usize) -> Vec<Vec2> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                self.point_at(t)
            })
            .collect()
    }
}

/// Progress in `[0, 1]` that reverses direction at each bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingPong {
    pub t: f32,
    /// +1 sweeping toward 1, -1 sweeping toward 0
    pub dir: i8,
}

impl Default for PingPong {
    fn default() -> Self {
        Self { t: 0.0, dir: 1 }
    }
}

impl PingPong {
    /// Advance by `speed * dt`; returns true if a bound was hit and the
    /// direction flipped
    pub fn advance(&mut self, speed: f32, dt: f32) -> bool {
        self.t += f32::from(self.dir) * speed * dt;
        if self.t > 1.0 {
            self.t = 1.0;
            self.dir = -1;
            true
        } else if self.t < 0.0 {
            self.t = 0.0;
            self.dir = 1;
            true
        } else {
            false
        }
    }
}
