//! Overlap tests for circles, squares and the arena
//!
//! Everything that moves or gets picked up is a circle. Obstacles are drawn as
//! axis-aligned squares, so the ship is tested against their square footprint.

use glam::Vec2;

use crate::consts::{GAME_Y0, GAME_Y1, W};
use crate::{clamp, squared_distance};

/// Circle-circle overlap (touching counts)
#[inline]
pub fn circle_overlaps_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let rr = (r1 + r2) * (r1 + r2);
    squared_distance(c1, c2) <= rr
}

/// Nearest point on an axis-aligned square to `p`
#[inline]
pub fn nearest_point_on_square(p: Vec2, center: Vec2, half_width: f32) -> Vec2 {
    Vec2::new(
        clamp(p.x, center.x - half_width, center.x + half_width),
        clamp(p.y, center.y - half_width, center.y + half_width),
    )
}

/// Circle vs axis-aligned square overlap (touching does not count)
pub fn circle_overlaps_square(center: Vec2, radius: f32, square: Vec2, half_width: f32) -> bool {
    let nearest = nearest_point_on_square(center, square, half_width);
    squared_distance(center, nearest) < radius * radius
}

/// Whether `p` lies in the play region between the HUD bands
#[inline]
pub fn point_inside_arena(p: Vec2) -> bool {
    p.x >= 0.0 && p.x <= W && p.y >= GAME_Y0 && p.y <= GAME_Y1
}

/// Clamp a circle's centre so the whole circle stays inside the arena
pub fn clamp_to_arena(p: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        clamp(p.x, radius, W - radius),
        clamp(p.y, GAME_Y0 + radius, GAME_Y1 - radius),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_touching_overlap() {
        assert!(circle_overlaps_circle(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circle_overlaps_circle(Vec2::ZERO, 5.0, Vec2::new(10.1, 0.0), 5.0));
    }

    #[test]
    fn test_square_face_hit() {
        // Square at origin, half-width 18; circle r=14 just left of the face
        let square = Vec2::ZERO;
        assert!(circle_overlaps_square(Vec2::new(-31.0, 0.0), 14.0, square, 18.0));
        assert!(!circle_overlaps_square(Vec2::new(-32.0, 0.0), 14.0, square, 18.0));
    }

    #[test]
    fn test_square_corner_uses_true_distance() {
        // Diagonal from the corner: 10/sqrt(2) on each axis is 10 away from the corner
        let square = Vec2::ZERO;
        let off = 18.0 + 10.0 / 2f32.sqrt();
        assert!(!circle_overlaps_square(Vec2::new(off, off), 9.9, square, 18.0));
        assert!(circle_overlaps_square(Vec2::new(off, off), 10.1, square, 18.0));
    }

    #[test]
    fn test_circle_centre_inside_square() {
        assert!(circle_overlaps_square(Vec2::new(3.0, -4.0), 1.0, Vec2::ZERO, 18.0));
    }

    #[test]
    fn test_point_inside_arena() {
        assert!(point_inside_arena(Vec2::new(500.0, 300.0)));
        assert!(point_inside_arena(Vec2::new(0.0, GAME_Y0)));
        assert!(point_inside_arena(Vec2::new(W, GAME_Y1)));
        assert!(!point_inside_arena(Vec2::new(500.0, GAME_Y0 - 1.0)));
        assert!(!point_inside_arena(Vec2::new(500.0, GAME_Y1 + 1.0)));
        assert!(!point_inside_arena(Vec2::new(-1.0, 300.0)));
    }

    #[test]
    fn test_clamp_to_arena_keeps_circle_visible() {
        let p = clamp_to_arena(Vec2::new(-50.0, 5000.0), 14.0);
        assert_eq!(p, Vec2::new(14.0, GAME_Y1 - 14.0));
    }
}
