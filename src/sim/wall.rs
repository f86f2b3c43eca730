//! Boundary wall geometry
//!
//! Each wall is a static capsule: a line segment from `a` to `b` thickened by
//! `radius`. Walls are wound clockwise around the box, so the right-hand
//! perpendicular of `b - a` points into the box interior.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::WALL_RADIUS;

/// A static, axis-aligned capsule segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSegment {
    pub a: DVec2,
    pub b: DVec2,
    /// Capsule radius around the centerline
    pub radius: f64,
    pub elasticity: f64,
}

impl WallSegment {
    pub fn new(a: DVec2, b: DVec2, radius: f64, elasticity: f64) -> Self {
        Self {
            a,
            b,
            radius,
            elasticity,
        }
    }

    /// Lower-left corner of the centerline's bounding box
    #[inline]
    pub fn min(&self) -> DVec2 {
        self.a.min(self.b)
    }

    /// Upper-right corner of the centerline's bounding box
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.a.max(self.b)
    }

    /// Whether the centerline runs along the x axis
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        (self.b.y - self.a.y).abs() <= (self.b.x - self.a.x).abs()
    }

    /// Unit normal pointing into the box interior
    pub fn inward_normal(&self) -> DVec2 {
        let dir = (self.b - self.a).normalize_or_zero();
        // Right-hand perpendicular
        DVec2::new(dir.y, -dir.x)
    }
}

/// The four walls of a `width` x `height` box, in the order left, top, right, bottom
pub fn boundary_walls(width: f64, height: f64, elasticity: f64) -> [WallSegment; 4] {
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, height),
        DVec2::new(width, height),
        DVec2::new(width, 0.0),
    ];
    std::array::from_fn(|i| {
        WallSegment::new(corners[i], corners[(i + 1) % 4], WALL_RADIUS, elasticity)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_walls_layout() {
        let walls = boundary_walls(16.0, 16.0, 0.7);

        // Left
        assert_eq!(walls[0].a, DVec2::new(0.0, 0.0));
        assert_eq!(walls[0].b, DVec2::new(0.0, 16.0));
        // Top
        assert_eq!(walls[1].b, DVec2::new(16.0, 16.0));
        // Right
        assert_eq!(walls[2].b, DVec2::new(16.0, 0.0));
        // Bottom closes the loop
        assert_eq!(walls[3].b, DVec2::new(0.0, 0.0));

        for wall in &walls {
            assert_eq!(wall.radius, WALL_RADIUS);
            assert_eq!(wall.elasticity, 0.7);
        }
    }

    #[test]
    fn test_inward_normals() {
        let walls = boundary_walls(16.0, 16.0, 1.0);
        let expected = [
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, -1.0),
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        for (wall, normal) in walls.iter().zip(expected) {
            assert!((wall.inward_normal() - normal).length() < 1e-12);
        }
    }

    #[test]
    fn test_orientation() {
        let walls = boundary_walls(16.0, 16.0, 1.0);
        assert!(!walls[0].is_horizontal());
        assert!(walls[1].is_horizontal());
        assert!(!walls[2].is_horizontal());
        assert!(walls[3].is_horizontal());
        assert_eq!(walls[2].min(), DVec2::new(16.0, 0.0));
        assert_eq!(walls[2].max(), DVec2::new(16.0, 16.0));
    }
}
