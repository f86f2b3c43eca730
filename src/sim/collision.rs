//! Collision detection between the body's box and a wall capsule
//!
//! The box never carries rotation into detection, so both shapes are
//! axis-aligned and the closest features can be found from the gap between
//! their bounding boxes. The gap vector picks the contact type:
//! - one zero component: box face against the wall side (up to two points)
//! - both non-zero: box corner against a rounded end cap (one point)
//! - zero vector: the centerline cuts through the box

use glam::DVec2;

use super::body::Body;
use super::wall::WallSegment;

/// Maximum contact points per wall
pub const MAX_POINTS: usize = 2;

/// A single contact point on the box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactPoint {
    /// Contact point relative to the body center
    pub r: DVec2,
    /// Gap between box and capsule surface (negative when overlapping)
    pub separation: f64,
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal, pointing from the wall toward the box
    pub normal: DVec2,
    pub points: [ContactPoint; MAX_POINTS],
    pub num_points: usize,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: DVec2::ZERO,
            points: [ContactPoint::default(); MAX_POINTS],
            num_points: 0,
        }
    }

    /// The active contact points
    pub fn contacts(&self) -> &[ContactPoint] {
        &self.points[..self.num_points]
    }
}

/// Signed gap along one axis from interval `[seg_lo, seg_hi]` to `[box_lo, box_hi]`.
/// Zero when the intervals overlap.
#[inline]
fn axis_gap(box_lo: f64, box_hi: f64, seg_lo: f64, seg_hi: f64) -> f64 {
    if box_lo > seg_hi {
        box_lo - seg_hi
    } else if box_hi < seg_lo {
        box_hi - seg_lo
    } else {
        0.0
    }
}

/// Check collision between the body's box and a wall capsule
pub fn box_wall_collision(body: &Body, wall: &WallSegment) -> CollisionResult {
    let box_min = body.min();
    let box_max = body.max();
    let seg_min = wall.min();
    let seg_max = wall.max();

    let gap = DVec2::new(
        axis_gap(box_min.x, box_max.x, seg_min.x, seg_max.x),
        axis_gap(box_min.y, box_max.y, seg_min.y, seg_max.y),
    );
    let dist = gap.length();
    if dist > wall.radius {
        return CollisionResult::miss();
    }

    if dist > 0.0 {
        let normal = gap / dist;
        let separation = dist - wall.radius;

        if gap.x != 0.0 && gap.y != 0.0 {
            let corner = DVec2::new(
                if gap.x > 0.0 { box_min.x } else { box_max.x },
                if gap.y > 0.0 { box_min.y } else { box_max.y },
            );
            let mut result = CollisionResult {
                hit: true,
                normal,
                points: [ContactPoint::default(); MAX_POINTS],
                num_points: 1,
            };
            result.points[0] = ContactPoint {
                r: corner - body.position,
                separation,
            };
            return result;
        }

        return face_contact(body, wall, normal, separation);
    }

    // Centerline passes through the box: push out along the perpendicular on
    // the side of the body center.
    let offset = body.position - wall.a;
    let across = if wall.is_horizontal() {
        DVec2::new(0.0, offset.y)
    } else {
        DVec2::new(offset.x, 0.0)
    };
    let normal = if across == DVec2::ZERO {
        wall.inward_normal()
    } else {
        across.normalize()
    };
    let support = body.position - body.half_size * normal;
    let separation = (support - wall.a).dot(normal) - wall.radius;

    face_contact(body, wall, normal, separation)
}

/// Contact points for a box face lying against the wall along `normal`.
///
/// The face's edge is clipped to the segment's extent; a degenerate overlap
/// gives a single point.
fn face_contact(
    body: &Body,
    wall: &WallSegment,
    normal: DVec2,
    separation: f64,
) -> CollisionResult {
    let box_min = body.min();
    let box_max = body.max();
    let seg_min = wall.min();
    let seg_max = wall.max();

    let vertical = normal.y != 0.0;
    let (lo, hi, face) = if vertical {
        (
            box_min.x.max(seg_min.x),
            box_max.x.min(seg_max.x),
            if normal.y > 0.0 { box_min.y } else { box_max.y },
        )
    } else {
        (
            box_min.y.max(seg_min.y),
            box_max.y.min(seg_max.y),
            if normal.x > 0.0 { box_min.x } else { box_max.x },
        )
    };
    let point_at = |t: f64| {
        if vertical {
            DVec2::new(t, face)
        } else {
            DVec2::new(face, t)
        }
    };

    let mut result = CollisionResult {
        hit: true,
        normal,
        points: [ContactPoint::default(); MAX_POINTS],
        num_points: 0,
    };

    result.num_points = if hi > lo { 2 } else { 1 };
    for (point, t) in result.points.iter_mut().zip([lo, hi]).take(result.num_points) {
        *point = ContactPoint {
            r: point_at(t) - body.position,
            separation,
        };
    }

    result
}
