//! Single-step impulse solver
//!
//! A `Space` holds one dynamic box and the static walls. Stepping follows the
//! usual sequential-impulse order:
//! 1. Integrate position with the incoming velocity
//! 2. Find wall contacts at the new position
//! 3. Pre-step contacts (effective mass, bounce target from pre-gravity velocity)
//! 4. Integrate gravity into velocity
//! 5. Iterate normal impulses, accumulated impulse clamped at zero
//!
//! Walls have no friction and no contact state outlives the space, so there
//! is no tangent impulse and no warm starting. Position-correction bias is
//! skipped: its velocity would only take effect on a later step of the same
//! space.

use glam::DVec2;

use super::body::Body;
use super::collision::{CollisionResult, MAX_POINTS, box_wall_collision};
use super::wall::WallSegment;
use crate::consts::SOLVER_ITERATIONS;

#[derive(Debug, Clone, Copy, Default)]
struct ContactConstraint {
    /// Contact point relative to the body center
    r: DVec2,
    normal_mass: f64,
    /// Target normal velocity is `-bounce`
    bounce: f64,
    accumulated_impulse: f64,
}

/// Contact constraints between the body and one wall
#[derive(Debug, Clone)]
pub struct Arbiter {
    pub wall_index: usize,
    pub normal: DVec2,
    /// Combined elasticity (product of both shapes)
    pub elasticity: f64,
    contacts: [ContactConstraint; MAX_POINTS],
    num_contacts: usize,
}

impl Arbiter {
    /// Build the arbiter and precompute its constraints from the body's current velocity
    fn pre_step(body: &Body, wall_index: usize, wall: &WallSegment, hit: &CollisionResult) -> Self {
        let elasticity = body.elasticity * wall.elasticity;
        let normal = hit.normal;
        let mut contacts = [ContactConstraint::default(); MAX_POINTS];

        for (constraint, point) in contacts.iter_mut().zip(hit.contacts()) {
            let rn = point.r.perp_dot(normal);
            let k_normal = body.inv_mass + body.inv_inertia * rn * rn;
            *constraint = ContactConstraint {
                r: point.r,
                normal_mass: 1.0 / k_normal,
                bounce: body.velocity_at(point.r).dot(normal) * elasticity,
                accumulated_impulse: 0.0,
            };
        }

        Self {
            wall_index,
            normal,
            elasticity,
            contacts,
            num_contacts: hit.num_points,
        }
    }

    fn apply_impulse(&mut self, body: &mut Body) {
        for c in &mut self.contacts[..self.num_contacts] {
            let vn = body.velocity_at(c.r).dot(self.normal);
            let impulse = -(c.bounce + vn) * c.normal_mass;

            // Clamp the accumulated impulse so walls only push
            let old_impulse = c.accumulated_impulse;
            c.accumulated_impulse = (old_impulse + impulse).max(0.0);

            body.apply_impulse(self.normal * (c.accumulated_impulse - old_impulse), c.r);
        }
    }

    /// Total normal impulse delivered by this wall
    #[cfg(test)]
    fn total_impulse(&self) -> f64 {
        self.contacts[..self.num_contacts]
            .iter()
            .map(|c| c.accumulated_impulse)
            .sum()
    }

    #[cfg(test)]
    fn num_contacts(&self) -> usize {
        self.num_contacts
    }
}

/// One body, four walls, uniform gravity
#[derive(Debug, Clone)]
pub struct Space {
    pub gravity: DVec2,
    pub body: Body,
    pub walls: [WallSegment; 4],
    iterations: usize,
    /// Arbiters from the most recent step
    pub arbiters: Vec<Arbiter>,
}

impl Space {
    pub fn new(gravity: DVec2, body: Body, walls: [WallSegment; 4]) -> Self {
        Self {
            gravity,
            body,
            walls,
            iterations: SOLVER_ITERATIONS,
            arbiters: Vec::with_capacity(4),
        }
    }

    /// Advance the space by `dt`
    pub fn step(&mut self, dt: f64) {
        let body = &mut self.body;

        body.position += body.velocity * dt;

        self.arbiters.clear();
        for (index, wall) in self.walls.iter().enumerate() {
            let hit = box_wall_collision(body, wall);
            if hit.hit {
                self.arbiters.push(Arbiter::pre_step(body, index, wall, &hit));
            }
        }
        if !self.arbiters.is_empty() {
            log::trace!(
                "{} wall contact(s) at ({:.4}, {:.4})",
                self.arbiters.len(),
                body.position.x,
                body.position.y
            );
        }

        body.velocity += self.gravity * dt;

        for _ in 0..self.iterations {
            for arbiter in &mut self.arbiters {
                arbiter.apply_impulse(body);
            }
        }
    }
}
